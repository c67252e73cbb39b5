use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::hash::HashAlgorithm;
use crate::options::{AvatarOptions, Extras, OptionValue, DEFAULT_FALLBACK, DEFAULT_SIZE};

/// Default avatar options loaded from `~/.config/gravlink/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravlinkConfig {
    /// Fallback image token sent as `default=`.
    #[serde(default = "default_fallback")]
    pub default: String,
    /// Image size in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Force a `.jpg` extension on the avatar path.
    #[serde(default)]
    pub require_type: bool,
    /// Use the https host; if missing, `secure` is left out of the query.
    #[serde(default)]
    pub secure: Option<bool>,
    /// Digest used for the email: "md5" (default) or "sha256".
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// Extra query parameters passed through in file order (e.g. `r = "pg"`).
    #[serde(default)]
    pub extras: toml::Table,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

impl Default for GravlinkConfig {
    fn default() -> Self {
        Self {
            default: default_fallback(),
            size: default_size(),
            require_type: false,
            secure: None,
            algorithm: HashAlgorithm::default(),
            extras: toml::Table::new(),
        }
    }
}

impl GravlinkConfig {
    /// Builder defaults described by this config. A zero size falls back to the built-in default.
    pub fn to_options(&self) -> AvatarOptions {
        AvatarOptions {
            default: self.default.clone(),
            require_type: self.require_type,
            size: if self.size == 0 {
                DEFAULT_SIZE
            } else {
                self.size
            },
            secure: self.secure,
            extras: self.extras_in_order(),
        }
    }

    /// Scalar `[extras]` entries in file order; arrays, tables and datetimes are skipped.
    fn extras_in_order(&self) -> Extras {
        let mut extras = Extras::new();
        for (key, value) in &self.extras {
            let value = match value {
                toml::Value::String(s) => OptionValue::Str(s.clone()),
                toml::Value::Boolean(b) => OptionValue::Bool(*b),
                toml::Value::Integer(n) => OptionValue::Num(*n as f64),
                toml::Value::Float(n) => OptionValue::Num(*n),
                _ => {
                    tracing::debug!(option = %key, "ignored non-scalar extra in config");
                    continue;
                }
            };
            extras.insert(key.as_str(), value.to_query_value());
        }
        extras
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gravlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`.
pub fn load_from(path: &Path) -> Result<GravlinkConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: GravlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GravlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GravlinkConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

fn write_default(path: &Path, cfg: &GravlinkConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
