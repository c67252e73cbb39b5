//! `gravlink config` – show where the config lives and what it resolves to.

use anyhow::Result;
use gravlink_core::config::{self, GravlinkConfig};

pub fn run_config(cfg: &GravlinkConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
