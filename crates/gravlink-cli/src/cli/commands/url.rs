//! `gravlink url` – print an avatar link.

use anyhow::Result;
use gravlink_core::config::GravlinkConfig;
use gravlink_core::{AvatarLinkBuilder, HashAlgorithm};

/// Parsed arguments of the `url` subcommand.
#[derive(Debug, Clone, Default)]
pub struct UrlArgs {
    pub email: String,
    pub size: Option<u32>,
    pub fallback: Option<String>,
    pub secure: bool,
    pub require_type: bool,
    pub algorithm: Option<HashAlgorithm>,
    pub opts: Vec<(String, String)>,
}

/// Builds the link: config defaults, then flags, then `--opt` pairs in order.
pub fn build_link(cfg: &GravlinkConfig, args: &UrlArgs) -> Result<String> {
    let mut builder = AvatarLinkBuilder::from_config(&args.email, cfg)?;
    if let Some(algorithm) = args.algorithm {
        builder.set_algorithm(algorithm);
    }
    if let Some(size) = args.size {
        builder.set_option("size", size);
    }
    if let Some(fallback) = &args.fallback {
        builder.set_option("default", fallback.as_str());
    }
    if args.secure {
        builder.set_option("secure", true);
    }
    if args.require_type {
        builder.set_option("requireType", true);
    }
    builder.set_options(args.opts.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    Ok(builder.avatar_url())
}

pub fn run_url(cfg: &GravlinkConfig, args: &UrlArgs) -> Result<()> {
    let link = build_link(cfg, args)?;
    println!("{link}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(email: &str) -> UrlArgs {
        UrlArgs {
            email: email.to_string(),
            ..UrlArgs::default()
        }
    }

    #[test]
    fn defaults_from_config() {
        let link = build_link(&GravlinkConfig::default(), &args("test@example.com")).unwrap();
        assert_eq!(
            link,
            "http://www.gravatar.com/avatar/1/55502f40dc8b7c769880b10874abc9d0?default=404&requireType=false&size=200"
        );
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = GravlinkConfig::default();
        cfg.size = 64;
        cfg.default = "mp".to_string();
        let mut a = args("test@example.com");
        a.size = Some(128);
        a.secure = true;
        a.require_type = true;
        let link = build_link(&cfg, &a).unwrap();
        assert!(link.starts_with("https://secure.gravatar.com/avatar/1/"));
        assert!(link.contains(".jpg?default=mp&requireType=true&size=128&secure=true"));
    }

    #[test]
    fn opt_pairs_pass_through() {
        let mut a = args("test@example.com");
        a.opts = vec![
            ("r".to_string(), "pg".to_string()),
            ("size".to_string(), "32".to_string()),
        ];
        let link = build_link(&GravlinkConfig::default(), &a).unwrap();
        assert!(link.ends_with("size=32&r=pg"));
    }

    #[test]
    fn sha256_from_flag() {
        let mut a = args("test@example.com");
        a.algorithm = Some(HashAlgorithm::Sha256);
        let link = build_link(&GravlinkConfig::default(), &a).unwrap();
        assert!(link.contains(
            "/avatar/1/973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b?"
        ));
    }

    #[test]
    fn blank_email_fails() {
        assert!(build_link(&GravlinkConfig::default(), &args("  ")).is_err());
    }
}
