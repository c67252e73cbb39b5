//! CLI for gravlink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gravlink_core::config;
use gravlink_core::HashAlgorithm;

use commands::{run_config, run_hash, run_url, UrlArgs};

/// Top-level CLI for gravlink.
#[derive(Debug, Parser)]
#[command(name = "gravlink")]
#[command(about = "gravlink: build Gravatar avatar links from email addresses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the avatar link for an email address.
    Url {
        /// Email address (trimmed and lowercased before hashing).
        email: String,

        /// Image size in pixels.
        #[arg(long)]
        size: Option<u32>,

        /// Fallback image when no avatar exists (404, mp, identicon, a URL, ...).
        #[arg(long = "default", value_name = "TOKEN")]
        fallback: Option<String>,

        /// Use the https host.
        #[arg(long)]
        secure: bool,

        /// Force a .jpg extension on the avatar path.
        #[arg(long)]
        require_type: bool,

        /// Email digest: md5 or sha256.
        #[arg(long)]
        algorithm: Option<HashAlgorithm>,

        /// Extra option, repeatable. Recognized names are typed; others pass through to the query.
        #[arg(long = "opt", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        opts: Vec<(String, String)>,
    },

    /// Print the digest of a normalized email address.
    Hash {
        /// Email address.
        email: String,

        /// Email digest: md5 or sha256.
        #[arg(long)]
        algorithm: Option<HashAlgorithm>,
    },

    /// Show the config file location and effective defaults.
    Config,
}

/// Parses `KEY=VALUE`; the value may be empty, the key may not.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty option name in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Url {
                email,
                size,
                fallback,
                secure,
                require_type,
                algorithm,
                opts,
            } => run_url(
                &cfg,
                &UrlArgs {
                    email,
                    size,
                    fallback,
                    secure,
                    require_type,
                    algorithm,
                    opts,
                },
            )?,
            CliCommand::Hash { email, algorithm } => run_hash(&cfg, &email, algorithm)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
