//! `gravlink hash` – print the digest of a normalized email.

use anyhow::Result;
use gravlink_core::config::GravlinkConfig;
use gravlink_core::{HashAlgorithm, Identity};

pub fn run_hash(cfg: &GravlinkConfig, email: &str, algorithm: Option<HashAlgorithm>) -> Result<()> {
    let identity = Identity::new(email, algorithm.unwrap_or(cfg.algorithm))?;
    println!("{}  {}", identity.hash(), identity.email());
    Ok(())
}
