//! CLI command handlers, one per file.

mod config;
mod hash;
mod url;

pub use config::run_config;
pub use hash::run_hash;
pub use url::{run_url, UrlArgs};
