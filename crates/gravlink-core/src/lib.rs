//! Build Gravatar avatar links from email addresses.
//!
//! ```
//! use gravlink_core::AvatarLinkBuilder;
//!
//! let builder = AvatarLinkBuilder::new("Test@Example.com ").unwrap();
//! assert_eq!(
//!     builder.avatar_url(),
//!     "http://www.gravatar.com/avatar/1/55502f40dc8b7c769880b10874abc9d0?default=404&requireType=false&size=200"
//! );
//! ```

pub mod config;
pub mod logging;

pub mod builder;
pub mod email;
pub mod error;
pub mod hash;
pub mod options;

pub use builder::{AvatarLinkBuilder, Identity};
pub use error::GravlinkError;
pub use hash::HashAlgorithm;
pub use options::{AvatarOptions, Extras, OptionValue};
