//! Avatar link construction.
//!
//! An [`AvatarLinkBuilder`] owns a normalized email, its digest, and a set of
//! default options, and renders links on demand. Rendering never mutates the
//! builder: per-call overrides are merged into a copy of the stored options.

use crate::config::GravlinkConfig;
use crate::email::normalize_email;
use crate::error::GravlinkError;
use crate::hash::{digest_hex, HashAlgorithm};
use crate::options::{AvatarOptions, OptionValue};
use url::form_urlencoded;

const PLAIN_HOST: &str = "http://www.gravatar.com";
const SECURE_HOST: &str = "https://secure.gravatar.com";
/// Fixed path prefix of the avatar endpoint; the `1` segment is part of it.
const AVATAR_PATH: &str = "/avatar/1/";
const REQUIRED_EXTENSION: &str = ".jpg";

/// Normalized email and its digest. The two are only ever set together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    email: String,
    hash: String,
    algorithm: HashAlgorithm,
}

impl Identity {
    pub fn new(raw_email: &str, algorithm: HashAlgorithm) -> Result<Self, GravlinkError> {
        let email = normalize_email(raw_email)?;
        let hash = digest_hex(algorithm, &email);
        Ok(Self {
            email,
            hash,
            algorithm,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

/// Builds avatar links for one email address.
///
/// Setters take `&mut self`; share a builder across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct AvatarLinkBuilder {
    identity: Identity,
    options: AvatarOptions,
}

impl AvatarLinkBuilder {
    /// Builder with default options (`default=404`, `requireType=false`, `size=200`).
    pub fn new(email: &str) -> Result<Self, GravlinkError> {
        Self::with_options(email, AvatarOptions::default())
    }

    pub fn with_options(email: &str, options: AvatarOptions) -> Result<Self, GravlinkError> {
        let identity = Identity::new(email, HashAlgorithm::default())?;
        Ok(Self { identity, options })
    }

    /// Builder seeded from a loaded config file.
    pub fn from_config(email: &str, cfg: &GravlinkConfig) -> Result<Self, GravlinkError> {
        let identity = Identity::new(email, cfg.algorithm)?;
        Ok(Self {
            identity,
            options: cfg.to_options(),
        })
    }

    pub fn email(&self) -> &str {
        self.identity.email()
    }

    pub fn hash(&self) -> &str {
        self.identity.hash()
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.identity.algorithm()
    }

    /// Replaces the email and recomputes the digest. On error the previous
    /// identity is kept.
    pub fn set_email(&mut self, email: &str) -> Result<(), GravlinkError> {
        self.identity = Identity::new(email, self.identity.algorithm)?;
        tracing::debug!(email = %self.identity.email, "avatar email updated");
        Ok(())
    }

    /// Switches digest algorithm and rehashes the current email.
    pub fn set_algorithm(&mut self, algorithm: HashAlgorithm) {
        self.identity.algorithm = algorithm;
        self.identity.hash = digest_hex(algorithm, &self.identity.email);
    }

    pub fn options(&self) -> &AvatarOptions {
        &self.options
    }

    /// Sets a single option. Values of the wrong type are ignored.
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) {
        if !self.options.set(name, value.into()) {
            tracing::debug!(option = name, "ignored option value of the wrong type");
        }
    }

    /// Sets every entry of `options`, one key at a time through [`Self::set_option`].
    pub fn set_options<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        for (k, v) in options {
            self.set_option(k.as_ref(), v);
        }
    }

    /// Bulk form for untyped input. Scalars are assigned; nulls, arrays and
    /// nested objects are skipped.
    pub fn set_options_json(&mut self, options: &serde_json::Map<String, serde_json::Value>) {
        for (k, v) in options {
            match OptionValue::from_json(v) {
                Some(value) => self.set_option(k, value),
                None => tracing::debug!(option = %k, "ignored non-scalar option value"),
            }
        }
    }

    /// Link rendered with the stored options.
    pub fn avatar_url(&self) -> String {
        render(&self.identity, &self.options)
    }

    /// Link rendered with `overrides` merged over the stored options.
    /// The stored options are left untouched.
    pub fn avatar_url_with<I, K, V>(&self, overrides: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        render(&self.identity, &self.options.merged(overrides))
    }
}

fn render(identity: &Identity, opts: &AvatarOptions) -> String {
    let host = if opts.is_secure() {
        SECURE_HOST
    } else {
        PLAIN_HOST
    };
    let extension = if opts.require_type {
        REQUIRED_EXTENSION
    } else {
        ""
    };
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(opts.query_pairs())
        .finish();
    let link = format!(
        "{host}{AVATAR_PATH}{hash}{extension}?{query}",
        hash = identity.hash()
    );
    tracing::debug!(%link, "rendered avatar link");
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_HASH: &str = "55502f40dc8b7c769880b10874abc9d0";

    #[test]
    fn default_link_shape() {
        let b = AvatarLinkBuilder::new("Test@Example.com ").unwrap();
        assert_eq!(b.email(), "test@example.com");
        assert_eq!(
            b.avatar_url(),
            format!("http://www.gravatar.com/avatar/1/{TEST_HASH}?default=404&requireType=false&size=200")
        );
    }

    #[test]
    fn empty_email_rejected() {
        assert!(matches!(
            AvatarLinkBuilder::new(""),
            Err(GravlinkError::InvalidInput(_))
        ));
        assert!(matches!(
            AvatarLinkBuilder::new("   "),
            Err(GravlinkError::InvalidInput(_))
        ));
    }

    #[test]
    fn set_email_rehashes() {
        let mut b = AvatarLinkBuilder::new("someone@example.org").unwrap();
        b.set_email(" TEST@example.com").unwrap();
        assert_eq!(b.email(), "test@example.com");
        assert_eq!(b.hash(), TEST_HASH);
    }

    #[test]
    fn failed_set_email_keeps_identity() {
        let mut b = AvatarLinkBuilder::new("test@example.com").unwrap();
        assert!(b.set_email("  ").is_err());
        assert_eq!(b.email(), "test@example.com");
        assert_eq!(b.hash(), TEST_HASH);
    }

    #[test]
    fn set_algorithm_rehashes_current_email() {
        let mut b = AvatarLinkBuilder::new("test@example.com").unwrap();
        b.set_algorithm(HashAlgorithm::Sha256);
        assert_eq!(
            b.hash(),
            "973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b"
        );
        b.set_email("someone@example.org").unwrap();
        assert_eq!(b.hash().len(), 64);
    }

    #[test]
    fn require_type_adds_extension() {
        let mut b = AvatarLinkBuilder::new("test@example.com").unwrap();
        b.set_option("requireType", true);
        let link = b.avatar_url();
        assert!(link.contains(&format!("{TEST_HASH}.jpg?")));
        assert!(link.contains("requireType=true"));
    }

    #[test]
    fn query_values_are_encoded() {
        let mut b = AvatarLinkBuilder::new("test@example.com").unwrap();
        b.set_option("default", "https://example.com/a b.png");
        assert!(b
            .avatar_url()
            .contains("default=https%3A%2F%2Fexample.com%2Fa+b.png&"));
    }

    #[test]
    fn json_bulk_skips_non_scalars() {
        let mut b = AvatarLinkBuilder::new("test@example.com").unwrap();
        let json = serde_json::json!({
            "size": 300,
            "secure": true,
            "r": "pg",
            "nested": {"a": 1},
            "list": [1, 2],
            "nothing": null
        });
        b.set_options_json(json.as_object().unwrap());
        assert_eq!(b.options().size, 300);
        assert_eq!(b.options().secure, Some(true));
        assert_eq!(b.options().extras.get("r"), Some("pg"));
        assert_eq!(b.options().extras.len(), 1);
    }
}
