//! Avatar display options.
//!
//! The four options the service understands are typed fields; anything else
//! is kept as an opaque string and passed through to the query string.

mod extras;
mod value;

pub use extras::Extras;
pub use value::OptionValue;

/// Fallback image token when the address has no avatar.
pub const DEFAULT_FALLBACK: &str = "404";
/// Image edge length in pixels.
pub const DEFAULT_SIZE: u32 = 200;

pub const KEY_DEFAULT: &str = "default";
pub const KEY_REQUIRE_TYPE: &str = "requireType";
pub const KEY_SIZE: &str = "size";
pub const KEY_SECURE: &str = "secure";

/// Rendering options for an avatar link.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarOptions {
    /// Fallback image identifier (`404`, `mp`, `identicon`, a URL, ...).
    pub default: String,
    /// When set, the link path ends in `.jpg`.
    pub require_type: bool,
    pub size: u32,
    /// `None` until set; selects the secure host when `Some(true)`.
    /// Rendered as `secure=true`, or `secure=` once set to false.
    pub secure: Option<bool>,
    pub extras: Extras,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            default: DEFAULT_FALLBACK.to_string(),
            require_type: false,
            size: DEFAULT_SIZE,
            secure: None,
            extras: Extras::new(),
        }
    }
}

impl AvatarOptions {
    /// Assigns one option by name.
    ///
    /// Values that do not coerce to the option's type are ignored and the
    /// previous value is kept. Returns whether the value was applied.
    pub fn set(&mut self, name: &str, value: OptionValue) -> bool {
        match name {
            KEY_DEFAULT => {
                self.default = value.to_query_value();
                true
            }
            KEY_SIZE => match value.as_size() {
                Some(size) => {
                    self.size = size;
                    true
                }
                None => false,
            },
            KEY_REQUIRE_TYPE => match value.as_bool() {
                Some(b) => {
                    self.require_type = b;
                    true
                }
                None => false,
            },
            KEY_SECURE => match value.as_bool() {
                Some(b) => {
                    self.secure = Some(b);
                    true
                }
                None => false,
            },
            other => {
                self.extras.insert(other, value.to_query_value());
                true
            }
        }
    }

    /// Copy of `self` with `overrides` applied on top; right-hand values win per key.
    pub fn merged<I, K, V>(&self, overrides: I) -> AvatarOptions
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let mut out = self.clone();
        for (k, v) in overrides {
            out.set(k.as_ref(), v.into());
        }
        out
    }

    /// Whether the secure host should be used.
    pub fn is_secure(&self) -> bool {
        self.secure == Some(true)
    }

    /// Query pairs in rendering order: the recognized options first, then
    /// extras in insertion order. `requireType` is emitted even though it
    /// also controls the path extension, and always as `true`/`false`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (KEY_DEFAULT.to_string(), self.default.clone()),
            (KEY_REQUIRE_TYPE.to_string(), self.require_type.to_string()),
            (KEY_SIZE.to_string(), self.size.to_string()),
        ];
        if let Some(secure) = self.secure {
            pairs.push((
                KEY_SECURE.to_string(),
                OptionValue::Bool(secure).to_query_value(),
            ));
        }
        pairs.extend(self.extras.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        pairs
    }
}
