//! Email normalization: the canonical form that gets hashed.

use crate::error::GravlinkError;

/// Trims surrounding whitespace and lowercases the address.
///
/// Returns [`GravlinkError::InvalidInput`] if nothing is left after trimming.
/// No further syntax checks are made; the avatar service hashes whatever
/// string it is given.
pub fn normalize_email(raw: &str) -> Result<String, GravlinkError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GravlinkError::InvalidInput(
            "email must be a non-empty string".to_string(),
        ));
    }
    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(
            normalize_email("  Ada@Example.COM \n").unwrap(),
            "ada@example.com"
        );
    }

    #[test]
    fn already_normal_is_unchanged() {
        assert_eq!(
            normalize_email("test@example.com").unwrap(),
            "test@example.com"
        );
    }

    #[test]
    fn empty_and_blank_rejected() {
        assert!(matches!(
            normalize_email(""),
            Err(GravlinkError::InvalidInput(_))
        ));
        assert!(matches!(
            normalize_email(" \t "),
            Err(GravlinkError::InvalidInput(_))
        ));
    }
}
