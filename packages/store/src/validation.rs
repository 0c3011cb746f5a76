//! Local input checks that run before any request is made.

use thiserror::Error;

pub const MIN_ENTRY_CHARS: usize = 10;
pub const MAX_ENTRY_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please write something before saving.")]
    EmptyEntry,

    #[error("Entries must be at least {MIN_ENTRY_CHARS} characters long.")]
    EntryTooShort { chars: usize },

    #[error("Entries must be at most {MAX_ENTRY_CHARS} characters long.")]
    EntryTooLong { chars: usize },

    #[error("Please fill in all required fields.")]
    MissingFields,
}

/// Check diary text and return it trimmed.
///
/// Length is counted in characters of the trimmed text, inclusive on both ends.
pub fn validate_entry_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyEntry);
    }
    let chars = trimmed.chars().count();
    if chars < MIN_ENTRY_CHARS {
        return Err(ValidationError::EntryTooShort { chars });
    }
    if chars > MAX_ENTRY_CHARS {
        return Err(ValidationError::EntryTooLong { chars });
    }
    Ok(trimmed)
}

/// Every field must contain something other than whitespace.
pub fn require_fields(fields: &[&str]) -> Result<(), ValidationError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_length_bounds() {
        let nine = "a".repeat(9);
        let ten = "a".repeat(10);
        let five_hundred = "a".repeat(500);
        let five_hundred_one = "a".repeat(501);

        assert_eq!(
            validate_entry_text(&nine),
            Err(ValidationError::EntryTooShort { chars: 9 })
        );
        assert_eq!(validate_entry_text(&ten), Ok(ten.as_str()));
        assert_eq!(validate_entry_text(&five_hundred), Ok(five_hundred.as_str()));
        assert_eq!(
            validate_entry_text(&five_hundred_one),
            Err(ValidationError::EntryTooLong { chars: 501 })
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(validate_entry_text(""), Err(ValidationError::EmptyEntry));
        assert_eq!(validate_entry_text("  \n\t "), Err(ValidationError::EmptyEntry));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        let text = "é".repeat(10);
        assert!(validate_entry_text(&text).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(
            validate_entry_text("   Today was calm.   "),
            Ok("Today was calm.")
        );
    }

    #[test]
    fn test_require_fields() {
        assert!(require_fields(&["a@b.c", "secret"]).is_ok());
        assert_eq!(
            require_fields(&["a@b.c", "  "]),
            Err(ValidationError::MissingFields)
        );
    }
}
