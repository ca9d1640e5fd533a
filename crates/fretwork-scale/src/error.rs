//! Error types for scale generation.

use thiserror::Error;

use crate::chromatic::NOTE_NAMES;
use crate::scale::ScaleType;

/// Errors raised during scale generation.
///
/// Both variants are detected synchronously at the validation boundary and
/// propagate unchanged to the caller; the core never recovers from or
/// silently corrects invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// The tonic is not a member of the 12-entry chromatic table.
    #[error("invalid key '{key}' (valid notes: {})", NOTE_NAMES.join(", "))]
    InvalidKey { key: String },
    /// The scale type is not one of the five recognized identifiers.
    #[error("unknown scale type '{name}' (valid types: {})", ScaleType::valid_names())]
    UnknownScaleType { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_lists_valid_notes() {
        let err = ScaleError::InvalidKey {
            key: "H".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'H'"));
        for name in NOTE_NAMES {
            assert!(message.contains(name), "missing {} in: {}", name, message);
        }
    }

    #[test]
    fn test_unknown_scale_type_lists_valid_types() {
        let err = ScaleError::UnknownScaleType {
            name: "dorian".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'dorian'"));
        for scale_type in ScaleType::all() {
            assert!(
                message.contains(scale_type.as_str()),
                "missing {} in: {}",
                scale_type.as_str(),
                message
            );
        }
    }
}
