use thiserror::Error;

/// Failures raised while parsing or formally validating an IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    /// The two-letter prefix does not match any registered country layout.
    #[error("country code '{0}' does not belong to any known IBAN layout")]
    UnsupportedCountry(String),

    /// The whole IBAN or one of its national fields has the wrong length.
    #[error("{field} has wrong length: expected {expected}, found {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A recomputed check value differs from the one carried by the IBAN.
    #[error("{kind} check mismatch: expected {expected}, found {actual}")]
    CheckDigitMismatch {
        kind: &'static str,
        expected: String,
        actual: String,
    },

    /// A character outside the alphabet of a checksum table was found.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

pub type Result<T> = std::result::Result<T, IbanError>;
