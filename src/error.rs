//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the classicrypt library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassiCryptError {
    /// Plaintext contains a character outside the alphabet window.
    #[error("Character {character:?} at position {position} is outside the alphabet window")]
    OutOfBounds {
        /// Zero-based character index of the first offending character.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// Ciphertext is the literal failed-encryption marker.
    #[error("Input is the failed-encryption marker and cannot be decrypted")]
    EncryptionFailedMarker,

    /// Bellaso key string is empty.
    #[error("Bellaso key must be at least 1 character long")]
    EmptyKey,

    /// Alphabet lower bound is greater than its upper bound.
    #[error("Alphabet lower bound {lower:?} is greater than upper bound {upper:?}")]
    InvalidAlphabet {
        /// Requested lower bound.
        lower: char,
        /// Requested upper bound.
        upper: char,
    },

    /// A transformed code point is not a Unicode scalar value.
    #[error("Transformed value {value} at position {position} is not a valid character")]
    Unrepresentable {
        /// Zero-based character index of the input character.
        position: usize,
        /// The raw code point computed for that character.
        value: i64,
    },
}
