//! TextCipher trait shared by the Caesar and Bellaso ciphers.

use crate::error::ClassiCryptError;

/// Reversible character-wise transform over an alphabet window.
///
/// Implementations are stateless values: encrypting or decrypting never
/// mutates the cipher, so a single instance can be shared freely across
/// threads and reused for any number of messages.
pub trait TextCipher {
    /// Encrypts `plain_text`, which must lie entirely inside the alphabet
    /// window.
    ///
    /// # Errors
    /// - [`ClassiCryptError::OutOfBounds`] if any character lies outside the
    ///   window.
    /// - [`ClassiCryptError::Unrepresentable`] if a shifted value is not a
    ///   valid `char`.
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassiCryptError>;

    /// Decrypts `encrypted_text`. The input is not bounds-checked.
    ///
    /// The text is walked one Unicode scalar at a time, so a character
    /// outside the Basic Multilingual Plane consumes a single key position
    /// where a UTF-16 implementation would consume two.
    ///
    /// # Errors
    /// - [`ClassiCryptError::EncryptionFailedMarker`] if the input is the
    ///   literal failed-encryption marker.
    /// - [`ClassiCryptError::Unrepresentable`] if a shifted value is not a
    ///   valid `char`.
    fn decrypt(&self, encrypted_text: &str) -> Result<String, ClassiCryptError>;
}
