//! String-in, string-out interface over the standard alphabet.
//!
//! These functions keep the observable behavior callers of the classic
//! interface depend on: failed encryption yields an empty string, and the
//! literal [`ENCRYPTION_FAILED`] marker decrypts to an empty string. Use
//! [`Caesar`] and [`Bellaso`] directly to get typed errors instead.

use tracing::warn;

use crate::alphabet::Alphabet;
use crate::bellaso::Bellaso;
use crate::caesar::Caesar;
use crate::cipher::TextCipher;
use crate::error::ClassiCryptError;

/// Marker a caller displays in place of ciphertext when encryption fails.
///
/// Decrypting this exact string (case-sensitive) yields an empty result.
pub const ENCRYPTION_FAILED: &str = "encryption failed";

/// Returns `true` if every character of `plain_text` lies in the standard
/// window `' '..='_'`.
///
/// ```
/// use classicrypt::string_in_bounds;
///
/// assert!(string_in_bounds("THIS TEST SHOULD SUCCEED"));
/// assert!(!string_in_bounds("This test should fail"));
/// assert!(string_in_bounds(""));
/// ```
pub fn string_in_bounds(plain_text: &str) -> bool {
    Alphabet::STANDARD.contains_all(plain_text)
}

/// Encrypts with a Caesar offset, returning `""` if `plain_text` is out of
/// bounds.
///
/// ```
/// use classicrypt::encrypt_caesar;
///
/// assert_eq!(encrypt_caesar("HELLO", 3), "KHOOR");
/// assert_eq!(encrypt_caesar("hello", 3), "");
/// ```
pub fn encrypt_caesar(plain_text: &str, key: i32) -> String {
    flatten(Caesar::new(key).encrypt(plain_text))
}

/// Encrypts with a Bellaso key string, returning `""` if `plain_text` is out
/// of bounds or `bellaso_str` is empty.
pub fn encrypt_bellaso(plain_text: &str, bellaso_str: &str) -> String {
    flatten(Bellaso::new(bellaso_str).and_then(|bellaso| bellaso.encrypt(plain_text)))
}

/// Decrypts a Caesar ciphertext, returning `""` for the
/// [`ENCRYPTION_FAILED`] marker.
///
/// ```
/// use classicrypt::{decrypt_caesar, ENCRYPTION_FAILED};
///
/// assert_eq!(decrypt_caesar("KHOOR", 3), "HELLO");
/// assert_eq!(decrypt_caesar(ENCRYPTION_FAILED, 3), "");
/// ```
pub fn decrypt_caesar(encrypted_text: &str, key: i32) -> String {
    flatten(Caesar::new(key).decrypt(encrypted_text))
}

/// Decrypts a Bellaso ciphertext, returning `""` for the
/// [`ENCRYPTION_FAILED`] marker or an empty `bellaso_str`.
pub fn decrypt_bellaso(encrypted_text: &str, bellaso_str: &str) -> String {
    flatten(Bellaso::new(bellaso_str).and_then(|bellaso| bellaso.decrypt(encrypted_text)))
}

/// Maps a failed result to the literal [`ENCRYPTION_FAILED`] marker.
///
/// Lets a caller display or store a single string while keeping failures
/// recognizable to the decrypt functions.
///
/// ```
/// use classicrypt::{decrypt_caesar, or_failure_marker, Caesar, TextCipher};
///
/// let shown = or_failure_marker(Caesar::new(3).encrypt("lowercase"));
/// assert_eq!(shown, "encryption failed");
/// assert_eq!(decrypt_caesar(&shown, 3), "");
/// ```
pub fn or_failure_marker(result: Result<String, ClassiCryptError>) -> String {
    result.unwrap_or_else(|_| ENCRYPTION_FAILED.to_string())
}

/// Collapses a typed result into the empty-string failure convention.
fn flatten(result: Result<String, ClassiCryptError>) -> String {
    match result {
        Ok(text) => text,
        Err(
            ClassiCryptError::OutOfBounds { .. } | ClassiCryptError::EncryptionFailedMarker,
        ) => String::new(),
        Err(err) => {
            warn!(error = %err, "cipher precondition violated, returning empty output");
            String::new()
        }
    }
}
