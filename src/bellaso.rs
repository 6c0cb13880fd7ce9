//! Bellaso cipher: polyalphabetic substitution driven by a repeating key.
//!
//! The key string is cycled to the length of the text. Each character is
//! shifted by the raw code point of the aligned key character (not by its
//! distance from the start of the alphabet) and folded back into the window.

use tracing::debug;

use crate::alphabet::{Alphabet, Wraparound};
use crate::cipher::TextCipher;
use crate::compat::ENCRYPTION_FAILED;
use crate::error::ClassiCryptError;

/// Polyalphabetic substitution cipher with a cyclic key stream.
///
/// # Examples
///
/// ```
/// use classicrypt::{Bellaso, TextCipher};
///
/// let bellaso = Bellaso::new("AB").unwrap();
/// let encrypted = bellaso.encrypt("HELLO").unwrap();
/// assert_eq!(encrypted, "IGMNP");
/// assert_eq!(bellaso.decrypt(&encrypted).unwrap(), "HELLO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bellaso {
    key: Vec<char>,
    alphabet: Alphabet,
    wraparound: Wraparound,
}

impl Bellaso {
    /// Creates a Bellaso cipher over the standard alphabet with one-sided
    /// wraparound.
    ///
    /// Key characters are not required to lie inside the window.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::EmptyKey`] if `key` is empty.
    ///
    /// ```
    /// use classicrypt::Bellaso;
    ///
    /// assert!(Bellaso::new("").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, ClassiCryptError> {
        if key.is_empty() {
            return Err(ClassiCryptError::EmptyKey);
        }
        Ok(Bellaso {
            key: key.chars().collect(),
            alphabet: Alphabet::STANDARD,
            wraparound: Wraparound::OneSided,
        })
    }

    /// Replaces the alphabet window.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Replaces the wraparound mode.
    pub fn with_wraparound(mut self, wraparound: Wraparound) -> Self {
        self.wraparound = wraparound;
        self
    }

    /// Returns the key string.
    pub fn key(&self) -> String {
        self.key.iter().collect()
    }

    /// Returns the alphabet window.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the wraparound mode.
    pub fn wraparound(&self) -> Wraparound {
        self.wraparound
    }

    /// Yields `(position, text_char, key_char)` with the key repeated to the
    /// length of `text`.
    fn key_stream<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, char, char)> + 'a {
        text.chars()
            .zip(self.key.iter().copied().cycle())
            .enumerate()
            .map(|(position, (c, k))| (position, c, k))
    }
}

impl TextCipher for Bellaso {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassiCryptError> {
        if let Err(err) = self.alphabet.check(plain_text) {
            debug!(error = %err, "rejecting Bellaso plaintext");
            return Err(err);
        }

        let mut encrypted = String::with_capacity(plain_text.len());
        for (position, c, k) in self.key_stream(plain_text) {
            let value = self
                .alphabet
                .fold_forward(c as i64 + k as i64, self.wraparound);
            encrypted.push(self.alphabet.to_char(position, value, self.wraparound)?);
        }
        Ok(encrypted)
    }

    fn decrypt(&self, encrypted_text: &str) -> Result<String, ClassiCryptError> {
        if encrypted_text == ENCRYPTION_FAILED {
            debug!("refusing to decrypt the failed-encryption marker");
            return Err(ClassiCryptError::EncryptionFailedMarker);
        }

        let mut decrypted = String::with_capacity(encrypted_text.len());
        for (position, c, k) in self.key_stream(encrypted_text) {
            let value = self
                .alphabet
                .fold_backward(c as i64 - k as i64, self.wraparound);
            decrypted.push(self.alphabet.to_char(position, value, self.wraparound)?);
        }
        Ok(decrypted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_key() {
        assert_eq!(Bellaso::new(""), Err(ClassiCryptError::EmptyKey));
    }

    #[test]
    fn test_encrypt_hello() {
        // H+A=137-64='I', E+B=135-64='G', L+A='M', L+B='N', O+A='P'
        let bellaso = Bellaso::new("AB").unwrap();
        assert_eq!(bellaso.encrypt("HELLO").unwrap(), "IGMNP");
    }

    #[test]
    fn test_key_longer_than_text() {
        let bellaso = Bellaso::new("ABCDEFGH").unwrap();
        assert_eq!(bellaso.encrypt("HE").unwrap(), "IG");
    }

    #[test]
    fn test_key_cycles_by_position() {
        let bellaso = Bellaso::new("AB").unwrap();
        let encrypted: Vec<char> = bellaso.encrypt("AAAAA").unwrap().chars().collect();
        // 'A' + 'A' = 130 - 64 = 'B', 'A' + 'B' = 131 - 64 = 'C'
        assert_eq!(encrypted, vec!['B', 'C', 'B', 'C', 'B']);
    }

    #[test]
    fn test_single_char_key_matches_caesar_by_code_point() {
        use crate::caesar::Caesar;

        let bellaso = Bellaso::new("#").unwrap();
        let caesar = Caesar::new('#' as i32);
        let text = "SINGLE KEY_";
        assert_eq!(bellaso.encrypt(text), caesar.encrypt(text));
    }

    #[test]
    fn test_encrypt_rejects_out_of_bounds() {
        let bellaso = Bellaso::new("KEY").unwrap();
        assert_eq!(
            bellaso.encrypt("OK{"),
            Err(ClassiCryptError::OutOfBounds {
                position: 2,
                character: '{'
            })
        );
    }

    #[test]
    fn test_encrypt_empty() {
        assert_eq!(Bellaso::new("KEY").unwrap().encrypt("").unwrap(), "");
    }

    #[test]
    fn test_decrypt_rejects_marker() {
        let bellaso = Bellaso::new("KEY").unwrap();
        assert_eq!(
            bellaso.decrypt("encryption failed"),
            Err(ClassiCryptError::EncryptionFailedMarker)
        );
    }

    #[test]
    fn test_roundtrip_with_edge_characters() {
        let bellaso = Bellaso::new("_ _").unwrap();
        let text = "_ _ __  ";
        let encrypted = bellaso.encrypt(text).unwrap();
        assert!(Alphabet::STANDARD.contains_all(&encrypted));
        assert_eq!(bellaso.decrypt(&encrypted).unwrap(), text);
    }

    #[test]
    fn test_lowercase_key_still_roundtrips() {
        let bellaso = Bellaso::new("secret").unwrap();
        let encrypted = bellaso.encrypt("ATTACK AT DAWN").unwrap();
        assert!(Alphabet::STANDARD.contains_all(&encrypted));
        assert_eq!(bellaso.decrypt(&encrypted).unwrap(), "ATTACK AT DAWN");
    }

    #[test]
    fn test_full_wraparound_roundtrip() {
        let bellaso = Bellaso::new("CMSC203")
            .unwrap()
            .with_wraparound(Wraparound::Full);
        let encrypted = bellaso.encrypt("HELLO WORLD").unwrap();
        assert_eq!(bellaso.decrypt(&encrypted).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_accessors() {
        let digits = Alphabet::new('0', '9').unwrap();
        let bellaso = Bellaso::new("KEY").unwrap().with_alphabet(digits);
        assert_eq!(bellaso.key(), "KEY");
        assert_eq!(bellaso.alphabet(), digits);
        assert_eq!(bellaso.wraparound(), Wraparound::OneSided);
    }
}
