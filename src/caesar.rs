//! Caesar cipher: fixed-offset substitution over the alphabet window.
//!
//! Every character is shifted by the same integer key and folded back into
//! the window by multiples of its range.

use tracing::debug;

use crate::alphabet::{Alphabet, Wraparound};
use crate::cipher::TextCipher;
use crate::compat::ENCRYPTION_FAILED;
use crate::error::ClassiCryptError;

/// Fixed-offset substitution cipher.
///
/// # Examples
///
/// ```
/// use classicrypt::{Caesar, TextCipher};
///
/// let caesar = Caesar::new(3);
/// let encrypted = caesar.encrypt("HELLO").unwrap();
/// assert_eq!(encrypted, "KHOOR");
/// assert_eq!(caesar.decrypt(&encrypted).unwrap(), "HELLO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caesar {
    key: i32,
    alphabet: Alphabet,
    wraparound: Wraparound,
}

impl Caesar {
    /// Creates a Caesar cipher over the standard alphabet with one-sided
    /// wraparound.
    pub fn new(key: i32) -> Self {
        Caesar {
            key,
            alphabet: Alphabet::STANDARD,
            wraparound: Wraparound::OneSided,
        }
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

    /// Returns the integer offset.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Returns the alphabet window.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the wraparound mode.
    pub fn wraparound(&self) -> Wraparound {
        self.wraparound
    }
}

impl TextCipher for Caesar {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassiCryptError> {
        if let Err(err) = self.alphabet.check(plain_text) {
            debug!(error = %err, "rejecting Caesar plaintext");
            return Err(err);
        }

        let key = i64::from(self.key);
        let mut encrypted = String::with_capacity(plain_text.len());
        for (position, c) in plain_text.chars().enumerate() {
            let value = self.alphabet.fold_forward(c as i64 + key, self.wraparound);
            encrypted.push(self.alphabet.to_char(position, value, self.wraparound)?);
        }
        Ok(encrypted)
    }

    fn decrypt(&self, encrypted_text: &str) -> Result<String, ClassiCryptError> {
        if encrypted_text == ENCRYPTION_FAILED {
            debug!("refusing to decrypt the failed-encryption marker");
            return Err(ClassiCryptError::EncryptionFailedMarker);
        }

        let key = i64::from(self.key);
        let mut decrypted = String::with_capacity(encrypted_text.len());
        for (position, c) in encrypted_text.chars().enumerate() {
            let value = self.alphabet.fold_backward(c as i64 - key, self.wraparound);
            decrypted.push(self.alphabet.to_char(position, value, self.wraparound)?);
        }
        Ok(decrypted)
    }
}
