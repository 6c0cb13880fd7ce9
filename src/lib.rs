//! Caesar and Bellaso substitution ciphers over a fixed character window.
//!
//! Both ciphers accept plaintext drawn from a contiguous range of code
//! points, by default space (`0x20`) through underscore (`0x5F`). They are
//! educational ciphers with no cryptographic strength.
//!
//! # Architecture
//!
//! ```text
//! Alphabet    (window bounds, bounds check, wraparound folding)
//!     ↓ used by
//! Caesar      (single integer offset)
//! Bellaso     (offset taken from a cyclic key string)
//!     ↓ both implement
//! TextCipher  (typed encrypt / decrypt)
//!     ↓ wrapped by
//! compat      (string-in, string-out functions with empty-string failures)
//! ```
//!
//! # Examples
//!
//! Typed API:
//!
//! ```
//! use classicrypt::{Bellaso, Caesar, ClassiCryptError, TextCipher};
//!
//! let caesar = Caesar::new(3);
//! assert_eq!(caesar.encrypt("HELLO").unwrap(), "KHOOR");
//!
//! let bellaso = Bellaso::new("CMSC203").unwrap();
//! let encrypted = bellaso.encrypt("MEET AT NOON").unwrap();
//! assert_eq!(bellaso.decrypt(&encrypted).unwrap(), "MEET AT NOON");
//!
//! assert!(matches!(
//!     caesar.encrypt("hello"),
//!     Err(ClassiCryptError::OutOfBounds { position: 0, character: 'h' })
//! ));
//! ```
//!
//! String interface:
//!
//! ```
//! use classicrypt::{decrypt_caesar, encrypt_caesar, string_in_bounds};
//!
//! assert!(string_in_bounds("HELLO"));
//! let encrypted = encrypt_caesar("HELLO", 3);
//! assert_eq!(decrypt_caesar(&encrypted, 3), "HELLO");
//! assert_eq!(encrypt_caesar("hello", 3), "");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod bellaso;
mod caesar;
mod cipher;
mod compat;

pub use alphabet::{Alphabet, Wraparound, LOWER_BOUND, RANGE, UPPER_BOUND};
pub use bellaso::Bellaso;
pub use caesar::Caesar;
pub use cipher::TextCipher;
pub use compat::{
    decrypt_bellaso, decrypt_caesar, encrypt_bellaso, encrypt_caesar, or_failure_marker,
    string_in_bounds, ENCRYPTION_FAILED,
};
pub use error::ClassiCryptError;
