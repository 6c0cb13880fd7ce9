//! Alphabet window and wraparound arithmetic.
//!
//! Both ciphers operate on a contiguous, inclusive range of code points
//! `[lower, upper]`. Plaintext must lie entirely inside the window; the
//! transforms then shift each code point and fold the result back by
//! multiples of the window size.
//!
//! The classic window runs from space (`0x20`) to underscore (`0x5F`),
//! which gives a modulus of 64.

use crate::error::ClassiCryptError;

/// First character of the classic alphabet window.
pub const LOWER_BOUND: char = ' ';

/// Last character of the classic alphabet window.
pub const UPPER_BOUND: char = '_';

/// Size of the classic alphabet window.
pub const RANGE: u32 = UPPER_BOUND as u32 - LOWER_BOUND as u32 + 1;

/// Direction(s) in which out-of-window values are folded back.
///
/// The encrypt transforms only fold values that overflow the upper bound and
/// the decrypt transforms only fold values that underflow the lower bound.
/// With non-negative keys that is enough to keep every output in the window.
/// Negative keys can push ciphertext below the window; `OneSided` keeps such
/// values as 16-bit code units so decryption still recovers the plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wraparound {
    /// Encrypt folds from above only, decrypt folds from below only.
    #[default]
    OneSided,
    /// Encrypt and decrypt fold from either side, so every output lands in
    /// the window regardless of the key.
    Full,
}

/// A contiguous, inclusive window of accepted code points.
///
/// # Examples
///
/// ```
/// use classicrypt::Alphabet;
///
/// let alphabet = Alphabet::STANDARD;
/// assert!(alphabet.contains_all("HELLO WORLD"));
/// assert!(!alphabet.contains_all("hello"));
/// assert_eq!(alphabet.range(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    lower: char,
    upper: char,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Alphabet {
    /// The classic `' '..='_'` window.
    pub const STANDARD: Alphabet = Alphabet {
        lower: LOWER_BOUND,
        upper: UPPER_BOUND,
    };

    /// Creates a window spanning `lower..=upper`.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::InvalidAlphabet`] if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::Alphabet;
    ///
    /// let digits = Alphabet::new('0', '9').unwrap();
    /// assert_eq!(digits.range(), 10);
    /// assert!(Alphabet::new('9', '0').is_err());
    /// ```
    pub fn new(lower: char, upper: char) -> Result<Self, ClassiCryptError> {
        if lower > upper {
            return Err(ClassiCryptError::InvalidAlphabet { lower, upper });
        }
        Ok(Alphabet { lower, upper })
    }

    /// Returns the first character of the window.
    pub fn lower(&self) -> char {
        self.lower
    }

    /// Returns the last character of the window.
    pub fn upper(&self) -> char {
        self.upper
    }

    /// Returns the number of code points in the window.
    pub fn range(&self) -> u32 {
        self.upper as u32 - self.lower as u32 + 1
    }

    /// Returns `true` if `c` lies inside the window.
    pub fn contains(&self, c: char) -> bool {
        (self.lower..=self.upper).contains(&c)
    }

    /// Returns `true` if every character of `text` lies inside the window.
    ///
    /// Stops at the first out-of-window character. An empty string is
    /// always in bounds.
    pub fn contains_all(&self, text: &str) -> bool {
        self.first_out_of_bounds(text).is_none()
    }

    /// Returns the position and value of the first character of `text`
    /// outside the window, if any.
    pub fn first_out_of_bounds(&self, text: &str) -> Option<(usize, char)> {
        text.chars().enumerate().find(|&(_, c)| !self.contains(c))
    }

    /// Checks that `text` lies entirely inside the window.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::OutOfBounds`] naming the first offending
    /// character.
    pub fn check(&self, text: &str) -> Result<(), ClassiCryptError> {
        match self.first_out_of_bounds(text) {
            Some((position, character)) => Err(ClassiCryptError::OutOfBounds {
                position,
                character,
            }),
            None => Ok(()),
        }
    }

    /// Folds a value produced by an encrypt step back into the window.
    ///
    /// Equivalent to subtracting the range while the value exceeds the upper
    /// bound, computed in constant time.
    pub(crate) fn fold_forward(&self, value: i64, wraparound: Wraparound) -> i64 {
        match wraparound {
            Wraparound::OneSided => {
                let upper = self.upper as i64;
                if value > upper {
                    let range = self.range() as i64;
                    value - (value - upper + range - 1) / range * range
                } else {
                    value
                }
            }
            Wraparound::Full => self.fold_full(value),
        }
    }

    /// Folds a value produced by a decrypt step back into the window.
    ///
    /// Equivalent to adding the range while the value is below the lower
    /// bound, computed in constant time.
    pub(crate) fn fold_backward(&self, value: i64, wraparound: Wraparound) -> i64 {
        match wraparound {
            Wraparound::OneSided => {
                let lower = self.lower as i64;
                if value < lower {
                    let range = self.range() as i64;
                    value + (lower - value + range - 1) / range * range
                } else {
                    value
                }
            }
            Wraparound::Full => self.fold_full(value),
        }
    }

    /// Converts a transformed code point back into a `char`.
    ///
    /// With [`Wraparound::OneSided`], a value left outside the window is
    /// reduced to a 16-bit code unit (mod `0x1_0000`), the same way the
    /// classic UTF-16 implementation narrows its results. Encrypt and decrypt
    /// then stay inverses for negative keys whose ciphertext escapes the
    /// window.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::Unrepresentable`] if the result is a
    /// surrogate code unit, or, with [`Wraparound::Full`], not a Unicode
    /// scalar value.
    pub(crate) fn to_char(
        &self,
        position: usize,
        value: i64,
        wraparound: Wraparound,
    ) -> Result<char, ClassiCryptError> {
        let code = match wraparound {
            Wraparound::OneSided if !self.contains_code(value) => value.rem_euclid(0x1_0000),
            _ => value,
        };
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .ok_or(ClassiCryptError::Unrepresentable { position, value })
    }

    fn contains_code(&self, value: i64) -> bool {
        (self.lower as i64..=self.upper as i64).contains(&value)
    }

    fn fold_full(&self, value: i64) -> i64 {
        let lower = self.lower as i64;
        lower + (value - lower).rem_euclid(self.range() as i64)
    }
}
