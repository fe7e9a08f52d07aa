//! Vigenère stage: polyalphabetic substitution keyed by a repeating
//! key stream.
//!
//! Forward is modular addition of the key stream, inverse is modular
//! subtraction. Both transforms mutate the message indices in place and
//! preserve length exactly.

use std::fmt;

use crate::alphabet::{self, MODULUS};
use crate::error::TandemCryptError;

/// Repeating key for the Vigenère stage.
///
/// An immutable, non-empty sequence of alphabet indices, applied
/// cyclically: position `i` of the message uses key symbol `i % len`.
/// Design guidance suggests keys of 10 or more symbols; that is a
/// recommendation, not a structural requirement — only emptiness is
/// rejected.
///
/// # Examples
///
/// ```
/// use tandemcrypt::VigenereKey;
///
/// let key = VigenereKey::new("CRYPTOCIPHER").unwrap();
/// assert_eq!(key.len(), 12);
/// assert_eq!(key.to_string(), "CRYPTOCIPHER");
///
/// assert!(VigenereKey::new("").is_err());
/// assert!(VigenereKey::new("KEY WITH SPACE").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    indices: Vec<u8>,
}

impl VigenereKey {
    /// Creates a key from a string of alphabet symbols.
    ///
    /// Lowercase letters are normalized to uppercase.
    ///
    /// # Errors
    /// - [`TandemCryptError::EmptyKey`] if the string is empty.
    /// - [`TandemCryptError::InvalidSymbol`] if any character is outside
    ///   the alphabet.
    pub fn new(key: &str) -> Result<Self, TandemCryptError> {
        Self::from_indices(alphabet::encode_str(key)?)
    }

    /// Creates a key directly from alphabet indices.
    ///
    /// Used by the attacker, which derives key symbols numerically.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::EmptyKey`] if `indices` is empty.
    ///
    /// # Panics
    /// Debug-asserts that every index is reduced below the modulus.
    pub(crate) fn from_indices(indices: Vec<u8>) -> Result<Self, TandemCryptError> {
        if indices.is_empty() {
            return Err(TandemCryptError::EmptyKey);
        }
        debug_assert!(indices.iter().all(|&i| (i as usize) < MODULUS));
        Ok(VigenereKey { indices })
    }

    /// Number of symbols in the key.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`; present for API completeness alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Key stream symbol for message position `i` (cyclic addressing).
    pub(crate) fn stream(&self, i: usize) -> u8 {
        self.indices[i % self.indices.len()]
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&alphabet::decode_indices(&self.indices))
    }
}

/// Applies the forward Vigenère transform in place.
///
/// `message[i] = (message[i] + key[i % len]) mod 36`
pub(crate) fn apply(message: &mut [u8], key: &VigenereKey) {
    for (i, m) in message.iter_mut().enumerate() {
        *m = ((*m as u16 + key.stream(i) as u16) % MODULUS as u16) as u8;
    }
}

/// Applies the inverse Vigenère transform in place.
///
/// `message[i] = (message[i] - key[i % len] + 36) mod 36`
pub(crate) fn invert(message: &mut [u8], key: &VigenereKey) {
    for (i, m) in message.iter_mut().enumerate() {
        *m = ((*m as u16 + MODULUS as u16 - key.stream(i) as u16) % MODULUS as u16) as u8;
    }
}
