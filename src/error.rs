//! Error types for the TandemCrypt library.

use std::fmt;

/// Errors produced by the TandemCrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TandemCryptError {
    /// Character is not one of the 36 alphabet symbols (A-Z, 0-9).
    InvalidSymbol(char),
    /// Vigenère key contains no symbols.
    EmptyKey,
    /// Affine multiplier `a` has no modular inverse (gcd(a, 36) != 1).
    KeyNotInvertible(u8),
    /// Known plaintext and ciphertext differ in length.
    LengthMismatch {
        /// Length of the known plaintext in symbols.
        plaintext: usize,
        /// Length of the known ciphertext in symbols.
        ciphertext: usize,
    },
}

impl fmt::Display for TandemCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TandemCryptError::InvalidSymbol(c) => {
                write!(f, "Character {:?} is outside the cipher alphabet", c)
            }
            TandemCryptError::EmptyKey => {
                write!(f, "Vigenère key must contain at least 1 symbol")
            }
            TandemCryptError::KeyNotInvertible(a) => {
                write!(f, "Affine multiplier {} is not coprime with 36", a)
            }
            TandemCryptError::LengthMismatch {
                plaintext,
                ciphertext,
            } => {
                write!(
                    f,
                    "Known plaintext ({} symbols) and ciphertext ({} symbols) differ in length",
                    plaintext, ciphertext
                )
            }
        }
    }
}

impl std::error::Error for TandemCryptError {}
