//! Affine stage: linear modular transform keyed by a pair `(a, b)`.
//!
//! Forward is `a*x + b mod 36`, inverse multiplies by the modular inverse
//! of `a`, which exists exactly when `gcd(a, 36) = 1`. Both transforms
//! mutate the message indices in place and preserve length exactly.

use crate::alphabet::MODULUS;
use crate::error::TandemCryptError;

/// The 12 multipliers in `[0, 36)` that are coprime with 36.
///
/// These are the only invertible `a` values; combined with the 36 offsets
/// they span the 432 valid affine keys the attacker enumerates.
pub(crate) const VALID_A: [u8; 12] = [1, 5, 7, 11, 13, 17, 19, 23, 25, 29, 31, 35];

/// Key for the affine stage: multiplier `a` and offset `b`.
///
/// Both components are reduced into `[0, 36)` at construction. The
/// multiplier must be coprime with 36 so the transform is invertible;
/// its modular inverse is computed once and stored.
///
/// # Examples
///
/// ```
/// use tandemcrypt::AffineKey;
///
/// let key = AffineKey::new(5, 8).unwrap();
/// assert_eq!(key.a(), 5);
/// assert_eq!(key.b(), 8);
///
/// // gcd(2, 36) = 2: no inverse exists.
/// assert!(AffineKey::new(2, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: u8,
    b: u8,
    a_inv: u8,
}

impl AffineKey {
    /// Creates an affine key, validating invertibility eagerly.
    ///
    /// `a` and `b` are reduced modulo 36 before validation.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::KeyNotInvertible`] if the reduced `a`
    /// is not coprime with 36.
    pub fn new(a: u8, b: u8) -> Result<Self, TandemCryptError> {
        let a = a % MODULUS as u8;
        let b = b % MODULUS as u8;
        match mod_inverse(a) {
            Some(a_inv) => Ok(AffineKey { a, b, a_inv }),
            None => Err(TandemCryptError::KeyNotInvertible(a)),
        }
    }

    /// The multiplier component.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// The offset component.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// The stored modular inverse of the multiplier.
    pub(crate) fn a_inv(&self) -> u8 {
        self.a_inv
    }
}

/// Modular inverse of `a` modulo 36, if it exists.
///
/// The space is 36 values; a direct scan is simpler than extended
/// Euclid and runs once per key construction.
fn mod_inverse(a: u8) -> Option<u8> {
    (1..MODULUS as u16).find(|x| (a as u16 * x) % MODULUS as u16 == 1).map(|x| x as u8)
}

/// Applies the forward affine transform in place.
///
/// `message[i] = (a * message[i] + b) mod 36`
pub(crate) fn apply(message: &mut [u8], key: &AffineKey) {
    for m in message.iter_mut() {
        *m = ((key.a as u16 * *m as u16 + key.b as u16) % MODULUS as u16) as u8;
    }
}

/// Applies the inverse affine transform in place.
///
/// `message[i] = (a_inv * (message[i] - b + 36)) mod 36`
pub(crate) fn invert(message: &mut [u8], key: &AffineKey) {
    for m in message.iter_mut() {
        let shifted = *m as u16 + MODULUS as u16 - key.b as u16;
        *m = ((key.a_inv as u16 * shifted) % MODULUS as u16) as u8;
    }
}
