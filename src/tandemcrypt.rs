//! TandemCrypt: two-stage substitution cipher engine.
//!
//! Orchestrates the Vigenère and Affine stages over the 36-symbol
//! alphabet. Encryption composes the stages forward (Vigenère then
//! Affine), decryption runs the inverses in reverse order. Both keys are
//! validated eagerly at construction; the transforms themselves cannot
//! fail on key material.

use crate::affine::{self, AffineKey};
use crate::alphabet;
use crate::error::TandemCryptError;
use crate::vigenere::{self, VigenereKey};

/// Two-stage substitution cipher over the 36-symbol alphabet.
///
/// Owns one [`VigenereKey`] and one [`AffineKey`] and applies them as a
/// stateless, length-preserving bijection on symbol sequences. Encrypting
/// the same plaintext twice produces the same ciphertext; there is no
/// internal state between calls.
///
/// # Examples
///
/// Encrypt and decrypt a message:
///
/// ```
/// use tandemcrypt::TandemCrypt;
///
/// let cipher = TandemCrypt::new("KEY", (7, 3)).unwrap();
///
/// let ciphertext = cipher.encrypt("RUST").unwrap();
/// assert_eq!(ciphertext, "M1J0");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "RUST");
/// ```
///
/// A non-invertible affine multiplier is rejected at construction:
///
/// ```
/// use tandemcrypt::TandemCrypt;
///
/// assert!(TandemCrypt::new("KEY", (2, 0)).is_err());
/// ```
#[derive(Debug)]
pub struct TandemCrypt {
    vigenere_key: VigenereKey,
    affine_key: AffineKey,
}

impl TandemCrypt {
    /// Creates a cipher from a Vigenère key string and an affine `(a, b)`
    /// pair.
    ///
    /// Both keys are validated here, never at transform time.
    ///
    /// # Errors
    /// - [`TandemCryptError::EmptyKey`] if the Vigenère key is empty.
    /// - [`TandemCryptError::InvalidSymbol`] if the Vigenère key contains
    ///   a character outside the alphabet.
    /// - [`TandemCryptError::KeyNotInvertible`] if `gcd(a, 36) != 1`.
    pub fn new(vigenere_key: &str, affine_key: (u8, u8)) -> Result<Self, TandemCryptError> {
        Ok(TandemCrypt {
            vigenere_key: VigenereKey::new(vigenere_key)?,
            affine_key: AffineKey::new(affine_key.0, affine_key.1)?,
        })
    }

    /// Assembles a cipher from already-validated keys.
    ///
    /// Useful for re-using keys recovered by
    /// [`recover_keys`](crate::recover_keys) to decrypt further intercepts.
    pub fn with_keys(vigenere_key: VigenereKey, affine_key: AffineKey) -> Self {
        TandemCrypt {
            vigenere_key,
            affine_key,
        }
    }

    /// Encrypts a message over the strict alphabet.
    ///
    /// Every character must be an alphabet symbol; lowercase letters are
    /// normalized to uppercase. Output length equals input length.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::InvalidSymbol`] on any character
    /// outside the alphabet, whitespace included — see
    /// [`encrypt_text`](Self::encrypt_text) for the whitespace-preserving
    /// layer.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, TandemCryptError> {
        let mut msg = alphabet::encode_str(plaintext)?;
        vigenere::apply(&mut msg, &self.vigenere_key);
        affine::apply(&mut msg, &self.affine_key);
        Ok(alphabet::decode_indices(&msg))
    }

    /// Decrypts a message over the strict alphabet.
    ///
    /// Runs the stage inverses in reverse order: Affine first, then
    /// Vigenère.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::InvalidSymbol`] on any character
    /// outside the alphabet.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, TandemCryptError> {
        let mut msg = alphabet::encode_str(ciphertext)?;
        affine::invert(&mut msg, &self.affine_key);
        vigenere::invert(&mut msg, &self.vigenere_key);
        Ok(alphabet::decode_indices(&msg))
    }

    /// Encrypts a message, passing whitespace through unchanged.
    ///
    /// Whitespace characters are copied to the output in place and do not
    /// consume key stream symbols; the key advances only on alphabet
    /// symbols. Equivalent to stripping whitespace, encrypting, and
    /// re-interleaving. Non-whitespace characters outside the alphabet
    /// are still rejected.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::InvalidSymbol`] on non-whitespace
    /// characters outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandemcrypt::TandemCrypt;
    ///
    /// let cipher = TandemCrypt::new("CRYPTOCIPHER", (5, 8)).unwrap();
    /// let ciphertext = cipher.encrypt_text("HASNAIN RAZA KHAN").unwrap();
    /// assert_eq!(ciphertext, "RVCE5KL ZLY2 9RVN");
    /// assert_eq!(cipher.decrypt_text(&ciphertext).unwrap(), "HASNAIN RAZA KHAN");
    /// ```
    pub fn encrypt_text(&self, text: &str) -> Result<String, TandemCryptError> {
        self.transform_text(text, true)
    }

    /// Decrypts a message produced by [`encrypt_text`](Self::encrypt_text),
    /// passing whitespace through unchanged.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::InvalidSymbol`] on non-whitespace
    /// characters outside the alphabet.
    pub fn decrypt_text(&self, text: &str) -> Result<String, TandemCryptError> {
        self.transform_text(text, false)
    }

    /// Shared whitespace-preserving layer over the strict transforms.
    ///
    /// Strips whitespace, runs the core transform on the remaining
    /// symbols, then re-interleaves the whitespace at its original
    /// positions.
    fn transform_text(&self, text: &str, forward: bool) -> Result<String, TandemCryptError> {
        let mut msg = Vec::with_capacity(text.len());
        for c in text.chars() {
            if !c.is_whitespace() {
                msg.push(alphabet::encode_char(c)?);
            }
        }

        if forward {
            vigenere::apply(&mut msg, &self.vigenere_key);
            affine::apply(&mut msg, &self.affine_key);
        } else {
            affine::invert(&mut msg, &self.affine_key);
            vigenere::invert(&mut msg, &self.vigenere_key);
        }

        let mut out = String::with_capacity(text.len());
        let mut pos = 0;
        for c in text.chars() {
            if c.is_whitespace() {
                out.push(c);
            } else {
                out.push(alphabet::decode_index(msg[pos]));
                pos += 1;
            }
        }
        Ok(out)
    }

    /// The Vigenère key this cipher was constructed with.
    pub fn vigenere_key(&self) -> &VigenereKey {
        &self.vigenere_key
    }

    /// The affine key this cipher was constructed with.
    pub fn affine_key(&self) -> &AffineKey {
        &self.affine_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let cipher = TandemCrypt::new("CRYPTOCIPHER", (5, 8)).unwrap();
        let ciphertext = cipher.encrypt("HASNAINRAZAKHAN").unwrap();
        assert_eq!(ciphertext, "RVCE5KLZLY29RVN");
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HASNAINRAZAKHAN");
    }

    #[test]
    fn test_roundtrip() {
        let cipher = TandemCrypt::new("SECRETKEY1", (11, 20)).unwrap();
        for plaintext in ["A", "HELLO", "MEET2024ATNOON", "Z9Z9Z9Z9"] {
            let ciphertext = cipher.encrypt(plaintext).unwrap();
            assert_eq!(
                cipher.decrypt(&ciphertext).unwrap(),
                plaintext,
                "roundtrip failed for {}",
                plaintext
            );
        }
    }

    #[test]
    fn test_length_preserved() {
        let cipher = TandemCrypt::new("KEY", (5, 8)).unwrap();
        for plaintext in ["", "A", "ABCDEFGHIJ"] {
            let ciphertext = cipher.encrypt(plaintext).unwrap();
            assert_eq!(ciphertext.len(), plaintext.len());
        }
    }

    #[test]
    fn test_lowercase_plaintext_normalized() {
        let cipher = TandemCrypt::new("KEY", (7, 3)).unwrap();
        assert_eq!(
            cipher.encrypt("rust").unwrap(),
            cipher.encrypt("RUST").unwrap()
        );
    }

    #[test]
    fn test_strict_encrypt_rejects_whitespace() {
        let cipher = TandemCrypt::new("KEY", (7, 3)).unwrap();
        assert_eq!(
            cipher.encrypt("A B"),
            Err(TandemCryptError::InvalidSymbol(' '))
        );
    }

    #[test]
    fn test_invalid_keys_rejected_at_construction() {
        assert_eq!(
            TandemCrypt::new("", (5, 8)).unwrap_err(),
            TandemCryptError::EmptyKey
        );
        assert_eq!(
            TandemCrypt::new("KEY", (2, 8)).unwrap_err(),
            TandemCryptError::KeyNotInvertible(2)
        );
        assert_eq!(
            TandemCrypt::new("KE Y", (5, 8)).unwrap_err(),
            TandemCryptError::InvalidSymbol(' ')
        );
    }

    #[test]
    fn test_encrypt_text_preserves_whitespace() {
        let cipher = TandemCrypt::new("CRYPTOCIPHER", (5, 8)).unwrap();
        let ciphertext = cipher.encrypt_text("HASNAIN RAZA KHAN").unwrap();
        assert_eq!(ciphertext, "RVCE5KL ZLY2 9RVN");
        assert_eq!(
            cipher.decrypt_text(&ciphertext).unwrap(),
            "HASNAIN RAZA KHAN"
        );
    }

    #[test]
    fn test_encrypt_text_matches_stripped_encrypt() {
        // The layer must be exactly strip -> encrypt -> re-interleave.
        let cipher = TandemCrypt::new("LONGERKEYX", (13, 5)).unwrap();
        let spaced = cipher.encrypt_text("AB CD\tEF\nGH").unwrap();
        let stripped: String = spaced.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(stripped, cipher.encrypt("ABCDEFGH").unwrap());
    }

    #[test]
    fn test_encrypt_text_rejects_other_characters() {
        let cipher = TandemCrypt::new("KEY", (7, 3)).unwrap();
        assert_eq!(
            cipher.encrypt_text("CR-034"),
            Err(TandemCryptError::InvalidSymbol('-'))
        );
    }

    #[test]
    fn test_with_keys_matches_new() {
        let vkey = VigenereKey::new("CRYPTOCIPHER").unwrap();
        let akey = AffineKey::new(5, 8).unwrap();
        let assembled = TandemCrypt::with_keys(vkey, akey);
        let constructed = TandemCrypt::new("CRYPTOCIPHER", (5, 8)).unwrap();
        assert_eq!(
            assembled.encrypt("HASNAINRAZAKHAN").unwrap(),
            constructed.encrypt("HASNAINRAZAKHAN").unwrap()
        );
    }

    #[test]
    fn test_key_accessors() {
        let cipher = TandemCrypt::new("KEY", (5, 8)).unwrap();
        assert_eq!(cipher.vigenere_key().to_string(), "KEY");
        assert_eq!(cipher.affine_key().a(), 5);
        assert_eq!(cipher.affine_key().b(), 8);
    }
}
