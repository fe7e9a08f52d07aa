//! Known-plaintext key recovery.
//!
//! Brute-forces the affine layer — gcd(a, 36) = 1 leaves 12 multipliers,
//! so 12 x 36 = 432 valid pairs — and derives the Vigenère key for each
//! candidate by comparing the affine-inverted ciphertext against the known
//! plaintext. A candidate survives only if the derived key stream is a
//! single fixed-length repeating key.
//!
//! Candidate evaluations are independent and run on the rayon thread pool;
//! results are merged and sorted for reproducible ordering.

use log::{debug, trace};
use rayon::prelude::*;

use crate::affine::{self, AffineKey, VALID_A};
use crate::alphabet::{self, MODULUS};
use crate::error::TandemCryptError;
use crate::vigenere::VigenereKey;

/// A key pair that fully explains a known plaintext/ciphertext pair.
///
/// Every reported pair re-encrypts the known plaintext to the known
/// ciphertext exactly. Recovery is not unique by construction: for the
/// true multiplier `a`, every offset `b'` admits the shifted Vigenère key
/// `k'[j] = k[j] + a_inv * (b - b') mod 36`, which encrypts identically —
/// so even a long sample yields one candidate per offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredKeys {
    /// The derived repeating Vigenère key (smallest self-consistent
    /// length).
    pub vigenere_key: VigenereKey,
    /// The affine candidate the key was derived under.
    pub affine_key: AffineKey,
}

/// Recovers all key pairs consistent with a known plaintext/ciphertext
/// pair.
///
/// For each of the 432 valid affine pairs the ciphertext is
/// affine-inverted and a Vigenère key of length `1..=max_key_length`
/// (capped at the sample length) is derived position by position; the
/// smallest length whose key slots are self-consistent is accepted.
/// All consistent candidates are reported — short samples are genuinely
/// ambiguous, and silently picking one would hide that.
///
/// An exhausted search is an empty vector, never an error, so callers can
/// distinguish "ambiguous" (many results) from "none found". Results are
/// sorted by `(a, b)` regardless of parallel completion order.
///
/// # Errors
/// - [`TandemCryptError::InvalidSymbol`] if either input contains a
///   character outside the alphabet.
/// - [`TandemCryptError::LengthMismatch`] if the inputs differ in length.
///
/// # Examples
///
/// ```
/// use tandemcrypt::{recover_keys, TandemCrypt};
///
/// let cipher = TandemCrypt::new("CRYPTOCIPHER", (5, 8)).unwrap();
/// let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
/// let ciphertext = cipher.encrypt(plaintext).unwrap();
///
/// let candidates = recover_keys(plaintext, &ciphertext, 12).unwrap();
/// assert!(candidates.iter().any(|c| c.vigenere_key.to_string() == "CRYPTOCIPHER"
///     && c.affine_key.a() == 5
///     && c.affine_key.b() == 8));
/// ```
pub fn recover_keys(
    known_plaintext: &str,
    known_ciphertext: &str,
    max_key_length: usize,
) -> Result<Vec<RecoveredKeys>, TandemCryptError> {
    let plain = alphabet::encode_str(known_plaintext)?;
    let cipher = alphabet::encode_str(known_ciphertext)?;
    if plain.len() != cipher.len() {
        return Err(TandemCryptError::LengthMismatch {
            plaintext: plain.len(),
            ciphertext: cipher.len(),
        });
    }
    if plain.is_empty() || max_key_length == 0 {
        // No data constrains nothing; report no hypotheses.
        return Ok(Vec::new());
    }

    let candidates: Vec<AffineKey> = VALID_A
        .iter()
        .flat_map(|&a| (0..MODULUS as u8).map(move |b| AffineKey::new(a, b)))
        .filter_map(Result::ok)
        .collect();
    debug!(
        "searching {} affine candidates over {} known symbols (key length <= {})",
        candidates.len(),
        plain.len(),
        max_key_length
    );

    let mut found: Vec<RecoveredKeys> = candidates
        .into_par_iter()
        .filter_map(|affine_key| {
            let mut intermediate = cipher.clone();
            affine::invert(&mut intermediate, &affine_key);
            derive_vigenere_key(&plain, &intermediate, max_key_length).map(|vigenere_key| {
                trace!(
                    "affine ({}, {}) admits Vigenère key {}",
                    affine_key.a(),
                    affine_key.b(),
                    vigenere_key
                );
                RecoveredKeys {
                    vigenere_key,
                    affine_key,
                }
            })
        })
        .collect();

    found.sort_by_key(|r| (r.affine_key.a(), r.affine_key.b()));
    debug!("{} consistent candidate(s)", found.len());
    Ok(found)
}

/// Derives the smallest self-consistent repeating key for one affine
/// candidate, or `None` if no length up to the cap fits.
///
/// Lengths beyond the sample length are not searched: their trailing
/// slots would be unconstrained and the derived key would be guesswork.
/// Multiples of an accepted length are always consistent too, but they
/// describe the identical key stream (harmonics), so stopping at the
/// smallest length loses nothing.
fn derive_vigenere_key(
    plain: &[u8],
    intermediate: &[u8],
    max_key_length: usize,
) -> Option<VigenereKey> {
    let limit = max_key_length.min(plain.len());
    (1..=limit).find_map(|len| derive_for_length(plain, intermediate, len))
}

/// Slot-consistency test for one assumed key length.
///
/// `key[i mod len] = (intermediate[i] - plaintext[i]) mod 36`; all
/// positions sharing a slot must agree.
fn derive_for_length(plain: &[u8], intermediate: &[u8], len: usize) -> Option<VigenereKey> {
    let mut slots: Vec<Option<u8>> = vec![None; len];
    for (i, (&p, &v)) in plain.iter().zip(intermediate.iter()).enumerate() {
        let derived = ((v as u16 + MODULUS as u16 - p as u16) % MODULUS as u16) as u8;
        match slots[i % len] {
            None => slots[i % len] = Some(derived),
            Some(existing) if existing == derived => {}
            Some(_) => return None,
        }
    }
    // len <= sample length, so every slot is filled.
    let indices: Vec<u8> = slots.into_iter().flatten().collect();
    VigenereKey::from_indices(indices).ok()
}
