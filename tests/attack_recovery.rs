//! Behavioral tests for the known-plaintext attacker.
//!
//! The attack is expected to succeed against this cipher: the affine
//! keyspace is only 432 pairs and the Vigenère key falls out of a single
//! affine inversion. These tests pin the completeness contract — every
//! consistent candidate is reported, every reported candidate explains
//! the data — and the designed ambiguity on short samples.

use tandemcrypt::{recover_keys, TandemCrypt};

const VIGENERE_KEY: &str = "CRYPTOCIPHER";
const AFFINE_KEY: (u8, u8) = (5, 8);
const KNOWN_PLAINTEXT: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

fn known_pair() -> (String, String) {
    let cipher = TandemCrypt::new(VIGENERE_KEY, AFFINE_KEY).unwrap();
    let ciphertext = cipher.encrypt(KNOWN_PLAINTEXT).unwrap();
    (KNOWN_PLAINTEXT.to_string(), ciphertext)
}

/// The generating key pair must appear in the result set.
#[test]
fn recovers_generating_keys() {
    let (plaintext, ciphertext) = known_pair();
    let candidates = recover_keys(&plaintext, &ciphertext, 12).unwrap();
    assert!(
        candidates.iter().any(|c| {
            c.vigenere_key.to_string() == VIGENERE_KEY
                && c.affine_key.a() == AFFINE_KEY.0
                && c.affine_key.b() == AFFINE_KEY.1
        }),
        "generating keys missing from {} candidates",
        candidates.len()
    );
}

/// Every reported candidate must re-encrypt the known plaintext to the
/// known ciphertext — consistency is not a heuristic.
#[test]
fn every_candidate_explains_the_data() {
    let (plaintext, ciphertext) = known_pair();
    let candidates = recover_keys(&plaintext, &ciphertext, 12).unwrap();
    assert!(!candidates.is_empty());
    for candidate in candidates {
        let cipher = TandemCrypt::with_keys(
            candidate.vigenere_key.clone(),
            candidate.affine_key,
        );
        assert_eq!(
            cipher.encrypt(&plaintext).unwrap(),
            ciphertext,
            "candidate (a={}, b={}, key={}) does not reproduce the ciphertext",
            candidate.affine_key.a(),
            candidate.affine_key.b(),
            candidate.vigenere_key
        );
    }
}

/// The cipher has built-in key equivalence: for the true multiplier,
/// every offset b' admits a shifted Vigenère key that encrypts
/// identically. All 36 offsets must therefore be represented even on a
/// long sample.
#[test]
fn offset_equivalence_class_reported_in_full() {
    let (plaintext, ciphertext) = known_pair();
    let candidates = recover_keys(&plaintext, &ciphertext, 12).unwrap();
    assert!(
        candidates.len() >= 36,
        "expected at least the 36-candidate equivalence class, got {}",
        candidates.len()
    );
    for b in 0..36u8 {
        assert!(
            candidates
                .iter()
                .any(|c| c.affine_key.a() == AFFINE_KEY.0 && c.affine_key.b() == b),
            "no candidate reported for (a={}, b={})",
            AFFINE_KEY.0,
            b
        );
    }
}

/// Recovered keys decrypt further traffic, not just the known sample —
/// the attacker's actual payoff.
#[test]
fn recovered_keys_decrypt_fresh_intercept() {
    let (plaintext, ciphertext) = known_pair();
    let candidates = recover_keys(&plaintext, &ciphertext, 12).unwrap();
    let candidate = candidates
        .iter()
        .find(|c| c.affine_key.a() == AFFINE_KEY.0 && c.affine_key.b() == AFFINE_KEY.1)
        .expect("generating pair not recovered");

    let original = TandemCrypt::new(VIGENERE_KEY, AFFINE_KEY).unwrap();
    let intercept = original.encrypt("REGROUPATGRID7COORDINATE42").unwrap();

    let stolen = TandemCrypt::with_keys(candidate.vigenere_key.clone(), candidate.affine_key);
    assert_eq!(
        stolen.decrypt(&intercept).unwrap(),
        "REGROUPATGRID7COORDINATE42"
    );
}

/// A sample shorter than the assumed key length cannot disambiguate:
/// multiple candidates must be reported rather than a false unique
/// answer.
#[test]
fn short_sample_is_ambiguous() {
    let cipher = TandemCrypt::new("LONGSECRETK", (7, 3)).unwrap();
    let plaintext = "HI";
    let ciphertext = cipher.encrypt(plaintext).unwrap();
    let candidates = recover_keys(plaintext, &ciphertext, 11).unwrap();
    assert!(
        candidates.len() > 1,
        "a 2-symbol sample cannot identify an 11-symbol key uniquely, got {} candidate(s)",
        candidates.len()
    );
}

/// With the key length bound forced to 1, mismatching data admits no
/// repeating key at all: the result is empty, not an error.
#[test]
fn inconsistent_data_yields_empty_result() {
    let candidates = recover_keys("AAAA", "ABCD", 1).unwrap();
    assert!(candidates.is_empty());
}

/// Results are merged from the parallel search in a deterministic (a, b)
/// order, independent of completion order.
#[test]
fn results_deterministically_ordered() {
    let (plaintext, ciphertext) = known_pair();
    let first = recover_keys(&plaintext, &ciphertext, 12).unwrap();
    let second = recover_keys(&plaintext, &ciphertext, 12).unwrap();
    assert_eq!(first, second);

    let pairs: Vec<(u8, u8)> = first
        .iter()
        .map(|c| (c.affine_key.a(), c.affine_key.b()))
        .collect();
    let mut sorted = pairs.clone();
    sorted.sort();
    assert_eq!(pairs, sorted, "candidates not sorted by (a, b)");
}
