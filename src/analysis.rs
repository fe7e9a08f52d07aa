//! Ciphertext frequency analysis.
//!
//! Reporting only: counts the 36 alphabet symbols, normalizes to
//! frequencies and scores the deviation from a reference English letter
//! distribution. A flat (near-uniform) ciphertext distribution is the
//! cipher's defense against frequency analysis; the deviation score makes
//! that flattening measurable. Nothing here recovers key material.

use std::fmt;

use crate::alphabet::{self, MODULUS};
use crate::error::TandemCryptError;

/// Reference English letter frequencies for A-Z; digits carry no mass in
/// English prose and score 0.
const ENGLISH_FREQ: [f64; MODULUS] = [
    0.08167, // A
    0.01492, // B
    0.02782, // C
    0.04253, // D
    0.12702, // E
    0.02228, // F
    0.02015, // G
    0.06094, // H
    0.06966, // I
    0.00153, // J
    0.00772, // K
    0.04025, // L
    0.02406, // M
    0.06749, // N
    0.07507, // O
    0.01929, // P
    0.00095, // Q
    0.05987, // R
    0.06327, // S
    0.09056, // T
    0.02758, // U
    0.00978, // V
    0.02360, // W
    0.00150, // X
    0.01974, // Y
    0.00074, // Z
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // 0-9
];

/// Symbol frequency distribution of a text, with a deviation score
/// against the reference English distribution.
///
/// Produced by [`frequency_report`]; purely observational.
#[derive(Debug, Clone)]
pub struct FrequencyReport {
    counts: [u32; MODULUS],
    frequencies: [f64; MODULUS],
    total: u32,
    deviation: f64,
}

impl FrequencyReport {
    /// Occurrence counts indexed by alphabet index.
    pub fn counts(&self) -> &[u32; MODULUS] {
        &self.counts
    }

    /// Normalized frequencies indexed by alphabet index.
    ///
    /// All zero for an empty text.
    pub fn frequencies(&self) -> &[f64; MODULUS] {
        &self.frequencies
    }

    /// Occurrence count of one symbol.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::InvalidSymbol`] for characters outside
    /// the alphabet.
    pub fn count(&self, symbol: char) -> Result<u32, TandemCryptError> {
        Ok(self.counts[alphabet::encode_char(symbol)? as usize])
    }

    /// Normalized frequency of one symbol.
    ///
    /// # Errors
    /// Returns [`TandemCryptError::InvalidSymbol`] for characters outside
    /// the alphabet.
    pub fn frequency(&self, symbol: char) -> Result<f64, TandemCryptError> {
        Ok(self.frequencies[alphabet::encode_char(symbol)? as usize])
    }

    /// Number of symbols counted.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Total absolute deviation from the reference English distribution:
    /// the sum of `|observed - reference|` over all 36 symbols.
    ///
    /// Lower means closer to English prose; a heavily skewed text scores
    /// near the metric's maximum of 2.0, a flattened one lands near the
    /// uniform-distribution score.
    pub fn deviation(&self) -> f64 {
        self.deviation
    }
}

impl fmt::Display for FrequencyReport {
    /// Renders the non-zero rows as a `symbol: count (percentage)` table
    /// followed by the deviation score.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &count) in self.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            writeln!(
                f,
                "  {}: {} ({:.2}%)",
                alphabet::decode_index(index as u8),
                count,
                self.frequencies[index] * 100.0
            )?;
        }
        write!(f, "deviation from English: {:.4}", self.deviation)
    }
}

/// Computes the symbol frequency distribution of a text.
///
/// Whitespace is skipped (ciphertext from the whitespace-preserving
/// entry points stays analyzable); any other non-alphabet character is
/// rejected. An empty text produces zero counts and a deviation equal to
/// the whole reference mass (~1.0), all of it unmatched.
///
/// # Errors
/// Returns [`TandemCryptError::InvalidSymbol`] on non-whitespace
/// characters outside the alphabet.
///
/// # Examples
///
/// ```
/// use tandemcrypt::frequency_report;
///
/// let report = frequency_report("HELLO WORLD").unwrap();
/// assert_eq!(report.total(), 10);
/// assert_eq!(report.count('L').unwrap(), 3);
/// assert_eq!(report.frequency('L').unwrap(), 0.3);
/// ```
pub fn frequency_report(text: &str) -> Result<FrequencyReport, TandemCryptError> {
    let mut counts = [0u32; MODULUS];
    let mut total = 0u32;
    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        counts[alphabet::encode_char(c)? as usize] += 1;
        total += 1;
    }

    let mut frequencies = [0.0f64; MODULUS];
    if total > 0 {
        for (freq, &count) in frequencies.iter_mut().zip(counts.iter()) {
            *freq = count as f64 / total as f64;
        }
    }

    let deviation = frequencies
        .iter()
        .zip(ENGLISH_FREQ.iter())
        .map(|(observed, reference)| (observed - reference).abs())
        .sum();

    Ok(FrequencyReport {
        counts,
        frequencies,
        total,
        deviation,
    })
}
