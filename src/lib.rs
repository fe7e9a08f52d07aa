//! TandemCrypt two-stage substitution cipher engine.
//!
//! TandemCrypt composes a Vigenère stage with an Affine stage over a fixed
//! 36-symbol alphabet (A-Z, 0-9), and ships the cryptanalysis harness used
//! to evaluate it: a known-plaintext key-recovery attack and a frequency
//! analyzer.
//!
//! # Architecture
//!
//! ```text
//! Alphabet Codec   (maps A-Z, 0-9 to the indices 0..36 and back)
//!     ↕
//! Vigenère Stage   (repeating-key modular addition)
//!     ↕
//! Affine Stage     (a·x + b mod 36, gcd(a, 36) = 1)
//!     ↕
//! TandemCrypt      (orchestrator — composes the stages, owns both keys)
//!
//! recover_keys     (known-plaintext attack — brute-forces the 432 valid
//!                   affine pairs, infers the Vigenère key per candidate)
//! frequency_report (symbol distribution vs. reference English, reporting only)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use tandemcrypt::TandemCrypt;
//!
//! let cipher = TandemCrypt::new("CRYPTOCIPHER", (5, 8)).unwrap();
//!
//! let ciphertext = cipher.encrypt("HASNAINRAZAKHAN").unwrap();
//! assert_eq!(ciphertext, "RVCE5KLZLY29RVN");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HASNAINRAZAKHAN");
//! ```
//!
//! Recover the keys from a known plaintext/ciphertext pair:
//!
//! ```
//! use tandemcrypt::{recover_keys, TandemCrypt};
//!
//! let cipher = TandemCrypt::new("CRYPTOCIPHER", (5, 8)).unwrap();
//! let plaintext = "ATTACKATDAWNFROMTHENORTHRIDGE";
//! let ciphertext = cipher.encrypt(plaintext).unwrap();
//!
//! let candidates = recover_keys(plaintext, &ciphertext, 12).unwrap();
//! assert!(candidates
//!     .iter()
//!     .any(|c| c.vigenere_key.to_string() == "CRYPTOCIPHER" && c.affine_key.b() == 8));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod affine;
mod analysis;
mod attack;
mod tandemcrypt;
mod vigenere;

pub use affine::AffineKey;
pub use analysis::{frequency_report, FrequencyReport};
pub use attack::{recover_keys, RecoveredKeys};
pub use tandemcrypt::TandemCrypt;
pub use vigenere::VigenereKey;
