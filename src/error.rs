use num_bigint::BigInt;
use thiserror::Error;

/// Failures of the numeric core. Every variant is a deterministic input problem:
/// reconstruction stops at the first one and no partial secret is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character outside `0-9a-z` (case-insensitive) appeared in a numeral.
    #[error("invalid character {character:?} in base {base} numeral")]
    InvalidCharacter { character: char, base: u32 },

    /// A digit is valid but not below the declared base.
    #[error("digit {character:?} is invalid for base {base}")]
    DigitOutOfRange { character: char, base: u32 },

    #[error("base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),

    #[error("not enough shares to recover the secret (need {threshold}, got {available})")]
    InsufficientShares { threshold: usize, available: usize },

    #[error("threshold must be at least 1")]
    InvalidThreshold,

    /// `gcd(value, modulus) != 1`, typically caused by repeated x-coordinates.
    #[error("{value} has no inverse modulo {modulus}")]
    NonInvertible { value: BigInt, modulus: BigInt },

    #[error("modulus must be at least 2")]
    InvalidModulus,
}
