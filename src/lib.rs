//! Recover [Shamir](https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing) secrets from
//! shares whose values are written as numerals in arbitrary bases.
//!
//! # Usage
//!
//! ```
//! use num_bigint::BigUint;
//! use shamir_recover::{decode_numeral, Modulus, Point, SecretSharing};
//!
//! // Shares of y = 3x + 2, each value written in a different base
//! let encoded = [(1, "101", 2), (2, "8", 10), (3, "b", 16)];
//! let points = encoded
//!     .iter()
//!     .map(|&(x, value, base)| decode_numeral(value, base).map(|y| Point::from_decoded(x, y)))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! // Any 2 shares recover the constant term
//! let sss = SecretSharing::new(2, Modulus::default()).unwrap();
//! assert_eq!(sss.recover(&points).unwrap(), BigUint::from(2u32));
//! ```
//!
//! # Share tables
//!
//! With the `std` feature, [`input::ShareTable`] reads the JSON document format
//!
//! ```json
//! {
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "2", "value": "101" },
//!     "3": { "base": 16, "value": "b" }
//! }
//! ```
//!
//! where every index in `1..=n` may carry one share and missing indices are absent shares.
//!
//! # Feature flags
//!
//! - `std` — enables the [`input`] module (JSON share tables) and `std::error::Error` impls.
//!   Without `std` the numeric core only needs `alloc`.
//! - `cli` — builds the `sss-recover` binary.
//! - `zeroize_memory` — encoded shares read from tables are wiped on drop, and [`Point`]
//!   implements `Zeroize`, which resets its coordinates. Big-integer limb buffers are not wiped.
//! - `fuzzing` — derives `Arbitrary` for share types.
#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod math;
mod numeral;
mod share;

#[cfg(feature = "std")]
pub mod input;

extern crate alloc;

use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint};

pub use error::Error;
pub use math::{interpolate_at, mod_inverse, reconstruct_secret, Modulus, DEFAULT_MODULUS};
pub use numeral::{decode_numeral, MAX_BASE, MIN_BASE};
pub use share::{select_shares, Point};

/// A reconstruction setup: the minimum shares threshold `k` and the field modulus.
///
/// Usage example:
/// ```
/// # use num_bigint::BigUint;
/// # use shamir_recover::{Modulus, Point, SecretSharing};
/// let sss = SecretSharing::new(3, Modulus::new(7919u32).unwrap()).unwrap();
/// // Shares of y = x^2 + 2x + 3
/// let shares = [Point::new(1, 6), Point::new(2, 11), Point::new(3, 18), Point::new(4, 27)];
/// assert_eq!(sss.recover(&shares).unwrap(), BigUint::from(3u32));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretSharing {
    threshold: usize,
    modulus: Modulus,
}

impl SecretSharing {
    /// Fails with [`Error::InvalidThreshold`] when `threshold` is zero.
    pub fn new(threshold: usize, modulus: Modulus) -> Result<Self, Error> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(SecretSharing { threshold, modulus })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Given a slice of shares, recovers the original secret from the first `threshold` of them.
    /// If fewer shares than the threshold are given an `Err` is returned,
    /// otherwise an `Ok` containing the secret.
    ///
    /// Example:
    /// ```
    /// # use shamir_recover::{Error, Modulus, Point, SecretSharing};
    /// let sss = SecretSharing::new(2, Modulus::default()).unwrap();
    /// let mut shares = vec![Point::new(1, 5), Point::new(2, 8)];
    /// // Secret correctly recovered
    /// assert!(sss.recover(&shares).is_ok());
    /// // Remove a share for demonstration purposes
    /// shares.pop();
    /// // Not enough shares to recover secret
    /// assert!(matches!(sss.recover(&shares), Err(Error::InsufficientShares { .. })));
    /// ```
    pub fn recover(&self, shares: &[Point]) -> Result<BigUint, Error> {
        reconstruct_secret(shares, self.threshold, &self.modulus)
    }

    /// Recomputes the share at `x` from the first `threshold` shares.
    pub fn recover_share(&self, shares: &[Point], x: &BigInt) -> Result<Point, Error> {
        let selected = select_shares(shares, self.threshold)?;
        let y = interpolate_at(selected, x, &self.modulus)?;
        Ok(Point::new(x.clone(), y))
    }

    /// Given the known shares, recomputes the full set of shares at indices `1..=n`.
    /// Shares that were supplied come back unchanged (reduced modulo the modulus).
    ///
    /// Example:
    /// ```
    /// # use shamir_recover::{Modulus, Point, SecretSharing};
    /// let sss = SecretSharing::new(2, Modulus::default()).unwrap();
    /// // Shares 1 and 3 of y = 3x + 2, share 2 was lost
    /// let known = [Point::new(1, 5), Point::new(3, 11)];
    /// let shares = sss.recover_shares(&known, 4).unwrap();
    /// assert_eq!(shares[1], Point::new(2, 8));
    /// assert_eq!(shares[3], Point::new(4, 14));
    /// ```
    pub fn recover_shares(&self, shares: &[Point], n: u64) -> Result<Vec<Point>, Error> {
        (1..=n)
            .map(|index| self.recover_share(shares, &BigInt::from(index)))
            .collect()
    }
}
