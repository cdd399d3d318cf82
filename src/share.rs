use num_bigint::{BigInt, BigUint};

use crate::Error;

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

#[cfg(feature = "zeroize_memory")]
use num_traits::Zero;
#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

/// A share used to reconstruct the secret: one point `(x, y)` on the sharing polynomial.
///
/// `x` is the 1-based share index and `y` the decoded share value.
///
/// Usage example:
/// ```
/// use num_bigint::BigInt;
/// use shamir_recover::Point;
///
/// let point = Point::new(3u32, 11u32);
/// assert_eq!(point.x, BigInt::from(3));
/// assert_eq!(point.y, BigInt::from(11));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary))]
pub struct Point {
    /// The x coordinate of the share.
    pub x: BigInt,
    /// The y coordinate of the share.
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Builds the point of share `index` from its decoded value.
    pub fn from_decoded(index: u64, value: BigUint) -> Self {
        Point {
            x: BigInt::from(index),
            y: BigInt::from(value),
        }
    }
}

// `BigInt` exposes no mutable view of its limbs, so this only resets the
// coordinates. The buffers they release are not overwritten.
#[cfg(feature = "zeroize_memory")]
impl Zeroize for Point {
    fn zeroize(&mut self) {
        self.x.set_zero();
        self.y.set_zero();
    }
}

/// Selects the first `k` points, in the order they were supplied.
///
/// Any `k` points of a consistent share set describe the same polynomial, so
/// taking a prefix is enough. Fails with [`Error::InsufficientShares`] when
/// fewer than `k` points are available.
///
/// ```
/// use shamir_recover::{select_shares, Error, Point};
///
/// let points = [Point::new(1, 5), Point::new(2, 8), Point::new(3, 11)];
/// assert_eq!(select_shares(&points, 2).unwrap(), &points[..2]);
/// assert!(matches!(
///     select_shares(&points, 4),
///     Err(Error::InsufficientShares { threshold: 4, available: 3 })
/// ));
/// ```
pub fn select_shares(points: &[Point], k: usize) -> Result<&[Point], Error> {
    if k == 0 {
        return Err(Error::InvalidThreshold);
    }

    points.get(..k).ok_or(Error::InsufficientShares {
        threshold: k,
        available: points.len(),
    })
}
