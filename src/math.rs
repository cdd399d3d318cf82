// Modular arithmetic used to recover secrets: the prime modulus, inverses through the
// extended Euclidean algorithm, and Lagrange interpolation reduced modulo that prime.

use core::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

use crate::numeral::decode_numeral;
use crate::share::{select_shares, Point};
use crate::Error;

/// The prime every reconstruction uses unless configured otherwise.
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// The modulus defining the field the shares live in.
///
/// The algorithms only need the denominators they meet to be coprime with it, so
/// primality is not checked; any value of at least 2 is accepted and a bad choice
/// surfaces as [`Error::NonInvertible`] during reconstruction.
///
/// Example:
/// ```
/// use shamir_recover::Modulus;
///
/// let modulus: Modulus = "1000000007".parse().unwrap();
/// assert_eq!(modulus, Modulus::default());
/// assert!("1".parse::<Modulus>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus(BigInt);

impl Modulus {
    pub fn new(value: impl Into<BigUint>) -> Result<Self, Error> {
        let value = value.into();
        if value < BigUint::from(2u8) {
            return Err(Error::InvalidModulus);
        }
        Ok(Modulus(BigInt::from(value)))
    }

    pub fn get(&self) -> &BigInt {
        &self.0
    }

    // Reduces `value` into `[0, m)`; `%` keeps the sign of the dividend.
    fn reduce(&self, value: &BigInt) -> BigInt {
        let r = value % &self.0;
        if r.is_negative() {
            r + &self.0
        } else {
            r
        }
    }
}

impl Default for Modulus {
    fn default() -> Self {
        Modulus(BigInt::from(DEFAULT_MODULUS))
    }
}

impl FromStr for Modulus {
    type Err = Error;

    /// Parses a decimal modulus.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modulus::new(decode_numeral(s.trim(), 10)?)
    }
}

impl core::fmt::Display for Modulus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Computes the inverse of `a` modulo `modulus` with the iterative extended
/// Euclidean algorithm. `a` may be negative.
///
/// Returns the inverse in `[0, modulus)`, or [`Error::NonInvertible`] when
/// `gcd(a, modulus) != 1`, which includes `a ≡ 0`.
///
/// ```
/// use num_bigint::BigInt;
/// use shamir_recover::{mod_inverse, Modulus};
///
/// let modulus = Modulus::new(11u32).unwrap();
/// assert_eq!(mod_inverse(&BigInt::from(3), &modulus).unwrap(), BigInt::from(4));
/// assert_eq!(mod_inverse(&BigInt::from(-1), &modulus).unwrap(), BigInt::from(10));
/// assert!(mod_inverse(&BigInt::from(22), &modulus).is_err());
/// ```
pub fn mod_inverse(a: &BigInt, modulus: &Modulus) -> Result<BigInt, Error> {
    let m = modulus.get();

    let (mut old_r, mut r) = (modulus.reduce(a), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        (old_r, r) = (r.clone(), old_r - &quotient * &r);
        (old_s, s) = (s.clone(), old_s - &quotient * &s);
        (old_t, t) = (t.clone(), old_t - &quotient * &t);
    }

    if !old_r.is_one() {
        return Err(Error::NonInvertible {
            value: a.clone(),
            modulus: m.clone(),
        });
    }

    Ok(modulus.reduce(&old_s))
}

/// Evaluates, at `x`, the polynomial interpolating every point of `points`, modulo
/// `modulus`. The result lies in `[0, modulus)`.
///
/// Points must have pairwise distinct x coordinates modulo `modulus`; otherwise
/// some Lagrange denominator vanishes and [`Error::NonInvertible`] is returned.
pub fn interpolate_at(
    points: &[Point],
    x: &BigInt,
    modulus: &Modulus,
) -> Result<BigUint, Error> {
    let m = modulus.get();
    let mut result = BigInt::zero();

    for (i, p_i) in points.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, p_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = numerator * (x - &p_j.x) % m;
            denominator = denominator * (&p_i.x - &p_j.x) % m;
        }

        let inv_denominator = mod_inverse(&denominator, modulus)?;
        let term = &p_i.y * numerator % m * inv_denominator % m;
        result = (result + term) % m;
    }

    Ok(modulus
        .reduce(&result)
        .to_biguint()
        .unwrap_or_else(BigUint::zero))
}

/// Recovers the secret, the constant term of the sharing polynomial, from the first
/// `k` of `points`.
///
/// Example:
/// ```
/// use num_bigint::BigUint;
/// use shamir_recover::{reconstruct_secret, Modulus, Point};
///
/// // Shares of y = 3x + 2
/// let points = [Point::new(1, 5), Point::new(2, 8), Point::new(3, 11)];
/// let secret = reconstruct_secret(&points, 2, &Modulus::default()).unwrap();
/// assert_eq!(secret, BigUint::from(2u32));
/// ```
pub fn reconstruct_secret(
    points: &[Point],
    k: usize,
    modulus: &Modulus,
) -> Result<BigUint, Error> {
    let selected = select_shares(points, k)?;
    interpolate_at(selected, &BigInt::zero(), modulus)
}
