// Positional decoding of numerals written in bases 2 through 36.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::Error;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Decodes `value`, written in `base`, into an unbounded non-negative integer.
///
/// Digits are `0-9` followed by `a-z`, matched case-insensitively. The whole
/// numeral is checked against that alphabet before any digit is checked
/// against `base`, so a stray symbol is always reported as
/// [`Error::InvalidCharacter`] even when an out-of-range digit precedes it.
/// The empty numeral decodes to zero.
///
/// ```
/// use num_bigint::BigUint;
/// use shamir_recover::{decode_numeral, Error};
///
/// assert_eq!(decode_numeral("ff", 16).unwrap(), BigUint::from(255u32));
/// assert_eq!(decode_numeral("Z", 36).unwrap(), BigUint::from(35u32));
/// assert!(matches!(
///     decode_numeral("a", 10),
///     Err(Error::DigitOutOfRange { character: 'a', base: 10 })
/// ));
/// ```
pub fn decode_numeral(value: &str, base: u32) -> Result<BigUint, Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base));
    }

    let digits = value
        .chars()
        .map(|c| {
            digit_value(c.to_ascii_lowercase())
                .map(|d| (c, d))
                .ok_or(Error::InvalidCharacter { character: c, base })
        })
        .collect::<Result<Vec<_>, _>>()?;

    digits
        .into_iter()
        .try_fold(BigUint::zero(), |acc, (character, digit)| {
            if digit >= base {
                Err(Error::DigitOutOfRange { character, base })
            } else {
                Ok(acc * base + digit)
            }
        })
}

// Maps an already lowercased character to its digit value.
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}
