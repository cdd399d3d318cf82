//! Share tables: the JSON documents shares are exchanged in.
//!
//! A table declares the share count `n` and threshold `k` under `keys`, and carries at
//! most one share per index in `1..=n`:
//!
//! ```
//! use num_bigint::BigUint;
//! use shamir_recover::{input::ShareTable, Modulus};
//!
//! let table: ShareTable = r#"{
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }"#
//! .parse()
//! .unwrap();
//!
//! let points = table.points().unwrap();
//! assert_eq!(points.len(), 3);
//! let sss = table.secret_sharing(Modulus::default()).unwrap();
//! assert_eq!(sss.recover(&points).unwrap(), BigUint::from(3u32));
//! ```
//!
//! Indices without an entry, or with `null`, are absent shares. Entries under any other
//! key, including indices above `n`, are ignored.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(feature = "zeroize_memory")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{decode_numeral, Error, Modulus, Point, SecretSharing};

/// Largest `n` for which [`ShareTable::recover_shares`] regenerates the full share set.
pub const MAX_RECOVERED_SHARES: u64 = 1 << 16;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read share table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed share table")]
    Json(#[from] serde_json::Error),

    #[error("malformed share at index {index}")]
    MalformedShare {
        index: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("share {index} declares an invalid base {radix:?}")]
    InvalidRadix { index: u64, radix: String },

    #[error("share {index} cannot be decoded")]
    Decode {
        index: u64,
        #[source]
        source: Error,
    },

    #[error("cannot regenerate {n} shares, at most {max} are supported")]
    TooManyShares { n: u64, max: u64 },

    #[error(transparent)]
    Core(#[from] Error),
}

/// The `keys` header of a share table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Keys {
    /// Number of shares the secret was split into.
    pub n: u64,
    /// Minimum number of shares needed to recover the secret.
    pub k: usize,
}

/// A share as written in a table, before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize, ZeroizeOnDrop))]
pub struct EncodedShare {
    pub value: String,
    pub base: u32,
}

impl EncodedShare {
    pub fn decode(&self, index: u64) -> Result<Point, InputError> {
        let y = decode_numeral(&self.value, self.base)
            .map_err(|source| InputError::Decode { index, source })?;
        Ok(Point::from_decoded(index, y))
    }
}

#[derive(Deserialize)]
struct RawDocument {
    keys: Keys,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawShare {
    value: String,
    base: Radix,
}

// Bases show up both as JSON integers and as decimal strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Radix {
    Number(u32),
    Text(String),
}

impl RawShare {
    fn into_encoded(self, index: u64) -> Result<EncodedShare, InputError> {
        let base = match self.base {
            Radix::Number(base) => base,
            Radix::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| InputError::InvalidRadix { index, radix: text })?,
        };
        Ok(EncodedShare {
            value: self.value,
            base,
        })
    }
}

/// A validated share table. Shares are kept in ascending index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareTable {
    keys: Keys,
    shares: Vec<(u64, EncodedShare)>,
}

impl ShareTable {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn from_document(document: RawDocument) -> Result<Self, InputError> {
        let keys = document.keys;
        if keys.k == 0 {
            return Err(Error::InvalidThreshold.into());
        }

        let mut shares = Vec::new();
        for (key, entry) in document.entries {
            let Some(index) = share_index(&key, keys.n) else {
                warn!(key = %key, n = keys.n, "ignoring entry outside the share indices");
                continue;
            };
            if entry.is_null() {
                continue;
            }
            let raw: RawShare = serde_json::from_value(entry)
                .map_err(|source| InputError::MalformedShare { index, source })?;
            shares.push((index, raw.into_encoded(index)?));
        }
        shares.sort_by_key(|(index, _)| *index);

        debug!(
            n = keys.n,
            k = keys.k,
            available = shares.len(),
            "parsed share table"
        );
        Ok(ShareTable { keys, shares })
    }

    pub fn keys(&self) -> Keys {
        self.keys
    }

    pub fn n(&self) -> u64 {
        self.keys.n
    }

    pub fn k(&self) -> usize {
        self.keys.k
    }

    /// The encoded shares with their indices, in ascending index order.
    pub fn shares(&self) -> &[(u64, EncodedShare)] {
        &self.shares
    }

    /// Decodes every share into a point, in ascending index order.
    pub fn points(&self) -> Result<Vec<Point>, InputError> {
        self.shares
            .iter()
            .map(|(index, share)| {
                debug!(index, base = share.base, "decoding share");
                share.decode(*index)
            })
            .collect()
    }

    /// Reconstruction setup for this table's threshold under `modulus`.
    pub fn secret_sharing(&self, modulus: Modulus) -> Result<SecretSharing, InputError> {
        Ok(SecretSharing::new(self.keys.k, modulus)?)
    }

    /// Recomputes the shares at every index in `1..=n` from `points`.
    ///
    /// `n` comes from the document, so it is bounded by [`MAX_RECOVERED_SHARES`]
    /// before any share is computed.
    pub fn recover_shares(
        &self,
        sss: &SecretSharing,
        points: &[Point],
    ) -> Result<Vec<Point>, InputError> {
        if self.keys.n > MAX_RECOVERED_SHARES {
            return Err(InputError::TooManyShares {
                n: self.keys.n,
                max: MAX_RECOVERED_SHARES,
            });
        }
        Ok(sss.recover_shares(points, self.keys.n)?)
    }
}

impl FromStr for ShareTable {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShareTable::from_json(s)
    }
}

// Only canonical decimal keys in `1..=n` name shares, so "01" or "+1" are not index 1.
fn share_index(key: &str, n: u64) -> Option<u64> {
    let index = key.parse::<u64>().ok()?;
    ((1..=n).contains(&index) && index.to_string() == key).then_some(index)
}
