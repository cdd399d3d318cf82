#![cfg(feature = "std")]

use num_bigint::{BigInt, BigUint, RandBigInt};
use rand::seq::SliceRandom;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use serde_json::{json, Map, Value};

use shamir_recover::{
    input::{InputError, ShareTable},
    Error, Modulus, Point, SecretSharing,
};

// Evaluates `poly` (constant term first) at `x` modulo `modulus`.
fn evaluate(poly: &[BigUint], x: u64, modulus: &BigUint) -> BigUint {
    poly.iter()
        .rev()
        .fold(BigUint::from(0u8), |acc, c| (acc * x + c) % modulus)
}

// Encodes the shares of a random polynomial as a share table, rotating through bases.
fn encoded_table(secret: &BigUint, k: usize, indices: &[u64], modulus: &Modulus) -> String {
    let mut rng = ChaCha8Rng::from_seed([0x5a; 32]);
    let m = modulus.get().to_biguint().unwrap();
    let mut poly = vec![secret.clone()];
    poly.extend((1..k).map(|_| rng.gen_biguint_below(&m)));

    let mut document = Map::new();
    let n = indices.iter().copied().max().unwrap_or(0);
    document.insert("keys".to_string(), json!({ "n": n, "k": k }));
    for (i, &x) in indices.iter().enumerate() {
        let base = [2u32, 7, 10, 16, 36][i % 5];
        let mut value = evaluate(&poly, x, &m).to_str_radix(base);
        if i % 2 == 1 {
            value = value.to_uppercase();
        }
        let base = if i % 3 == 0 {
            json!(base)
        } else {
            json!(base.to_string())
        };
        document.insert(x.to_string(), json!({ "base": base, "value": value }));
    }
    Value::Object(document).to_string()
}

#[test]
fn demo_table_recovers() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/input.json");
    let table = ShareTable::from_path(path).unwrap();
    let points = table.points().unwrap();
    assert_eq!(
        points,
        vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)]
    );
    let sss = table.secret_sharing(Modulus::default()).unwrap();
    assert_eq!(sss.recover(&points).unwrap(), BigUint::from(3u32));
}

#[test]
fn recovers_from_mixed_bases() {
    let modulus = Modulus::default();
    let secret = BigUint::from(987_654_321u32);
    let json = encoded_table(&secret, 5, &[1, 2, 3, 4, 5, 6, 7, 8], &modulus);

    let table = ShareTable::from_json(&json).unwrap();
    let sss = table.secret_sharing(modulus).unwrap();
    assert_eq!(sss.recover(&table.points().unwrap()).unwrap(), secret);
}

#[test]
fn recovers_with_missing_indices() {
    // secp256k1 field prime
    let p = b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
    let modulus = Modulus::new(BigUint::parse_bytes(p, 16).unwrap()).unwrap();
    let secret = BigUint::parse_bytes(b"ffffffffffffffffffffffffffffffffffffff", 16).unwrap();
    let json = encoded_table(&secret, 4, &[2, 5, 6, 9, 10], &modulus);

    let table = ShareTable::from_json(&json).unwrap();
    assert_eq!(table.n(), 10);
    assert_eq!(table.shares().len(), 5);
    let sss = table.secret_sharing(modulus).unwrap();
    assert_eq!(sss.recover(&table.points().unwrap()).unwrap(), secret);
}

#[test]
fn any_subset_of_shares_agrees() {
    let modulus = Modulus::new(7919u32).unwrap();
    let secret = BigUint::from(4321u32);
    let json = encoded_table(&secret, 3, &[1, 2, 3, 4, 5, 6], &modulus);
    let table = ShareTable::from_json(&json).unwrap();
    let sss = table.secret_sharing(modulus).unwrap();

    let mut rng = ChaCha8Rng::from_seed([0x01; 32]);
    let mut points = table.points().unwrap();
    for _ in 0..10 {
        points.shuffle(&mut rng);
        assert_eq!(sss.recover(&points).unwrap(), secret);
    }
}

#[test]
fn recovers_lost_shares() {
    let modulus = Modulus::default();
    let secret = BigUint::from(77u32);
    let all = ShareTable::from_json(&encoded_table(&secret, 3, &[1, 2, 3, 4, 5], &modulus))
        .unwrap()
        .points()
        .unwrap();
    let known = vec![all[0].clone(), all[2].clone(), all[4].clone()];

    let sss = SecretSharing::new(3, modulus).unwrap();
    assert_eq!(sss.recover_shares(&known, 5).unwrap(), all);
    assert_eq!(
        sss.recover_share(&known, &BigInt::from(0)).unwrap().y,
        BigInt::from(secret)
    );
}

#[test]
fn too_few_shares_fail() {
    let modulus = Modulus::default();
    let json = encoded_table(&BigUint::from(1u8), 3, &[1, 4], &modulus);
    let table = ShareTable::from_json(&json).unwrap();
    let sss = table.secret_sharing(modulus).unwrap();
    assert_eq!(
        sss.recover(&table.points().unwrap()),
        Err(Error::InsufficientShares {
            threshold: 3,
            available: 2
        })
    );
}

#[test]
fn malformed_numeral_fails() {
    let json = r#"{ "keys": { "n": 2, "k": 2 },
        "1": { "base": "16", "value": "1g!" },
        "2": { "base": "10", "value": "5" } }"#;
    let table = ShareTable::from_json(json).unwrap();
    assert!(matches!(
        table.points(),
        Err(InputError::Decode {
            index: 1,
            source: Error::InvalidCharacter { character: '!', .. }
        })
    ));
}
