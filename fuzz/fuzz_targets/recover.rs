#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use shamir_recover::{reconstruct_secret, Modulus, Point};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub threshold: u8,
    pub modulus: u64,
    pub shares: Vec<Point>,
}

fuzz_target!(|params: Parameters| {
    if let Ok(modulus) = Modulus::new(params.modulus) {
        let _secret = reconstruct_secret(&params.shares, params.threshold as usize, &modulus);
    }
});
