#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use shamir_recover::decode_numeral;

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub value: String,
    pub base: u32,
}

fuzz_target!(|params: Parameters| {
    let _value = decode_numeral(&params.value, params.base);
});
