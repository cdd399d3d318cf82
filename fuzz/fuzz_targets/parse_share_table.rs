#![no_main]
use libfuzzer_sys::fuzz_target;

use shamir_recover::input::ShareTable;

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = ShareTable::from_reader(data) {
        let _points = table.points();
    }
});
