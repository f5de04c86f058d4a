#![no_main]

use collab_changes::CreditRoster;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(roster) = CreditRoster::from_bytes("credit_names.txt", data.to_vec()) {
        std::hint::black_box(roster.len());
    }
});
