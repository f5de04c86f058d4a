#![no_main]

use collab_changes::{CreditRoster, EntityId, NameTree, join};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tree) = NameTree::from_slice(data) {
        let _ = join(&EntityId::new("0001/0001"), &tree, &CreditRoster::default());
    }
});
