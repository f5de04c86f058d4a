#![no_main]

use collab_changes::{RepoLayout, classify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        if let Ok(classified) = classify(path, &RepoLayout::default()) {
            if let Some(leaf) = classified.leaf() {
                assert_eq!(leaf, leaf.to_lowercase());
            }
        }
    }
});
