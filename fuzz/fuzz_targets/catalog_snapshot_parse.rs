#![no_main]

use libfuzzer_sys::fuzz_target;
use shelfkit::builder::CatalogBuilder;

// Arbitrary text fed to snapshot restore must never panic, and anything
// accepted must serialize back to an equivalent catalog.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = CatalogBuilder::new().snapshot(text).try_build() else {
        return;
    };

    let Ok(again) = catalog.snapshot() else {
        return;
    };
    let restored = CatalogBuilder::new().snapshot(again).try_build();
    assert!(restored.is_ok_and(|c| c.books() == catalog.books()));
});
