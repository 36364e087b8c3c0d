#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;
use shelfkit::ds::PrefixIndex;

// Fuzz interleaved inserts and prefix queries on PrefixIndex
//
// Every answer is checked against a BTreeSet model of the inserted words.
fuzz_target!(|data: &[u8]| {
    let mut index = PrefixIndex::new();
    let mut model = BTreeSet::new();

    for chunk in data.split(|&b| b == 0) {
        let Some((&op, rest)) = chunk.split_first() else {
            continue;
        };
        let text = String::from_utf8_lossy(rest).to_lowercase();

        match op % 3 {
            0 => {
                // insert
                index.insert(&text);
                model.insert(text);
            }
            1 => {
                // suggestions
                let expected: Vec<_> = model
                    .iter()
                    .filter(|w| w.starts_with(text.as_str()))
                    .cloned()
                    .collect();
                assert_eq!(index.suggestions(&text), expected);
            }
            _ => {
                // contains
                assert_eq!(index.contains(&text), model.contains(&text));
            }
        }
    }

    assert_eq!(index.len(), model.len());
    assert!(index.check_invariants().is_ok());
});
