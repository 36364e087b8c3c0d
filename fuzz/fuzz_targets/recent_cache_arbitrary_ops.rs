#![no_main]

use libfuzzer_sys::fuzz_target;
use shelfkit::policy::BoundedRecentCache;

// Fuzz arbitrary operation sequences on BoundedRecentCache
//
// A Vec ordered LRU -> MRU serves as the reference model.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16) + 1;
    let Ok(mut cache) = BoundedRecentCache::try_new(capacity) else {
        return;
    };
    let mut model: Vec<(u8, u8)> = Vec::new();

    for pair in ops.chunks_exact(2) {
        let op = pair[0] % 4;
        let key = pair[1] % 32;

        match op {
            0 => {
                // put
                cache.put(key, pair[0]);
                if let Some(pos) = model.iter().position(|(k, _)| *k == key) {
                    model.remove(pos);
                } else if model.len() == capacity {
                    model.remove(0);
                }
                model.push((key, pair[0]));
            }
            1 => {
                // get
                let expected = model.iter().position(|(k, _)| *k == key).map(|pos| {
                    let entry = model.remove(pos);
                    model.push(entry);
                    entry.1
                });
                assert_eq!(cache.get(&key).copied(), expected);
            }
            2 => {
                // remove
                let expected = model
                    .iter()
                    .position(|(k, _)| *k == key)
                    .map(|pos| model.remove(pos).1);
                assert_eq!(cache.remove(&key), expected);
            }
            _ => {
                // pop_lru
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(cache.pop_lru(), expected);
            }
        }

        assert!(cache.len() <= capacity);
        let keys: Vec<_> = model.iter().map(|(k, _)| *k).collect();
        assert_eq!(cache.keys_lru_to_mru(), keys);
    }

    assert!(cache.check_invariants().is_ok());
});
