//! Example demonstrating the bounded recent cache.
//!
//! Run with: cargo run --example basic_recent_cache

use shelfkit::policy::BoundedRecentCache;
use shelfkit::traits::LruCacheTrait;

fn main() {
    println!("=== BoundedRecentCache ===\n");

    let mut cache = match BoundedRecentCache::try_new(3) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("{err}");
            return;
        },
    };

    cache.put(1, "one");
    cache.put(2, "two");
    cache.put(3, "three");

    // Access key 1 to make it MRU
    cache.get(&1);
    println!("   LRU -> MRU: {:?}", cache.keys_lru_to_mru());

    // Insert key 4, evicts LRU (key 2)
    cache.put(4, "four");
    println!("   contains 2? {} (evicted as LRU)", cache.contains(&2));
    println!("   LRU -> MRU: {:?}", cache.keys_lru_to_mru());

    // peek does not reorder
    cache.peek(&3);
    println!("   peek_lru: {:?}", cache.peek_lru());
    println!("   recency rank of 4: {:?}", cache.recency_rank(&4));

    println!("   zero capacity: {:?}", BoundedRecentCache::<u64, u64>::try_new(0).err());
}
