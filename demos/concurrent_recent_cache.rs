//! Example sharing one recent cache across threads.
//!
//! Run with: cargo run --example concurrent_recent_cache --features concurrency

use std::sync::Arc;
use std::thread;

use shelfkit::policy::ConcurrentRecentCache;

fn main() {
    let cache = match ConcurrentRecentCache::try_new(64) {
        Ok(cache) => Arc::new(cache),
        Err(err) => {
            eprintln!("{err}");
            return;
        },
    };

    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100u64 {
                    let key = worker * 1_000 + i;
                    cache.put(key, format!("book-{key}"));
                    let _ = cache.get(&(worker * 1_000));
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }

    println!("=== ConcurrentRecentCache ===\n");
    println!("   len: {} / {}", cache.len(), cache.capacity());
    println!("   most recent: {:?}", cache.keys_lru_to_mru().last());
}
