//! In-place binary max-heap primitives.
//!
//! The slice itself is the heap: the children of index `i` sit at `2i + 1`
//! and `2i + 2`. Only swaps move elements, so sorting needs no scratch
//! allocation.
//!
//! ```text
//!   build:   for i in (0..n/2).rev() { sift_down(i, n) }
//!   extract: for end in (1..n).rev() { swap(0, end); sift_down(0, end) }
//!
//!   [3, 9, 2, 7]  ─build─►  [9, 7, 2, 3]  ─extract─►  [2, 3, 7, 9]
//! ```
//!
//! The result is ascending under `compare` and not stable.
use std::cmp::Ordering;

/// Sorts `items` ascending under `compare` with a classic max-heap sort.
///
/// O(n log n) comparisons, O(1) extra space. Equal elements may be reordered.
///
/// ```
/// use shelfkit::ds::heap::heap_sort_by;
///
/// let mut years = [1925, 1960, 1813];
/// heap_sort_by(&mut years, |a, b| b.cmp(a));
/// assert_eq!(years, [1960, 1925, 1813]);
/// ```
pub fn heap_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return;
    }

    build_max_heap(items, &mut compare);

    for end in (1..n).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, &mut compare);
    }
}

/// Rearranges `items` so every parent compares `>=` its children.
pub fn build_max_heap<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    for root in (0..n / 2).rev() {
        sift_down(items, root, n, compare);
    }
}

/// Pushes `items[root]` down until the heap property holds within `items[..len]`.
pub fn sift_down<T, F>(items: &mut [T], mut root: usize, len: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let right = left + 1;

        let mut largest = root;
        if compare(&items[left], &items[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < len && compare(&items[right], &items[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }

        items.swap(root, largest);
        root = largest;
    }
}

/// Returns `true` if `items` satisfies the max-heap property under `compare`.
pub fn is_max_heap<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    (1..items.len()).all(|child| compare(&items[(child - 1) / 2], &items[child]) != Ordering::Less)
}
