pub mod heap;
pub mod intrusive_list;
pub mod prefix_index;
pub mod slot_arena;

pub use intrusive_list::IntrusiveList;
pub use prefix_index::{PrefixIndex, TrieNode};
pub use slot_arena::{SlotArena, SlotId};
