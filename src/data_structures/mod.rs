pub mod lazy_meld;
pub mod ordered_list;
pub mod sorted_rescan;
pub mod traits;

pub use lazy_meld::LazyMeldHeap;
pub use ordered_list::OrderedLinkedList;
pub use sorted_rescan::SortedRescan;
pub use traits::DecreaseKeyQueue;
