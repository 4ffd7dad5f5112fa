mod container;
mod error;
mod index;
mod order;
mod sift;
mod sort;

pub use container::{Heap, IntoIterOrdered, MaxHeap, MinHeap, Position};
pub use error::HeapError;
pub use index::{left_of, parent_of, right_of};
pub use order::{Before, MaxOrder, MinOrder};
pub use sift::{build_heap, down_heap, is_heap, up_heap};
pub use sort::{heap_sort_ascending, heap_sort_by, heap_sort_descending};
