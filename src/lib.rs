//! Array-backed binary heap over an injected ordering relation, with in-place heap sort.
//!
//! ```
//! use binary_heap_sort::{heap_sort_ascending, MaxHeap, MaxOrder, Position};
//!
//! let mut heap = MaxHeap::from_vec((0..10).collect(), MaxOrder);
//! assert_eq!(heap.as_slice(), &[9, 8, 5, 6, 7, 1, 4, 0, 3, 2]);
//!
//! let five = heap.position(|v| *v == 5).unwrap();
//! heap.insert_or_update(five, 10).unwrap();
//! assert_eq!(heap.pop(), Ok(10));
//! heap.insert_or_update(Position::End, 11).unwrap();
//! assert_eq!(heap.peek(), Ok(&11));
//!
//! let mut values = [3, 1, 2];
//! heap_sort_ascending(&mut values);
//! assert_eq!(values, [1, 2, 3]);
//! ```

pub mod heap;

pub use heap::{
    heap_sort_ascending, heap_sort_by, heap_sort_descending, Before, Heap, HeapError, MaxHeap, MaxOrder, MinHeap,
    MinOrder, Position,
};
