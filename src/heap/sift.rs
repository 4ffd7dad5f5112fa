use super::index::{left_of, parent_of, right_of};
use super::order::Before;

/// Moves the element at `position` toward the root while it belongs above its parent.
#[inline(never)]
pub fn up_heap<T, B>(heap_array: &mut [T], mut position: usize, before: &B)
where
    B: Before<T> + ?Sized,
{
    debug_assert!(position < heap_array.len());
    while let Some(parent) = parent_of(position) {
        if before.before(&heap_array[position], &heap_array[parent]) {
            heap_array.swap(parent, position);
            position = parent;
        } else {
            break;
        }
    }
}

/// Moves the element at `position` toward the leaves of `heap_array[..end]`
/// while one of its children belongs above it.
#[inline(never)]
pub fn down_heap<T, B>(heap_array: &mut [T], end: usize, mut position: usize, before: &B)
where
    B: Before<T> + ?Sized,
{
    let end = end.min(heap_array.len());
    loop {
        let left = left_of(position);
        let right = right_of(position);
        let mut winner = position;
        if left < end && before.before(&heap_array[left], &heap_array[winner]) {
            winner = left;
        }
        if right < end && before.before(&heap_array[right], &heap_array[winner]) {
            winner = right;
        }
        if winner == position {
            break;
        }
        heap_array.swap(position, winner);
        position = winner;
    }
}

/// Turns an arbitrary sequence into a heap by sifting every element up in array order.
#[inline(never)]
pub fn build_heap<T, B>(heap_array: &mut [T], before: &B)
where
    B: Before<T> + ?Sized,
{
    for position in 0..heap_array.len() {
        up_heap(heap_array, position, before);
    }
}

pub fn is_heap<T, B>(heap_array: &[T], before: &B) -> bool
where
    B: Before<T> + ?Sized,
{
    (0..heap_array.len()).all(|position| match parent_of(position) {
        Some(parent) => !before.before(&heap_array[position], &heap_array[parent]),
        None => true,
    })
}
