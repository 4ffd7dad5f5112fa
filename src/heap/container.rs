use std::iter::FusedIterator;
use std::ops::Index;
use std::slice::Iter;

use tracing::trace;

use super::error::HeapError;
use super::order::{Before, MaxOrder, MinOrder};
use super::sift::{build_heap, down_heap, is_heap, up_heap};

/// Where `Heap::insert_or_update` writes its value.
///
/// `At` is only meaningful until the heap is mutated again: any push, pop or
/// update may move elements to other positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Append a new element.
    End,
    /// Replace the element currently stored at this array position.
    At(usize),
}

/// Binary heap stored in a `Vec`, ordered by an injected `Before` relation.
#[derive(Clone, Debug)]
pub struct Heap<T, B>
where
    B: Before<T>,
{
    heap_array: Vec<T>,
    before: B,
}

pub type MaxHeap<T> = Heap<T, MaxOrder>;

pub type MinHeap<T> = Heap<T, MinOrder>;

impl<T, B> Default for Heap<T, B>
where
    B: Before<T> + Default,
{
    fn default() -> Self {
        Heap { heap_array: Vec::default(), before: B::default() }
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Builds a heap ordered by a closure; `before(a, b)` holds when `a` belongs above `b`.
    pub fn from_fn(elements: Vec<T>, before: F) -> Self {
        Heap::from_vec(elements, before)
    }
}

impl<T, B> Heap<T, B>
where
    B: Before<T>,
{
    pub fn new(before: B) -> Self {
        Heap { heap_array: Vec::new(), before }
    }

    #[inline(never)]
    pub fn from_vec(elements: Vec<T>, before: B) -> Self {
        let mut heap = Heap { heap_array: elements, before };
        build_heap(&mut heap.heap_array, &heap.before);
        trace!(len = heap.heap_array.len(), "heap built");
        heap.check();
        heap
    }

    pub fn from_slice(elements: &[T], before: B) -> Self
    where
        T: Clone,
    {
        Heap::from_vec(elements.to_vec(), before)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap_array.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap_array.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap_array.clear();
    }

    #[inline(always)]
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.heap_array.first().ok_or(HeapError::EmptyContainer)
    }

    #[inline(always)]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.heap_array.get(position)
    }

    /// Elements in array order, root first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.heap_array.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.heap_array
    }

    /// Position of the first element, in array order, matching `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<Position>
    where
        P: FnMut(&T) -> bool,
    {
        self.heap_array.iter().position(predicate).map(Position::At)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.heap_array
    }

    /// Consumes the heap, yielding elements in pop order.
    pub fn into_iter_ordered(self) -> IntoIterOrdered<T, B> {
        IntoIterOrdered { inner: self }
    }

    /// Consumes the heap, collecting elements in pop order (root preference first).
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_ordered().collect()
    }

    #[inline(never)]
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.heap_array.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        let first = self.heap_array.swap_remove(0);
        let end = self.heap_array.len();
        if end != 0 {
            down_heap(&mut self.heap_array, end, 0, &self.before);
        }
        trace!(len = end, "popped root");
        self.check();
        Ok(first)
    }

    #[inline(never)]
    pub fn push(&mut self, value: T) -> &mut Self {
        let position = self.heap_array.len();
        self.heap_array.push(value);
        up_heap(&mut self.heap_array, position, &self.before);
        trace!(len = position + 1, "pushed");
        self.check();
        self
    }

    /// Appends `value` for `Position::End`, otherwise replaces the element at the
    /// given position and moves it in whichever direction the new value requires.
    #[inline(never)]
    pub fn insert_or_update(&mut self, position: Position, value: T) -> Result<&mut Self, HeapError>
    where
        T: PartialEq,
    {
        let position = match position {
            Position::End => return Ok(self.push(value)),
            Position::At(position) => position,
        };
        let len = self.heap_array.len();
        let Some(slot) = self.heap_array.get_mut(position) else {
            return Err(HeapError::IndexOutOfRange { index: position, len });
        };
        if *slot == value {
            *slot = value;
            trace!(position, "updated in place");
            return Ok(self);
        }
        let rootward = self.before.before(&value, slot);
        *slot = value;
        if rootward {
            up_heap(&mut self.heap_array, position, &self.before);
        } else {
            down_heap(&mut self.heap_array, len, position, &self.before);
        }
        trace!(position, rootward, "updated");
        self.check();
        Ok(self)
    }

    #[inline(always)]
    fn check(&self) {
        debug_assert!(is_heap(&self.heap_array, &self.before));
    }
}

impl<T, B> Index<usize> for Heap<T, B>
where
    B: Before<T>,
{
    type Output = T;
    fn index(&self, position: usize) -> &Self::Output {
        &self.heap_array[position]
    }
}

impl<T, B> FromIterator<T> for Heap<T, B>
where
    B: Before<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from_vec(Vec::from_iter(iter), B::default())
    }
}

impl<T, B> Extend<T> for Heap<T, B>
where
    B: Before<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, B> IntoIterator for &'a Heap<T, B>
where
    B: Before<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.heap_array.iter()
    }
}

/// Draining iterator returned by `Heap::into_iter_ordered`.
pub struct IntoIterOrdered<T, B>
where
    B: Before<T>,
{
    inner: Heap<T, B>,
}

impl<T, B> Iterator for IntoIterOrdered<T, B>
where
    B: Before<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T, B> ExactSizeIterator for IntoIterOrdered<T, B> where B: Before<T> {}

impl<T, B> FusedIterator for IntoIterOrdered<T, B> where B: Before<T> {}
