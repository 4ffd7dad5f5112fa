use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is empty")]
    EmptyContainer,
    #[error("position {index} is out of range for a heap of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}
