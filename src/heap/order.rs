/// Decides which of two elements belongs closer to the root.
///
/// `before(lhs, rhs)` holds when `lhs` must sit above `rhs`. It must be a strict
/// order: `before(x, x)` is false.
pub trait Before<T> {
    fn before(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T, F> Before<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn before(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// Largest element at the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOrder;

impl<T> Before<T> for MaxOrder
where
    T: PartialOrd,
{
    #[inline(always)]
    fn before(&self, lhs: &T, rhs: &T) -> bool {
        lhs > rhs
    }
}

/// Smallest element at the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinOrder;

impl<T> Before<T> for MinOrder
where
    T: PartialOrd,
{
    #[inline(always)]
    fn before(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_and_min_are_strict() {
        assert!(MaxOrder.before(&2, &1));
        assert!(!MaxOrder.before(&1, &1));
        assert!(MinOrder.before(&1, &2));
        assert!(!MinOrder.before(&1, &1));
    }

    #[test]
    fn closures_are_relations() {
        let by_len = |lhs: &&str, rhs: &&str| lhs.len() > rhs.len();
        assert!(by_len.before(&"abc", &"ab"));
        assert!(!by_len.before(&"ab", &"ba"));
    }
}
