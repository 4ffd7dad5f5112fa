use super::order::{Before, MaxOrder, MinOrder};
use super::sift::{build_heap, down_heap};

/// Sorts in place so that elements preferred by `before` end up at the back.
///
/// The root of the heap is repeatedly moved into the slot that falls out of the
/// shrinking active range, so a "greater than" relation yields ascending order.
#[inline(never)]
pub fn heap_sort_by<T, B>(values: &mut [T], before: &B)
where
    B: Before<T> + ?Sized,
{
    build_heap(values, before);
    let mut end = values.len();
    while end > 1 {
        end -= 1;
        // old root goes to the vacated slot, last active element to the root
        values.swap(0, end);
        down_heap(values, end, 0, before);
    }
}

pub fn heap_sort_ascending<T>(values: &mut [T])
where
    T: PartialOrd,
{
    heap_sort_by(values, &MaxOrder);
}

pub fn heap_sort_descending<T>(values: &mut [T])
where
    T: PartialOrd,
{
    heap_sort_by(values, &MinOrder);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorts_descending_run_ascending() {
        let mut values = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        heap_sort_ascending(&mut values);
        assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn sorts_ascending_run_descending() {
        let mut values: Vec<i32> = (0..10).collect();
        heap_sort_descending(&mut values);
        assert_eq!(values, (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn trivial_inputs() {
        let mut empty: [u8; 0] = [];
        heap_sort_ascending(&mut empty);
        let mut single = [7];
        heap_sort_descending(&mut single);
        assert_eq!(single, [7]);
        let mut pair = [1, 0];
        heap_sort_ascending(&mut pair);
        assert_eq!(pair, [0, 1]);
    }

    #[test]
    fn sorts_by_closure() {
        let mut words = vec!["pear", "fig", "banana", "kiwi"];
        heap_sort_by(&mut words, &|lhs: &&str, rhs: &&str| lhs.len() > rhs.len());
        assert_eq!(words.iter().map(|w| w.len()).collect::<Vec<_>>(), vec![3, 4, 4, 6]);
    }

    proptest! {
        #[test]
        fn ascending_matches_std_sort(mut values in proptest::collection::vec(any::<i32>(), 0..300)) {
            let mut expected = values.clone();
            expected.sort();
            heap_sort_ascending(&mut values);
            prop_assert_eq!(&values, &expected);
            heap_sort_ascending(&mut values);
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn descending_matches_reversed_std_sort(mut values in proptest::collection::vec(any::<i32>(), 0..300)) {
            let mut expected = values.clone();
            expected.sort_by(|a, b| b.cmp(a));
            heap_sort_descending(&mut values);
            prop_assert_eq!(&values, &expected);
            heap_sort_descending(&mut values);
            prop_assert_eq!(values, expected);
        }
    }
}
