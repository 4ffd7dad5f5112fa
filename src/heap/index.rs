// Positions of a complete binary tree stored densely in an array, left-weighted.
//
//            0
//         1     2
//       3   4 5   6
//      7 8 9

#[inline(always)]
pub fn parent_of(position: usize) -> Option<usize> {
    if position == 0 {
        None
    } else {
        Some((position - 1) / 2)
    }
}

#[inline(always)]
pub fn left_of(position: usize) -> usize {
    2 * position + 1
}

#[inline(always)]
pub fn right_of(position: usize) -> usize {
    2 * position + 2
}
