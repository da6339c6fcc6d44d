//! Row reducer - compress and merge a single row toward the left
//!
//! This is the only place tiles actually slide or combine. It knows nothing
//! about directions: callers orient a row so that "left" is the direction of
//! travel (see [`crate::moves`]).
//!
//! The reduction runs in three passes:
//!
//! 1. **Compress**: drop zeros, keep order, pad with zeros on the right.
//! 2. **Merge**: scan left to right; an equal non-zero pair at (i, i+1) becomes
//!    (2v, 0) and adds 2v to the gain. The scan never revisits `i`, so
//!    `[2, 2, 2, 0]` merges only the first pair.
//! 3. **Re-compress**: close the gaps the merges left behind.

use arrayvec::ArrayVec;

/// Result of reducing one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowReduction<const N: usize> {
    pub row: [u32; N],
    /// Sum of the tiles created by merges in this row.
    pub gain: u32,
}

/// Slide all non-zero values to the left, preserving their order.
///
/// # Examples
///
/// ```
/// use term_2048_core::compress;
///
/// assert_eq!(compress(&[0, 2, 0, 4]), [2, 4, 0, 0]);
/// ```
pub fn compress<const N: usize>(row: &[u32; N]) -> [u32; N] {
    let mut packed: ArrayVec<u32, N> = row.iter().copied().filter(|&v| v != 0).collect();
    while !packed.is_full() {
        packed.push(0);
    }
    packed.into_inner().unwrap_or(*row)
}

/// Merge adjacent equal tiles in place, returning the score gained.
///
/// The row is expected to be compressed already. Zeros left by merges are not
/// closed here.
pub fn merge_left<const N: usize>(row: &mut [u32; N]) -> u32 {
    let mut gain = 0u32;
    for i in 0..N.saturating_sub(1) {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            row[i + 1] = 0;
            gain += row[i];
        }
    }
    gain
}

/// Full leftward reduction: compress, merge, compress.
///
/// # Examples
///
/// ```
/// use term_2048_core::reduce_left;
///
/// let out = reduce_left(&[2, 2, 2, 0]);
/// assert_eq!(out.row, [4, 2, 0, 0]);
/// assert_eq!(out.gain, 4);
/// ```
pub fn reduce_left<const N: usize>(row: &[u32; N]) -> RowReduction<N> {
    let mut work = compress(row);
    let gain = merge_left(&mut work);
    RowReduction {
        row: compress(&work),
        gain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every row of length 4 over {0, 2, 4, 8}.
    fn all_rows() -> Vec<[u32; 4]> {
        const VALUES: [u32; 4] = [0, 2, 4, 8];
        let mut out = Vec::with_capacity(256);
        for a in VALUES {
            for b in VALUES {
                for c in VALUES {
                    for d in VALUES {
                        out.push([a, b, c, d]);
                    }
                }
            }
        }
        out
    }

    fn nonzero(row: &[u32]) -> usize {
        row.iter().filter(|&&v| v != 0).count()
    }

    #[test]
    fn compress_slides_left() {
        assert_eq!(compress(&[0, 0, 0, 2]), [2, 0, 0, 0]);
        assert_eq!(compress(&[4, 0, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(compress(&[0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(compress(&[2, 4, 8, 16]), [2, 4, 8, 16]);
    }

    #[test]
    fn compress_is_idempotent() {
        for row in all_rows() {
            let once = compress(&row);
            assert_eq!(compress(&once), once, "row {:?}", row);
        }
    }

    #[test]
    fn compress_keeps_tile_count() {
        for row in all_rows() {
            assert_eq!(nonzero(&compress(&row)), nonzero(&row), "row {:?}", row);
        }
    }

    #[test]
    fn pair_merges() {
        let out = reduce_left(&[2, 2, 0, 0]);
        assert_eq!(out.row, [4, 0, 0, 0]);
        assert_eq!(out.gain, 4);
    }

    #[test]
    fn triple_merges_only_first_pair() {
        let out = reduce_left(&[2, 2, 2, 0]);
        assert_eq!(out.row, [4, 2, 0, 0]);
        assert_eq!(out.gain, 4);
    }

    #[test]
    fn merge_pass_does_not_revisit() {
        let mut row = [2, 2, 2, 0];
        assert_eq!(merge_left(&mut row), 4);
        assert_eq!(row, [4, 0, 2, 0]);
    }

    #[test]
    fn quad_merges_into_two() {
        let out = reduce_left(&[2, 2, 2, 2]);
        assert_eq!(out.row, [4, 4, 0, 0]);
        assert_eq!(out.gain, 8);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let out = reduce_left(&[4, 2, 2, 0]);
        assert_eq!(out.row, [4, 4, 0, 0]);
        assert_eq!(out.gain, 4);
    }

    #[test]
    fn gap_between_equals_still_merges() {
        let out = reduce_left(&[2, 0, 0, 2]);
        assert_eq!(out.row, [4, 0, 0, 0]);
        assert_eq!(out.gain, 4);
    }

    #[test]
    fn two_separate_merges_sum_gain() {
        let out = reduce_left(&[8, 8, 4, 4]);
        assert_eq!(out.row, [16, 8, 0, 0]);
        assert_eq!(out.gain, 24);
    }

    #[test]
    fn no_merge_for_distinct_values() {
        let out = reduce_left(&[2, 4, 2, 4]);
        assert_eq!(out.row, [2, 4, 2, 4]);
        assert_eq!(out.gain, 0);
    }

    #[test]
    fn reduction_is_stable_once_resolved() {
        for row in all_rows() {
            let first = reduce_left(&row);
            let second = reduce_left(&first.row);
            // A second pass may still merge (e.g. [4,2,2,0] -> [4,4,0,0] -> [8,0,0,0]),
            // but it never increases the tile count.
            assert!(nonzero(&second.row) <= nonzero(&first.row));
            // Tile sum is conserved by merging.
            let sum = |r: &[u32; 4]| r.iter().sum::<u32>();
            assert_eq!(sum(&first.row), sum(&row));
        }
    }

    #[test]
    fn works_for_other_lengths() {
        let out = reduce_left(&[2, 2, 4, 4, 8]);
        assert_eq!(out.row, [4, 8, 8, 0, 0]);
        assert_eq!(out.gain, 12);

        let single = reduce_left(&[2]);
        assert_eq!(single.row, [2]);
        assert_eq!(single.gain, 0);
    }
}
