use crate::utils::error::{AlgoError, Result};

/// Median of the combined contents of two individually sorted slices, found
/// by binary-searching the partition point of the shorter slice instead of
/// merging. O(log(min(m, n))) time, O(1) auxiliary space.
///
/// Returns `AlgoError::EmptyInput` when both slices are empty, since no
/// median exists for zero elements.
pub fn find_median_sorted_arrays(nums1: &[i32], nums2: &[i32]) -> Result<f64> {
    if nums1.is_empty() && nums2.is_empty() {
        return Err(AlgoError::EmptyInput);
    }

    // Search over the shorter slice so the window is bounded by min(m, n).
    let (short, long) = if nums1.len() <= nums2.len() {
        (nums1, nums2)
    } else {
        (nums2, nums1)
    };
    let m = short.len();
    let total = m + long.len();
    let half = (total + 1) / 2;

    let (mut low, mut high) = (0, m);
    while low <= high {
        let part_a = (low + high) / 2;
        let part_b = half - part_a;

        // Out-of-range neighbors are open bounds: a missing element on the
        // left acts as negative infinity, on the right as positive infinity.
        let max_left_a = if part_a > 0 { Some(short[part_a - 1]) } else { None };
        let max_left_b = if part_b > 0 { Some(long[part_b - 1]) } else { None };
        let min_right_a = short.get(part_a).copied();
        let min_right_b = long.get(part_b).copied();

        tracing::trace!("probing partition {}/{} of {}", part_a, part_b, half);

        if exceeds(max_left_a, min_right_b) {
            // Partition sits too far right in the shorter slice.
            high = part_a - 1;
        } else if exceeds(max_left_b, min_right_a) {
            low = part_a + 1;
        } else {
            // Valid partition. The left halves hold `half >= 1` elements,
            // so at least one max-left bound is present.
            let Some(max_left) = max_left_a.max(max_left_b) else {
                break;
            };
            if total % 2 == 1 {
                return Ok(f64::from(max_left));
            }
            let min_right = match (min_right_a, min_right_b) {
                (Some(a), Some(b)) => a.min(b),
                (Some(v), None) | (None, Some(v)) => v,
                // An even total leaves total / 2 elements on the right.
                (None, None) => break,
            };
            return Ok((f64::from(max_left) + f64::from(min_right)) / 2.0);
        }
    }

    // The window only empties out when an input violates the sorted
    // precondition; report that instead of a silent sentinel.
    Err(AlgoError::Unsorted)
}

fn exceeds(left: Option<i32>, right: Option<i32>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l > r)
}
