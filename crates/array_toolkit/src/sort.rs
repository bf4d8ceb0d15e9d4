//! # Dual-Pivot Quicksort
//!
//! In-place sort that splits each range into three regions around two pivots
//! taken from its ends:
//!
//! ```text
//! [ < P1 | P1 | P1 <= x <= P2 | P2 | > P2 ]
//!          ^left                ^right
//! ```
//!
//! ## Complexity
//!
//! - Average: O(n log n)
//! - Worst case: O(n²) on adversarial input (pivots are not randomised)
//! - Stack depth: O(log n), the longest region is handled iteratively

use tracing::debug;

use crate::error::{ToolkitError, ToolkitResult};

/// Final positions of the two pivots after a partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PivotRecord {
    /// Index of the left (smaller) pivot.
    pub left: usize,
    /// Index of the right (larger) pivot.
    pub right: usize,
}

/// Partitions `arr` around its first and last elements.
///
/// After the call:
/// - `arr[..left]` holds elements `< arr[left]`
/// - `arr[left + 1..right]` holds elements in `arr[left]..=arr[right]`
/// - `arr[right + 1..]` holds elements `> arr[right]`
///
/// and `left < right`.
///
/// # Panics
///
/// Panics if `arr` has fewer than two elements.
pub fn partition(arr: &mut [i32]) -> PivotRecord {
    assert!(arr.len() >= 2, "partition needs at least two elements");
    let high = arr.len() - 1;

    if arr[0] > arr[high] {
        arr.swap(0, high);
    }
    let (low_pivot, high_pivot) = (arr[0], arr[high]);

    // arr[1..left]         < low_pivot
    // arr[left..scan]      between the pivots
    // arr[right + 1..high] > high_pivot
    let mut left = 1;
    let mut right = high - 1;
    let mut scan = 1;

    while scan <= right {
        if arr[scan] < low_pivot {
            arr.swap(scan, left);
            scan += 1;
            left += 1;
        } else if arr[scan] > high_pivot {
            // The element swapped in is unexamined, so `scan` stays put.
            arr.swap(scan, right);
            right -= 1;
        } else {
            scan += 1;
        }
    }

    left -= 1;
    right += 1;
    arr.swap(0, left);
    arr.swap(high, right);

    PivotRecord { left, right }
}

/// Sorts the slice in ascending order, in place.
///
/// # Example
///
/// ```rust
/// use array_toolkit::sort;
///
/// let mut data = [4, 7, 2, 9, 1];
/// sort(&mut data);
/// assert_eq!(data, [1, 2, 4, 7, 9]);
/// ```
pub fn sort(arr: &mut [i32]) {
    debug!(len = arr.len(), "dual-pivot sort");
    sort_regions(arr);
}

/// Sorts the inclusive index range `low..=high`, in place.
///
/// `low >= high` covers at most one element and is a no-op.
///
/// # Errors
///
/// [`ToolkitError::RangeOutOfBounds`] if `high` is not a valid index.
pub fn sort_range(arr: &mut [i32], low: usize, high: usize) -> ToolkitResult<()> {
    if low >= high {
        return Ok(());
    }
    if high >= arr.len() {
        return Err(ToolkitError::RangeOutOfBounds {
            start: low,
            end: high + 1,
            len: arr.len(),
        });
    }
    sort(&mut arr[low..=high]);
    Ok(())
}

fn sort_regions(mut arr: &mut [i32]) {
    while arr.len() > 1 {
        let current = std::mem::take(&mut arr);
        let pivots = partition(current);

        let (below, rest) = current.split_at_mut(pivots.left);
        let (between, rest) = rest[1..].split_at_mut(pivots.right - pivots.left - 1);
        let above = &mut rest[1..];

        let mut regions = [below, between, above];
        regions.sort_unstable_by_key(|region| region.len());
        let [shortest, middle, longest] = regions;

        sort_regions(shortest);
        sort_regions(middle);
        arr = longest;
    }
}
