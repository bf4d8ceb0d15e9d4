//! # Range & Transform Operations
//!
//! Copying, rotating, reversing and joining integer slices.
//!
//! ## Aliasing
//!
//! | Operation       | Result                          |
//! |-----------------|---------------------------------|
//! | `copy_of_range` | new `Vec`, owned by the caller  |
//! | `concat`        | new `Vec`, owned by the caller  |
//! | `rotate`        | the same slice, mutated in place |
//! | `reverse`       | the same slice, mutated in place |

use crate::error::{ToolkitError, ToolkitResult};

/// Copies the elements in `[start, end)` into a new buffer.
///
/// # Errors
///
/// - [`ToolkitError::InvertedRange`] if `start > end`
/// - [`ToolkitError::RangeOutOfBounds`] if `end > arr.len()`
///
/// # Example
///
/// ```rust
/// use array_toolkit::copy_of_range;
///
/// assert_eq!(copy_of_range(&[5, 6, 7, 8], 1, 3).unwrap(), vec![6, 7]);
/// ```
pub fn copy_of_range(arr: &[i32], start: usize, end: usize) -> ToolkitResult<Vec<i32>> {
    if start > end {
        return Err(ToolkitError::InvertedRange { start, end });
    }
    if end > arr.len() {
        return Err(ToolkitError::RangeOutOfBounds {
            start,
            end,
            len: arr.len(),
        });
    }
    Ok(arr[start..end].to_vec())
}

/// Rotates the slice to the right by `k mod len` positions, in place.
///
/// Returns the same slice so calls can be chained.
///
/// # Errors
///
/// [`ToolkitError::ZeroLengthRotate`] if the slice is empty.
///
/// # Example
///
/// ```rust
/// use array_toolkit::rotate;
///
/// let mut data = [1, 2, 3, 4, 5];
/// rotate(&mut data, 2).unwrap();
/// assert_eq!(data, [4, 5, 1, 2, 3]);
/// ```
pub fn rotate(arr: &mut [i32], k: usize) -> ToolkitResult<&mut [i32]> {
    if arr.is_empty() {
        return Err(ToolkitError::ZeroLengthRotate);
    }
    let shift = k % arr.len();
    arr.rotate_right(shift);
    Ok(arr)
}

/// Reverses the slice in place by swapping symmetric pairs.
///
/// Returns the same slice.
pub fn reverse(arr: &mut [i32]) -> &mut [i32] {
    let len = arr.len();
    for i in 0..len / 2 {
        arr.swap(i, len - i - 1);
    }
    arr
}

/// Returns a new buffer holding `first` followed by `second`.
#[must_use]
pub fn concat(first: &[i32], second: &[i32]) -> Vec<i32> {
    let mut joined = Vec::with_capacity(first.len() + second.len());
    joined.extend_from_slice(first);
    joined.extend_from_slice(second);
    joined
}
