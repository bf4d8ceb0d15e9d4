//! # Aggregate Operations
//!
//! Single-pass reductions over integer slices: extrema, occurrence counting,
//! sums, ordering checks, equality and hashing.
//!
//! Reductions that have no meaningful value on an empty slice return
//! [`ToolkitError::EmptyInput`] instead of reading past the end.

use crate::error::{ToolkitError, ToolkitResult};

/// Seed of the rolling hash (the hash of an empty array).
pub const HASH_SEED: u64 = 1;

/// Multiplier of the rolling hash.
pub const HASH_MULTIPLIER: u64 = 19;

/// Returns the smallest element.
///
/// # Errors
///
/// [`ToolkitError::EmptyInput`] if the slice is empty.
pub fn min_value(arr: &[i32]) -> ToolkitResult<i32> {
    let (&first, rest) = arr
        .split_first()
        .ok_or(ToolkitError::EmptyInput { operation: "min_value" })?;

    let mut minimum = first;
    for &value in rest {
        if value < minimum {
            minimum = value;
        }
    }
    Ok(minimum)
}

/// Returns the largest element.
///
/// # Errors
///
/// [`ToolkitError::EmptyInput`] if the slice is empty.
pub fn max_value(arr: &[i32]) -> ToolkitResult<i32> {
    let (&first, rest) = arr
        .split_first()
        .ok_or(ToolkitError::EmptyInput { operation: "max_value" })?;

    let mut maximum = first;
    for &value in rest {
        if value > maximum {
            maximum = value;
        }
    }
    Ok(maximum)
}

/// Counts how many times the maximum value occurs.
///
/// Single left-to-right pass: a new running maximum resets the count to 1,
/// a tie with the running maximum increments it. The final maximum is
/// strictly greater than everything seen before it was set, so the count
/// is the total number of occurrences of the maximum.
///
/// # Errors
///
/// [`ToolkitError::EmptyInput`] if the slice is empty.
pub fn max_occurrence(arr: &[i32]) -> ToolkitResult<usize> {
    let (&first, rest) = arr.split_first().ok_or(ToolkitError::EmptyInput {
        operation: "max_occurrence",
    })?;

    let mut maximum = first;
    let mut count = 1usize;
    for &value in rest {
        if value > maximum {
            maximum = value;
            count = 1;
        } else if value == maximum {
            count += 1;
        }
    }
    Ok(count)
}

/// Returns the sum of all elements.
///
/// Accumulates in `i64`, which cannot overflow for any slice of `i32`
/// that fits in memory.
///
/// # Errors
///
/// [`ToolkitError::EmptyInput`] if the slice is empty.
pub fn sum(arr: &[i32]) -> ToolkitResult<i64> {
    if arr.is_empty() {
        return Err(ToolkitError::EmptyInput { operation: "sum" });
    }
    Ok(arr.iter().map(|&value| i64::from(value)).sum())
}

/// Returns true if the slice is in non-decreasing order.
///
/// Empty and single-element slices are sorted.
#[must_use]
pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Returns true if both slices have the same length and equal elements at
/// every index.
#[must_use]
pub fn compare(first: &[i32], second: &[i32]) -> bool {
    if first.len() != second.len() {
        return false;
    }
    first.iter().zip(second).all(|(a, b)| a == b)
}

/// Rolling hash of the slice contents.
///
/// `h = 1; for v: h = h * 19 + (v ^ (v >> 31))`, wrapping modulo 2^64.
/// The arithmetic shift folds negative values onto their bitwise
/// complement (`-v - 1`), so the added term is never negative.
#[must_use]
pub fn hash_code(arr: &[i32]) -> u64 {
    arr.iter().fold(HASH_SEED, |hash, &value| {
        let folded = value ^ (value >> 31);
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(u64::from(folded.unsigned_abs()))
    })
}
