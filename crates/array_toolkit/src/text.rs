//! # Text Rendering
//!
//! Bracketed, comma-separated decimal rendering of integer slices:
//! `[1, 2, 3]`, or `[NULL]` for an empty slice.
//!
//! The output buffer grows as needed. An optional hard limit rejects
//! renderings that would exceed it.

use std::fmt::Write;

use tracing::warn;

use crate::error::{ToolkitError, ToolkitResult};

/// Rendering of an empty slice.
pub const EMPTY_TEXT: &str = "[NULL]";

/// Initial capacity reserved for a rendering.
pub const DEFAULT_TEXT_CAPACITY: usize = 2000;

/// Renders the slice with no length limit.
///
/// # Example
///
/// ```rust
/// use array_toolkit::to_string;
///
/// assert_eq!(to_string(&[1, 2, 3]), "[1, 2, 3]");
/// assert_eq!(to_string(&[]), "[NULL]");
/// ```
#[must_use]
pub fn to_string(arr: &[i32]) -> String {
    let mut text = String::with_capacity(estimated_len(arr));
    let Some((&first, rest)) = arr.split_first() else {
        text.push_str(EMPTY_TEXT);
        return text;
    };

    text.push('[');
    push_value(&mut text, first);
    for &value in rest {
        text.push_str(", ");
        push_value(&mut text, value);
    }
    text.push(']');
    text
}

/// Renders the slice, failing if the text would be longer than `max_len` bytes.
///
/// `capacity` is the initial buffer reservation; it is capped at `max_len`.
///
/// # Errors
///
/// [`ToolkitError::TextOverflow`] if the rendering exceeds `max_len`.
pub fn to_string_bounded(
    arr: &[i32],
    max_len: Option<usize>,
    capacity: usize,
) -> ToolkitResult<String> {
    let reserve = max_len.map_or(capacity, |limit| capacity.min(limit));
    let mut text = String::with_capacity(reserve);
    render_into(&mut text, arr, max_len)
        .inspect_err(|err| warn!(len = arr.len(), %err, "array text rendering rejected"))?;
    Ok(text)
}

/// Appends the rendering of `arr` to `text`, checking `limit` after every element.
fn render_into(text: &mut String, arr: &[i32], limit: Option<usize>) -> ToolkitResult<()> {
    let Some((first, rest)) = arr.split_first() else {
        text.push_str(EMPTY_TEXT);
        return check_limit(text.len(), limit);
    };

    text.push('[');
    push_value(text, *first);
    check_limit(text.len() + 1, limit)?;

    for &value in rest {
        text.push_str(", ");
        push_value(text, value);
        check_limit(text.len() + 1, limit)?;
    }

    text.push(']');
    Ok(())
}

/// `required` counts the closing bracket still to be written.
fn check_limit(required: usize, limit: Option<usize>) -> ToolkitResult<()> {
    match limit {
        Some(limit) if required > limit => Err(ToolkitError::TextOverflow { required, limit }),
        _ => Ok(()),
    }
}

fn push_value(text: &mut String, value: i32) {
    // Writing to a String cannot fail.
    let _ = write!(text, "{value}");
}

/// Lower-bound guess: one digit plus ", " per element.
fn estimated_len(arr: &[i32]) -> usize {
    arr.len().saturating_mul(3).max(EMPTY_TEXT.len())
}
