//! # Search Operations
//!
//! Linear, exhaustive and binary search over integer slices.
//!
//! All searches report "not found" as `None`.

use tracing::trace;

/// Every index at which a searched value occurs, in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchHits {
    /// Matching indices, ascending.
    indices: Vec<usize>,
}

impl SearchHits {
    /// Number of matches.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing matched.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Matching indices, ascending.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Lowest matching index.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// Consumes the hits, returning the index list.
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl IntoIterator for SearchHits {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchHits {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

/// Returns the index of the first element equal to `target`, scanning left to right.
#[must_use]
pub fn search_linear(arr: &[i32], target: i32) -> Option<usize> {
    arr.iter().position(|&value| value == target)
}

/// Finds every occurrence of `target`.
///
/// Each matching index is reported as a `trace` event as it is found.
#[must_use]
pub fn search(arr: &[i32], target: i32) -> SearchHits {
    let mut indices = Vec::new();
    for (index, &value) in arr.iter().enumerate() {
        if value == target {
            trace!(index, target, "search hit");
            indices.push(index);
        }
    }
    trace!(target, count = indices.len(), "search complete");
    SearchHits { indices }
}

/// Binary search over a slice sorted in ascending order.
///
/// Returns the index of *an* element equal to `target` (not necessarily the
/// first when duplicates exist). The result is meaningless if the slice is
/// not sorted; this is not checked.
#[must_use]
pub fn search_binary(arr: &[i32], target: i32) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }

    // Inclusive bounds: the answer, if any, is in arr[low..=high].
    let mut low = 0usize;
    let mut high = arr.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }

    None
}

/// Returns the index of the first element equal to `element`.
///
/// Same contract as [`search_linear`].
#[must_use]
pub fn index_of(arr: &[i32], element: i32) -> Option<usize> {
    arr.iter()
        .enumerate()
        .find_map(|(index, &value)| (value == element).then_some(index))
}
