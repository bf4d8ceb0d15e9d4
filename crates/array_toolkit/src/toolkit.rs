//! # Array Toolkit Facade
//!
//! One value exposing the whole operation set under its historical table
//! names. There is no global instance and no initialisation step: build an
//! [`ArrayToolkit`] and call it.
//!
//! ```text
//! caller slice -> ArrayToolkit::<operation>() -> value / same slice / new Vec
//! ```

use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::aggregate;
use crate::config::ToolkitConfig;
use crate::error::{ToolkitError, ToolkitResult};
use crate::range;
use crate::search::{self, SearchHits};
use crate::sort;
use crate::text;

/// The operations exposed by [`ArrayToolkit`], in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Copy of `[start, end)`.
    CopyOfRange,
    /// In-place right rotation.
    Rotate,
    /// First matching index, linear scan.
    SearchLin,
    /// All matching indices.
    Search,
    /// Binary search over sorted input.
    SearchBin,
    /// In-place reversal.
    Reverse,
    /// Largest element.
    MaxValue,
    /// Smallest element.
    MinValue,
    /// Occurrences of the largest element.
    GetMaxOccurrence,
    /// Bracketed text rendering.
    ToString,
    /// Dual-pivot quicksort.
    Sort,
    /// Structural equality.
    Compare,
    /// Sum of elements.
    Sum,
    /// Non-decreasing order check.
    IsSorted,
    /// Concatenation into a new buffer.
    Concat,
    /// First matching index.
    IndexOf,
    /// Rolling hash.
    HashCode,
}

impl Operation {
    /// Every operation, in table order.
    pub const ALL: [Self; 17] = [
        Self::CopyOfRange,
        Self::Rotate,
        Self::SearchLin,
        Self::Search,
        Self::SearchBin,
        Self::Reverse,
        Self::MaxValue,
        Self::MinValue,
        Self::GetMaxOccurrence,
        Self::ToString,
        Self::Sort,
        Self::Compare,
        Self::Sum,
        Self::IsSorted,
        Self::Concat,
        Self::IndexOf,
        Self::HashCode,
    ];

    /// Table name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CopyOfRange => "copyOfRange",
            Self::Rotate => "rotate",
            Self::SearchLin => "searchLIN",
            Self::Search => "search",
            Self::SearchBin => "searchBIN",
            Self::Reverse => "reverse",
            Self::MaxValue => "maxValue",
            Self::MinValue => "minValue",
            Self::GetMaxOccurrence => "getMaxOccurrence",
            Self::ToString => "toString",
            Self::Sort => "sort",
            Self::Compare => "compare",
            Self::Sum => "sum",
            Self::IsSorted => "isSorted",
            Self::Concat => "concat",
            Self::IndexOf => "indexOf",
            Self::HashCode => "hashCode",
        }
    }

    /// Returns true if the operation mutates the caller's slice and hands it back.
    #[must_use]
    pub const fn is_in_place(self) -> bool {
        matches!(self, Self::Rotate | Self::Reverse | Self::Sort)
    }

    /// Returns true if the operation returns a newly allocated buffer.
    #[must_use]
    pub const fn allocates(self) -> bool {
        matches!(
            self,
            Self::CopyOfRange | Self::Concat | Self::ToString | Self::Search
        )
    }

    /// Looks an operation up by its table name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stateless operation table over `i32` slices.
///
/// The only state is the [`ToolkitConfig`], which governs text rendering.
///
/// # Example
///
/// ```rust
/// use array_toolkit::ArrayToolkit;
///
/// let toolkit = ArrayToolkit::new();
/// let mut data = [1, 2, 3, 4, 5];
///
/// toolkit.rotate(&mut data, 2).unwrap();
/// assert_eq!(data, [4, 5, 1, 2, 3]);
/// assert_eq!(toolkit.sum(&data).unwrap(), 15);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayToolkit {
    config: ToolkitConfig,
}

#[allow(clippy::unused_self)]
impl ArrayToolkit {
    /// Creates a toolkit with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a toolkit with the given config.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvalidConfig`] if the config fails validation.
    pub fn with_config(config: ToolkitConfig) -> ToolkitResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a toolkit from a TOML config file.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvalidConfig`] if the file cannot be read or is invalid.
    pub fn from_config_file(path: impl AsRef<Path>) -> ToolkitResult<Self> {
        Ok(Self {
            config: ToolkitConfig::from_file(path)?,
        })
    }

    /// Active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Copy of `[start, end)` as a new buffer.
    ///
    /// # Errors
    ///
    /// See [`range::copy_of_range`].
    pub fn copy_of_range(&self, arr: &[i32], start: usize, end: usize) -> ToolkitResult<Vec<i32>> {
        range::copy_of_range(arr, start, end)
    }

    /// Rotates right by `k mod len`, in place.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::ZeroLengthRotate`] on an empty slice.
    pub fn rotate<'a>(&self, arr: &'a mut [i32], k: usize) -> ToolkitResult<&'a mut [i32]> {
        range::rotate(arr, k)
    }

    /// First index of `target`, linear scan.
    #[must_use]
    pub fn search_lin(&self, arr: &[i32], target: i32) -> Option<usize> {
        search::search_linear(arr, target)
    }

    /// Every index of `target`.
    #[must_use]
    pub fn search(&self, arr: &[i32], target: i32) -> SearchHits {
        search::search(arr, target)
    }

    /// Binary search; `arr` must be sorted ascending.
    #[must_use]
    pub fn search_bin(&self, arr: &[i32], target: i32) -> Option<usize> {
        search::search_binary(arr, target)
    }

    /// Reverses in place.
    pub fn reverse<'a>(&self, arr: &'a mut [i32]) -> &'a mut [i32] {
        range::reverse(arr)
    }

    /// Largest element.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::EmptyInput`] on an empty slice.
    pub fn max_value(&self, arr: &[i32]) -> ToolkitResult<i32> {
        log_rejected(aggregate::max_value(arr))
    }

    /// Smallest element.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::EmptyInput`] on an empty slice.
    pub fn min_value(&self, arr: &[i32]) -> ToolkitResult<i32> {
        log_rejected(aggregate::min_value(arr))
    }

    /// Number of occurrences of the largest element.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::EmptyInput`] on an empty slice.
    pub fn get_max_occurrence(&self, arr: &[i32]) -> ToolkitResult<usize> {
        log_rejected(aggregate::max_occurrence(arr))
    }

    /// Text rendering, subject to the configured length limit.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::TextOverflow`] if the rendering exceeds `max_text_len`.
    pub fn to_string(&self, arr: &[i32]) -> ToolkitResult<String> {
        match self.config.max_text_len {
            None => Ok(text::to_string(arr)),
            limit => text::to_string_bounded(arr, limit, self.config.text_capacity),
        }
    }

    /// Sorts in place with dual-pivot quicksort.
    pub fn sort<'a>(&self, arr: &'a mut [i32]) -> &'a mut [i32] {
        sort::sort(arr);
        arr
    }

    /// Structural equality.
    #[must_use]
    pub fn compare(&self, first: &[i32], second: &[i32]) -> bool {
        aggregate::compare(first, second)
    }

    /// Sum of all elements.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::EmptyInput`] on an empty slice.
    pub fn sum(&self, arr: &[i32]) -> ToolkitResult<i64> {
        log_rejected(aggregate::sum(arr))
    }

    /// Non-decreasing order check.
    #[must_use]
    pub fn is_sorted(&self, arr: &[i32]) -> bool {
        aggregate::is_sorted(arr)
    }

    /// `first` followed by `second`, as a new buffer.
    #[must_use]
    pub fn concat(&self, first: &[i32], second: &[i32]) -> Vec<i32> {
        range::concat(first, second)
    }

    /// First index of `element`.
    #[must_use]
    pub fn index_of(&self, arr: &[i32], element: i32) -> Option<usize> {
        search::index_of(arr, element)
    }

    /// Rolling hash of the contents.
    #[must_use]
    pub fn hash_code(&self, arr: &[i32]) -> u64 {
        aggregate::hash_code(arr)
    }
}

fn log_rejected<T>(result: ToolkitResult<T>) -> ToolkitResult<T> {
    result.inspect_err(|err| {
        if let ToolkitError::EmptyInput { operation } = err {
            warn!(operation, "empty array rejected");
        }
    })
}
