//! # Array Toolkit
//!
//! Classic array algorithms over caller-owned `i32` slices.
//!
//! ## Design Principles
//!
//! 1. **Borrow, never store** - every operation takes the caller's slice and returns
//! 2. **Explicit aliasing** - in-place operations hand back the same slice, copying
//!    operations return a fresh `Vec` / `String` owned by the caller
//! 3. **No sentinels** - "not found" is `None`, invalid input is a [`ToolkitError`]
//! 4. **No global state** - the operation table is a plain value ([`ArrayToolkit`])
//!
//! ## Example
//!
//! ```rust
//! use array_toolkit::ArrayToolkit;
//!
//! let toolkit = ArrayToolkit::new();
//!
//! let mut data = [4, 7, 2, 9, 1];
//! toolkit.sort(&mut data);
//! assert_eq!(data, [1, 2, 4, 7, 9]);
//!
//! assert_eq!(toolkit.search_bin(&data, 7), Some(3));
//! assert_eq!(toolkit.to_string(&data).unwrap(), "[1, 2, 4, 7, 9]");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod range;
pub mod search;
pub mod sort;
pub mod text;
pub mod toolkit;

pub use aggregate::{compare, hash_code, is_sorted, max_occurrence, max_value, min_value, sum};
pub use config::ToolkitConfig;
pub use error::{ToolkitError, ToolkitResult};
pub use range::{concat, copy_of_range, reverse, rotate};
pub use search::{index_of, search, search_binary, search_linear, SearchHits};
pub use sort::{partition, sort, sort_range, PivotRecord};
pub use text::{to_string, to_string_bounded};
pub use toolkit::{ArrayToolkit, Operation};
