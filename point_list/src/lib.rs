//! # point_list
//!
//! A bounded, array-backed list of points with an embedded heapsort.
//!
//! ```rust
//! use point_list::PointList;
//!
//! let mut list = PointList::<[i32; 2]>::with_capacity(3).expect("Failed to allocate list");
//! list.push([0, 0]).unwrap();
//! list.push([5, 5]).unwrap();
//! list.push([2, 2]).unwrap();
//! assert!(list.push([1, 1]).is_err());
//!
//! list.sort_by(|a: &[i32; 2], b: &[i32; 2]| (a[0] + a[1]).cmp(&(b[0] + b[1])));
//! assert_eq!(list.as_slice(), &[[0, 0], [2, 2], [5, 5]]);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod heap;
pub mod list;
#[cfg(feature = "std")]
pub mod output;
#[doc(hidden)]
pub mod storage;

pub use error::PointListError;
pub use heap::Compare;
pub use list::PointList;
#[cfg(feature = "std")]
pub use output::FormatPoint;
pub use storage::Storage;
