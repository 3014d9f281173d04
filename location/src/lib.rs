//! # location
//!
//! Latitude/longitude points for [`point_list::PointList`]: equality by
//! coordinates, format templates, and ready-made comparators.
//!
//! ```rust
//! use location::{Location, compare};
//! use point_list::PointList;
//!
//! let mut list = PointList::with_capacity(3).expect("Failed to allocate list");
//! list.push(Location::new(0.0, 0.0)?).unwrap();
//! list.push(Location::new(5.0, 5.0)?).unwrap();
//! list.push(Location::new(2.0, 2.0)?).unwrap();
//!
//! list.sort_by(compare::by_coordinate_sum);
//!
//! let mut out = Vec::new();
//! list.write_formatted(&mut out, "({lat}, {lon}) \n")?;
//! assert_eq!(out, b"(0, 0) (2, 2) (5, 5) \n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compare;
pub mod error;
mod format;
pub mod location;

pub use error::LocationError;
pub use location::{EARTH_RADIUS_KM, Location};
