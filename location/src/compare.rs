//! Stock comparators for sorting locations in a [`point_list::PointList`].
//!
//! ```
//! use location::{Location, compare};
//! use point_list::PointList;
//!
//! let mut list = PointList::with_capacity(3).unwrap();
//! list.push(Location::new(10.0, 0.0)?).unwrap();
//! list.push(Location::new(-5.0, 3.0)?).unwrap();
//! list.push(Location::new(2.0, 2.0)?).unwrap();
//!
//! list.sort_by(compare::by_latitude);
//! let lats: Vec<f64> = list.iter().map(|l| l.lat()).collect();
//! assert_eq!(lats, [-5.0, 2.0, 10.0]);
//! # Ok::<(), location::LocationError>(())
//! ```

use core::cmp::Ordering;

use point_list::Compare;

use crate::Location;

/// South to north.
pub fn by_latitude(a: &Location, b: &Location) -> Ordering {
    a.lat().total_cmp(&b.lat())
}

/// West to east.
pub fn by_longitude(a: &Location, b: &Location) -> Ordering {
    a.lon().total_cmp(&b.lon())
}

/// Ascending `lat + lon`.
pub fn by_coordinate_sum(a: &Location, b: &Location) -> Ordering {
    (a.lat() + a.lon()).total_cmp(&(b.lat() + b.lon()))
}

/// Nearest to the wrapped origin first, by great-circle distance.
#[derive(Debug, Clone, Copy)]
pub struct DistanceFrom(pub Location);

impl Compare<Location> for DistanceFrom {
    fn compare(&self, a: &Location, b: &Location) -> Ordering {
        self.0.distance_to(a).total_cmp(&self.0.distance_to(b))
    }
}
