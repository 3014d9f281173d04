use crate::error::LocationError;
use crate::format;

use bytemuck_derive::{Pod, Zeroable};
use point_list::FormatPoint;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, in decimal degrees.
///
/// Two locations are equal when both coordinates are equal. `Location` is
/// plain old data, so it can be stored in a [`point_list::PointList`].
///
/// # Examples
///
/// ```
/// use location::Location;
///
/// let here = Location::new(41.3083, -72.9279)?;
/// let there = Location::new(40.7128, -74.0060)?;
///
/// assert!(here != there);
/// assert!((here.distance_to(&there) - 112.1).abs() < 0.5);
/// # Ok::<(), location::LocationError>(())
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Location {
    lat: f64,
    lon: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// - `LocationError::NonFinite` if either value is NaN or infinite
    /// - `LocationError::LatitudeOutOfRange` unless `-90 <= lat <= 90`
    /// - `LocationError::LongitudeOutOfRange` unless `-180 <= lon <= 180`
    pub fn new(lat: f64, lon: f64) -> Result<Self, LocationError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(LocationError::NonFinite { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(LocationError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(LocationError::LongitudeOutOfRange(lon));
        }
        Ok(Location { lat, lon })
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_to(&self, other: &Location) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }

    /// Writes this location to `out` through a format template.
    ///
    /// The template is checked in full before anything is written.
    ///
    /// # Errors
    ///
    /// Returns a template error (see [`LocationError`]) or `LocationError::Io`.
    ///
    /// # Examples
    ///
    /// ```
    /// use location::Location;
    ///
    /// let loc = Location::new(41.5, -72.25)?;
    /// let mut out = Vec::new();
    /// loc.write_with(&mut out, "{{{lat:.2}|{lon}}}")?;
    /// assert_eq!(out, b"{41.50|-72.25}");
    /// # Ok::<(), location::LocationError>(())
    /// ```
    pub fn write_with(
        &self,
        out: &mut dyn std::io::Write,
        template: &str,
    ) -> Result<(), LocationError> {
        let pieces = format::parse(template)?;
        format::render(out, &pieces, self)?;
        Ok(())
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl FormatPoint for Location {
    fn write_point(&self, out: &mut dyn std::io::Write, fmt: &str) -> std::io::Result<()> {
        self.write_with(out, fmt).map_err(Into::into)
    }
}
