//! Load a handful of cities into a bounded list and print them nearest-first.
//!
//! Pass `-v` to see the list's own trace events:
//!
//! ```text
//! cargo run -p location --example closest_first -- -v
//! ```

use location::{Location, compare};
use point_list::PointList;

const CITIES: [(&str, f64, f64); 6] = [
    ("London", 51.5074, -0.1278),
    ("New York", 40.7128, -74.0060),
    ("Boston", 42.3601, -71.0589),
    ("Providence", 41.8240, -71.4128),
    ("Tokyo", 35.6762, 139.6503),
    ("Hartford", 41.7658, -72.6734),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let verbose = std::env::args().any(|a| a == "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .init();

    let home = Location::new(41.3083, -72.9279)?;

    // Deliberately one short: the last city is turned away.
    let mut list = PointList::with_capacity(CITIES.len() - 1)?;
    for (name, lat, lon) in CITIES {
        if let Err(e) = list.push(Location::new(lat, lon)?) {
            tracing::warn!(name, error = %e, "skipping city");
        }
    }
    tracing::info!(len = list.len(), capacity = list.capacity(), "loaded");

    list.sort_by(compare::DistanceFrom(home));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    list.write_formatted(&mut out, "({lat:.4}, {lon:.4}) \n")?;

    for loc in &list {
        tracing::info!(at = %loc, km = home.distance_to(loc), "distance");
    }

    Ok(())
}
