#[cfg(feature = "std")]
use thiserror::Error;

/// Point list errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointListError {
    /// Backing storage for the requested capacity could not be obtained
    #[cfg_attr(
        feature = "std",
        error("could not allocate storage for {capacity} points")
    )]
    AllocationFailure { capacity: usize },

    /// The list is full; nothing was written
    #[cfg_attr(feature = "std", error("list is full (capacity {capacity})"))]
    CapacityExceeded { capacity: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PointListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PointListError::AllocationFailure { capacity } => {
                write!(f, "could not allocate storage for {} points", capacity)
            }
            PointListError::CapacityExceeded { capacity } => {
                write!(f, "list is full (capacity {})", capacity)
            }
        }
    }
}
