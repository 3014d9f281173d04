use thiserror::Error;

/// Errors for building and formatting locations
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("coordinate ({lat}, {lon}) is not finite")]
    NonFinite { lat: f64, lon: f64 },

    #[error("latitude {0} outside -90..=90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside -180..=180")]
    LongitudeOutOfRange(f64),

    /// A `{` with no matching `}`
    #[error("unclosed placeholder starting at byte {at}")]
    UnclosedPlaceholder { at: usize },

    /// A lone `}` outside a placeholder; write `}}` for a literal brace
    #[error("unmatched '}}' at byte {at}")]
    UnmatchedBrace { at: usize },

    #[error("unknown field '{0}' (expected 'lat' or 'lon')")]
    UnknownField(String),

    #[error("invalid precision '{0}' (expected '.N')")]
    InvalidPrecision(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LocationError> for std::io::Error {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}
