use thiserror::Error;

/// Convenient result alias for the evroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Predictor failures are deliberately absent here: they are recovered
/// inside scoring with a neutral fallback (see
/// [`crate::predictor::NEUTRAL_AVAILABILITY`]) and only surface as a
/// degraded flag on the result.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a coordinate lies outside latitude [-90, 90] or
    /// longitude [-180, 180], or contains non-finite components.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Raised when a car range is zero, negative, or non-finite.
    #[error("car range must be positive, got {range_km} km")]
    NonPositiveRange { range_km: f64 },

    /// Raised when a nearest-station request is made with no stations.
    #[error("no charging stations were supplied")]
    NoStations,

    /// Raised when a car model identifier is not in the catalog.
    #[error("unknown car model: {id}{}", format_suggestions(.suggestions))]
    UnknownCarModel {
        id: String,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
