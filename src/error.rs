//! Error types for badge layout and printing

use thiserror::Error;

/// Badge error types
#[derive(Error, Debug)]
pub enum BadgeError {
    /// No age band of the badge definition contains the age
    #[error("No valid age range found in badge {category} for age {}", display_age(.age))]
    NoMatchingCategory { category: String, age: Option<i64> },

    /// Stripe color is not a `#RRGGBB` value
    #[error("Invalid stripe color: {0}")]
    InvalidColor(String),

    #[error("Failed to create PDF: {0}")]
    PdfError(String),

    /// Building the document stopped at the given attendee
    #[error("Failed to build badge {index} (badge number {badge_number}): {source}")]
    ArtifactBuildFailure {
        index: usize,
        badge_number: String,
        #[source]
        source: Box<BadgeError>,
    },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read roster: {0}")]
    RosterError(String),
}

fn display_age(age: &Option<i64>) -> String {
    match age {
        Some(age) => age.to_string(),
        None => "unknown".to_string(),
    }
}

/// Result type for badge operations
pub type BadgeResult<T> = Result<T, BadgeError>;
