//! Widget errors.

use thiserror::Error;

/// Errors raised while setting up or driving a [`TeaserToggle`](crate::TeaserToggle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeaserError {
    /// The configuration cannot produce a usable widget.
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A marked container lacks the structure the widget needs.
    #[error("Malformed container '{container}': {reason}")]
    MalformedContainer {
        /// ID of the container element.
        container: String,
        /// Which part of the structure is missing.
        reason: String,
    },

    /// The ID does not name a container with a toggle control.
    #[error("'{0}' is not a toggleable container")]
    UnknownContainer(String),

    /// A managed element was removed from the document.
    #[error("Element '{0}' is no longer in the document")]
    MissingElement(String),
}

pub type Result<T> = std::result::Result<T, TeaserError>;
