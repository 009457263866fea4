//! Core error types

use thiserror::Error;

/// Errors raised while parsing motion configuration strings
///
/// Runtime orchestration never fails; only the user-facing string formats
/// (trigger positions, toggle actions, easing names, routes) are validated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// A trigger position such as `"top 70%"` could not be parsed
    #[error("Invalid trigger position: {0}")]
    InvalidPosition(String),

    /// A toggle action list such as `"play none none reverse"` could not be parsed
    #[error("Invalid toggle actions: {0}")]
    InvalidToggleActions(String),

    /// An easing name such as `"power3.out"` is not known
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    /// A route path is not one of the addressable views
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type for folio_core operations
pub type Result<T> = std::result::Result<T, FolioError>;
