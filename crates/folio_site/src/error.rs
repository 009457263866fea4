//! Error types for folio_site

use thiserror::Error;

/// Errors that can occur building or configuring the site
#[derive(Error, Debug)]
pub enum SiteError {
    /// Config TOML failed to parse or had the wrong shape
    #[error("Invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    /// Motion string, easing or route failed to parse
    #[error(transparent)]
    Motion(#[from] folio_core::FolioError),

    /// A video embed URL could not be built
    #[error("Invalid embed URL: {0}")]
    EmbedUrl(#[from] url::ParseError),
}

/// Result type for folio_site operations
pub type Result<T> = std::result::Result<T, SiteError>;
