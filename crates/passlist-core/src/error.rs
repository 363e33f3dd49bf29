use thiserror::Error;

/// Core error type shared across passlist crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The tier name is not one of `normal`, `sensitive`, `aggressive`.
    #[error("invalid complexity tier '{0}': expected normal, sensitive, or aggressive")]
    InvalidComplexityTier(String),
    /// The country code is not present in the catalog.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),
    /// A profile document could not be interpreted.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias for results returned by passlist crates.
pub type Result<T> = std::result::Result<T, Error>;
