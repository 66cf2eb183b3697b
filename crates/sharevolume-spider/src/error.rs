use thiserror::Error;

/// A failure to load share data, from either the bundled snapshot or the live SEC endpoint.
///
/// None of these ever reach the user verbatim; loaders log them and report a status instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the snapshot file failed.
    #[error("failed to read {path}, error({source})")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response.
    #[error("network error({0})")]
    Network(#[from] reqwest::Error),

    /// The relay answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the JSON we expected.
    #[error("failed to parse JSON, error({0})")]
    Parse(#[from] serde_json::Error),
}

/// An identifier that is not a 10-digit CIK.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please enter a valid 10-digit CIK.")]
pub struct ValidationError {
    pub input: String,
}

/// An environment variable that was set, but to something unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported locale \"{0}\"")]
    Locale(String),

    #[error("{var} must be true or false, got \"{value}\"")]
    Flag { var: &'static str, value: String },
}
