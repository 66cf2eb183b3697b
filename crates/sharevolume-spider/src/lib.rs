pub mod config;
pub mod error;
pub mod format;
pub mod fs;
pub mod stock;
pub mod telemetry;

pub use config::Config;
pub use error::{ConfigError, LoadError, ValidationError};

/// Shortcut for required API elements.
pub(crate) mod http {
    pub(crate) use dotenv::var;
    pub(crate) use reqwest::Client as HttpClient;
}

/// Human readable time elapsed since `time`, for the debug logs.
pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:.3}s", time.elapsed().as_secs_f64())
}
