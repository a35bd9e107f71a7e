//! `WeatherFront` - a minimal web front end for multi-day weather lookups
//!
//! This library chains two external lookups (geocoding, then daily forecast)
//! and reshapes the provider responses into a per-day list for rendering.

pub mod config;
pub mod error;
pub mod forecast;
pub mod geocoding;
pub mod models;
pub mod templates;
pub mod web;

// Re-export core types for public API
pub use config::WeatherFrontConfig;
pub use error::WeatherFrontError;
pub use forecast::ForecastClient;
pub use geocoding::GeocodingClient;
pub use models::{DayRecord, GeoResult, WeatherSeries};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherFrontError>;
