//! Filter engine configuration.
//!
//! The distance thresholds used to ship as module-level constants in the
//! mobile client; here they are named configuration held by the engine so
//! deployments can tune them without a code change.

use std::env;

/// Distance thresholds for the filter engine, loaded once at startup.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Effective threshold (km) when the user selects "no distance limit"
    pub max_distance_km: f64,
    /// Radius (km) applied by amenity lookups when a location is known
    pub default_distance_filter_km: f64,
    /// UI slider values at or above this mean "no distance limit"
    pub no_limit_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 100_000.0,
            default_distance_filter_km: 100.0,
            no_limit_threshold: 99.0,
        }
    }
}

impl FilterConfig {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            max_distance_km: parse_var("PARKFINDER_MAX_DISTANCE_KM", defaults.max_distance_km)?,
            default_distance_filter_km: parse_var(
                "PARKFINDER_DEFAULT_DISTANCE_FILTER_KM",
                defaults.default_distance_filter_km,
            )?,
            no_limit_threshold: parse_var(
                "PARKFINDER_NO_LIMIT_THRESHOLD",
                defaults.no_limit_threshold,
            )?,
        })
    }
}

fn parse_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not a valid number")]
    Invalid(&'static str),
}
