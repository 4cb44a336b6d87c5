//! # zmanim-locations
//!
//! A compiled-in directory of well-known cities for zmanim (halachic times of
//! day) calculations. It turns a city name such as "Jerusalem" into the
//! coordinates and IANA timezone a sunrise/sunset engine needs.
//!
//! ## Architecture
//!
//! - **location**: The `Location` value type and its validating constructor
//! - **directory**: The static city catalog, name lookup, and nearest-city search
//! - **config**: Optional `locations.toml` with user-defined locations
//! - **resolver**: Lookup across the catalog and configured locations
//! - **constants**: Coordinate limits and configuration paths
//! - **logger**: Structured logging with visual formatting
//!
//! ```
//! use zmanim_locations::{lookup_city, Location};
//!
//! let jerusalem = lookup_city("JERUSALEM").unwrap();
//! assert_eq!(jerusalem.timezone_id(), "Asia/Jerusalem");
//!
//! assert!(lookup_city("Atlantis").is_none());
//! assert!(Location::new("Pole", "AQ", 90.5, 0.0, "UTC").is_err());
//! ```

pub mod config;
pub mod constants;
pub mod directory;
pub mod location;
pub mod logger;
pub mod resolver;

// Re-export important types for easier access
pub use config::Config;
pub use directory::{all_cities, distance_km, find_nearest, lookup_city};
pub use location::{Location, LocationError};
pub use logger::{Log, LogLevel};
pub use resolver::LocationResolver;
