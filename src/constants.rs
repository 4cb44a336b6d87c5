//! Crate-wide constants: coordinate limits, geodesy values and config locations.

// ═══ Coordinate Validation Limits ═══
// Both ranges are inclusive

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// ═══ Geodesy ═══

pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0; // IUGG mean radius

// ═══ Configuration Locations ═══

pub const CONFIG_DIR_NAME: &str = "zmanim";
pub const CONFIG_FILE_NAME: &str = "locations.toml";

// ═══ Test Constants ═══
// Shared fixtures for unit and integration tests

pub mod test_constants {
    pub const TEST_JERUSALEM_LATITUDE: f64 = 31.76904;
    pub const TEST_JERUSALEM_LONGITUDE: f64 = 35.21633;
    pub const TEST_CUSTOM_NAME: &str = "Kibbutz Lavi";
    pub const TEST_CUSTOM_LATITUDE: f64 = 32.7862;
    pub const TEST_CUSTOM_LONGITUDE: f64 = 35.4378;
    pub const TEST_TIMEZONE: &str = "Asia/Jerusalem";
}
