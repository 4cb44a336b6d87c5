//! Name resolution across the built-in catalog and user-defined locations.

use anyhow::Result;

use crate::config::{Config, validate_config};
use crate::directory::{CITIES, lookup_city, lookup_in};
use crate::location::Location;

/// Layered lookup: the compiled-in catalog first, then custom locations.
///
/// The catalog stays authoritative, so a custom location that reuses a
/// built-in name is reachable through [`LocationResolver::locations`] but
/// never by name.
#[derive(Debug, Clone, Default)]
pub struct LocationResolver {
    custom: Vec<Location>,
    default_city: Option<String>,
}

impl LocationResolver {
    pub fn new(custom: Vec<Location>) -> Self {
        Self {
            custom,
            default_city: None,
        }
    }

    /// Build a resolver from a configuration, validating it first.
    pub fn from_config(config: &Config) -> Result<Self> {
        validate_config(config)?;
        Ok(Self {
            custom: config.custom_locations()?,
            default_city: config.default_city.clone(),
        })
    }

    /// Set the city returned by [`LocationResolver::default_location`].
    pub fn with_default_city(mut self, name: impl Into<String>) -> Self {
        self.default_city = Some(name.into());
        self
    }

    /// Case-insensitive lookup, built-in cities first.
    pub fn lookup(&self, name: &str) -> Option<&Location> {
        lookup_city(name).or_else(|| lookup_in(&self.custom, name))
    }

    /// Every known location: catalog order, then custom locations in file order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        CITIES.iter().chain(self.custom.iter())
    }

    pub fn custom_locations(&self) -> &[Location] {
        &self.custom
    }

    /// The configured default city, if one is set and resolves.
    pub fn default_location(&self) -> Option<&Location> {
        self.default_city.as_deref().and_then(|name| self.lookup(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocationEntry;
    use crate::constants::test_constants::*;

    fn lavi() -> Location {
        Location::new(
            TEST_CUSTOM_NAME,
            "IL",
            TEST_CUSTOM_LATITUDE,
            TEST_CUSTOM_LONGITUDE,
            TEST_TIMEZONE,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_builtin_and_custom() {
        let resolver = LocationResolver::new(vec![lavi()]);

        assert_eq!(resolver.lookup("tokyo").unwrap().country_code(), "JP");
        assert_eq!(resolver.lookup("KIBBUTZ LAVI").unwrap(), &lavi());
        assert!(resolver.lookup("Atlantis").is_none());
    }

    #[test]
    fn test_builtin_wins_over_custom() {
        let fake_jerusalem = Location::new("jerusalem", "XX", 0.0, 0.0, "UTC").unwrap();
        let resolver = LocationResolver::new(vec![fake_jerusalem]);

        let found = resolver.lookup("Jerusalem").unwrap();
        assert_eq!(found.country_code(), "IL");
        assert_eq!(found.latitude(), TEST_JERUSALEM_LATITUDE);
    }

    #[test]
    fn test_locations_chain_order() {
        let resolver = LocationResolver::new(vec![lavi()]);
        let all: Vec<&Location> = resolver.locations().collect();

        assert_eq!(all.len(), CITIES.len() + 1);
        assert_eq!(all[0].name(), "Abuja");
        assert_eq!(all.last().unwrap().name(), TEST_CUSTOM_NAME);
    }

    #[test]
    fn test_default_location() {
        let resolver = LocationResolver::new(vec![lavi()]);
        assert!(resolver.default_location().is_none());

        let resolver = resolver.with_default_city("kibbutz lavi");
        assert_eq!(resolver.default_location().unwrap().name(), TEST_CUSTOM_NAME);

        let resolver = LocationResolver::default().with_default_city("Nowhere");
        assert!(resolver.default_location().is_none());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            default_city: Some(TEST_CUSTOM_NAME.to_string()),
            locations: vec![LocationEntry {
                name: TEST_CUSTOM_NAME.to_string(),
                country_code: "IL".to_string(),
                latitude: TEST_CUSTOM_LATITUDE,
                longitude: TEST_CUSTOM_LONGITUDE,
                timezone_id: TEST_TIMEZONE.to_string(),
            }],
        };

        let resolver = LocationResolver::from_config(&config).unwrap();
        assert_eq!(resolver.custom_locations(), &[lavi()]);
        assert_eq!(resolver.default_location().unwrap(), &lavi());
    }

    #[test]
    fn test_from_invalid_config() {
        let config = Config {
            default_city: None,
            locations: vec![LocationEntry {
                name: "Pole".to_string(),
                country_code: "AQ".to_string(),
                latitude: -90.5,
                longitude: 0.0,
                timezone_id: "Antarctica/McMurdo".to_string(),
            }],
        };
        assert!(LocationResolver::from_config(&config).is_err());
    }
}
