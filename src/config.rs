//! User configuration: extra locations and a default city.
//!
//! The compiled-in catalog covers a few hundred well-known cities. Users who
//! live elsewhere can declare their own locations in `locations.toml`, which
//! is searched at:
//! 1. **XDG_CONFIG_HOME**/zmanim/locations.toml
//! 2. The platform configuration directory reported by `dirs`, same subpath
//!
//! ```toml
//! default_city = "Kibbutz Lavi"     # optional, must resolve
//!
//! [[locations]]
//! name = "Kibbutz Lavi"
//! country_code = "IL"
//! latitude = 32.7862
//! longitude = 35.4378
//! timezone_id = "Asia/Jerusalem"
//! ```
//!
//! Every custom entry goes through [`Location::new`], so the coordinate
//! ranges hold for configured locations exactly as for hand-built ones.
//! Timezone identifiers must resolve in the IANA database. Odd country codes
//! and names shadowed by the catalog only produce warnings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::directory::{lookup_city, lookup_in};
use crate::location::{Location, LocationError, is_iso_country_code};
use crate::logger::Log;

/// A location as written in the configuration file, before validation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LocationEntry {
    pub name: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone_id: String,
}

impl LocationEntry {
    /// Build a validated [`Location`] from this entry.
    pub fn to_location(&self) -> Result<Location, LocationError> {
        Location::new(
            self.name.clone(),
            self.country_code.clone(),
            self.latitude,
            self.longitude,
            self.timezone_id.clone(),
        )
    }
}

/// Contents of `locations.toml`. A missing file is the default (empty) config.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// City used when the caller does not name one
    pub default_city: Option<String>,
    /// User-defined locations, searched after the built-in catalog
    #[serde(default)]
    pub locations: Vec<LocationEntry>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::config_dir().context("Could not determine config directory")?,
        };
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from the standard location.
    ///
    /// # Returns
    /// * `Ok(Config)` - Parsed and validated configuration, or the default if no file exists
    /// * `Err(_)` - If the file exists but cannot be read, parsed, or validated
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Log::log_debug(&format!(
                "No configuration at {}, using built-in catalog only",
                config_path.display()
            ));
            return Ok(Self::default());
        }

        let config = Self::load_from_path(&config_path)?;
        config.log_config(&config_path);
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        validate_config(&config)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Validated custom locations, in file order.
    pub fn custom_locations(&self) -> Result<Vec<Location>> {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.to_location().with_context(|| {
                    format!("Custom location #{} (\"{}\") is invalid", index + 1, entry.name)
                })
            })
            .collect()
    }

    pub fn log_config(&self, path: &Path) {
        Log::log_block_start(&format!("Loaded configuration from {}", path.display()));
        Log::log_indented(&format!(
            "Default city: {}",
            self.default_city.as_deref().unwrap_or("(none)")
        ));
        Log::log_indented(&format!("Custom locations: {}", self.locations.len()));
        for entry in &self.locations {
            if let Ok(location) = entry.to_location() {
                Log::log_indented(&format!("  {}", location));
            }
        }
    }
}

/// Check a configuration for errors, logging warnings for suspicious entries.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut seen: Vec<String> = Vec::with_capacity(config.locations.len());

    for (index, entry) in config.locations.iter().enumerate() {
        let position = index + 1;

        if entry.name.trim().is_empty() {
            anyhow::bail!("Custom location #{} has an empty name", position);
        }

        let location = entry.to_location().with_context(|| {
            format!("Custom location #{} (\"{}\") is invalid", position, entry.name)
        })?;

        location.timezone().with_context(|| {
            format!(
                "Custom location #{} (\"{}\") has an unusable timezone",
                position, entry.name
            )
        })?;

        if !is_iso_country_code(&entry.country_code) {
            Log::log_warning(&format!(
                "Custom location \"{}\" has non-standard country code \"{}\" (expected two capital letters)",
                entry.name, entry.country_code
            ));
        }

        if lookup_city(&entry.name).is_some() {
            Log::log_warning(&format!(
                "Custom location \"{}\" is shadowed by a built-in city and will never be returned by name",
                entry.name
            ));
        }

        let lowered = entry.name.to_lowercase();
        if seen.contains(&lowered) {
            Log::log_warning(&format!(
                "Custom location \"{}\" is declared more than once; the first declaration wins",
                entry.name
            ));
        } else {
            seen.push(lowered);
        }
    }

    if let Some(default_city) = &config.default_city {
        let custom = config.custom_locations()?;
        if lookup_city(default_city).is_none() && lookup_in(&custom, default_city).is_none() {
            anyhow::bail!(
                "Default city \"{}\" is neither a built-in city nor a custom location",
                default_city
            );
        }
    }

    Ok(())
}
