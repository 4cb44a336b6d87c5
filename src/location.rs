//! Named geographic locations used as input to zmanim calculations.
//!
//! A [`Location`] pairs a display name and ISO 3166 country code with
//! coordinates and an IANA timezone identifier. Values built at runtime go
//! through [`Location::new`], which enforces the coordinate ranges. The
//! compiled-in catalog is built with a crate-private `const` constructor and
//! is checked by the test suite instead.

use std::borrow::Cow;
use std::fmt;

use chrono_tz::Tz;
use serde::Serialize;
use sunrise::Coordinates;
use thiserror::Error;

use crate::constants::*;

/// Errors raised when building or interpreting a [`Location`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("latitude {latitude} out of range [-90,90]")]
    LatitudeOutOfRange { latitude: f64 },
    #[error("longitude {longitude} out of range [-180,180]")]
    LongitudeOutOfRange { longitude: f64 },
    #[error("unknown timezone identifier \"{timezone_id}\"")]
    UnknownTimezone { timezone_id: String },
    #[error("coordinates ({latitude}, {longitude}) rejected by solar calculator")]
    Coordinates { latitude: f64, longitude: f64 },
}

/// A named place with coordinates and timezone.
///
/// Fields are private so that every value in circulation either came from
/// [`Location::new`] or from the compiled-in catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    name: Cow<'static, str>,
    country_code: Cow<'static, str>,
    latitude: f64,
    longitude: f64,
    timezone_id: Cow<'static, str>,
}

impl Location {
    /// Create a validated location.
    ///
    /// # Arguments
    /// * `name` - Display name, e.g. "Jerusalem"
    /// * `country_code` - ISO 3166 two-letter code in caps, e.g. "IL"
    /// * `latitude` - Degrees in the range [-90, 90]
    /// * `longitude` - Degrees in the range [-180, 180]
    /// * `timezone_id` - IANA identifier such as "America/Los_Angeles"
    ///
    /// # Returns
    /// * `Ok(Location)` - Fields exactly as given
    /// * `Err(LocationError)` - If either coordinate is out of range (latitude is checked first)
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone_id: impl Into<String>,
    ) -> Result<Self, LocationError> {
        validate_coordinates(latitude, longitude)?;

        Ok(Self {
            name: Cow::Owned(name.into()),
            country_code: Cow::Owned(country_code.into()),
            latitude,
            longitude,
            timezone_id: Cow::Owned(timezone_id.into()),
        })
    }

    /// Unchecked constructor for compiled-in catalog entries.
    pub(crate) const fn classic(
        name: &'static str,
        country_code: &'static str,
        latitude: f64,
        longitude: f64,
        timezone_id: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            country_code: Cow::Borrowed(country_code),
            latitude,
            longitude,
            timezone_id: Cow::Borrowed(timezone_id),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone_id(&self) -> &str {
        &self.timezone_id
    }

    /// Resolve the timezone identifier against the IANA database.
    pub fn timezone(&self) -> Result<Tz, LocationError> {
        self.timezone_id
            .parse::<Tz>()
            .map_err(|_| LocationError::UnknownTimezone {
                timezone_id: self.timezone_id.to_string(),
            })
    }

    /// Coordinates in the form expected by the `sunrise` crate.
    pub fn coordinates(&self) -> Result<Coordinates, LocationError> {
        validate_coordinates(self.latitude, self.longitude)?;
        Coordinates::new(self.latitude, self.longitude).ok_or(LocationError::Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }

    /// Case-insensitive name comparison against an already-lowercased query.
    pub(crate) fn matches_lowercase(&self, lowered_query: &str) -> bool {
        self.name.to_lowercase() == lowered_query
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({:.4}°{}, {:.4}°{})",
            self.name,
            self.country_code,
            self.latitude.abs(),
            if self.latitude >= 0.0 { "N" } else { "S" },
            self.longitude.abs(),
            if self.longitude >= 0.0 { "E" } else { "W" }
        )
    }
}

/// Check a coordinate pair against the inclusive latitude and longitude ranges.
///
/// NaN fails both checks.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), LocationError> {
    if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
        return Err(LocationError::LatitudeOutOfRange { latitude });
    }
    if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude) {
        return Err(LocationError::LongitudeOutOfRange { longitude });
    }
    Ok(())
}

/// Whether a country code has the ISO 3166 alpha-2 shape (two ASCII capitals).
pub fn is_iso_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}
