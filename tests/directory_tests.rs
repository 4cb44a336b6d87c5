use chrono::NaiveDate;
use std::collections::HashSet;
use sunrise::{SolarDay, SolarEvent};

use zmanim_locations::constants::*;
use zmanim_locations::location::is_iso_country_code;
use zmanim_locations::{Location, all_cities, find_nearest, lookup_city};

#[test]
fn test_lookup_jerusalem_any_case() {
    let expected = Location::new("Jerusalem", "IL", 31.76904, 35.21633, "Asia/Jerusalem").unwrap();

    for query in ["jerusalem", "Jerusalem", "JERUSALEM"] {
        assert_eq!(lookup_city(query), Some(&expected), "query {:?}", query);
    }
}

#[test]
fn test_lookup_absent_city() {
    assert_eq!(lookup_city("Atlantis"), None);
}

#[test]
fn test_all_cities_contains_tokyo() {
    let cities = all_cities();
    assert_eq!(cities.len(), 287);

    let tokyo = cities.iter().find(|c| c.name() == "Tokyo").unwrap();
    assert_eq!(tokyo.country_code(), "JP");
    assert_eq!(tokyo.timezone_id(), "Asia/Tokyo");
}

#[test]
fn test_all_cities_is_stable() {
    let first: Vec<Location> = all_cities().to_vec();

    // Lookups, hits and misses alike, leave the catalog untouched
    for name in ["Tokyo", "london", "Atlantis", "WORCESTER"] {
        let _ = lookup_city(name);
    }

    let second: Vec<Location> = all_cities().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_catalog_coordinates_in_range() {
    for city in all_cities() {
        assert!(
            (MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&city.latitude()),
            "{} latitude out of range",
            city.name()
        );
        assert!(
            (MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&city.longitude()),
            "{} longitude out of range",
            city.name()
        );
        // Same values must pass the validating constructor
        assert!(
            Location::new(
                city.name(),
                city.country_code(),
                city.latitude(),
                city.longitude(),
                city.timezone_id()
            )
            .is_ok()
        );
    }
}

#[test]
fn test_catalog_fields_well_formed() {
    for city in all_cities() {
        assert!(!city.name().trim().is_empty());
        assert!(
            is_iso_country_code(city.country_code()),
            "{} has country code {:?}",
            city.name(),
            city.country_code()
        );
        assert!(
            city.timezone().is_ok(),
            "{} has unknown timezone {}",
            city.name(),
            city.timezone_id()
        );
    }
}

#[test]
fn test_catalog_names_unique_ignoring_case() {
    let mut seen = HashSet::new();
    for city in all_cities() {
        assert!(
            seen.insert(city.name().to_lowercase()),
            "duplicate city name {}",
            city.name()
        );
    }
}

#[test]
fn test_every_city_finds_itself() {
    for city in all_cities() {
        let found = lookup_city(&city.name().to_uppercase()).unwrap();
        assert!(std::ptr::eq(found, city));
    }
}

#[test]
fn test_find_nearest_from_raw_coordinates() {
    // A point in central Manhattan resolves to New York
    let nearest = find_nearest(40.7580, -73.9855, 1);
    assert_eq!(nearest[0].name(), "New York");
}

#[test]
fn test_coordinates_feed_solar_calculation() {
    let jerusalem = lookup_city("Jerusalem").unwrap();
    let coord = jerusalem.coordinates().unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

    let solar_day = SolarDay::new(coord, date);
    let sunrise = solar_day.event_time(SolarEvent::Sunrise);
    let sunset = solar_day.event_time(SolarEvent::Sunset);

    assert!(sunrise < sunset);

    let tz = jerusalem.timezone().unwrap();
    let local_sunrise = sunrise.with_timezone(&tz);
    // Midsummer sunrise in Jerusalem is a little before 06:00 local time
    assert_eq!(local_sunrise.format("%H").to_string(), "05");
}
