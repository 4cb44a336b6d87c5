//! Read-only directory over the compiled-in city catalog.
//!
//! This module provides:
//! - Case-insensitive lookup of a city by name
//! - Access to the full catalog in definition order
//! - Nearest-city search by great-circle distance
//!
//! The catalog lives in a `static` slice, so every accessor hands out
//! `&'static` views and readers on any thread need no synchronization.

pub mod cities;

use crate::constants::EARTH_MEAN_RADIUS_KM;
use crate::location::Location;

pub use cities::CITIES;

/// Look up a city by name, ignoring case.
///
/// Both the query and each catalog name are lowercased and compared for
/// equality. The catalog is scanned in definition order and the first match
/// is returned, so if two entries ever shared a name the earlier one wins.
///
/// # Returns
/// * `Some(&Location)` - The matching catalog entry
/// * `None` - If no entry has that name
pub fn lookup_city(name: &str) -> Option<&'static Location> {
    lookup_in(CITIES, name)
}

/// All catalog entries in definition order.
pub fn all_cities() -> &'static [Location] {
    CITIES
}

/// First-match, case-insensitive lookup over an arbitrary slice.
pub(crate) fn lookup_in<'a>(locations: &'a [Location], name: &str) -> Option<&'a Location> {
    let query = name.to_lowercase();
    locations.iter().find(|loc| loc.matches_lowercase(&query))
}

/// Find the catalog entries closest to a coordinate.
///
/// Useful for suggesting a well-known city when the caller only has raw
/// coordinates. Entries at equal distance keep their catalog order.
///
/// # Arguments
/// * `latitude` - Target latitude in degrees
/// * `longitude` - Target longitude in degrees
/// * `max_results` - Maximum number of cities to return
///
/// # Returns
/// Up to `max_results` cities, closest first
pub fn find_nearest(latitude: f64, longitude: f64, max_results: usize) -> Vec<&'static Location> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut with_distance: Vec<(&'static Location, f64)> = CITIES
        .iter()
        .map(|loc| {
            let distance =
                haversine_km(latitude, longitude, loc.latitude(), loc.longitude());
            (loc, distance)
        })
        .collect();

    with_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    with_distance
        .into_iter()
        .take(max_results)
        .map(|(loc, _)| loc)
        .collect()
}

/// Great-circle distance between two locations in kilometres.
pub fn distance_km(a: &Location, b: &Location) -> f64 {
    haversine_km(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Clamp guards against rounding pushing h slightly above 1 for antipodes
    2.0 * EARTH_MEAN_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        for query in ["jerusalem", "Jerusalem", "JERUSALEM", "jErUsAlEm"] {
            let loc = lookup_city(query).unwrap();
            assert_eq!(loc.name(), "Jerusalem");
            assert_eq!(loc.country_code(), "IL");
            assert_eq!(loc.latitude(), 31.76904);
            assert_eq!(loc.longitude(), 35.21633);
            assert_eq!(loc.timezone_id(), "Asia/Jerusalem");
        }
    }

    #[test]
    fn test_lookup_multi_word_and_punctuation() {
        assert_eq!(lookup_city("tel aviv").unwrap().name(), "Tel Aviv");
        assert_eq!(lookup_city("RA'ANANA").unwrap().name(), "Ra'anana");
        assert_eq!(lookup_city("washington dc").unwrap().name(), "Washington DC");
    }

    #[test]
    fn test_lookup_requires_exact_name() {
        assert!(lookup_city("Atlantis").is_none());
        assert!(lookup_city("").is_none());
        assert!(lookup_city("Jerusalem ").is_none());
        assert!(lookup_city("Jerus").is_none());
    }

    #[test]
    fn test_lookup_returns_catalog_reference() {
        let loc = lookup_city("tokyo").unwrap();
        assert!(CITIES.iter().any(|c| std::ptr::eq(c, loc)));
    }

    #[test]
    fn test_lookup_in_first_match_wins() {
        let locations = vec![
            Location::new("Springfield", "US", 39.80172, -89.64371, "America/Chicago").unwrap(),
            Location::new("SPRINGFIELD", "US", 42.10148, -72.58981, "America/New_York").unwrap(),
        ];
        let found = lookup_in(&locations, "springfield").unwrap();
        assert_eq!(found.timezone_id(), "America/Chicago");
    }

    #[test]
    fn test_all_cities_is_the_catalog() {
        assert_eq!(all_cities().len(), 287);
        assert!(std::ptr::eq(all_cities(), CITIES));
        assert_eq!(all_cities().first().unwrap().name(), "Abuja");
        assert_eq!(all_cities().last().unwrap().name(), "Worcester");
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        assert!(haversine_km(40.7128, -74.0060, 40.7128, -74.0060) < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        let london = lookup_city("London").unwrap();
        let paris = lookup_city("Paris").unwrap();
        let d = distance_km(london, paris);
        // Roughly 340 km between the two city centres
        assert!((330.0..=355.0).contains(&d), "London-Paris was {} km", d);
    }

    #[test]
    fn test_haversine_antipodes() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_MEAN_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_find_nearest_self_first() {
        let jerusalem = lookup_city("Jerusalem").unwrap();
        let nearest = find_nearest(jerusalem.latitude(), jerusalem.longitude(), 3);
        assert_eq!(nearest.len(), 3);
        assert_eq!(nearest[0].name(), "Jerusalem");
    }

    #[test]
    fn test_find_nearest_limits() {
        assert!(find_nearest(0.0, 0.0, 0).is_empty());
        assert_eq!(find_nearest(0.0, 0.0, 10_000).len(), CITIES.len());
    }

    #[test]
    fn test_find_nearest_sorted_by_distance() {
        let nearest = find_nearest(40.7128, -74.0060, 10);
        let distances: Vec<f64> = nearest
            .iter()
            .map(|loc| haversine_km(40.7128, -74.0060, loc.latitude(), loc.longitude()))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_find_nearest_duplicate_coordinates_keep_order() {
        // Ashkelon and Ashqelon share coordinates; the earlier spelling comes first
        let ashkelon = lookup_city("Ashkelon").unwrap();
        let nearest = find_nearest(ashkelon.latitude(), ashkelon.longitude(), 2);
        assert_eq!(nearest[0].name(), "Ashkelon");
        assert_eq!(nearest[1].name(), "Ashqelon");
    }
}
