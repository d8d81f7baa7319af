//! Country Registry
//!
//! Fixed catalog of the countries shown on the map, with coordinates and the
//! Global North / Global South classification. The set is closed for this
//! deployment and loaded once at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One mapped country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO3 code, the stable key used in flow records
    pub code: String,
    /// Display name
    pub name: String,
    /// Marker longitude
    pub lon: f64,
    /// Marker latitude
    pub lat: f64,
    /// Global North classification; false means Global South
    pub is_north: bool,
}

/// (code, name, lon, lat, is_north)
const COUNTRY_TABLE: &[(&str, &str, f64, f64, bool)] = &[
    ("USA", "United States", -95.7129, 37.0902, true),
    ("CAN", "Canada", -106.3468, 56.1304, true),
    ("GBR", "United Kingdom", -3.4360, 55.3781, true),
    ("FRA", "France", 2.2137, 46.2276, true),
    ("DEU", "Germany", 10.4515, 51.1657, true),
    ("CHE", "Switzerland", 8.2275, 46.8182, true),
    ("ITA", "Italy", 12.5674, 41.8719, true),
    ("ESP", "Spain", -3.7492, 40.4637, true),
    ("JPN", "Japan", 138.2529, 36.2048, true),
    ("AUS", "Australia", 133.7751, -25.2744, true),
    ("NLD", "Netherlands", 5.2913, 52.1326, true),
    ("CHN", "China", 104.1954, 35.8617, false),
    ("IND", "India", 78.9629, 20.5937, false),
    ("BRA", "Brazil", -51.9253, -14.2350, false),
    ("MEX", "Mexico", -102.5528, 23.6345, false),
    ("ZAF", "South Africa", 22.9375, -30.5595, false),
    ("NGA", "Nigeria", 8.6753, 9.0820, false),
    ("SAU", "Saudi Arabia", 45.0792, 23.8859, false),
    ("IDN", "Indonesia", 113.9213, -0.7893, false),
    ("ARG", "Argentina", -63.6167, -38.4161, false),
    ("COL", "Colombia", -74.2973, 4.5709, false),
    ("VEN", "Venezuela", -66.5897, 6.4238, false),
    ("PER", "Peru", -75.0152, -9.1900, false),
    ("CHL", "Chile", -71.5430, -35.6751, false),
    ("COD", "DR Congo", 21.7587, -4.0383, false),
    ("KEN", "Kenya", 37.9062, -0.0236, false),
    ("ETH", "Ethiopia", 40.4897, 9.1450, false),
    ("EGY", "Egypt", 30.8025, 26.8206, false),
    ("PAK", "Pakistan", 69.3451, 30.3753, false),
    ("BGD", "Bangladesh", 90.3563, 23.6850, false),
    ("PHL", "Philippines", 121.7740, 12.8797, false),
    ("VNM", "Vietnam", 108.2772, 14.0583, false),
    ("MYS", "Malaysia", 101.9758, 4.2105, false),
    ("THA", "Thailand", 100.9925, 15.8700, false),
    ("MAR", "Morocco", -7.0926, 31.7917, false),
    ("DZA", "Algeria", 1.6596, 28.0339, false),
    ("GHA", "Ghana", -1.0800, 7.9465, false),
];

/// Immutable registry of known countries, indexed by ISO3 code
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: Vec<Country>,
    by_code: HashMap<String, usize>,
}

impl CountryRegistry {
    /// The fixed registry for this deployment
    pub fn standard() -> CountryRegistry {
        let countries: Vec<Country> = COUNTRY_TABLE
            .iter()
            .map(|&(code, name, lon, lat, is_north)| Country {
                code: code.to_string(),
                name: name.to_string(),
                lon,
                lat,
                is_north,
            })
            .collect();

        let by_code = countries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.code.clone(), i))
            .collect();

        CountryRegistry { countries, by_code }
    }

    pub fn get(&self, code: &str) -> Option<&Country> {
        self.by_code.get(code).map(|&i| &self.countries[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Classification lookup; None for codes outside the registry
    pub fn is_north(&self, code: &str) -> Option<bool> {
        self.get(code).map(|c| c.is_north)
    }

    /// Countries in catalog order (stable across runs)
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        CountryRegistry::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size_and_split() {
        let registry = CountryRegistry::standard();
        assert_eq!(registry.len(), 37);

        let north = registry.countries().iter().filter(|c| c.is_north).count();
        assert_eq!(north, 11);
        assert_eq!(registry.len() - north, 26);
    }

    #[test]
    fn test_lookup() {
        let registry = CountryRegistry::standard();

        let bra = registry.get("BRA").unwrap();
        assert_eq!(bra.name, "Brazil");
        assert!(!bra.is_north);

        assert_eq!(registry.is_north("CHE"), Some(true));
        assert_eq!(registry.is_north("ZAF"), Some(false));
        assert_eq!(registry.is_north("SGP"), None);
        assert!(registry.get("XYZ").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        let registry = CountryRegistry::standard();
        assert_eq!(registry.by_code.len(), registry.countries().len());
    }
}
