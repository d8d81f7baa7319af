//! Remittance flows
//!
//! Measured remittance inflows split across likely source countries by
//! migration pattern. These flows run partner → contributor: the receiving
//! country is the one with the indicator. Two-partner sets split 60/40,
//! three-partner sets 60/25/15.

use crate::routing::{partners_for, Route, RoutingTable};
use crate::to_billions;
use wealth_core::{CountryRegistry, FlowCategory, FlowRecord, IndicatorKey, IndicatorStore};

/// Typical remittance-source economies; never receivers here
const REMITTANCE_SOURCES: &[&str] = &[
    "USA", "GBR", "DEU", "FRA", "ITA", "ESP", "CAN", "AUS", "SAU",
];

const MAGNITUDE_FLOOR: f64 = 1.0;

const SOURCE_TABLE: RoutingTable = &[
    // Latin America primarily receives from the USA
    (
        &["MEX", "COL", "BRA", "ARG", "PER", "CHL", "VEN"],
        &[Route::new("USA", 0.6), Route::new("ESP", 0.4)],
    ),
    // South Asia receives from Gulf and Western nations
    (
        &["IND", "PAK", "BGD"],
        &[
            Route::new("USA", 0.6),
            Route::new("GBR", 0.25),
            Route::new("SAU", 0.15),
        ],
    ),
    // African countries often receive from European nations
    (
        &["NGA", "GHA", "KEN", "ETH", "ZAF", "EGY", "MAR", "DZA"],
        &[
            Route::new("GBR", 0.6),
            Route::new("FRA", 0.25),
            Route::new("ITA", 0.15),
        ],
    ),
    // East Asia receives from USA, Japan, Australia
    (
        &["CHN", "PHL", "VNM", "THA", "MYS", "IDN"],
        &[
            Route::new("USA", 0.6),
            Route::new("JPN", 0.25),
            Route::new("AUS", 0.15),
        ],
    ),
];

const DEFAULT_SOURCES: &[Route] = &[Route::new("USA", 0.6), Route::new("DEU", 0.4)];

pub fn synthesize(store: &IndicatorStore, registry: &CountryRegistry) -> Vec<FlowRecord> {
    let mut flows = Vec::new();

    for country in registry.countries() {
        let code = country.code.as_str();
        let raw = match store.get(code, IndicatorKey::RemittanceInflows) {
            Some(v) => v,
            None => continue,
        };

        let total = to_billions(raw);
        if total < MAGNITUDE_FLOOR || REMITTANCE_SOURCES.contains(&code) {
            continue;
        }

        for route in partners_for(code, SOURCE_TABLE, DEFAULT_SOURCES) {
            flows.extend(FlowRecord::checked(
                route.partner,
                code,
                total * route.weight,
                FlowCategory::Remittance,
            ));
        }
    }

    if flows.is_empty() {
        return fallback();
    }
    flows
}

pub fn fallback() -> Vec<FlowRecord> {
    crate::routing::literal_flows(
        &[
            ("USA", "MEX", 35.0),
            ("USA", "IND", 25.0),
            ("USA", "CHN", 18.0),
            ("USA", "PHL", 12.0),
            ("GBR", "IND", 15.0),
            ("GBR", "PAK", 8.0),
            ("GBR", "BGD", 7.0),
            ("FRA", "MAR", 9.0),
            ("FRA", "DZA", 12.0),
            ("ESP", "COL", 6.0),
            ("USA", "COL", 8.0),
        ],
        FlowCategory::Remittance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flows_run_toward_the_receiving_country() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("MEX", IndicatorKey::RemittanceInflows, 60_000_000_000.0);

        let flows = synthesize(&store, &registry);

        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].source, "USA");
        assert_eq!(flows[0].destination, "MEX");
        assert!((flows[0].amount - 36.0).abs() < 1e-9);
        assert_eq!(flows[1].source, "ESP");
        assert!((flows[1].amount - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_weights_sum_to_at_most_one() {
        for (_, routes) in SOURCE_TABLE {
            let total: f64 = routes.iter().map(|r| r.weight).sum();
            assert!(total <= 1.0 + 1e-9);
        }
        let total: f64 = DEFAULT_SOURCES.iter().map(|r| r.weight).sum();
        assert!(total <= 1.0 + 1e-9);
    }

    #[test]
    fn test_source_economies_excluded() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("SAU", IndicatorKey::RemittanceInflows, 40_000_000_000.0);
        store.set("PAK", IndicatorKey::RemittanceInflows, 30_000_000_000.0);

        let flows = synthesize(&store, &registry);
        assert!(flows.iter().all(|f| f.destination != "SAU"));
        assert!(flows.iter().any(|f| f.destination == "PAK"));
    }

    #[test]
    fn test_fallback_is_non_empty() {
        let flows = fallback();
        assert_eq!(flows.len(), 11);
        assert!(flows.iter().all(|f| f.category == FlowCategory::Remittance));
    }
}
