//! Debt service flows
//!
//! Measured debt service routed from the debtor to its likely creditors by
//! geopolitical grouping, with explicit per-table weights.

use crate::routing::{partners_for, Route, RoutingTable};
use crate::to_billions;
use wealth_core::{CountryRegistry, FlowCategory, FlowRecord, IndicatorKey, IndicatorStore};

/// Major creditor economies; never debtors here
const CREDITORS: &[&str] = &["USA", "CHN", "JPN", "DEU", "GBR", "FRA"];

const MAGNITUDE_FLOOR: f64 = 1.0;

const CREDITOR_TABLE: RoutingTable = &[
    // Latin America primarily indebted to the USA
    (
        &["MEX", "COL", "BRA", "ARG", "PER", "CHL", "VEN"],
        &[Route::new("USA", 0.7), Route::new("CHN", 0.3)],
    ),
    // African countries often indebted to China and European nations
    (
        &["NGA", "GHA", "KEN", "ETH", "ZAF", "EGY", "MAR", "DZA", "COD"],
        &[
            Route::new("CHN", 0.6),
            Route::new("FRA", 0.2),
            Route::new("USA", 0.2),
        ],
    ),
    (
        &["IND", "PAK", "BGD"],
        &[
            Route::new("USA", 0.4),
            Route::new("CHN", 0.4),
            Route::new("JPN", 0.2),
        ],
    ),
    (
        &["PHL", "VNM", "THA", "MYS", "IDN"],
        &[
            Route::new("JPN", 0.4),
            Route::new("CHN", 0.3),
            Route::new("USA", 0.3),
        ],
    ),
];

const DEFAULT_CREDITORS: &[Route] = &[
    Route::new("USA", 0.5),
    Route::new("CHN", 0.3),
    Route::new("DEU", 0.2),
];

pub fn synthesize(store: &IndicatorStore, registry: &CountryRegistry) -> Vec<FlowRecord> {
    let mut flows = Vec::new();

    for country in registry.countries() {
        let code = country.code.as_str();
        let raw = match store.get(code, IndicatorKey::DebtService) {
            Some(v) => v,
            None => continue,
        };

        let total = to_billions(raw);
        if total < MAGNITUDE_FLOOR || CREDITORS.contains(&code) {
            continue;
        }

        for route in partners_for(code, CREDITOR_TABLE, DEFAULT_CREDITORS) {
            flows.extend(FlowRecord::checked(
                code,
                route.partner,
                total * route.weight,
                FlowCategory::Debt,
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
            ("ARG", "USA", 20.0),
            ("BRA", "USA", 35.0),
            ("MEX", "USA", 25.0),
            ("COL", "USA", 12.0),
            ("EGY", "USA", 15.0),
            ("PAK", "CHN", 25.0),
            ("KEN", "CHN", 15.0),
            ("ETH", "CHN", 12.0),
            ("IND", "USA", 30.0),
            ("IDN", "USA", 20.0),
            ("ZAF", "USA", 18.0),
            ("NGA", "CHN", 22.0),
        ],
        FlowCategory::Debt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_american_debtor_routes_70_30() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("ARG", IndicatorKey::DebtService, 10_000_000_000.0);

        let flows = synthesize(&store, &registry);

        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].source, "ARG");
        assert_eq!(flows[0].destination, "USA");
        assert!((flows[0].amount - 7.0).abs() < 1e-9);
        assert_eq!(flows[1].destination, "CHN");
        assert!((flows[1].amount - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_african_debtor_routes_to_china_first() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("COD", IndicatorKey::DebtService, 4_000_000_000.0);

        let flows = synthesize(&store, &registry);

        assert_eq!(flows.len(), 3);
        assert_eq!(flows[0].destination, "CHN");
        assert!((flows[0].amount - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_creditors_never_contribute() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("FRA", IndicatorKey::DebtService, 50_000_000_000.0);
        store.set("KEN", IndicatorKey::DebtService, 5_000_000_000.0);

        let flows = synthesize(&store, &registry);
        assert!(flows.iter().all(|f| f.source != "FRA"));
    }

    #[test]
    fn test_fallback_is_non_empty() {
        assert_eq!(fallback().len(), 12);
    }
}
