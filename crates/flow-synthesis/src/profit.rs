//! Profit repatriation flows
//!
//! FDI outflows routed from the investing country to the financial hubs that
//! book the earnings. The primary hub takes 60%, the next two hubs 25% and
//! 15%.

use crate::to_billions;
use wealth_core::{CountryRegistry, FlowCategory, FlowRecord, IndicatorKey, IndicatorStore};

/// Hubs that structurally receive repatriated profits; never contributors
const FINANCIAL_HUBS: &[&str] = &["USA", "GBR", "CHE", "NLD", "JPN", "DEU"];

/// Minimum derived value in billions
const MAGNITUDE_FLOOR: f64 = 1.0;

const PRIMARY_SHARE: f64 = 0.6;
const SECONDARY_SHARES: &[f64] = &[0.25, 0.15];

fn primary_hub(code: &str) -> &'static str {
    match code {
        "CHN" => "USA",
        "RUS" => "CHE",
        _ => "USA",
    }
}

pub fn synthesize(store: &IndicatorStore, registry: &CountryRegistry) -> Vec<FlowRecord> {
    let mut flows = Vec::new();

    for country in registry.countries() {
        let code = country.code.as_str();
        let raw = match store.get(code, IndicatorKey::FdiOutflows) {
            Some(v) => v,
            None => continue,
        };

        let total = to_billions(raw);
        if total < MAGNITUDE_FLOOR || FINANCIAL_HUBS.contains(&code) {
            continue;
        }

        let primary = primary_hub(code);
        flows.extend(FlowRecord::checked(
            code,
            primary,
            total * PRIMARY_SHARE,
            FlowCategory::Profit,
        ));

        let secondaries = FINANCIAL_HUBS.iter().filter(|hub| **hub != primary);
        for (hub, share) in secondaries.zip(SECONDARY_SHARES) {
            flows.extend(FlowRecord::checked(
                code,
                hub,
                total * share,
                FlowCategory::Profit,
            ));
        }
    }

    if flows.is_empty() {
        return fallback();
    }
    flows
}

/// Static fallback used when the snapshot holds no usable FDI outflow data
pub fn fallback() -> Vec<FlowRecord> {
    crate::routing::literal_flows(
        &[
            ("BRA", "USA", 45.0),
            ("BRA", "GBR", 12.0),
            ("MEX", "USA", 40.0),
            ("IND", "USA", 35.0),
            ("IND", "GBR", 25.0),
            ("CHN", "USA", 70.0),
            ("ZAF", "GBR", 18.0),
            ("ZAF", "USA", 14.0),
            ("NGA", "GBR", 15.0),
            ("NGA", "FRA", 12.0),
            ("IDN", "NLD", 22.0),
            ("PHL", "USA", 16.0),
            ("CHL", "USA", 18.0),
            ("COL", "USA", 14.0),
            ("VNM", "JPN", 12.0),
        ],
        FlowCategory::Profit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bra_only_scenario_splits_60_25_15() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("BRA", IndicatorKey::FdiOutflows, 5_000_000_000.0);

        let flows = synthesize(&store, &registry);

        assert_eq!(flows.len(), 3);
        assert_eq!(flows[0].source, "BRA");
        assert_eq!(flows[0].destination, "USA");
        assert!((flows[0].amount - 3.0).abs() < 1e-9);
        assert_eq!(flows[1].destination, "GBR");
        assert!((flows[1].amount - 1.25).abs() < 1e-9);
        assert_eq!(flows[2].destination, "CHE");
        assert!((flows[2].amount - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_hubs_never_contribute() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("USA", IndicatorKey::FdiOutflows, 400_000_000_000.0);
        store.set("MEX", IndicatorKey::FdiOutflows, 8_000_000_000.0);

        let flows = synthesize(&store, &registry);

        assert!(!flows.is_empty());
        assert!(flows.iter().all(|f| f.source != "USA"));
    }

    #[test]
    fn test_below_floor_is_skipped() {
        let registry = CountryRegistry::standard();
        let mut store = IndicatorStore::new();
        store.set("KEN", IndicatorKey::FdiOutflows, 900_000_000.0);

        // Only below-floor data: the category falls back wholesale.
        let flows = synthesize(&store, &registry);
        assert_eq!(flows, fallback());
    }

    #[test]
    fn test_fallback_anchor() {
        let flows = fallback();
        assert_eq!(flows[0].source, "BRA");
        assert_eq!(flows[0].destination, "USA");
        assert_eq!(flows[0].amount, 45.0);
        assert_eq!(flows.len(), 15);
    }
}
