//! Resource extraction flows
//!
//! Derived from resource rents as a share of GDP: the category needs BOTH the
//! rents percentage and GDP for a country, and skips it when either is
//! absent. Value = GDP × rents% / 100, routed exporter → importer.

use crate::routing::{partners_for, Route, RoutingTable};
use crate::to_billions;
use wealth_core::{CountryRegistry, FlowCategory, FlowRecord, IndicatorKey, IndicatorStore};

/// Major resource importers; never exporters here
const RESOURCE_IMPORTERS: &[&str] = &["USA", "CHN", "JPN", "DEU", "IND"];

/// Resource rents are noisy at small scale; higher floor
const MAGNITUDE_FLOOR: f64 = 5.0;

const IMPORTER_TABLE: RoutingTable = &[
    // Oil exporters primarily sell to USA and China
    (
        &["SAU", "VEN", "NGA", "DZA"],
        &[
            Route::new("USA", 0.4),
            Route::new("CHN", 0.4),
            Route::new("IND", 0.2),
        ],
    ),
    // South American exporters primarily sell to China
    (
        &["BRA", "CHL", "PER", "COL"],
        &[
            Route::new("CHN", 0.5),
            Route::new("USA", 0.3),
            Route::new("JPN", 0.2),
        ],
    ),
    (
        &["ZAF", "COD", "GHA"],
        &[
            Route::new("CHN", 0.6),
            Route::new("USA", 0.2),
            Route::new("GBR", 0.2),
        ],
    ),
    (
        &["IDN", "MYS", "THA"],
        &[
            Route::new("CHN", 0.5),
            Route::new("JPN", 0.3),
            Route::new("USA", 0.2),
        ],
    ),
];

const DEFAULT_IMPORTERS: &[Route] = &[
    Route::new("CHN", 0.4),
    Route::new("USA", 0.4),
    Route::new("DEU", 0.2),
];

pub fn synthesize(store: &IndicatorStore, registry: &CountryRegistry) -> Vec<FlowRecord> {
    let mut flows = Vec::new();

    for country in registry.countries() {
        let code = country.code.as_str();
        let rents_pct = match store.get(code, IndicatorKey::ResourceRents) {
            Some(v) => v,
            None => continue,
        };
        let gdp = match store.get(code, IndicatorKey::Gdp) {
            Some(v) => v,
            None => continue,
        };

        let total = to_billions(gdp * rents_pct / 100.0);
        if total < MAGNITUDE_FLOOR || RESOURCE_IMPORTERS.contains(&code) {
            continue;
        }

        for route in partners_for(code, IMPORTER_TABLE, DEFAULT_IMPORTERS) {
            flows.extend(FlowRecord::checked(
                code,
                route.partner,
                total * route.weight,
                FlowCategory::Resources,
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
            ("SAU", "USA", 60.0),
            ("SAU", "CHN", 40.0),
            ("BRA", "CHN", 50.0),
            ("ZAF", "CHN", 35.0),
            ("NGA", "USA", 30.0),
            ("NGA", "CHN", 25.0),
            ("IDN", "CHN", 35.0),
            ("IDN", "JPN", 20.0),
            ("COL", "USA", 25.0),
            ("CHL", "CHN", 40.0),
            ("PER", "CHN", 30.0),
            ("COD", "CHN", 25.0),
            ("VEN", "USA", 20.0),
        ],
        FlowCategory::Resources,
    )
}
