//! Aid flows
//!
//! Measured development assistance received, split across likely donors and
//! emitted donor → recipient.

use crate::routing::{partners_for, Route, RoutingTable};
use crate::to_billions;
use wealth_core::{CountryRegistry, FlowCategory, FlowRecord, IndicatorKey, IndicatorStore};

/// Major donor economies; never recipients here
const DONORS: &[&str] = &["USA", "DEU", "GBR", "JPN", "FRA", "CHN"];

/// Aid flows are smaller than the other categories; lower floor
const MAGNITUDE_FLOOR: f64 = 0.5;

const DONOR_TABLE: RoutingTable = &[
    (
        &["MEX", "COL", "BRA", "ARG", "PER", "CHL", "VEN"],
        &[Route::new("USA", 0.7), Route::new("ESP", 0.3)],
    ),
    (
        &["NGA", "GHA", "KEN", "ETH", "ZAF", "EGY", "MAR", "DZA", "COD"],
        &[
            Route::new("USA", 0.3),
            Route::new("GBR", 0.2),
            Route::new("FRA", 0.2),
            Route::new("CHN", 0.3),
        ],
    ),
    (
        &["IND", "PAK", "BGD"],
        &[
            Route::new("USA", 0.4),
            Route::new("GBR", 0.3),
            Route::new("JPN", 0.3),
        ],
    ),
    (
        &["PHL", "VNM", "THA", "MYS", "IDN"],
        &[
            Route::new("JPN", 0.4),
            Route::new("USA", 0.3),
            Route::new("AUS", 0.3),
        ],
    ),
];

const DEFAULT_DONORS: &[Route] = &[
    Route::new("USA", 0.4),
    Route::new("DEU", 0.3),
    Route::new("JPN", 0.3),
];

pub fn synthesize(store: &IndicatorStore, registry: &CountryRegistry) -> Vec<FlowRecord> {
    let mut flows = Vec::new();

    for country in registry.countries() {
        let code = country.code.as_str();
        let raw = match store.get(code, IndicatorKey::AidReceived) {
            Some(v) => v,
            None => continue,
        };

        let total = to_billions(raw);
        if total < MAGNITUDE_FLOOR || DONORS.contains(&code) {
            continue;
        }

        for route in partners_for(code, DONOR_TABLE, DEFAULT_DONORS) {
            flows.extend(FlowRecord::checked(
                route.partner,
                code,
                total * route.weight,
                FlowCategory::Aid,
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
            ("USA", "EGY", 10.0),
            ("USA", "COL", 5.0),
            ("USA", "PAK", 4.0),
            ("USA", "ETH", 3.0),
            ("USA", "KEN", 3.0),
            ("GBR", "IND", 3.0),
            ("GBR", "KEN", 2.0),
            ("GBR", "NGA", 2.0),
            ("CHN", "ETH", 5.0),
            ("CHN", "KEN", 4.0),
        ],
        FlowCategory::Aid,
    )
}
