//! Flow Synthesizers
//!
//! One synthesizer per flow category. Each maps the indicator snapshot to a
//! sequence of flow records using a deterministic allocation heuristic, and
//! falls back to a static literal set when the snapshot holds no usable data
//! for that category. Synthesizers are pure and total: they skip rather than
//! fail.

pub mod aid;
pub mod debt;
pub mod profit;
pub mod remittance;
pub mod resources;
pub mod routing;
pub mod tax;

use wealth_core::{CountryRegistry, FlowRecord, IndicatorStore};

pub use routing::Route;

/// Raw indicator values are USD; flow amounts are USD billions.
pub(crate) fn to_billions(value: f64) -> f64 {
    value / 1_000_000_000.0
}

/// Run all six synthesizers and concatenate their output in the fixed
/// generation order. Order affects only display keys, not any aggregate.
pub fn synthesize_all(store: &IndicatorStore, registry: &CountryRegistry) -> Vec<FlowRecord> {
    let mut flows = Vec::new();

    for (name, records) in [
        ("profit", profit::synthesize(store, registry)),
        ("remittance", remittance::synthesize(store, registry)),
        ("debt", debt::synthesize(store, registry)),
        ("aid", aid::synthesize(store, registry)),
        ("resources", resources::synthesize(store, registry)),
        ("tax", tax::synthesize(store, registry)),
    ] {
        tracing::debug!("synthesized {} {} flows", records.len(), name);
        flows.extend(records);
    }

    flows
}
