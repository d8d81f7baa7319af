//! Flow pipeline
//!
//! Wires retrieval, synthesis and aggregation into one pass: take an
//! indicator snapshot, run the six synthesizers over it, aggregate the
//! unified flow set, and hand the result to the presentation layer. Any
//! change to the snapshot means a full rebuild; nothing is patched in place.

use chrono::{DateTime, Utc};
use flow_aggregation::AggregateViews;
use flow_synthesis::synthesize_all;
use serde::{Deserialize, Serialize};
use wealth_core::{CountryRegistry, FlowRecord, IndicatorSource, IndicatorStore};

/// Everything the presentation layer needs for one display period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowMapSnapshot {
    pub flows: Vec<FlowRecord>,
    pub views: AggregateViews,
    pub generated_at: DateTime<Utc>,
}

pub struct FlowPipeline<S> {
    source: S,
    registry: CountryRegistry,
}

impl<S: IndicatorSource> FlowPipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            registry: CountryRegistry::standard(),
        }
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Fetch a fresh snapshot and build the flow map from it. Retrieval is
    /// best-effort; with no data at all this still yields the full fallback
    /// map.
    pub async fn run(&self) -> FlowMapSnapshot {
        let store = self.source.fetch_indicators(&self.registry).await;
        tracing::info!("indicator snapshot settled with {} values", store.len());
        self.build_from_store(&store)
    }

    /// Pure rebuild from an existing snapshot
    pub fn build_from_store(&self, store: &IndicatorStore) -> FlowMapSnapshot {
        build_snapshot(&self.registry, store)
    }
}

/// Synthesize and aggregate one immutable indicator snapshot.
pub fn build_snapshot(registry: &CountryRegistry, store: &IndicatorStore) -> FlowMapSnapshot {
    let flows = synthesize_all(store, registry);
    let views = AggregateViews::compute(&flows, registry);
    tracing::info!("built flow map with {} flows", flows.len());

    FlowMapSnapshot {
        flows,
        views,
        generated_at: Utc::now(),
    }
}
