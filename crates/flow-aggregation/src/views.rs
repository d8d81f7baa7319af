//! Derived views
//!
//! Each view is produced by its own pure reducer over the flow set, so the
//! views are independently testable and mutually consistent. Flows touching
//! codes outside the registry never panic: the unknown side is skipped from
//! per-country views, and a flow with any unresolvable endpoint is excluded
//! from the North/South sums. Category totals always cover every record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wealth_core::{CountryRegistry, FlowCategory, FlowRecord};

/// Inflow or outflow totals for one country, with the per-category split
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionTotals {
    pub total: f64,
    pub per_category: HashMap<FlowCategory, f64>,
}

impl DirectionTotals {
    fn add(&mut self, category: FlowCategory, amount: f64) {
        self.total += amount;
        *self.per_category.entry(category).or_insert(0.0) += amount;
    }
}

/// Detailed flow stats for one country
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryFlowStats {
    pub outflows: DirectionTotals,
    pub inflows: DirectionTotals,
    /// Counterpart code → summed amount sent there. Counterparts keep their
    /// raw code even when outside the registry.
    pub partners_outgoing: HashMap<String, f64>,
    pub partners_incoming: HashMap<String, f64>,
}

impl CountryFlowStats {
    /// Top destination partners by amount, largest first
    pub fn top_outgoing_partners(&self, n: usize) -> Vec<(&str, f64)> {
        ranked(&self.partners_outgoing, n)
    }

    /// Top origin partners by amount, largest first
    pub fn top_incoming_partners(&self, n: usize) -> Vec<(&str, f64)> {
        ranked(&self.partners_incoming, n)
    }
}

fn ranked(partners: &HashMap<String, f64>, n: usize) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = partners.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    // Secondary sort on code keeps ties deterministic
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}

/// Aggregate directional transfer between the two classifications
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NorthSouthTotals {
    pub south_to_north: f64,
    pub north_to_south: f64,
}

impl NorthSouthTotals {
    /// Net transfer toward the North
    pub fn net_transfer(&self) -> f64 {
        self.south_to_north - self.north_to_south
    }

    /// South→North per unit of North→South; None when nothing flows south
    pub fn flow_ratio(&self) -> Option<f64> {
        if self.north_to_south == 0.0 {
            None
        } else {
            Some(self.south_to_north / self.north_to_south)
        }
    }
}

/// All derived views for one flow set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateViews {
    pub totals_by_category: HashMap<FlowCategory, f64>,
    pub net_balance: HashMap<String, f64>,
    pub country_stats: HashMap<String, CountryFlowStats>,
    pub north_south: NorthSouthTotals,
}

impl AggregateViews {
    pub fn compute(flows: &[FlowRecord], registry: &CountryRegistry) -> AggregateViews {
        AggregateViews {
            totals_by_category: derive_totals(flows),
            net_balance: derive_net_balance(flows, registry),
            country_stats: derive_country_stats(flows, registry),
            north_south: derive_north_south(flows, registry),
        }
    }
}

/// Category → summed amount, covering every record in the set
pub fn derive_totals(flows: &[FlowRecord]) -> HashMap<FlowCategory, f64> {
    let mut totals = HashMap::new();
    for flow in flows {
        *totals.entry(flow.category).or_insert(0.0) += flow.amount;
    }
    totals
}

/// Inflows minus outflows per registry country. Every registry country gets
/// an entry, zero included; unknown codes get none.
pub fn derive_net_balance(
    flows: &[FlowRecord],
    registry: &CountryRegistry,
) -> HashMap<String, f64> {
    let mut balance: HashMap<String, f64> = registry
        .countries()
        .iter()
        .map(|c| (c.code.clone(), 0.0))
        .collect();

    for flow in flows {
        if let Some(out) = balance.get_mut(&flow.source) {
            *out -= flow.amount;
        }
        if let Some(inn) = balance.get_mut(&flow.destination) {
            *inn += flow.amount;
        }
    }
    balance
}

/// Per-country directional breakdowns and bilateral partner sums
pub fn derive_country_stats(
    flows: &[FlowRecord],
    registry: &CountryRegistry,
) -> HashMap<String, CountryFlowStats> {
    let mut stats: HashMap<String, CountryFlowStats> = registry
        .countries()
        .iter()
        .map(|c| (c.code.clone(), CountryFlowStats::default()))
        .collect();

    for flow in flows {
        if let Some(entry) = stats.get_mut(&flow.source) {
            entry.outflows.add(flow.category, flow.amount);
            *entry
                .partners_outgoing
                .entry(flow.destination.clone())
                .or_insert(0.0) += flow.amount;
        }
        if let Some(entry) = stats.get_mut(&flow.destination) {
            entry.inflows.add(flow.category, flow.amount);
            *entry
                .partners_incoming
                .entry(flow.source.clone())
                .or_insert(0.0) += flow.amount;
        }
    }
    stats
}

/// Directional sums across the North/South divide. Flows between two
/// countries of the same classification, or with any endpoint outside the
/// registry, contribute to neither bucket.
pub fn derive_north_south(flows: &[FlowRecord], registry: &CountryRegistry) -> NorthSouthTotals {
    let mut totals = NorthSouthTotals::default();

    for flow in flows {
        let source_north = match registry.is_north(&flow.source) {
            Some(v) => v,
            None => continue,
        };
        let dest_north = match registry.is_north(&flow.destination) {
            Some(v) => v,
            None => continue,
        };

        match (source_north, dest_north) {
            (false, true) => totals.south_to_north += flow.amount,
            (true, false) => totals.north_to_south += flow.amount,
            _ => {}
        }
    }
    totals
}
