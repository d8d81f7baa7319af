//! Partner routing
//!
//! Shared shape for the per-category partner tables: a fixed list of regional
//! groupings, each mapped to weighted partners, with one explicit default.
//! Weights within a route set sum to at most 1.0.

use wealth_core::{FlowCategory, FlowRecord};

/// One weighted partner in a routing table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub partner: &'static str,
    pub weight: f64,
}

impl Route {
    pub const fn new(partner: &'static str, weight: f64) -> Route {
        Route { partner, weight }
    }
}

/// Grouping table: country codes → weighted partner set
pub type RoutingTable = &'static [(&'static [&'static str], &'static [Route])];

/// First matching group wins; unmatched countries take the default set.
pub fn partners_for(
    code: &str,
    table: RoutingTable,
    default: &'static [Route],
) -> &'static [Route] {
    for (group, routes) in table {
        if group.contains(&code) {
            return routes;
        }
    }
    default
}

/// Build a fallback list from literal (source, destination, billions) rows.
pub(crate) fn literal_flows(
    rows: &[(&str, &str, f64)],
    category: FlowCategory,
) -> Vec<FlowRecord> {
    rows.iter()
        .filter_map(|&(source, destination, amount)| {
            FlowRecord::checked(source, destination, amount, category)
        })
        .collect()
}
