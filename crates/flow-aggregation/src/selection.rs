//! Country selection view
//!
//! Projection of the flow set to the records shown when a country is
//! selected, optionally narrowed to one category.

use wealth_core::{FlowCategory, FlowRecord};

/// Flows touching `selected` as source or destination. `None` for the
/// filter means all categories.
pub fn visible_flows<'a>(
    flows: &'a [FlowRecord],
    selected: &str,
    filter: Option<FlowCategory>,
) -> Vec<&'a FlowRecord> {
    flows
        .iter()
        .filter(|f| f.source == selected || f.destination == selected)
        .filter(|f| filter.map_or(true, |c| f.category == c))
        .collect()
}
