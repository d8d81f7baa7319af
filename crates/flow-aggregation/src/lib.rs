//! Aggregation Engine
//!
//! Folds the unified flow set into the derived views the map renders:
//! totals by category, per-country net balance, detailed per-country stats
//! with bilateral partners, and the aggregate North/South transfer sums.
//! Views are recomputed from scratch on every flow-set change, never
//! patched.

pub mod selection;
pub mod views;

pub use selection::visible_flows;
pub use views::{
    derive_country_stats, derive_net_balance, derive_north_south, derive_totals, AggregateViews,
    CountryFlowStats, DirectionTotals, NorthSouthTotals,
};
