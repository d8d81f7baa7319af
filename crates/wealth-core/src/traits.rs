use crate::{CountryRegistry, IndicatorStore};
use async_trait::async_trait;

/// Source of indicator snapshots.
///
/// Implementations are best-effort: a failure to obtain one indicator must
/// not abort the others, so the returned store may be partial or empty and
/// the method itself never fails.
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    async fn fetch_indicators(&self, registry: &CountryRegistry) -> IndicatorStore;
}
