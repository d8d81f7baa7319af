//! Indicator Store
//!
//! Per-country macro indicator values fetched from the World Bank API. The
//! store is an immutable snapshot taken after all fetches settle; missing
//! entries mean "no data", and an exact zero is a real measurement.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// World Bank indicator series used by the flow map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndicatorKey {
    /// FDI outflows, drives profit repatriation
    FdiOutflows,
    /// FDI inflows, investment relationships
    FdiInflows,
    RemittanceInflows,
    DebtService,
    /// External debt stocks
    ExternalDebt,
    /// Natural resource rents as % of GDP
    ResourceRents,
    Gdp,
    /// Official development assistance received
    AidReceived,
    /// Official development assistance given
    AidGiven,
    Exports,
    Imports,
}

impl IndicatorKey {
    /// World Bank API series code
    pub fn series_code(&self) -> &'static str {
        match self {
            IndicatorKey::FdiOutflows => "BM.KLT.DINV.CD.WD",
            IndicatorKey::FdiInflows => "BX.KLT.DINV.CD.WD",
            IndicatorKey::RemittanceInflows => "BX.TRF.PWKR.CD.DT",
            IndicatorKey::DebtService => "DT.TDS.DECT.CD",
            IndicatorKey::ExternalDebt => "DT.DOD.DECT.CD",
            IndicatorKey::ResourceRents => "NY.GDP.TOTL.RT.ZS",
            IndicatorKey::Gdp => "NY.GDP.MKTP.CD",
            IndicatorKey::AidReceived => "DT.ODA.ALLD.CD",
            IndicatorKey::AidGiven => "DC.ODA.TOTL.CD",
            IndicatorKey::Exports => "NE.EXP.GNFS.CD",
            IndicatorKey::Imports => "NE.IMP.GNFS.CD",
        }
    }

    /// Every series the retrieval layer requests
    pub fn all() -> &'static [IndicatorKey] {
        &[
            IndicatorKey::FdiOutflows,
            IndicatorKey::FdiInflows,
            IndicatorKey::RemittanceInflows,
            IndicatorKey::DebtService,
            IndicatorKey::ExternalDebt,
            IndicatorKey::ResourceRents,
            IndicatorKey::Gdp,
            IndicatorKey::AidReceived,
            IndicatorKey::AidGiven,
            IndicatorKey::Exports,
            IndicatorKey::Imports,
        ]
    }
}

/// Snapshot of indicator values keyed by (country code, indicator)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorStore {
    values: HashMap<String, HashMap<IndicatorKey, f64>>,
}

impl IndicatorStore {
    pub fn new() -> IndicatorStore {
        IndicatorStore::default()
    }

    /// Record a value. Non-finite values are dropped; zero is kept.
    pub fn set(&mut self, country: &str, key: IndicatorKey, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.values
            .entry(country.to_string())
            .or_default()
            .insert(key, value);
    }

    pub fn get(&self, country: &str, key: IndicatorKey) -> Option<f64> {
        self.values.get(country).and_then(|m| m.get(&key)).copied()
    }

    /// Number of (country, indicator) pairs in the snapshot
    pub fn len(&self) -> usize {
        self.values.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_a_real_measurement() {
        let mut store = IndicatorStore::new();
        store.set("BRA", IndicatorKey::AidReceived, 0.0);

        assert_eq!(store.get("BRA", IndicatorKey::AidReceived), Some(0.0));
        assert_eq!(store.get("BRA", IndicatorKey::Gdp), None);
    }

    #[test]
    fn test_non_finite_values_dropped() {
        let mut store = IndicatorStore::new();
        store.set("BRA", IndicatorKey::Gdp, f64::NAN);
        store.set("MEX", IndicatorKey::Gdp, f64::INFINITY);

        assert!(store.get("BRA", IndicatorKey::Gdp).is_none());
        assert!(store.get("MEX", IndicatorKey::Gdp).is_none());
    }

    #[test]
    fn test_series_codes_are_unique() {
        let mut codes: Vec<&str> = IndicatorKey::all().iter().map(|k| k.series_code()).collect();
        let total = codes.len();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }
}
