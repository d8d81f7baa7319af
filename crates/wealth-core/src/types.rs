use serde::{Deserialize, Serialize};

/// The six flow types the map displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowCategory {
    /// Earnings from foreign investments sent back to home countries
    Profit,
    /// Payments for raw materials, minerals, oil and other natural resources
    Resources,
    /// Interest and principal payments on international loans
    Debt,
    /// Wealth moved to avoid taxation in home countries
    Tax,
    /// Money sent by workers to family in their home countries
    Remittance,
    /// Official development assistance from governments
    Aid,
}

impl FlowCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowCategory::Profit => "profit",
            FlowCategory::Resources => "resources",
            FlowCategory::Debt => "debt",
            FlowCategory::Tax => "tax",
            FlowCategory::Remittance => "remittance",
            FlowCategory::Aid => "aid",
        }
    }

    /// All categories, in no particular order
    pub fn all() -> [FlowCategory; 6] {
        [
            FlowCategory::Profit,
            FlowCategory::Resources,
            FlowCategory::Debt,
            FlowCategory::Tax,
            FlowCategory::Remittance,
            FlowCategory::Aid,
        ]
    }
}

/// A directed, valued transfer between two countries for one display period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// ISO3 code of the paying country
    pub source: String,
    /// ISO3 code of the receiving country
    pub destination: String,
    /// Amount in USD billions, always positive
    pub amount: f64,
    pub category: FlowCategory,
}

impl FlowRecord {
    /// Build a record, rejecting zero, negative and non-finite amounts.
    pub fn checked(
        source: &str,
        destination: &str,
        amount: f64,
        category: FlowCategory,
    ) -> Option<FlowRecord> {
        if !amount.is_finite() || amount <= 0.0 {
            return None;
        }
        Some(FlowRecord {
            source: source.to_string(),
            destination: destination.to_string(),
            amount,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_rejects_non_positive() {
        assert!(FlowRecord::checked("BRA", "USA", 0.0, FlowCategory::Profit).is_none());
        assert!(FlowRecord::checked("BRA", "USA", -1.0, FlowCategory::Profit).is_none());
        assert!(FlowRecord::checked("BRA", "USA", f64::NAN, FlowCategory::Profit).is_none());
        assert!(FlowRecord::checked("BRA", "USA", f64::INFINITY, FlowCategory::Profit).is_none());
    }

    #[test]
    fn test_checked_accepts_positive() {
        let record = FlowRecord::checked("BRA", "USA", 45.0, FlowCategory::Profit).unwrap();
        assert_eq!(record.source, "BRA");
        assert_eq!(record.destination, "USA");
        assert_eq!(record.amount, 45.0);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&FlowCategory::Remittance).unwrap();
        assert_eq!(json, "\"remittance\"");
    }
}
