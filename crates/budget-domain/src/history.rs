//! Archive of finished periods keyed by [`PeriodId`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{period::PeriodId, snapshot::MonthlySnapshot};

/// At most one snapshot per period; inserting an existing period replaces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MonthlyHistory {
    entries: BTreeMap<PeriodId, MonthlySnapshot>,
}

impl MonthlyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `snapshot` under its own period, returning the entry it replaced.
    pub fn insert(&mut self, snapshot: MonthlySnapshot) -> Option<MonthlySnapshot> {
        self.entries.insert(snapshot.period, snapshot)
    }

    pub fn get(&self, period: &PeriodId) -> Option<&MonthlySnapshot> {
        self.entries.get(period)
    }

    /// Snapshots ordered from the most recent period to the oldest.
    pub fn newest_first(&self) -> Vec<&MonthlySnapshot> {
        self.entries.values().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BudgetLedger;
    use chrono::{TimeZone, Utc};

    fn snapshot(period: &str, total_income: f64) -> MonthlySnapshot {
        let mut snapshot = MonthlySnapshot::from_ledger(
            period.parse().unwrap(),
            &BudgetLedger::new(),
            Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap(),
        );
        snapshot.total_income = total_income;
        snapshot
    }

    #[test]
    fn insert_overwrites_same_period() {
        let mut history = MonthlyHistory::new();
        assert!(history.insert(snapshot("2025-10", 1.0)).is_none());
        let replaced = history.insert(snapshot("2025-10", 2.0));

        assert_eq!(replaced.map(|s| s.total_income), Some(1.0));
        assert_eq!(history.len(), 1);
        let period = "2025-10".parse().unwrap();
        assert_eq!(history.get(&period).unwrap().total_income, 2.0);
    }

    #[test]
    fn newest_first_orders_descending() {
        let mut history = MonthlyHistory::new();
        history.insert(snapshot("2025-09", 0.0));
        history.insert(snapshot("2024-12", 0.0));
        history.insert(snapshot("2025-10", 0.0));

        let order: Vec<String> = history
            .newest_first()
            .iter()
            .map(|s| s.period.to_string())
            .collect();
        assert_eq!(order, vec!["2025-10", "2025-09", "2024-12"]);
    }

    #[test]
    fn serializes_as_object_keyed_by_period() {
        let mut history = MonthlyHistory::new();
        history.insert(snapshot("2025-10", 5000.0));
        let value = serde_json::to_value(&history).unwrap();

        assert_eq!(value["2025-10"]["totalIncome"], 5000.0);
        let back: MonthlyHistory = serde_json::from_value(value).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn rejects_malformed_period_keys() {
        let json = r#"{"2025-1": {}}"#;
        assert!(serde_json::from_str::<MonthlyHistory>(json).is_err());
    }
}
