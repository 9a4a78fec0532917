//! Archived, read-only copies of a finished period.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ledger::BudgetLedger, period::PeriodId, transaction::*};

/// Point-in-time copy of a ledger and its aggregates, tagged with its period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySnapshot {
    #[serde(rename = "month")]
    pub period: PeriodId,
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
    pub total_expenses: f64,
    pub total_income: f64,
    pub balance: f64,
    pub expenses_by_category: BTreeMap<String, f64>,
    pub income_by_source: BTreeMap<String, f64>,
    pub archived_at: DateTime<Utc>,
}

impl MonthlySnapshot {
    /// Copies `ledger` into an owned snapshot; later ledger edits do not reach it.
    pub fn from_ledger(period: PeriodId, ledger: &BudgetLedger, archived_at: DateTime<Utc>) -> Self {
        Self {
            period,
            expenses: ledger.expenses.clone(),
            income: ledger.income.clone(),
            total_expenses: ledger.total_expenses(),
            total_income: ledger.total_income(),
            balance: ledger.balance(),
            expenses_by_category: ledger.expenses_by_category(),
            income_by_source: ledger.income_by_source(),
            archived_at,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.expenses.len() + self.income.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn archived_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap()
    }

    fn populated_ledger() -> BudgetLedger {
        let mut ledger = BudgetLedger::new();
        ledger.add_income(Income::new(NewIncome::new("Salary", 5000.0, "Job", "2025-10-01")));
        ledger.add_expense(Expense::new(NewExpense::new("Rent", 1500.0, "Housing", "2025-10-15")));
        ledger
    }

    #[test]
    fn captures_totals_and_groupings() {
        let period: PeriodId = "2025-10".parse().unwrap();
        let snapshot = MonthlySnapshot::from_ledger(period, &populated_ledger(), archived_at());

        assert_eq!(snapshot.total_income, 5000.0);
        assert_eq!(snapshot.total_expenses, 1500.0);
        assert_eq!(snapshot.balance, 3500.0);
        assert_eq!(snapshot.expenses_by_category["Housing"], 1500.0);
        assert_eq!(snapshot.income_by_source["Job"], 5000.0);
        assert_eq!(snapshot.entry_count(), 2);
    }

    #[test]
    fn later_ledger_edits_do_not_reach_snapshot() {
        let period: PeriodId = "2025-10".parse().unwrap();
        let mut ledger = populated_ledger();
        let snapshot = MonthlySnapshot::from_ledger(period, &ledger, archived_at());

        ledger.expenses[0].amount = 9999.0;
        ledger.clear();

        assert_eq!(snapshot.expenses.len(), 1);
        assert_eq!(snapshot.expenses[0].amount, 1500.0);
        assert_eq!(snapshot.total_expenses, 1500.0);
    }

    #[test]
    fn json_uses_camel_case_and_month_key() {
        let period: PeriodId = "2025-10".parse().unwrap();
        let snapshot = MonthlySnapshot::from_ledger(period, &populated_ledger(), archived_at());
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["month"], "2025-10");
        assert_eq!(value["totalIncome"], 5000.0);
        assert_eq!(value["expensesByCategory"]["Housing"], 1500.0);
        assert_eq!(value["archivedAt"], "2025-11-01T00:00:00Z");

        let back: MonthlySnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn reads_millisecond_timestamps() {
        let json = r#"{
            "month": "2025-10",
            "expenses": [],
            "income": [],
            "totalExpenses": 1500,
            "totalIncome": 5000,
            "balance": 3500,
            "expensesByCategory": {},
            "incomeBySource": {},
            "archivedAt": "2025-11-01T00:00:00.000Z"
        }"#;
        let snapshot: MonthlySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_expenses, 1500.0);
        assert_eq!(snapshot.archived_at, archived_at());
    }
}
