//! Current-versus-previous period deltas.

use budget_domain::{BudgetLedger, MonthlySnapshot};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Income or expense movement between the previous period and the live ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricChange {
    pub current: f64,
    pub previous: f64,
    pub difference: f64,
    /// One-decimal percentage text, or `"0"` when there is no positive base.
    pub percent_change: String,
}

impl MetricChange {
    pub fn new(current: f64, previous: f64) -> Self {
        let difference = current - previous;
        Self {
            current,
            previous,
            difference,
            percent_change: percent_change(difference, previous),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub current: f64,
    pub previous: f64,
    pub difference: f64,
}

impl BalanceChange {
    pub fn new(current: f64, previous: f64) -> Self {
        Self {
            current,
            previous,
            difference: current - previous,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthComparison {
    pub income: MetricChange,
    pub expenses: MetricChange,
    pub balance: BalanceChange,
}

/// Compares the live ledger against `previous`; `None` when nothing was archived for it.
pub fn compare(ledger: &BudgetLedger, previous: Option<&MonthlySnapshot>) -> Option<MonthComparison> {
    let previous = previous?;
    Some(MonthComparison {
        income: MetricChange::new(ledger.total_income(), previous.total_income),
        expenses: MetricChange::new(ledger.total_expenses(), previous.total_expenses),
        balance: BalanceChange::new(ledger.balance(), previous.balance),
    })
}

/// Formats `difference / previous * 100` to one decimal place.
///
/// Ties round away from zero on the exact binary value, so `0.25` renders as
/// `"0.3"` and `-0.25` as `"-0.3"`. A non-positive `previous` yields the literal
/// `"0"` instead of dividing.
pub fn percent_change(difference: f64, previous: f64) -> String {
    if previous > 0.0 {
        one_decimal(difference / previous * 100.0)
    } else {
        "0".to_string()
    }
}

fn one_decimal(value: f64) -> String {
    // Negative zero renders as "0.0".
    let sign = if value < 0.0 { "-" } else { "" };
    match Decimal::from_f64_retain(value.abs()) {
        Some(magnitude) => {
            let rounded =
                magnitude.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{sign}{rounded:.1}")
        }
        None => format!("{value:.1}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_domain::{Expense, Income, NewExpense, NewIncome};
    use chrono::{TimeZone, Utc};

    fn ledger(income: f64, expenses: f64) -> BudgetLedger {
        let mut ledger = BudgetLedger::new();
        ledger.add_income(Income::new(NewIncome::new("in", income, "Job", "2025-11-01")));
        ledger.add_expense(Expense::new(NewExpense::new("out", expenses, "Misc", "2025-11-02")));
        ledger
    }

    fn snapshot(income: f64, expenses: f64) -> MonthlySnapshot {
        MonthlySnapshot::from_ledger(
            "2025-10".parse().unwrap(),
            &ledger(income, expenses),
            Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn absent_previous_yields_no_comparison() {
        assert!(compare(&ledger(1.0, 1.0), None).is_none());
    }

    #[test]
    fn reports_differences_and_percentages() {
        let previous = snapshot(4000.0, 1000.0);
        let comparison = compare(&ledger(5000.0, 1500.0), Some(&previous)).unwrap();

        assert_eq!(comparison.income.difference, 1000.0);
        assert_eq!(comparison.income.percent_change, "25.0");
        assert_eq!(comparison.expenses.difference, 500.0);
        assert_eq!(comparison.expenses.percent_change, "50.0");
        assert_eq!(comparison.balance.current, 3500.0);
        assert_eq!(comparison.balance.previous, 3000.0);
        assert_eq!(comparison.balance.difference, 500.0);
    }

    #[test]
    fn zero_previous_saturates_to_literal_zero() {
        let previous = snapshot(0.0, 0.0);
        let comparison = compare(&ledger(5000.0, 20.0), Some(&previous)).unwrap();

        assert_eq!(comparison.income.percent_change, "0");
        assert_eq!(comparison.expenses.percent_change, "0");
        assert_eq!(comparison.income.difference, 5000.0);
    }

    #[test]
    fn decreases_render_negative_percentages() {
        assert_eq!(percent_change(-250.0, 1000.0), "-25.0");
        assert_eq!(percent_change(1.0, 3.0), "33.3");
        assert_eq!(percent_change(0.0, 10.0), "0.0");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(percent_change(401.0 - 400.0, 400.0), "0.3");
        assert_eq!(percent_change(409.0 - 400.0, 400.0), "2.3");
        assert_eq!(percent_change(399.0 - 400.0, 400.0), "-0.3");
        assert_eq!(percent_change(-0.0, 400.0), "0.0");
    }

    #[test]
    fn whole_percentages_keep_one_decimal() {
        assert_eq!(percent_change(400.0, 400.0), "100.0");
        assert_eq!(percent_change(-400.0, 400.0), "-100.0");
    }

    #[test]
    fn balance_has_no_percentage_field() {
        let previous = snapshot(4000.0, 1000.0);
        let comparison = compare(&ledger(5000.0, 1500.0), Some(&previous)).unwrap();
        let value = serde_json::to_value(&comparison).unwrap();

        assert_eq!(value["income"]["percentChange"], "25.0");
        assert!(value["balance"].get("percentChange").is_none());
    }
}
