//! Plain-text formatting shared by the command handlers.

use budget_core::comparison::MetricChange;
use budget_domain::{MonthlySnapshot, PeriodId};

pub fn amount(value: f64) -> String {
    format!("{value:.2}")
}

pub fn signed_amount(value: f64) -> String {
    if value == 0.0 {
        return amount(0.0);
    }
    format!("{value:+.2}")
}

/// `November 2025 (2025-11)`
pub fn period_label(period: &PeriodId) -> String {
    format!("{} ({period})", period.display_label())
}

pub fn metric_line(label: &str, change: &MetricChange) -> String {
    format!(
        "{:<10}{:>12} vs {:>12}  {} ({}%)",
        format!("{label}:"),
        amount(change.current),
        amount(change.previous),
        signed_amount(change.difference),
        change.percent_change
    )
}

pub fn history_row(snapshot: &MonthlySnapshot) -> String {
    format!(
        "{}  {:<15} income {:>10}  expenses {:>10}  balance {:>10}  ({} entries)",
        snapshot.period,
        snapshot.period.display_label(),
        amount(snapshot.total_income),
        amount(snapshot.total_expenses),
        amount(snapshot.balance),
        snapshot.entry_count()
    )
}
