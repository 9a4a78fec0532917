//! Captures the live ledger into an archived [`MonthlySnapshot`].

use budget_domain::{BudgetLedger, MonthlySnapshot, PeriodId};

use crate::time::Clock;

pub struct SnapshotBuilder;

impl SnapshotBuilder {
    /// Deep-copies `ledger` under `period`, stamping the capture time from `clock`.
    pub fn capture(period: PeriodId, ledger: &BudgetLedger, clock: &dyn Clock) -> MonthlySnapshot {
        MonthlySnapshot::from_ledger(period, ledger, clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use budget_domain::{Expense, NewExpense};
    use chrono::{TimeZone, Utc};

    #[test]
    fn stamps_capture_time_from_clock() {
        let instant = Utc.with_ymd_and_hms(2025, 11, 1, 8, 30, 0).unwrap();
        let clock = FixedClock::new(instant);
        let mut ledger = BudgetLedger::new();
        ledger.add_expense(Expense::new(NewExpense::new("Bus", 3.5, "Transport", "2025-10-02")));

        let snapshot = SnapshotBuilder::capture("2025-10".parse().unwrap(), &ledger, &clock);

        assert_eq!(snapshot.archived_at, instant);
        assert_eq!(snapshot.period.to_string(), "2025-10");
        assert_eq!(snapshot.total_expenses, 3.5);
    }
}
