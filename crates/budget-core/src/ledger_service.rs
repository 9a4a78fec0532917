//! Business logic helpers for managing ledger entries.

use budget_domain::{BudgetLedger, Expense, Income, NewExpense, NewIncome};
use chrono::SecondsFormat;
use uuid::Uuid;

use crate::{time::Clock, CoreError};

/// Provides CRUD helpers for expense and income entries.
pub struct LedgerService;

impl LedgerService {
    /// Adds a new expense and returns its identifier.
    ///
    /// Non-finite amounts are rejected: JSON has no encoding for them.
    pub fn add_expense(ledger: &mut BudgetLedger, draft: NewExpense) -> Result<Uuid, CoreError> {
        ensure_finite(draft.amount)?;
        Ok(ledger.add_expense(Expense::new(draft)))
    }

    /// Adds a new income entry and returns its identifier.
    pub fn add_income(ledger: &mut BudgetLedger, draft: NewIncome) -> Result<Uuid, CoreError> {
        ensure_finite(draft.amount)?;
        Ok(ledger.add_income(Income::new(draft)))
    }

    /// Removes the expense identified by `id`; returns whether anything was removed.
    pub fn remove_expense(ledger: &mut BudgetLedger, id: Uuid) -> bool {
        ledger.remove_expense(id).is_some()
    }

    pub fn remove_income(ledger: &mut BudgetLedger, id: Uuid) -> bool {
        ledger.remove_income(id).is_some()
    }

    /// Applies `mutator` to the expense identified by `id`.
    ///
    /// Unknown ids are a no-op reported as `Ok(false)`. The identifier survives the
    /// mutation unchanged, and a mutation leaving a non-finite amount is discarded.
    pub fn update_expense<F>(
        ledger: &mut BudgetLedger,
        id: Uuid,
        mutator: F,
    ) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut Expense),
    {
        let Some(expense) = ledger.expense_mut(id) else {
            return Ok(false);
        };
        let mut edited = expense.clone();
        mutator(&mut edited);
        ensure_finite(edited.amount)?;
        edited.id = id;
        *expense = edited;
        Ok(true)
    }

    pub fn update_income<F>(
        ledger: &mut BudgetLedger,
        id: Uuid,
        mutator: F,
    ) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut Income),
    {
        let Some(income) = ledger.income_entry_mut(id) else {
            return Ok(false);
        };
        let mut edited = income.clone();
        mutator(&mut edited);
        ensure_finite(edited.amount)?;
        edited.id = id;
        *income = edited;
        Ok(true)
    }

    pub fn clear(ledger: &mut BudgetLedger) {
        ledger.clear();
    }

    /// Starter entries dated at the clock's current instant.
    pub fn sample_entries(clock: &dyn Clock) -> (Vec<NewIncome>, Vec<NewExpense>) {
        let date = timestamp(clock);
        let income = vec![
            NewIncome::new("Monthly Salary", 5000.0, "Salary", date.clone()),
            NewIncome::new("Freelance Project", 1200.0, "Freelance", date.clone()),
        ];
        let expenses = vec![
            NewExpense::new("Rent Payment", 1500.0, "Housing", date.clone()),
            NewExpense::new("Grocery Shopping", 450.0, "Food & Dining", date.clone()),
            NewExpense::new("Electric Bill", 120.0, "Utilities", date.clone()),
            NewExpense::new("Gas & Transportation", 200.0, "Transportation", date.clone()),
            NewExpense::new("Netflix Subscription", 15.0, "Entertainment", date.clone()),
            NewExpense::new("Doctor Visit", 80.0, "Healthcare", date),
        ];
        (income, expenses)
    }

    /// Seeds the starter entries when the ledger is empty; returns whether it did.
    pub fn seed_if_empty(ledger: &mut BudgetLedger, clock: &dyn Clock) -> bool {
        if !ledger.is_empty() {
            return false;
        }
        let (income, expenses) = Self::sample_entries(clock);
        for draft in income {
            ledger.add_income(Income::new(draft));
        }
        for draft in expenses {
            ledger.add_expense(Expense::new(draft));
        }
        true
    }
}

fn ensure_finite(amount: f64) -> Result<(), CoreError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidAmount(amount))
    }
}

/// ISO-8601 text for the clock's instant, with millisecond precision.
pub fn timestamp(clock: &dyn Clock) -> String {
    clock.now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 10, 5, 9, 0, 0).unwrap())
    }

    #[test]
    fn added_entries_get_distinct_ids() {
        let mut ledger = BudgetLedger::new();
        let first =
            LedgerService::add_expense(&mut ledger, NewExpense::new("a", 1.0, "x", "d")).unwrap();
        let second =
            LedgerService::add_expense(&mut ledger, NewExpense::new("b", 2.0, "x", "d")).unwrap();
        assert_ne!(first, second);
        assert_eq!(ledger.expenses.len(), 2);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut ledger = BudgetLedger::new();
        LedgerService::add_income(&mut ledger, NewIncome::new("pay", 10.0, "Job", "d")).unwrap();
        let before = ledger.clone();

        let updated = LedgerService::update_income(&mut ledger, Uuid::new_v4(), |income| {
            income.amount = 99.0;
        })
        .unwrap();

        assert!(!updated);
        assert_eq!(ledger, before);
    }

    #[test]
    fn update_keeps_identifier() {
        let mut ledger = BudgetLedger::new();
        let id =
            LedgerService::add_expense(&mut ledger, NewExpense::new("a", 1.0, "x", "d")).unwrap();

        let updated = LedgerService::update_expense(&mut ledger, id, |expense| {
            expense.amount = 7.5;
            expense.id = Uuid::new_v4();
        })
        .unwrap();

        assert!(updated);
        let stored = ledger.expense(id).expect("expense keeps its id");
        assert_eq!(stored.amount, 7.5);
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        let mut ledger = BudgetLedger::new();
        let err =
            LedgerService::add_expense(&mut ledger, NewExpense::new("a", f64::NAN, "x", "d"))
                .unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount(_)));
        assert!(
            LedgerService::add_income(&mut ledger, NewIncome::new("b", f64::INFINITY, "y", "d"))
                .is_err()
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn rejected_update_leaves_entry_untouched() {
        let mut ledger = BudgetLedger::new();
        let id =
            LedgerService::add_income(&mut ledger, NewIncome::new("pay", 10.0, "Job", "d")).unwrap();
        let before = ledger.clone();

        let result = LedgerService::update_income(&mut ledger, id, |income| {
            income.description = "changed".into();
            income.amount = f64::NEG_INFINITY;
        });

        assert!(matches!(result, Err(CoreError::InvalidAmount(_))));
        assert_eq!(ledger, before);
    }

    #[test]
    fn seed_only_fills_an_empty_ledger() {
        let mut ledger = BudgetLedger::new();
        assert!(LedgerService::seed_if_empty(&mut ledger, &clock()));
        assert_eq!(ledger.income.len(), 2);
        assert_eq!(ledger.expenses.len(), 6);
        assert_eq!(ledger.total_income(), 6200.0);
        assert_eq!(ledger.total_expenses(), 2365.0);
        assert_eq!(ledger.income[0].date, "2025-10-05T09:00:00.000Z");

        assert!(!LedgerService::seed_if_empty(&mut ledger, &clock()));
        assert_eq!(ledger.expenses.len(), 6);
    }
}
