//! Live ledger for the current period and its derived aggregates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, transaction::*};

/// Expense and income entries recorded during the current period.
///
/// Totals and groupings are folds over the collections and are recomputed on
/// every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetLedger {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub income: Vec<Income>,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither collection holds an entry, regardless of amounts.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.income.is_empty()
    }

    pub fn total_expenses(&self) -> f64 {
        sum_amounts(&self.expenses)
    }

    pub fn total_income(&self) -> f64 {
        sum_amounts(&self.income)
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    pub fn expenses_by_category(&self) -> BTreeMap<String, f64> {
        sum_by_group(&self.expenses)
    }

    pub fn income_by_source(&self) -> BTreeMap<String, f64> {
        sum_by_group(&self.income)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        find_mut(&mut self.expenses, id)
    }

    pub fn income_entry_mut(&mut self, id: Uuid) -> Option<&mut Income> {
        find_mut(&mut self.income, id)
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    pub fn add_income(&mut self, income: Income) -> Uuid {
        let id = income.id;
        self.income.push(income);
        id
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id() == id)?;
        Some(self.expenses.remove(index))
    }

    pub fn remove_income(&mut self, id: Uuid) -> Option<Income> {
        let index = self.income.iter().position(|income| income.id() == id)?;
        Some(self.income.remove(index))
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
        self.income.clear();
    }
}

fn find_mut<T: Identifiable>(entries: &mut [T], id: Uuid) -> Option<&mut T> {
    entries.iter_mut().find(|entry| entry.id() == id)
}
