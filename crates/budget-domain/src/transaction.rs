//! Domain models for expense and income entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    #[serde(deserialize_with = "amount_or_zero")]
    pub amount: f64,
    /// ISO-8601 text as supplied by the caller.
    pub date: String,
    pub category: String,
}

impl Expense {
    pub fn new(draft: NewExpense) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Grouped for Expense {
    fn group_key(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub description: String,
    #[serde(deserialize_with = "amount_or_zero")]
    pub amount: f64,
    pub date: String,
    pub source: String,
}

impl Income {
    pub fn new(draft: NewIncome) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            source: draft.source,
        }
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Grouped for Income {
    fn group_key(&self) -> &str {
        &self.source
    }
}

/// Expense draft without an identifier; the ledger assigns one on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub category: String,
}

impl NewExpense {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date: date.into(),
            category: category.into(),
        }
    }
}

/// Income draft without an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncome {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub source: String,
}

impl NewIncome {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        source: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date: date.into(),
            source: source.into(),
        }
    }
}
