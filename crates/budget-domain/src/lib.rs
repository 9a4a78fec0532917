//! budget-domain
//!
//! Pure domain models (PeriodId, Expense, Income, BudgetLedger, MonthlySnapshot, MonthlyHistory).
//! No I/O, no CLI, no storage. Only data types and their folds.

pub mod common;
pub mod history;
pub mod ledger;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use common::*;
pub use history::*;
pub use ledger::*;
pub use period::*;
pub use snapshot::*;
pub use transaction::*;
