//! budget-core
//!
//! Business logic and services for the monthly budget.
//! Depends on budget-domain. No CLI, no terminal I/O; storage is reached only
//! through [`storage::KeyValueStore`].

pub mod calendar;
pub mod comparison;
pub mod error;
pub mod ledger_service;
pub mod rollover;
pub mod session;
pub mod snapshot;
pub mod storage;
pub mod time;

pub use calendar::*;
pub use comparison::*;
pub use error::CoreError;
pub use ledger_service::*;
pub use rollover::*;
pub use session::*;
pub use snapshot::*;
pub use storage::*;
pub use time::*;
