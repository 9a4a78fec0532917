//! budget-config
//!
//! Persistent user preferences: where budget data lives, which storage keys it
//! uses, starter data and log filtering.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
