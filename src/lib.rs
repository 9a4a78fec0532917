#![doc(test(attr(deny(warnings))))]

//! Monthly Budget tracks income and expenses for the current calendar month and
//! archives each finished month into a history that later months compare against.
//!
//! The heavy lifting lives in the workspace crates re-exported here; this
//! package wires them to the filesystem and exposes the `monthly_budget_cli`
//! command set.

pub mod app;
pub mod cli;
pub mod errors;
pub mod utils;

pub use budget_config;
pub use budget_core;
pub use budget_domain;
pub use budget_storage_json;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter.
pub fn init() {
    init_with_filter(None);
}

/// Initializes global tracing, adding `extra` as a filter directive.
pub fn init_with_filter(extra: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(extra);
        tracing::debug!("Monthly budget tracing initialized.");
    });
}
