#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use budget_core::time::FixedClock;
use chrono::NaiveDate;
use monthly_budget::cli::run_with_args;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated base directory for config and data.
pub fn setup_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn clock_on(year: i32, month: u32, day: u32) -> Box<FixedClock> {
    Box::new(FixedClock::at_noon(
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
    ))
}

/// Runs one CLI command as if invoked on the given day, returning its stdout.
pub fn run_on(base: &PathBuf, date: (i32, u32, u32), args: &[&str]) -> String {
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    let mut out = Vec::new();
    run_with_args(
        &args,
        base.clone(),
        clock_on(date.0, date.1, date.2),
        &mut out,
    )
    .unwrap_or_else(|err| panic!("command {args:?} failed: {err}"));
    String::from_utf8(out).expect("utf-8 output")
}
