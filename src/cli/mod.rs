//! Line-oriented command runner: one command per invocation.

pub mod commands;
pub mod context;
pub mod output;
pub mod registry;

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use budget_core::time::Clock;
use tracing::debug;

use crate::{
    app::{load_config, resolve_base_dir, App},
    errors::CliError,
};
use context::{CliContext, CommandResult};
use registry::CommandRegistry;

/// Builds the registry holding every command.
pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    commands::register_all(&mut registry);
    registry
}

/// Entry point for the binary: reads process arguments and writes to stdout.
pub fn run_cli() -> CommandResult {
    let args: Vec<String> = env::args().skip(1).collect();
    let base_dir = resolve_base_dir();
    let (_, config) = load_config(&base_dir)?;
    crate::init_with_filter(config.log_filter.as_deref());

    let app = App::open(base_dir, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args, app, &mut out)
}

/// Runs `args` against the budget stored under `base_dir`, using `clock` for dates.
pub fn run_with_args(
    args: &[String],
    base_dir: PathBuf,
    clock: Box<dyn Clock>,
    out: &mut dyn Write,
) -> CommandResult {
    let (_, config) = load_config(&base_dir)?;
    let app = App::open_with_clock(base_dir, config, clock)?;
    execute(args, app, out)
}

/// Dispatches one command after the automatic month check has run.
pub fn execute(args: &[String], mut app: App, out: &mut dyn Write) -> CommandResult {
    let registry = registry();
    let name = args
        .first()
        .map(|name| name.to_lowercase())
        .unwrap_or_else(|| "help".to_string());
    let handler = registry
        .handler(&name)
        .ok_or_else(|| CliError::UnknownCommand(name.clone()))?;

    let previous = app.session().current_month();
    let archived = if app.start() { previous } else { None };
    if let Some(period) = archived {
        let now = app.session().current_period();
        writeln!(
            out,
            "Archived {}. Now tracking {}.",
            output::period_label(&period),
            output::period_label(&now)
        )?;
    }

    debug!(command = %name, "running command");
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    let mut context = CliContext::new(app, &registry, out, archived);
    handler(&mut context, &rest)?;
    context.finish()
}
