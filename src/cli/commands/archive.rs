use crate::cli::{
    context::{CliContext, CommandResult},
    output,
    registry::CommandEntry,
};

const JSON_FLAG: &str = "--json";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "check",
            "Report whether the month check archived a finished month",
            "check",
            cmd_check,
        ),
        CommandEntry::new(
            "new-month",
            "Archive the current month now and start a fresh ledger",
            "new-month",
            cmd_new_month,
        ),
        CommandEntry::new(
            "history",
            "List archived months, newest first",
            "history [--json]",
            cmd_history,
        ),
        CommandEntry::new(
            "compare",
            "Compare the current month with the previous calendar month",
            "compare [--json]",
            cmd_compare,
        ),
    ]
}

fn wants_json(args: &[&str]) -> bool {
    args.iter().any(|arg| *arg == JSON_FLAG)
}

fn cmd_check(context: &mut CliContext<'_>, _args: &[&str]) -> CommandResult {
    if context.archived_on_start().is_some() {
        // The rollover notice has already been printed.
        return Ok(());
    }
    let session = context.session();
    let period = session
        .current_month()
        .unwrap_or_else(|| session.current_period());
    context.line(format!(
        "No rollover needed; tracking {}.",
        output::period_label(&period)
    ))
}

fn cmd_new_month(context: &mut CliContext<'_>, _args: &[&str]) -> CommandResult {
    let session = context.session_mut();
    let from = session
        .current_month()
        .unwrap_or_else(|| session.current_period());
    session.start_new_month();
    let to = session.current_period();
    context.line(format!(
        "Archived {}. Now tracking {}.",
        output::period_label(&from),
        output::period_label(&to)
    ))
}

fn cmd_history(context: &mut CliContext<'_>, args: &[&str]) -> CommandResult {
    if wants_json(args) {
        let json = serde_json::to_string_pretty(context.session().history())?;
        return context.line(json);
    }

    let rows: Vec<String> = context
        .session()
        .archived_months()
        .into_iter()
        .map(output::history_row)
        .collect();
    if rows.is_empty() {
        return context.line("No archived months.");
    }
    for row in rows {
        context.line(row)?;
    }
    Ok(())
}

fn cmd_compare(context: &mut CliContext<'_>, args: &[&str]) -> CommandResult {
    let comparison = context.session().month_comparison();
    if wants_json(args) {
        let json = serde_json::to_string_pretty(&comparison)?;
        return context.line(json);
    }

    let Some(comparison) = comparison else {
        let previous = context.session().current_period().previous();
        return context.line(format!(
            "No archived data for {}; nothing to compare.",
            output::period_label(&previous)
        ));
    };

    context.line(output::metric_line("Income", &comparison.income))?;
    context.line(output::metric_line("Expenses", &comparison.expenses))?;
    context.line(format!(
        "{:<10}{:>12} vs {:>12}  {}",
        "Balance:",
        output::amount(comparison.balance.current),
        output::amount(comparison.balance.previous),
        output::signed_amount(comparison.balance.difference)
    ))
}
