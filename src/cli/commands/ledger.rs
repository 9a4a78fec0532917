use budget_core::ledger_service::timestamp;
use budget_domain::{NewExpense, NewIncome};
use uuid::Uuid;

use crate::cli::{
    context::{CliContext, CommandResult},
    output,
    registry::CommandEntry,
};
use crate::errors::CliError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "status",
            "Show the current month's totals and entries",
            "status",
            cmd_status,
        ),
        CommandEntry::new(
            "add-expense",
            "Record an expense in the current month",
            "add-expense <amount> <category> <description...>",
            cmd_add_expense,
        ),
        CommandEntry::new(
            "add-income",
            "Record income in the current month",
            "add-income <amount> <source> <description...>",
            cmd_add_income,
        ),
        CommandEntry::new(
            "remove",
            "Remove an expense or income entry by id",
            "remove <id>",
            cmd_remove,
        ),
        CommandEntry::new(
            "clear",
            "Delete the current month's entries and every archived month",
            "clear",
            cmd_clear,
        ),
    ]
}

fn cmd_status(context: &mut CliContext<'_>, _args: &[&str]) -> CommandResult {
    let session = context.session();
    let period = session
        .current_month()
        .unwrap_or_else(|| session.current_period());
    let ledger = session.ledger();

    let mut lines = vec![
        format!("Current month: {}", output::period_label(&period)),
        format!(
            "Income:   {:>12}  ({} entries)",
            output::amount(ledger.total_income()),
            ledger.income.len()
        ),
        format!(
            "Expenses: {:>12}  ({} entries)",
            output::amount(ledger.total_expenses()),
            ledger.expenses.len()
        ),
        format!("Balance:  {:>12}", output::amount(ledger.balance())),
    ];

    let by_category = ledger.expenses_by_category();
    if !by_category.is_empty() {
        lines.push("Expenses by category:".into());
        for (category, total) in &by_category {
            lines.push(format!("  {category}: {}", output::amount(*total)));
        }
    }

    if !ledger.is_empty() {
        lines.push("Entries:".into());
        for income in &ledger.income {
            lines.push(format!(
                "  income  {}  {}  {} [{}]",
                income.id,
                output::amount(income.amount),
                income.description,
                income.source
            ));
        }
        for expense in &ledger.expenses {
            lines.push(format!(
                "  expense {}  {}  {} [{}]",
                expense.id,
                output::amount(expense.amount),
                expense.description,
                expense.category
            ));
        }
    }

    for line in lines {
        context.line(line)?;
    }
    Ok(())
}

fn cmd_add_expense(context: &mut CliContext<'_>, args: &[&str]) -> CommandResult {
    let (amount, category, description) = entry_arguments(args, "add-expense", "category")?;
    let date = timestamp(context.session().clock());
    let id = context.session_mut().add_expense(NewExpense::new(
        description.clone(),
        amount,
        category.clone(),
        date,
    ))?;
    context.line(format!(
        "Added expense {id}: {description} {} [{category}]",
        output::amount(amount)
    ))
}

fn cmd_add_income(context: &mut CliContext<'_>, args: &[&str]) -> CommandResult {
    let (amount, source, description) = entry_arguments(args, "add-income", "source")?;
    let date = timestamp(context.session().clock());
    let id = context.session_mut().add_income(NewIncome::new(
        description.clone(),
        amount,
        source.clone(),
        date,
    ))?;
    context.line(format!(
        "Added income {id}: {description} {} [{source}]",
        output::amount(amount)
    ))
}

fn cmd_remove(context: &mut CliContext<'_>, args: &[&str]) -> CommandResult {
    let raw = args
        .first()
        .ok_or_else(|| CliError::Input("usage: remove <id>".into()))?;
    let id = Uuid::parse_str(raw)
        .map_err(|err| CliError::Input(format!("`{raw}` is not a valid id: {err}")))?;

    let session = context.session_mut();
    if session.remove_expense(id) {
        context.line(format!("Removed expense {id}"))
    } else if session.remove_income(id) {
        context.line(format!("Removed income {id}"))
    } else {
        Err(CliError::Input(format!("no entry with id {id}")))
    }
}

fn cmd_clear(context: &mut CliContext<'_>, _args: &[&str]) -> CommandResult {
    context.session_mut().clear_all_data();
    context.line("Cleared the current month and all archived months.")
}

/// Parses `<amount> <label> <description...>`.
fn entry_arguments(
    args: &[&str],
    command: &str,
    label: &str,
) -> Result<(f64, String, String), CliError> {
    if args.len() < 3 {
        return Err(CliError::Input(format!(
            "usage: {command} <amount> <{label}> <description...>"
        )));
    }
    let amount = parse_amount(args[0])?;
    let group = args[1].trim();
    if group.is_empty() {
        return Err(CliError::Input(format!("{label} must not be empty")));
    }
    let description = args[2..].join(" ");
    Ok((amount, group.to_string(), description))
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, CliError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CliError::Input(format!("`{raw}` is not a number")))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(CliError::Input(format!(
            "amount must be a non-negative number, got `{raw}`"
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_must_be_non_negative_numbers() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("twelve").is_err());
    }

    #[test]
    fn entry_arguments_join_description_words() {
        let (amount, category, description) =
            entry_arguments(&["42", "Food", "Weekly", "groceries"], "add-expense", "category")
                .unwrap();
        assert_eq!(amount, 42.0);
        assert_eq!(category, "Food");
        assert_eq!(description, "Weekly groceries");
    }

    #[test]
    fn missing_description_is_rejected() {
        let err = entry_arguments(&["42", "Food"], "add-expense", "category").unwrap_err();
        assert!(err.to_string().contains("usage: add-expense"));
    }
}
