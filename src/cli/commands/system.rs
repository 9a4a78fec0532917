use crate::cli::{
    context::{CliContext, CommandResult},
    registry::CommandEntry,
};
use crate::errors::CliError;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
    ]
}

fn cmd_version(context: &mut CliContext<'_>, _args: &[&str]) -> CommandResult {
    let info = build_info::current();
    let data_dir = context
        .app()
        .config()
        .resolve_data_dir(context.app().base_dir());
    context.line(info.banner())?;
    for (label, value) in info.rows() {
        context.line(format!("  {label:<12}: {value}"))?;
    }
    context.line(format!("  {:<12}: {}", "Data dir", data_dir.display()))
}

fn cmd_help(context: &mut CliContext<'_>, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        let line = match context.registry().get(&name) {
            Some(entry) => format!("{}\n  {}", entry.usage, entry.description),
            None => return Err(CliError::UnknownCommand(name)),
        };
        return context.line(line);
    }

    let lines: Vec<String> = context
        .registry()
        .list()
        .into_iter()
        .map(|entry| format!("  {:<50} {}", entry.usage, entry.description))
        .collect();
    context.line("Usage: monthly_budget_cli <command> [arguments]")?;
    context.line("Commands:")?;
    for line in lines {
        context.line(line)?;
    }
    Ok(())
}
