use std::{fmt::Display, io::Write};

use budget_core::session::BudgetSession;
use budget_domain::PeriodId;

use crate::{
    app::App,
    cli::registry::CommandRegistry,
    errors::CliError,
};

pub type CommandResult = Result<(), CliError>;

/// State handed to every command handler for one invocation.
pub struct CliContext<'a> {
    app: App,
    registry: &'a CommandRegistry,
    out: &'a mut dyn Write,
    archived: Option<PeriodId>,
}

impl<'a> CliContext<'a> {
    pub fn new(
        app: App,
        registry: &'a CommandRegistry,
        out: &'a mut dyn Write,
        archived: Option<PeriodId>,
    ) -> Self {
        Self {
            app,
            registry,
            out,
            archived,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn session(&self) -> &BudgetSession {
        self.app.session()
    }

    pub fn session_mut(&mut self) -> &mut BudgetSession {
        self.app.session_mut()
    }

    pub fn registry(&self) -> &CommandRegistry {
        self.registry
    }

    /// Period archived by the start-up month check, if it archived one.
    pub fn archived_on_start(&self) -> Option<PeriodId> {
        self.archived
    }

    pub fn line(&mut self, text: impl Display) -> CommandResult {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Writes both records so persistence failures surface as an error.
    pub fn finish(self) -> CommandResult {
        self.out.flush()?;
        self.app.session().flush()?;
        Ok(())
    }
}
