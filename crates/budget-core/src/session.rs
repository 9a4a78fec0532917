//! Session context tying the live ledger, the archive and persistence together.
//!
//! A session is bounded by [`BudgetSession::load`] and [`BudgetSession::flush`].
//! Every mutating call persists the whole affected record straight away; storage
//! failures are logged and the in-memory state stays authoritative.

use budget_domain::{
    BudgetLedger, Expense, Income, MonthlyHistory, MonthlySnapshot, NewExpense, NewIncome,
    PeriodId,
};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::{
    calendar::PeriodCalendar,
    comparison::{compare, MonthComparison},
    ledger_service::LedgerService,
    rollover::{
        plan_archive, plan_manual_rollover, plan_month_check, PersistTarget, RolloverAction,
        RolloverPlan, RolloverState,
    },
    snapshot::SnapshotBuilder,
    storage::{BudgetRepository, KeyValueStore, StorageKeys},
    time::Clock,
    CoreError,
};

pub struct BudgetSession {
    ledger: BudgetLedger,
    history: MonthlyHistory,
    state: RolloverState,
    repository: BudgetRepository,
    clock: Box<dyn Clock>,
}

impl BudgetSession {
    /// Loads both records from `store`. Missing or unreadable records start empty.
    pub fn load(store: Box<dyn KeyValueStore>, keys: StorageKeys, clock: Box<dyn Clock>) -> Self {
        let repository = BudgetRepository::new(store, keys);
        let (ledger, state) = repository.load_primary().into_parts();
        let history = repository.load_history();
        debug!(
            %state,
            expenses = ledger.expenses.len(),
            income = ledger.income.len(),
            archived = history.len(),
            "budget session loaded"
        );
        Self {
            ledger,
            history,
            state,
            repository,
            clock,
        }
    }

    /// Writes both records, reporting the first failure after attempting each.
    pub fn flush(&self) -> Result<(), CoreError> {
        let primary = self.repository.save_primary(&self.ledger, &self.state);
        let history = self.repository.save_history(&self.history);
        primary.and(history)
    }

    pub fn ledger(&self) -> &BudgetLedger {
        &self.ledger
    }

    pub fn history(&self) -> &MonthlyHistory {
        &self.history
    }

    pub fn state(&self) -> RolloverState {
        self.state
    }

    pub fn keys(&self) -> &StorageKeys {
        self.repository.keys()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The stored current-period tag, if one was ever recorded.
    pub fn current_month(&self) -> Option<PeriodId> {
        self.state.period()
    }

    /// The calendar period according to the session clock.
    pub fn current_period(&self) -> PeriodId {
        PeriodCalendar::current_period(self.clock.as_ref())
    }

    /// Adds an expense and persists the primary record. Non-finite amounts are rejected
    /// before anything changes.
    pub fn add_expense(&mut self, draft: NewExpense) -> Result<Uuid, CoreError> {
        let id = LedgerService::add_expense(&mut self.ledger, draft)?;
        self.persist(PersistTarget::Primary);
        Ok(id)
    }

    pub fn add_income(&mut self, draft: NewIncome) -> Result<Uuid, CoreError> {
        let id = LedgerService::add_income(&mut self.ledger, draft)?;
        self.persist(PersistTarget::Primary);
        Ok(id)
    }

    pub fn remove_expense(&mut self, id: Uuid) -> bool {
        let removed = LedgerService::remove_expense(&mut self.ledger, id);
        if removed {
            self.persist(PersistTarget::Primary);
        }
        removed
    }

    pub fn remove_income(&mut self, id: Uuid) -> bool {
        let removed = LedgerService::remove_income(&mut self.ledger, id);
        if removed {
            self.persist(PersistTarget::Primary);
        }
        removed
    }

    /// Mutates an expense in place. Unknown ids change nothing and write nothing.
    pub fn update_expense<F>(&mut self, id: Uuid, mutator: F) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut Expense),
    {
        let updated = LedgerService::update_expense(&mut self.ledger, id, mutator)?;
        if updated {
            self.persist(PersistTarget::Primary);
        } else {
            debug!(%id, "ignoring update for unknown expense");
        }
        Ok(updated)
    }

    pub fn update_income<F>(&mut self, id: Uuid, mutator: F) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut Income),
    {
        let updated = LedgerService::update_income(&mut self.ledger, id, mutator)?;
        if updated {
            self.persist(PersistTarget::Primary);
        } else {
            debug!(%id, "ignoring update for unknown income entry");
        }
        Ok(updated)
    }

    /// Seeds starter entries into an empty ledger; returns whether anything was added.
    pub fn initialize_sample_data(&mut self) -> bool {
        let seeded = LedgerService::seed_if_empty(&mut self.ledger, self.clock.as_ref());
        if seeded {
            info!("seeded starter entries");
            self.persist(PersistTarget::Primary);
        }
        seeded
    }

    /// Wipes the live ledger and every archived period.
    pub fn clear_all_data(&mut self) {
        LedgerService::clear(&mut self.ledger);
        self.history.clear();
        self.persist(PersistTarget::Primary);
        self.persist(PersistTarget::History);
    }

    /// Clears the live ledger without archiving or retagging.
    pub fn reset_current_month(&mut self) {
        LedgerService::clear(&mut self.ledger);
        self.persist(PersistTarget::Primary);
    }

    /// Runs the automatic month check; returns `true` when a rollover archived data.
    ///
    /// Safe to call on every start: within the same period it does nothing.
    pub fn check_and_handle_month_change(&mut self) -> bool {
        let now = self.current_period();
        let plan = plan_month_check(&self.state, now, self.ledger.is_empty());
        if plan.actions.is_empty() {
            debug!(period = %now, "period unchanged");
        } else {
            info!(
                from = %self.state,
                to = %now,
                archived = plan.archives(),
                "current period advanced"
            );
        }
        self.execute(plan)
    }

    /// Archives the stored period and starts the calendar's current one, whether or
    /// not the month has actually changed.
    pub fn start_new_month(&mut self) {
        let now = self.current_period();
        let plan = plan_manual_rollover(&self.state, now);
        info!(from = %self.state, to = %now, "starting new period on request");
        self.execute(plan);
    }

    /// Archives the live ledger under `target`, or under the stored period when omitted.
    /// The ledger itself is left as is.
    pub fn archive_current_month(&mut self, target: Option<PeriodId>) {
        let period = target
            .or_else(|| self.state.period())
            .unwrap_or_else(|| self.current_period());
        let plan = plan_archive(&self.state, period);
        self.execute(plan);
    }

    /// Inserts `snapshot` into the archive, replacing any entry for its period.
    pub fn archive_snapshot(&mut self, snapshot: MonthlySnapshot) {
        let period = snapshot.period;
        if self.history.insert(snapshot).is_some() {
            debug!(%period, "replaced archived snapshot");
        }
        self.persist(PersistTarget::History);
    }

    pub fn month_data(&self, period: &PeriodId) -> Option<&MonthlySnapshot> {
        self.history.get(period)
    }

    /// Archived periods, most recent first.
    pub fn archived_months(&self) -> Vec<&MonthlySnapshot> {
        self.history.newest_first()
    }

    /// Snapshot for the period before the calendar's current one.
    pub fn previous_month_data(&self) -> Option<&MonthlySnapshot> {
        let previous = PeriodCalendar::previous_period(None, self.clock.as_ref());
        self.history.get(&previous)
    }

    pub fn has_previous_month(&self) -> bool {
        self.previous_month_data().is_some()
    }

    pub fn month_comparison(&self) -> Option<MonthComparison> {
        compare(&self.ledger, self.previous_month_data())
    }

    /// Applies `plan` in order. Nothing else touches the ledger between capture and clear.
    fn execute(&mut self, plan: RolloverPlan) -> bool {
        let mut captured: Option<MonthlySnapshot> = None;
        for action in &plan.actions {
            match *action {
                RolloverAction::Capture(period) => {
                    captured = Some(SnapshotBuilder::capture(
                        period,
                        &self.ledger,
                        self.clock.as_ref(),
                    ));
                }
                RolloverAction::Archive => {
                    if let Some(snapshot) = captured.take() {
                        let period = snapshot.period;
                        if self.history.insert(snapshot).is_some() {
                            debug!(%period, "replaced archived snapshot");
                        }
                    }
                }
                RolloverAction::ClearLedger => LedgerService::clear(&mut self.ledger),
                RolloverAction::Retag(period) => self.state = RolloverState::Steady(period),
                RolloverAction::Persist(target) => self.persist(target),
            }
        }
        self.state = plan.next;
        plan.rolled_over
    }

    fn persist(&self, target: PersistTarget) {
        let (key, result) = match target {
            PersistTarget::Primary => (
                &self.keys().primary,
                self.repository.save_primary(&self.ledger, &self.state),
            ),
            PersistTarget::History => (
                &self.keys().history,
                self.repository.save_history(&self.history),
            ),
        };
        if let Err(err) = result {
            error!(key = %key, %err, "failed to persist record; keeping in-memory state");
        }
    }
}
