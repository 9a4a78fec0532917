//! Month-boundary state machine.
//!
//! Planning is pure: each `plan_*` function maps the stored state and the
//! calendar's current period to the next state plus an ordered list of
//! [`RolloverAction`]s. [`crate::session::BudgetSession`] executes the
//! actions in order without yielding between capture and clear.

use std::fmt;

use budget_domain::{PeriodId, PeriodParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RolloverState {
    /// No period has been recorded yet; persisted as an empty tag.
    #[default]
    Uninitialized,
    /// The ledger belongs to the contained period.
    Steady(PeriodId),
}

impl RolloverState {
    /// Parses a persisted tag, treating the empty string as [`RolloverState::Uninitialized`].
    pub fn from_tag(tag: &str) -> Result<Self, PeriodParseError> {
        if tag.is_empty() {
            return Ok(RolloverState::Uninitialized);
        }
        Ok(RolloverState::Steady(tag.parse()?))
    }

    /// Text written to the primary record.
    pub fn tag(&self) -> String {
        match self {
            RolloverState::Uninitialized => String::new(),
            RolloverState::Steady(period) => period.to_string(),
        }
    }

    pub fn period(&self) -> Option<PeriodId> {
        match self {
            RolloverState::Uninitialized => None,
            RolloverState::Steady(period) => Some(*period),
        }
    }
}

impl fmt::Display for RolloverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RolloverState::Uninitialized => f.write_str("Uninitialized"),
            RolloverState::Steady(period) => write!(f, "Steady({period})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistTarget {
    /// Ledger collections plus the current-period tag.
    Primary,
    /// The archive of past periods.
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverAction {
    /// Snapshot the live ledger under the given period.
    Capture(PeriodId),
    /// Insert the captured snapshot into the archive, replacing any entry for its period.
    Archive,
    /// Empty both ledger collections.
    ClearLedger,
    /// Record a new current-period tag.
    Retag(PeriodId),
    Persist(PersistTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloverPlan {
    pub next: RolloverState,
    pub actions: Vec<RolloverAction>,
    pub rolled_over: bool,
}

impl RolloverPlan {
    fn unchanged(state: RolloverState) -> Self {
        Self {
            next: state,
            actions: Vec::new(),
            rolled_over: false,
        }
    }

    fn retag(now: PeriodId) -> Self {
        Self {
            next: RolloverState::Steady(now),
            actions: vec![
                RolloverAction::Retag(now),
                RolloverAction::Persist(PersistTarget::Primary),
            ],
            rolled_over: false,
        }
    }

    fn rollover(from: PeriodId, to: PeriodId) -> Self {
        Self {
            next: RolloverState::Steady(to),
            actions: vec![
                RolloverAction::Capture(from),
                RolloverAction::Archive,
                RolloverAction::Persist(PersistTarget::History),
                RolloverAction::ClearLedger,
                RolloverAction::Retag(to),
                RolloverAction::Persist(PersistTarget::Primary),
            ],
            rolled_over: true,
        }
    }

    /// Whether executing the plan writes an archive entry.
    pub fn archives(&self) -> bool {
        self.actions.contains(&RolloverAction::Archive)
    }
}

/// Plans the automatic check run on every start or focus.
///
/// Only a changed period with at least one ledger entry archives; a changed
/// period with an empty ledger just advances the tag.
pub fn plan_month_check(state: &RolloverState, now: PeriodId, ledger_empty: bool) -> RolloverPlan {
    match state {
        RolloverState::Uninitialized => RolloverPlan::retag(now),
        RolloverState::Steady(tag) if *tag == now => RolloverPlan::unchanged(*state),
        RolloverState::Steady(_) if ledger_empty => RolloverPlan::retag(now),
        RolloverState::Steady(tag) => RolloverPlan::rollover(*tag, now),
    }
}

/// Plans a user-requested rollover, which archives the stored period even when the
/// calendar has not moved. An uninitialized state archives under `now`.
pub fn plan_manual_rollover(state: &RolloverState, now: PeriodId) -> RolloverPlan {
    let from = state.period().unwrap_or(now);
    RolloverPlan::rollover(from, now)
}

/// Plans an archive write for `period` that leaves the ledger and tag untouched.
pub fn plan_archive(state: &RolloverState, period: PeriodId) -> RolloverPlan {
    RolloverPlan {
        next: *state,
        actions: vec![
            RolloverAction::Capture(period),
            RolloverAction::Archive,
            RolloverAction::Persist(PersistTarget::History),
        ],
        rolled_over: false,
    }
}
