//! Key-value persistence contract and the records stored through it.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use budget_domain::{BudgetLedger, Expense, Income, MonthlyHistory};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

use crate::{rollover::RolloverState, CoreError};

pub const DEFAULT_PRIMARY_KEY: &str = "monthly-budget-data";
pub const DEFAULT_HISTORY_KEY: &str = "monthly-budget-history";

/// Abstraction over string key-value backends holding whole serialized records.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }
}

/// Process-local store, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    reject_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` fail, mimicking an exhausted storage quota.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|values| values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(CoreError::Storage(format!(
                "quota exceeded while writing `{key}`"
            )));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Names of the two independent records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub primary: String,
    pub history: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_KEY.into(),
            history: DEFAULT_HISTORY_KEY.into(),
        }
    }
}

/// Ledger collections plus the current-period tag, stored under the primary key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryRecord {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub income: Vec<Income>,
    #[serde(default)]
    pub current_month: String,
}

impl PrimaryRecord {
    pub fn from_parts(ledger: &BudgetLedger, state: &RolloverState) -> Self {
        Self {
            expenses: ledger.expenses.clone(),
            income: ledger.income.clone(),
            current_month: state.tag(),
        }
    }

    /// Splits the record into the live ledger and rollover state.
    ///
    /// A tag that is not a valid period is dropped and the state starts uninitialized.
    pub fn into_parts(self) -> (BudgetLedger, RolloverState) {
        let state = RolloverState::from_tag(&self.current_month).unwrap_or_else(|err| {
            warn!(tag = %self.current_month, %err, "discarding unreadable current-period tag");
            RolloverState::Uninitialized
        });
        let ledger = BudgetLedger {
            expenses: self.expenses,
            income: self.income,
        };
        (ledger, state)
    }
}

/// Reads and writes whole records through a [`KeyValueStore`].
pub struct BudgetRepository {
    store: Box<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl BudgetRepository {
    pub fn new(store: Box<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Loads the primary record; missing or unparsable data yields an empty record.
    pub fn load_primary(&self) -> PrimaryRecord {
        self.read_record(&self.keys.primary)
    }

    /// Loads the archive; missing or unparsable data yields an empty history.
    pub fn load_history(&self) -> MonthlyHistory {
        self.read_record(&self.keys.history)
    }

    pub fn save_primary(&self, ledger: &BudgetLedger, state: &RolloverState) -> Result<(), CoreError> {
        let record = PrimaryRecord::from_parts(ledger, state);
        let json = serde_json::to_string(&record)?;
        self.store.set(&self.keys.primary, &json)
    }

    pub fn save_history(&self, history: &MonthlyHistory) -> Result<(), CoreError> {
        let json = serde_json::to_string(history)?;
        self.store.set(&self.keys.history, &json)
    }

    fn read_record<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                warn!(key, %err, "failed to read record; starting empty");
                return T::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key, %err, "failed to parse record; starting empty");
            T::default()
        })
    }
}
