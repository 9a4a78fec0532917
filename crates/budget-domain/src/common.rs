//! Shared traits implemented by ledger entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Names the bucket an entry is grouped under (expense category or income source).
pub trait Grouped {
    fn group_key(&self) -> &str;
}

/// Reads an amount, treating `null` as zero.
///
/// serde_json writes non-finite floats as `null`; records written that way still load.
pub(crate) fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Sums the amounts of `entries`.
pub fn sum_amounts<T: Amounted>(entries: &[T]) -> f64 {
    entries.iter().fold(0.0, |acc, entry| acc + entry.amount())
}

/// Sums the amounts of `entries` per group key.
pub fn sum_by_group<T: Amounted + Grouped>(entries: &[T]) -> BTreeMap<String, f64> {
    entries.iter().fold(BTreeMap::new(), |mut acc, entry| {
        *acc.entry(entry.group_key().to_string()).or_insert(0.0) += entry.amount();
        acc
    })
}
