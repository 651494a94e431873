//! Persisted snapshot schema and the pair encoding.
//!
//! The preference record has two typed fields:
//!
//! ```toml
//! [state]
//! count = 3
//! favouritePrimes = [2, 3]
//! ```
//!
//! The record is not versioned. Unknown fields are ignored and each known
//! field falls back to its default independently when missing or mistyped.

use toml::Value;

use crate::error::AppError;
use crate::prefs::Record;
use crate::ui::counter::CounterState;

pub const COUNT_FIELD: &str = "count";
pub const FAVOURITES_FIELD: &str = "favouritePrimes";

/// Typed view of the persisted preference record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub count: i64,
    pub favourite_primes: Vec<i64>,
}

impl Snapshot {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert(COUNT_FIELD.to_string(), Value::Integer(self.count));
        record.insert(
            FAVOURITES_FIELD.to_string(),
            Value::Array(
                self.favourite_primes
                    .iter()
                    .map(|&n| Value::Integer(n))
                    .collect(),
            ),
        );
        record
    }

    /// Decode a record, defaulting each field that is missing or malformed.
    pub fn from_record(record: &Record) -> Self {
        let count = match record.get(COUNT_FIELD) {
            Some(Value::Integer(n)) => *n,
            Some(other) => {
                tracing::warn!(
                    field = COUNT_FIELD,
                    found = other.type_str(),
                    "Persisted count is not an integer, using 0"
                );
                0
            }
            None => {
                tracing::warn!(field = COUNT_FIELD, "Persisted count missing, using 0");
                0
            }
        };

        let favourite_primes = match record.get(FAVOURITES_FIELD) {
            Some(Value::Array(items)) => {
                let values: Vec<i64> = items.iter().filter_map(Value::as_integer).collect();
                let dropped = items.len() - values.len();
                if dropped > 0 {
                    tracing::warn!(
                        field = FAVOURITES_FIELD,
                        dropped,
                        "Dropped non-integer favourites"
                    );
                }
                values
            }
            Some(other) => {
                tracing::warn!(
                    field = FAVOURITES_FIELD,
                    found = other.type_str(),
                    "Persisted favourites are not an array, using none"
                );
                Vec::new()
            }
            None => {
                tracing::warn!(
                    field = FAVOURITES_FIELD,
                    "Persisted favourites missing, using none"
                );
                Vec::new()
            }
        };

        Self {
            count,
            favourite_primes,
        }
    }
}

impl From<&CounterState> for Snapshot {
    fn from(state: &CounterState) -> Self {
        Self {
            count: state.count,
            favourite_primes: state.favourite_primes.iter().copied().collect(),
        }
    }
}

impl From<Snapshot> for CounterState {
    fn from(snapshot: Snapshot) -> Self {
        CounterState::new(snapshot.count, snapshot.favourite_primes)
    }
}

/// Encode `state` as the JSON pair `[count, [favourites...]]`.
pub fn encode_pair(state: &CounterState) -> Result<String, AppError> {
    Ok(serde_json::to_string(state)?)
}

/// Decode the JSON pair produced by [`encode_pair`].
pub fn decode_pair(encoded: &str) -> Result<CounterState, AppError> {
    Ok(serde_json::from_str(encoded.trim())?)
}
