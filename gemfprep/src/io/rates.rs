use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use crate::error::{Result, TranslateError};
use crate::io::tsv::read_records;
use crate::registry::Registry;

/// Sentinel in the "by" column for a nodal (spontaneous) transition. Case-insensitive.
pub const NO_INDUCER: &str = "none";

/// `(inducer, from, to)`; an inducer of `None` is a nodal transition.
pub type TransitionKey = (Option<usize>, usize, usize);

/// Sparse transition rates keyed by resolved state indices.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: BTreeMap<TransitionKey, f64>,
    inducers: BTreeSet<usize>,
}

impl RateTable {
    /// Parse `from<TAB>to<TAB>by<TAB>rate` rows. Unseen state labels extend `states`.
    pub fn read<R: Read>(input: R, states: &mut Registry) -> Result<Self> {
        let mut table = Self::default();

        for record in read_records(input)? {
            let [from_s, to_s, by_s, rate] = record.exact::<4>("from<TAB>to<TAB>by<TAB>rate")?;

            let rate: f64 = rate.parse().map_err(|_| TranslateError::MalformedRate {
                line: record.line,
                value: rate.to_string(),
            })?;
            let from = states.register(from_s);
            let to = states.register(to_s);
            let by = if by_s.eq_ignore_ascii_case(NO_INDUCER) {
                None
            } else {
                Some(states.register(by_s))
            };

            if !table.insert((by, from, to), rate) {
                return Err(TranslateError::DuplicateTransition {
                    line: record.line,
                    from: from_s.to_string(),
                    to: to_s.to_string(),
                    by: by.map(|_| by_s.to_string()),
                });
            }
        }

        tracing::debug!(
            transitions = table.len(),
            inducers = table.inducers.len(),
            states = states.len(),
            "transition rates parsed"
        );
        Ok(table)
    }

    /// Record a rate; returns false (and keeps the old rate) if the key was already present.
    pub fn insert(&mut self, key: TransitionKey, rate: f64) -> bool {
        if self.rates.contains_key(&key) {
            return false;
        }
        if let Some(by) = key.0 {
            self.inducers.insert(by);
        }
        self.rates.insert(key, rate);
        true
    }

    pub fn get(&self, key: TransitionKey) -> Option<f64> {
        self.rates.get(&key).copied()
    }

    /// Inducer state indices, ascending.
    pub fn inducers(&self) -> impl Iterator<Item = usize> + '_ {
        self.inducers.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransitionKey, f64)> + '_ {
        self.rates.iter().map(|(&k, &r)| (k, r))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
