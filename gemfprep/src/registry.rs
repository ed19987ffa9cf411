use std::collections::HashMap;

use crate::error::{IdentifierKind, Result, TranslateError};

/// Bidirectional label <-> index table, grown one label at a time.
///
/// Indices are dense and assigned in first-seen order starting at `base`:
/// nodes start at 1 (GEMF numbers nodes from 1), states start at 0.
#[derive(Debug, Clone)]
pub struct Registry {
    kind: IdentifierKind,
    base: usize,
    by_label: HashMap<String, usize>,
    labels: Vec<String>,
}

impl Registry {
    pub fn nodes() -> Self {
        Self::with_base(IdentifierKind::Node, 1)
    }

    pub fn states() -> Self {
        Self::with_base(IdentifierKind::State, 0)
    }

    fn with_base(kind: IdentifierKind, base: usize) -> Self {
        Self { kind, base, by_label: HashMap::new(), labels: Vec::new() }
    }

    /// Return the index of `label`, assigning the next one if it is new.
    pub fn register(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.by_label.get(label) {
            return idx;
        }
        let idx = self.base + self.labels.len();
        self.by_label.insert(label.to_string(), idx);
        self.labels.push(label.to_string());
        idx
    }

    pub fn lookup(&self, label: &str) -> Result<usize> {
        self.by_label.get(label).copied().ok_or_else(|| TranslateError::UnknownIdentifier {
            kind: self.kind,
            label: label.to_string(),
        })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(self.base)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    /// Number of registered labels (the reserved node slot is not counted).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(label, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(move |(i, l)| (l.as_str(), self.base + i))
    }
}
