//! Debug trace flags carried by a driver configuration.

use std::collections::{btree_map, BTreeMap};

use serde::Deserialize;

/// Flag that enables call-tracing output. It never affects redaction.
pub const METHOD_FLAG: &str = "method";

/// Flag that lets sensitive-redactable fields render their real values.
pub const SENSITIVE_FLAG: &str = "sensitive";

pub(crate) static EMPTY_FLAGS: FlagSet = FlagSet::new();

/// Named boolean switches read at render time.
///
/// A missing flag reads as `false`. Keys are kept sorted so that any
/// rendering of the set is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(BTreeMap<String, bool>);

impl FlagSet {
    /// Creates an empty flag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the set with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.0.insert(name.into(), value);
    }

    /// Returns the flag value, or `false` when it is absent.
    #[must_use]
    pub fn get(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// Returns the flag value only when the key is present.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    /// Whether sensitive-redactable fields may be shown.
    #[must_use]
    pub fn show_sensitive(&self) -> bool {
        self.get(SENSITIVE_FLAG)
    }

    /// Whether method call tracing is requested.
    #[must_use]
    pub fn trace_method(&self) -> bool {
        self.get(METHOD_FLAG)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates flags in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, bool> {
        self.0.iter()
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, bool> {
        &self.0
    }
}

impl<K> FromIterator<(K, bool)> for FlagSet
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = (&'a String, &'a bool);
    type IntoIter = btree_map::Iter<'a, String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Where a record keeps its flags.
///
/// Implemented for the two shapes a flags field takes in a schema, so the
/// derive can point at either with `#[redact(flags = "...")]`.
pub trait FlagSource {
    fn flag_set(&self) -> Option<&FlagSet>;
}

impl FlagSource for FlagSet {
    fn flag_set(&self) -> Option<&FlagSet> {
        Some(self)
    }
}

impl FlagSource for Option<FlagSet> {
    fn flag_set(&self) -> Option<&FlagSet> {
        self.as_ref()
    }
}
