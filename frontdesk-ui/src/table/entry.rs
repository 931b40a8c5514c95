//! Table cell entries and sort keys

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

/// A value an entry can sort by.
///
/// Values of different kinds order by kind rank, so a column that mixes
/// kinds (e.g. blank cells next to dates) still sorts deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Integer(_) => 1,
            Self::Timestamp(_) => 2,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// How an entry's sort key is obtained.
///
/// A closed three-way: sort by the display value itself, by a key
/// precomputed when the row was built, or by a key recomputed at every
/// sort request.
#[derive(Clone)]
pub enum SortKey {
    /// The display value is the key.
    Identity,
    /// Key computed once at construction (e.g. the parsed date behind a
    /// formatted date cell).
    Static(SortValue),
    /// Key recomputed whenever a sort is requested; it may depend on
    /// state that changed since the row was built.
    Dynamic(Arc<dyn Fn() -> SortValue + Send + Sync>),
}

/// The sort mode an entry was constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Identity,
    Static,
    Dynamic,
}

/// One cell of a table row: a display value plus the rule for sorting it.
///
/// Entries are built once per cell when a data page is assembled and are
/// immutable afterwards; replacing the dataset discards them wholesale.
#[derive(Clone)]
pub struct Entry {
    value: String,
    key: SortKey,
}

impl Entry {
    /// Creates an entry sorted by its display value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            key: SortKey::Identity,
        }
    }

    /// Creates an entry with a precomputed sort key.
    pub fn with_sort_value(value: impl Into<String>, sort: impl Into<SortValue>) -> Self {
        Self {
            value: value.into(),
            key: SortKey::Static(sort.into()),
        }
    }

    /// Creates an entry whose sort key is recomputed at every sort
    /// request.
    pub fn with_dynamic_sort<F>(value: impl Into<String>, key: F) -> Self
    where
        F: Fn() -> SortValue + Send + Sync + 'static,
    {
        Self {
            value: value.into(),
            key: SortKey::Dynamic(Arc::new(key)),
        }
    }

    /// The display value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The sort mode this entry was constructed with.
    pub fn sort_mode(&self) -> SortMode {
        match self.key {
            SortKey::Identity => SortMode::Identity,
            SortKey::Static(_) => SortMode::Static,
            SortKey::Dynamic(_) => SortMode::Dynamic,
        }
    }

    /// Resolves the sort key now.
    ///
    /// Identity entries sort by their display value, static entries by the
    /// stored key, dynamic entries by invoking the key function.
    pub fn sort_value(&self) -> SortValue {
        match &self.key {
            SortKey::Identity => SortValue::Text(self.value.clone()),
            SortKey::Static(value) => value.clone(),
            SortKey::Dynamic(key) => key(),
        }
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("value", &self.value)
            .field("sort_mode", &self.sort_mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicI64;
    use std::sync::atomic::Ordering as AtomicOrdering;

    use super::*;

    #[test]
    fn test_identity_sorts_by_display_value() {
        let entry = Entry::text("Muller");
        assert_eq!(entry.sort_mode(), SortMode::Identity);
        assert_eq!(entry.sort_value(), SortValue::Text("Muller".to_string()));
    }

    #[test]
    fn test_static_key_is_reused() {
        let entry = Entry::with_sort_value("3 Jan 2026", 42i64);
        assert_eq!(entry.sort_mode(), SortMode::Static);
        assert_eq!(entry.sort_value(), SortValue::Integer(42));
    }

    #[test]
    fn test_dynamic_key_recomputes() {
        let counter = Arc::new(AtomicI64::new(0));
        let key_counter = Arc::clone(&counter);
        let entry = Entry::with_dynamic_sort("live", move || {
            SortValue::Integer(key_counter.fetch_add(1, AtomicOrdering::SeqCst))
        });

        assert_eq!(entry.sort_value(), SortValue::Integer(0));
        assert_eq!(entry.sort_value(), SortValue::Integer(1));
    }

    #[test]
    fn test_mixed_kinds_order_by_rank() {
        let text = SortValue::Text("z".to_string());
        let number = SortValue::Integer(1);
        assert!(text < number);
    }
}
