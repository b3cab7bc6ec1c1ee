//! Controlled/uncontrolled storage for the selection set.
//!
//! A table is *controlled* when the host supplies the selected keys (a two-way bound model
//! value). Writes then only produce an update request; the host decides whether to feed the new
//! value back. Without a host value the table is *uncontrolled* and keeps its own fallback set.

use indexmap::IndexSet;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct ModelValue<K: Eq + Hash> {
    external: Option<IndexSet<K>>,
    fallback: IndexSet<K>,
}

impl<K: Eq + Hash> Default for ModelValue<K> {
    fn default() -> Self {
        Self::uncontrolled()
    }
}

impl<K: Eq + Hash> ModelValue<K> {
    pub fn uncontrolled() -> Self {
        Self {
            external: None,
            fallback: IndexSet::new(),
        }
    }

    pub fn controlled(value: impl IntoIterator<Item = K>) -> Self {
        Self {
            external: Some(value.into_iter().collect()),
            fallback: IndexSet::new(),
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The authoritative selection set.
    pub fn get(&self) -> &IndexSet<K> {
        self.external.as_ref().unwrap_or(&self.fallback)
    }

    /// Writes `value` to the fallback store when uncontrolled.
    ///
    /// Returns `true` if the authoritative set changed as a result. A controlled value is left
    /// untouched and `false` is returned.
    pub fn set(&mut self, value: IndexSet<K>) -> bool {
        if self.external.is_some() {
            return false;
        }
        self.fallback = value;
        true
    }

    /// Replaces the host-owned value. `None` hands authority back to the fallback store.
    pub fn set_external(&mut self, value: Option<IndexSet<K>>) {
        self.external = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_writes_fallback() {
        let mut m = ModelValue::uncontrolled();
        assert!(m.set([1, 2].into_iter().collect()));
        assert_eq!(m.get().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn controlled_ignores_writes() {
        let mut m = ModelValue::controlled([2]);
        assert!(!m.set(IndexSet::new()));
        assert_eq!(m.get().iter().copied().collect::<Vec<_>>(), vec![2]);

        m.set_external(None);
        assert!(!m.is_controlled());
        assert!(m.get().is_empty());
    }

    #[test]
    fn controlled_value_is_deduplicated() {
        let m = ModelValue::controlled([3, 1, 3]);
        assert_eq!(m.get().iter().copied().collect::<Vec<_>>(), vec![3, 1]);
    }
}
