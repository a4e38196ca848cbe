//! Process-wide canonicalization pool for symbol-set contents.
//!
//! The pool maps each distinct sorted name sequence to a single shared
//! allocation. Handles compare by pointer, so equality between sets built
//! from equal contents reduces to an identity check.

use std::sync::Arc;

use hashbrown::HashSet;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

/// The interning pool.
///
/// Entries live for the lifetime of the process and are never evicted:
/// distinct symbol sets in one computation are typically few, so unbounded
/// growth is accepted.
pub(crate) struct SymbolStore {
    sets: Mutex<HashSet<Arc<[String]>>>,
}

impl SymbolStore {
    fn new() -> Self {
        Self {
            sets: Mutex::new(HashSet::new()),
        }
    }

    /// Returns the process-wide store.
    pub(crate) fn global() -> &'static SymbolStore {
        static STORE: OnceCell<SymbolStore> = OnceCell::new();
        STORE.get_or_init(SymbolStore::new)
    }

    /// Canonicalizes a sorted, duplicate-free name sequence.
    ///
    /// Returns the unique shared allocation for this content, creating it
    /// on first sight. Under concurrent calls with equal content the first
    /// writer wins and every caller observes the same allocation.
    pub(crate) fn canonicalize(&self, names: Vec<String>) -> Arc<[String]> {
        debug_assert!(names.windows(2).all(|w| w[0] < w[1]));

        let mut sets = self.sets.lock();
        if let Some(existing) = sets.get(names.as_slice()) {
            return Arc::clone(existing);
        }

        let entry: Arc<[String]> = names.into();
        sets.insert(Arc::clone(&entry));
        entry
    }
}
