//! Canonical, ordered, duplicate-free collections of symbol names.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::store::SymbolStore;
use crate::SymbolIdx;

/// An interned set of symbol names.
///
/// Contents are strictly increasing and duplicate-free. Every set with the
/// same contents shares one canonical allocation, so `==`, `!=` and `Hash`
/// are O(1) identity operations that never inspect the names themselves.
///
/// Cloning a set copies a reference, not the underlying sequence. Sets are
/// immutable after creation and freely shareable across threads.
#[derive(Clone)]
pub struct SymbolSet {
    names: Arc<[String]>,
}

impl SymbolSet {
    /// Creates a set from arbitrary names.
    ///
    /// The input is sorted and deduplicated, then canonicalized against the
    /// process-wide pool: equal contents always yield the identical set.
    ///
    /// ```
    /// use tessera_symbols::SymbolSet;
    ///
    /// let s = SymbolSet::new(["y", "x", "y"]);
    /// assert_eq!(s.len(), 2);
    /// assert_eq!(s.get(0), Some("x"));
    /// assert_eq!(s, SymbolSet::new(["x", "y"]));
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort_unstable();
        names.dedup();
        Self::from_sorted(names)
    }

    /// Canonicalizes an already sorted, duplicate-free sequence.
    pub(crate) fn from_sorted(names: Vec<String>) -> Self {
        Self {
            names: SymbolStore::global().canonicalize(names),
        }
    }

    /// Returns the number of symbols in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set contains no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name at position `idx`, if any.
    #[must_use]
    pub fn get(&self, idx: SymbolIdx) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    /// Returns the position of `name` within the set, if present.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<SymbolIdx> {
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .ok()
    }

    /// Returns true if `name` is in the set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Iterates over the names in increasing order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.names.iter(),
        }
    }

    /// Returns the names as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::from_sorted(Vec::new())
    }
}

impl PartialEq for SymbolSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.names, &other.names)
    }
}

impl Eq for SymbolSet {}

impl Hash for SymbolSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Pointer hash is consistent with identity equality because the
        // contents are canonical.
        self.names.as_ptr().hash(state);
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{name}'")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolSet{self}")
    }
}

/// Iterator over the names of a [`SymbolSet`] in increasing order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::SymbolSet;

    /// The persisted form is the name sequence in increasing order.
    impl Serialize for SymbolSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    /// Deserialization reconstructs through the canonicalization path, so
    /// a freshly loaded set again compares by identity.
    impl<'de> Deserialize<'de> for SymbolSet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let names = Vec::<String>::deserialize(deserializer)?;
            Ok(SymbolSet::new(names))
        }
    }
}
