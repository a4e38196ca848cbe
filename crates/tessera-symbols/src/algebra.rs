//! Index-alignment and intersection algorithms over ordered symbol
//! collections.
//!
//! These are the primitives used to reconcile two sparse positional
//! structures indexed against different symbol sets: [`merge`] computes a
//! union together with the insertion positions that align each operand to
//! it, while [`intersect_idx`] and [`map_intersect_idx`] project a set or a
//! name-keyed map onto the positions of a reference set.
//!
//! Every function here is a single forward pass over sorted sequences; the
//! search cursor into the reference set is never rewound.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::map::{SymbolIdxMap, SymbolIdxSet, SymbolMap};
use crate::set::SymbolSet;
use crate::SymbolIdx;

/// Merges two symbol sets, returning the union and two alignment maps.
///
/// The first map is relative to `s1`: it sends each position `i` in
/// `0..=s1.len()` to the set of union symbols that must be spliced in
/// immediately before position `i` of `s1` (with `s1.len()` meaning "at the
/// end") so that `s1`'s sequence becomes the union's sequence. The second
/// map is the symmetric construction for `s2`. Symbols already present in
/// an operand never appear in its map; every spliced group is non-empty.
///
/// ```
/// use tessera_symbols::{algebra::merge, SymbolSet};
///
/// let s1 = SymbolSet::new(["b", "c", "e"]);
/// let s2 = SymbolSet::new(["a", "c", "d", "f", "g"]);
/// let (union, ins1, ins2) = merge(&s1, &s2);
///
/// assert_eq!(union, SymbolSet::new(["a", "b", "c", "d", "e", "f", "g"]));
/// assert_eq!(ins1.len(), 3);
/// assert_eq!(ins1.get(0), Some(&SymbolSet::new(["a"])));
/// assert_eq!(ins1.get(3), Some(&SymbolSet::new(["f", "g"])));
/// assert_eq!(ins2.get(1), Some(&SymbolSet::new(["b"])));
/// ```
#[must_use]
pub fn merge(
    s1: &SymbolSet,
    s2: &SymbolSet,
) -> (SymbolSet, SymbolIdxMap<SymbolSet>, SymbolIdxMap<SymbolSet>) {
    let a = s1.as_slice();
    let b = s2.as_slice();

    // Sorted union via one linear merge.
    let mut union = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                union.push(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                union.push(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                union.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    union.extend(a[i..].iter().cloned());
    union.extend(b[j..].iter().cloned());

    let union = SymbolSet::from_sorted(union);

    let ins1 = alignment_map(s1, &union);
    let ins2 = alignment_map(s2, &union);

    debug_assert!(alignment_map_is_consistent(&ins1));
    debug_assert!(alignment_map_is_consistent(&ins2));

    (union, ins1, ins2)
}

/// Computes the insertion map aligning `s` to `union`.
///
/// `s` must be a subset of `union`; both are sorted, so one synchronized
/// walk suffices. The names of `union` falling strictly between two
/// consecutive names of `s` form the group spliced in before the latter.
fn alignment_map(s: &SymbolSet, union: &SymbolSet) -> SymbolIdxMap<SymbolSet> {
    let us = union.as_slice();
    let ss = s.as_slice();

    let mut entries: Vec<(SymbolIdx, SymbolSet)> = Vec::new();
    let mut k = 0;

    for (i, name) in ss.iter().enumerate() {
        debug_assert!(k < us.len());
        if us[k] < *name {
            let mut group: SmallVec<[String; 4]> = SmallVec::new();
            while us[k] < *name {
                group.push(us[k].clone());
                k += 1;
            }
            entries.push((i, SymbolSet::from_sorted(group.into_vec())));
        }
        debug_assert_eq!(us[k], *name);
        k += 1;
    }

    // Whatever remains of the union goes past the end of s.
    if k < us.len() {
        entries.push((ss.len(), SymbolSet::from_sorted(us[k..].to_vec())));
    }

    SymbolIdxMap::from_sorted(entries)
}

/// Groups must be non-empty, and the last name of each group must precede
/// the first name of the next.
fn alignment_map_is_consistent(m: &SymbolIdxMap<SymbolSet>) -> bool {
    let entries = m.as_slice();
    entries.iter().all(|(_, group)| !group.is_empty())
        && entries.windows(2).all(|w| {
            let last = w[0].1.as_slice().last();
            let first = w[1].1.as_slice().first();
            matches!((last, first), (Some(l), Some(f)) if l < f)
        })
}

/// Returns the positions in `s_ref` of every symbol of `s` that also
/// occurs in `s_ref`.
///
/// One monotonic walk: for each name of `s` the cursor into `s_ref` only
/// moves forward, and the scan stops as soon as the cursor passes the end.
///
/// ```
/// use tessera_symbols::{algebra::intersect_idx, SymbolSet};
///
/// let s = SymbolSet::new(["b", "d", "e"]);
/// let s_ref = SymbolSet::new(["a", "b", "c", "d", "g"]);
/// assert_eq!(intersect_idx(&s, &s_ref).as_slice(), &[1, 3]);
/// ```
#[must_use]
pub fn intersect_idx(s: &SymbolSet, s_ref: &SymbolSet) -> SymbolIdxSet {
    let rs = s_ref.as_slice();
    let mut indices = Vec::with_capacity(s.len().min(rs.len()));
    let mut lo = 0;

    for name in s.iter() {
        if lo >= rs.len() {
            // name exceeds every remaining entry of s_ref.
            break;
        }
        // First position >= name within the unconsumed tail.
        match rs[lo..].binary_search_by(|n| n.as_str().cmp(name)) {
            Ok(off) => {
                indices.push(lo + off);
                lo += off + 1;
            }
            Err(off) => lo += off,
        }
    }

    debug_assert!(intersection_is_consistent(&indices, s, s_ref));

    SymbolIdxSet::from_sorted(indices)
}

/// Restricts `m` to the keys present in `s_ref`, re-keyed by each
/// surviving key's position in `s_ref`.
///
/// Same monotonic two-pointer walk as [`intersect_idx`]: overall
/// O(|m| + |s_ref|), never a fresh search from the start.
///
/// ```
/// use tessera_symbols::{algebra::map_intersect_idx, SymbolMap, SymbolSet};
///
/// let m: SymbolMap<i32> = [("b", 1), ("d", 2), ("e", 3)].into_iter().collect();
/// let s_ref = SymbolSet::new(["a", "b", "c", "d", "g"]);
/// let projected = map_intersect_idx(&m, &s_ref);
///
/// assert_eq!(projected.as_slice(), &[(1, 1), (3, 2)]);
/// ```
#[must_use]
pub fn map_intersect_idx<T: Clone>(m: &SymbolMap<T>, s_ref: &SymbolSet) -> SymbolIdxMap<T> {
    let rs = s_ref.as_slice();
    let mut entries = Vec::with_capacity(m.len().min(rs.len()));
    let mut lo = 0;

    for (name, value) in m.iter() {
        if lo >= rs.len() {
            break;
        }
        match rs[lo..].binary_search_by(|n| n.as_str().cmp(name)) {
            Ok(off) => {
                entries.push((lo + off, value.clone()));
                lo += off + 1;
            }
            Err(off) => lo += off,
        }
    }

    debug_assert!({
        let indices: Vec<SymbolIdx> = entries.iter().map(|(i, _)| *i).collect();
        indices.iter().all(|&idx| {
            idx < s_ref.len() && m.get(s_ref.get(idx).unwrap()).is_some()
        }) && m
            .iter()
            .filter_map(|(name, _)| s_ref.index_of(name))
            .all(|idx| indices.binary_search(&idx).is_ok())
    });

    SymbolIdxMap::from_sorted(entries)
}

/// Every index must land inside `s_ref` on a name of `s`, and every name
/// shared by `s` and `s_ref` must be represented.
fn intersection_is_consistent(indices: &[SymbolIdx], s: &SymbolSet, s_ref: &SymbolSet) -> bool {
    indices
        .iter()
        .all(|&idx| idx < s_ref.len() && s.contains(s_ref.get(idx).unwrap()))
        && s.iter()
            .filter_map(|name| s_ref.index_of(name))
            .all(|idx| indices.binary_search(&idx).is_ok())
}
