//! Property-based tests for interning and the index algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algebra::{intersect_idx, map_intersect_idx, merge};
    use crate::{SymbolMap, SymbolSet};

    // Strategy for generating small pools of short names
    fn names() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-f]{1,2}", 0..12)
    }

    // Strategy for generating name -> value maps
    fn name_map() -> impl Strategy<Value = Vec<(String, i32)>> {
        proptest::collection::vec(("[a-f]{1,2}", -100i32..100), 0..12)
    }

    proptest! {
        #[test]
        fn canonicalize_is_identity_stable(ns in names()) {
            let a = SymbolSet::new(ns.clone());
            let b = SymbolSet::new(ns);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn construction_sorts_and_dedups(ns in names()) {
            let s = SymbolSet::new(ns);
            prop_assert!(s.as_slice().windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn merge_union_is_sorted_union(n1 in names(), n2 in names()) {
            let s1 = SymbolSet::new(n1.clone());
            let s2 = SymbolSet::new(n2.clone());
            let (union, _, _) = merge(&s1, &s2);

            let expected = SymbolSet::new(n1.into_iter().chain(n2));
            prop_assert_eq!(union, expected);
        }

        #[test]
        fn merge_replay_rebuilds_union(n1 in names(), n2 in names()) {
            let s1 = SymbolSet::new(n1);
            let s2 = SymbolSet::new(n2);
            let (union, ins1, ins2) = merge(&s1, &s2);

            for (s, ins) in [(&s1, &ins1), (&s2, &ins2)] {
                let mut rebuilt: Vec<&str> = Vec::with_capacity(union.len());
                for (i, name) in s.iter().enumerate() {
                    if let Some(group) = ins.get(i) {
                        rebuilt.extend(group.iter());
                    }
                    rebuilt.push(name);
                }
                if let Some(group) = ins.get(s.len()) {
                    rebuilt.extend(group.iter());
                }
                let expected: Vec<&str> = union.iter().collect();
                prop_assert_eq!(rebuilt, expected);
            }
        }

        #[test]
        fn merge_groups_never_overlap_operand(n1 in names(), n2 in names()) {
            let s1 = SymbolSet::new(n1);
            let s2 = SymbolSet::new(n2);
            let (_, ins1, ins2) = merge(&s1, &s2);

            for (s, ins) in [(&s1, &ins1), (&s2, &ins2)] {
                for (_, group) in ins.iter() {
                    prop_assert!(group.iter().all(|name| !s.contains(name)));
                }
            }
        }

        #[test]
        fn intersect_idx_projects_exactly(n1 in names(), n2 in names()) {
            let s = SymbolSet::new(n1);
            let s_ref = SymbolSet::new(n2);
            let idx = intersect_idx(&s, &s_ref);

            // Soundness: every index points at a shared name.
            for i in idx.iter() {
                let name = s_ref.get(i).unwrap();
                prop_assert!(s.contains(name));
            }

            // Completeness: every shared name is represented once.
            for name in s.iter() {
                if let Some(i) = s_ref.index_of(name) {
                    prop_assert!(idx.contains(i));
                }
            }
            prop_assert!(idx.as_slice().windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn map_intersect_idx_matches_reference(entries in name_map(), n2 in names()) {
            let m: SymbolMap<i32> = entries.into_iter().collect();
            let s_ref = SymbolSet::new(n2);
            let projected = map_intersect_idx(&m, &s_ref);

            for (i, value) in projected.iter() {
                let name = s_ref.get(i).unwrap();
                prop_assert_eq!(m.get(name), Some(value));
            }

            for (name, _) in m.iter() {
                if let Some(i) = s_ref.index_of(name) {
                    prop_assert!(projected.get(i).is_some());
                }
            }
        }
    }
}
