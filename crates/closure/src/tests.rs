#[cfg(test)]
mod closure_tests {
    use crate::{candidate_keys, closure, is_superkey, non_empty_subsets, prime_attributes};
    use schema::{AttributeSet, Fd};

    fn attrs(list: &[&str]) -> AttributeSet {
        list.iter().copied().collect()
    }

    fn fd(lhs: &[&str], rhs: &[&str]) -> Fd {
        Fd::admit(attrs(lhs), attrs(rhs)).expect("test dependency is admissible")
    }

    #[test]
    fn closure_without_dependencies_is_the_seed() {
        let seed = attrs(&["A", "B"]);
        assert_eq!(closure(&seed, &[]), seed);
    }

    #[test]
    fn closure_of_empty_seed_is_empty() {
        let fds = vec![fd(&["A"], &["B"])];
        assert!(closure(&AttributeSet::new(), &fds).is_empty());
    }

    #[test]
    fn closure_chases_transitive_dependencies() {
        let fds = vec![fd(&["A"], &["B"]), fd(&["B"], &["C"]), fd(&["C"], &["D"])];
        assert_eq!(closure(&attrs(&["A"]), &fds), attrs(&["A", "B", "C", "D"]));
        assert_eq!(closure(&attrs(&["C"]), &fds), attrs(&["C", "D"]));
    }

    #[test]
    fn closure_is_monotone_and_idempotent() {
        let fds = vec![fd(&["A"], &["B"]), fd(&["B", "C"], &["D"])];
        let small = closure(&attrs(&["A"]), &fds);
        let large = closure(&attrs(&["A", "C"]), &fds);

        assert!(attrs(&["A"]).is_subset(&small));
        assert!(small.is_subset(&large));
        assert_eq!(closure(&large, &fds), large);
    }

    #[test]
    fn closure_covers_every_dependency_rhs() {
        let fds = vec![fd(&["A"], &["B", "C"]), fd(&["B"], &["D"])];
        for fd in &fds {
            assert!(fd.rhs().is_subset(&closure(fd.lhs(), &fds)));
        }
    }

    #[test]
    fn subset_enumeration_is_exhaustive_and_unique() {
        let set = attrs(&["A", "B", "C"]);
        let subsets: Vec<_> = non_empty_subsets(&set).collect();
        assert_eq!(subsets.len(), 7);

        let mut canonicals: Vec<String> =
            subsets.iter().map(AttributeSet::canonical).collect();
        canonicals.sort();
        canonicals.dedup();
        assert_eq!(canonicals.len(), 7);

        assert!(subsets.iter().all(|s| !s.is_empty() && s.is_subset(&set)));
    }

    #[test]
    fn subset_enumeration_of_empty_set_is_empty() {
        assert_eq!(non_empty_subsets(&AttributeSet::new()).count(), 0);
    }

    #[test]
    fn single_candidate_key() {
        // A -> B, so A alone reaches everything.
        let fds = vec![fd(&["A"], &["B"])];
        let keys = candidate_keys(&attrs(&["A", "B"]), &fds);
        assert_eq!(keys, vec![attrs(&["A"])]);
    }

    #[test]
    fn multiple_candidate_keys_sorted_by_size_then_canonical() {
        // S,J -> T and T -> J give two keys: {J, S} and {S, T}.
        let fds = vec![fd(&["S", "J"], &["T"]), fd(&["T"], &["J"])];
        let keys = candidate_keys(&attrs(&["S", "J", "T"]), &fds);
        assert_eq!(keys, vec![attrs(&["J", "S"]), attrs(&["S", "T"])]);
        assert_eq!(prime_attributes(&keys), attrs(&["J", "S", "T"]));
    }

    #[test]
    fn key_of_dependency_free_schema_is_the_whole_universe() {
        let keys = candidate_keys(&attrs(&["A", "B"]), &[]);
        assert_eq!(keys, vec![attrs(&["A", "B"])]);
    }

    #[test]
    fn keys_of_empty_universe_are_absent() {
        assert!(candidate_keys(&AttributeSet::new(), &[]).is_empty());
    }

    #[test]
    fn returned_keys_are_minimal_superkeys() {
        let universe = attrs(&["A", "B", "C", "D", "E"]);
        let fds = vec![
            fd(&["A"], &["B", "C"]),
            fd(&["B"], &["D"]),
            fd(&["A", "E"], &["C"]),
        ];
        let keys = candidate_keys(&universe, &fds);
        assert_eq!(keys, vec![attrs(&["A", "E"])]);

        for key in &keys {
            assert!(is_superkey(key, &universe, &fds));
            for attribute in key.iter() {
                assert!(!is_superkey(&key.without(attribute), &universe, &fds));
            }
        }
    }
}
