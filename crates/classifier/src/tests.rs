#[cfg(test)]
mod classifier_tests {
    use crate::classify;
    use closure::candidate_keys;
    use schema::{AttributeSet, Fd};

    fn attrs(list: &[&str]) -> AttributeSet {
        list.iter().copied().collect()
    }

    fn fd(lhs: &[&str], rhs: &[&str]) -> Fd {
        Fd::admit(attrs(lhs), attrs(rhs)).expect("test dependency is admissible")
    }

    #[test]
    fn schema_in_bcnf() {
        let universe = attrs(&["A", "B"]);
        let fds = vec![fd(&["A"], &["B"])];
        let keys = candidate_keys(&universe, &fds);

        let outcome = classify(&universe, &fds, &keys);
        assert!(outcome.is_bcnf());
        assert!(outcome.is_3nf());
        assert!(outcome.is_2nf());
        assert!(outcome.bcnf_violations().is_empty());
        assert_eq!(outcome.highest_form(), "BCNF");
    }

    #[test]
    fn third_nf_but_not_bcnf() {
        // S,J -> T and T -> J: T is not a superkey, but J is prime.
        let universe = attrs(&["S", "J", "T"]);
        let fds = vec![fd(&["S", "J"], &["T"]), fd(&["T"], &["J"])];
        let keys = candidate_keys(&universe, &fds);

        let outcome = classify(&universe, &fds, &keys);
        assert!(!outcome.is_bcnf());
        assert!(outcome.is_3nf());
        assert!(outcome.is_2nf());
        assert_eq!(outcome.bcnf_violations(), &[fd(&["T"], &["J"])]);
        assert_eq!(outcome.highest_form(), "3NF");
    }

    #[test]
    fn partial_dependency_breaks_2nf() {
        let universe = attrs(&["A", "B", "C", "D", "E"]);
        let fds = vec![
            fd(&["A"], &["B", "C"]),
            fd(&["B"], &["D"]),
            fd(&["A", "E"], &["C"]),
        ];
        let keys = candidate_keys(&universe, &fds);
        assert_eq!(keys, vec![attrs(&["A", "E"])]);

        let outcome = classify(&universe, &fds, &keys);
        assert!(!outcome.is_bcnf());
        assert!(!outcome.is_3nf());
        assert!(!outcome.is_2nf());

        // {A,E} -> C is a key dependency and never recorded.
        assert_eq!(
            outcome.bcnf_violations(),
            &[fd(&["A"], &["B", "C"]), fd(&["B"], &["D"])]
        );
        assert_eq!(
            outcome.third_nf_violations(),
            &[fd(&["A"], &["B", "C"]), fd(&["B"], &["D"])]
        );
        // Only A is a proper subset of the key {A, E}.
        assert_eq!(
            outcome.second_nf_violations(),
            &[fd(&["A"], &["B", "C"])]
        );
        assert_eq!(outcome.highest_form(), "1NF");
    }

    #[test]
    fn empty_dependency_set_is_trivially_bcnf() {
        let universe = attrs(&["A"]);
        let keys = candidate_keys(&universe, &[]);
        let outcome = classify(&universe, &[], &keys);
        assert!(outcome.is_bcnf() && outcome.is_3nf() && outcome.is_2nf());
    }

    #[test]
    fn empty_universe_is_trivially_bcnf() {
        let outcome = classify(&AttributeSet::new(), &[], &[]);
        assert!(outcome.is_bcnf() && outcome.is_3nf() && outcome.is_2nf());
    }

    #[test]
    fn missing_keys_leave_classification_undefined() {
        let universe = attrs(&["A", "B"]);
        let fds = vec![fd(&["A"], &["B"])];
        let outcome = classify(&universe, &fds, &[]);
        assert!(!outcome.is_bcnf() && !outcome.is_3nf() && !outcome.is_2nf());
        assert!(outcome.bcnf_violations().is_empty());
    }

    #[test]
    fn flags_mirror_violation_lists() {
        let universe = attrs(&["A", "B", "C"]);
        let fds = vec![fd(&["A"], &["B"]), fd(&["B"], &["C"])];
        let keys = candidate_keys(&universe, &fds);
        let outcome = classify(&universe, &fds, &keys);

        assert_eq!(outcome.is_bcnf(), outcome.bcnf_violations().is_empty());
        assert_eq!(outcome.is_3nf(), outcome.third_nf_violations().is_empty());
        assert_eq!(outcome.is_2nf(), outcome.second_nf_violations().is_empty());
    }
}
