// ==============================================
// CROSS-TYPE INVARIANT TESTS (integration)
// ==============================================
//
// RetentionCore and BoundedRetentionSet share one admission policy. These
// tests drive both through the public API and require identical outcomes.

use topkeep::prelude::*;

fn drive_both(capacity: usize, ops: &[(i32, char)]) -> (Vec<bool>, Vec<(i32, char)>) {
    let mut core = RetentionCore::new(capacity);
    let set = BoundedRetentionSet::new(capacity);

    let mut results = Vec::with_capacity(ops.len());
    for &(k, v) in ops {
        let a = core.try_insert(k, v);
        let b = set.try_insert(k, v);
        assert_eq!(a, b, "core and set disagree on ({}, {:?})", k, v);
        results.push(a);
    }

    let from_core: Vec<(i32, char)> = core.iter().map(|(k, v)| (*k, *v)).collect();
    let from_set: Vec<(i32, char)> = set.traverse().collect();
    assert_eq!(from_core, from_set);
    assert!(core.check_invariants().is_ok());
    (results, from_set)
}

// ==============================================
// Documented scenarios
// ==============================================

mod scenarios {
    use super::*;

    #[test]
    fn eviction_of_minimum() {
        let (results, contents) = drive_both(3, &[(1, 'a'), (5, 'b'), (3, 'c'), (2, 'd')]);
        assert_eq!(results, vec![true, true, true, true]);
        assert_eq!(contents, vec![(2, 'd'), (3, 'c'), (5, 'b')]);
    }

    #[test]
    fn rejection_below_minimum() {
        let (results, contents) = drive_both(2, &[(10, 'a'), (20, 'b'), (5, 'c')]);
        assert_eq!(results, vec![true, true, false]);
        assert_eq!(contents, vec![(10, 'a'), (20, 'b')]);
    }

    #[test]
    fn duplicate_keeps_original_value() {
        let (results, contents) = drive_both(2, &[(10, 'a'), (20, 'b'), (10, 'z')]);
        assert_eq!(results, vec![true, true, false]);
        assert_eq!(contents, vec![(10, 'a'), (20, 'b')]);
    }

    #[test]
    fn duplicate_while_not_full_is_rejected() {
        let (results, contents) = drive_both(5, &[(4, 'a'), (4, 'b')]);
        assert_eq!(results, vec![true, false]);
        assert_eq!(contents, vec![(4, 'a')]);
    }
}

// ==============================================
// Capacity-0 Behavior
// ==============================================
//
// Admission is decided before trimming, so on an empty zero-capacity set the
// entry is admitted and then trimmed away in the same call.

mod zero_capacity {
    use super::*;

    #[test]
    fn capacity_zero_is_honored() {
        let set: BoundedRetentionSet<i32, char> = BoundedRetentionSet::new(0);
        assert_eq!(set.capacity(), 0);
    }

    #[test]
    fn capacity_zero_reports_success_but_retains_nothing() {
        let (results, contents) = drive_both(0, &[(1, 'x'), (2, 'y'), (1, 'x')]);
        assert_eq!(results, vec![true, true, true]);
        assert!(contents.is_empty());
    }
}

// ==============================================
// Construction
// ==============================================

mod construction {
    use super::*;

    #[test]
    fn negative_capacity_is_a_config_error() {
        let from_set = BoundedRetentionSet::<i32, char>::try_new(-1).unwrap_err();
        let from_core = RetentionCore::<i32, char>::try_new(-1).unwrap_err();
        let from_builder = RetentionSetBuilder::new(-1)
            .try_build::<i32, char>()
            .unwrap_err();
        assert_eq!(from_set, from_core);
        assert_eq!(from_set, from_builder);
    }

    #[test]
    fn signed_and_unsigned_constructors_agree() {
        let a = BoundedRetentionSet::<i32, char>::try_new(7).unwrap();
        let b = BoundedRetentionSet::<i32, char>::new(7);
        assert_eq!(a.capacity(), b.capacity());
    }
}
