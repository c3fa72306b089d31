//! Algebraic properties of conjunctions and feature matchers.

use std::convert::TryFrom;
use std::sync::Arc;

use crate::{
    compose, equal_to, greater_than, has_feature, less_than, satisfies, ComposeError,
    ConjunctionMatcher, Matcher, SharedMatcher, StringDescription,
};

fn members() -> Vec<SharedMatcher<i32>> {
    let positive: SharedMatcher<i32> = Arc::new(greater_than(0));
    let small: SharedMatcher<i32> = Arc::new(less_than(10));
    let even: SharedMatcher<i32> = Arc::new(satisfies("an even number", |n: &i32| n % 2 == 0));
    vec![positive, small, even]
}

#[test]
fn conjunction_is_the_and_of_its_members() {
    let members = members();
    let conjunction = ConjunctionMatcher::try_from(members.clone()).unwrap();

    for value in -4..16 {
        let expected = members.iter().all(|m| m.matches(&value));
        assert_eq!(conjunction.matches(&value), expected, "value {}", value);
    }
}

#[test]
fn chained_and_equals_direct_construction() {
    let members = members();
    let direct = ConjunctionMatcher::try_from(members.clone()).unwrap();
    let chained = compose(greater_than(0))
        .and(less_than(10))
        .and(satisfies("an even number", |n: &i32| n % 2 == 0));

    assert_eq!(StringDescription::of(&chained), StringDescription::of(&direct));
    for value in -4..16 {
        assert_eq!(chained.matches(&value), direct.matches(&value));
        assert_eq!(
            StringDescription::mismatch(&chained, &value),
            StringDescription::mismatch(&direct, &value)
        );
    }
}

#[test]
fn and_does_not_mutate_the_receiver() {
    let base = compose(greater_than(0));
    let extended = base.and(less_than(10));

    assert_eq!(base.len(), 1);
    assert_eq!(extended.len(), 2);
    assert!(base.matches(&50));
    assert!(!extended.matches(&50));
    assert_eq!(StringDescription::of(&base), "(a value greater than 0)");
}

#[test]
fn partial_chains_can_be_shared() {
    let base = compose(greater_than(0));
    let small = base.and(less_than(10));
    let large = base.and(greater_than(100));

    assert!(small.matches(&5));
    assert!(!large.matches(&5));
    assert!(Arc::ptr_eq(&small.members()[0], &large.members()[0]));
}

#[test]
fn mismatch_lists_failing_members_in_order() {
    let matcher = compose(has_feature("abs", |n: &i32| n.abs(), less_than(3)))
        .and(greater_than(0))
        .and(has_feature("square", |n: &i32| n * n, less_than(5)));

    assert_eq!(
        StringDescription::mismatch(&matcher, &-4),
        "abs was 4 and was -4 and square was 16"
    );
    assert_eq!(StringDescription::mismatch(&matcher, &4), "abs was 4 and square was 16");
    assert_eq!(StringDescription::mismatch(&matcher, &-1), "was -1");
}

#[test]
fn duplicate_members_are_reported_each_time() {
    let matcher = compose(equal_to(1)).and(equal_to(1));
    assert_eq!(StringDescription::mismatch(&matcher, &2), "was 2 and was 2");
}

#[test]
fn feature_mismatch_is_computed_on_extracted_value() {
    let sub = less_than(3);
    let feature = has_feature("len", |s: &String| s.len(), less_than(3));

    for text in &["", "ab", "abc", "abcdef"] {
        let text = text.to_string();
        assert_eq!(feature.matches(&text), sub.matches(&text.len()));
        if !feature.matches(&text) {
            assert_eq!(
                StringDescription::mismatch(&feature, &text),
                format!("len {}", StringDescription::mismatch(&sub, &text.len()))
            );
        }
    }
}

#[test]
fn empty_conjunction_is_rejected_at_construction() {
    let empty: Vec<SharedMatcher<i32>> = Vec::new();
    assert_eq!(
        ConjunctionMatcher::try_from(empty).unwrap_err(),
        ComposeError::EmptyConjunction
    );
}

#[test]
fn composed_matchers_are_shareable_across_threads() {
    let matcher = Arc::new(compose(greater_than(0)).and(less_than(10)));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || matcher.matches(&(i * 4)))
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results, vec![false, true, true, false]);
}
