//! Field-by-field matching of a record through composed feature matchers.

use crate::{compose, equal_to, has_feature, ConjunctionMatcher, Matcher, StringDescription};

#[derive(Debug, Clone)]
struct Person {
    title: String,
    first_name: String,
    last_name: String,
}

impl Person {
    fn new(title: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            title: title.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

fn person_equal_to(expected: &Person) -> ConjunctionMatcher<Person> {
    compose(has_feature(
        "title",
        |p: &Person| p.title.clone(),
        equal_to(expected.title.clone()),
    ))
    .and(has_feature(
        "firstName",
        |p: &Person| p.first_name.clone(),
        equal_to(expected.first_name.clone()),
    ))
    .and(has_feature(
        "lastName",
        |p: &Person| p.last_name.clone(),
        equal_to(expected.last_name.clone()),
    ))
}

#[test]
fn matches_when_equal() {
    let person1 = Person::new("x", "y", "z");
    let person2 = Person::new("x", "y", "z");

    assert!(person_equal_to(&person1).matches(&person2));
}

#[test]
fn title_unequal_fails_naming_title() {
    let person1 = Person::new("x1", "y", "z");
    let person2 = Person::new("x2", "y", "z");
    let matcher = person_equal_to(&person1);

    assert!(!matcher.matches(&person2));
    assert_eq!(
        StringDescription::mismatch(&matcher, &person2),
        "title was \"x2\""
    );
}

#[test]
fn first_name_unequal_fails_naming_first_name() {
    let person1 = Person::new("x", "y1", "z");
    let person2 = Person::new("x", "y2", "z");
    let matcher = person_equal_to(&person1);

    assert!(!matcher.matches(&person2));
    assert_eq!(
        StringDescription::mismatch(&matcher, &person2),
        "firstName was \"y2\""
    );
}

#[test]
fn last_name_unequal_fails_naming_last_name() {
    let person1 = Person::new("x", "y", "z1");
    let person2 = Person::new("x", "y", "z2");
    let matcher = person_equal_to(&person1);

    assert!(!matcher.matches(&person2));
    assert_eq!(
        StringDescription::mismatch(&matcher, &person2),
        "lastName was \"z2\""
    );
}

#[test]
fn every_unequal_field_is_reported() {
    let person1 = Person::new("x1", "y", "z1");
    let person2 = Person::new("x2", "y", "z2");
    let matcher = person_equal_to(&person1);

    insta::assert_snapshot!(
        StringDescription::mismatch(&matcher, &person2),
        @r###"title was "x2" and lastName was "z2""###
    );
}

#[test]
fn description_lists_every_field() {
    let matcher = person_equal_to(&Person::new("x", "y", "z"));

    insta::assert_snapshot!(
        StringDescription::of(&matcher),
        @r###"(title "x" and firstName "y" and lastName "z")"###
    );
}
