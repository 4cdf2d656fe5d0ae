use guard_rail::builders;
use guard_rail::prelude::*;

#[test]
fn is_present_rejects_none() {
    let v = Validator::new(Some(3), "count").is_present();
    assert!(v.is_valid());

    let v = Validator::new(None::<i32>, "count").is_present();
    let error = v.error().unwrap();
    assert_eq!(error.kind(), &ErrorKind::NullArgument);
    assert_eq!(error.message(), "value cannot be none");
}

#[test]
fn is_present_with_uses_the_given_builder() {
    let v = Validator::new(None::<&str>, "token")
        .is_present_with(builders::null_argument_with("token is required"));
    assert_eq!(v.error().unwrap().message(), "token is required");
    assert_eq!(v.error().unwrap().kind(), &ErrorKind::NullArgument);
}

#[test]
fn is_present_and_not_empty_distinguishes_missing_from_empty() {
    let missing = Validator::new(None::<String>, "title").is_present_and_not_empty();
    assert_eq!(missing.error().unwrap().kind(), &ErrorKind::NullArgument);

    let empty = Validator::new(Some(String::new()), "title").is_present_and_not_empty();
    assert_eq!(empty.error().unwrap().kind(), &ErrorKind::InvalidArgument);

    let filled = Validator::new(Some(vec![1]), "ids").is_present_and_not_empty();
    assert!(filled.is_valid());
}

#[test]
fn is_not_empty_covers_strings_vectors_arrays_and_slices() {
    assert!(Validator::new("", "s").is_not_empty().is_invalid());
    assert!(Validator::new(String::from("x"), "s").is_not_empty().is_valid());
    assert!(Validator::new(Vec::<u8>::new(), "bytes").is_not_empty().is_invalid());
    assert!(Validator::new([0u8; 0], "array").is_not_empty().is_invalid());
    assert!(Validator::new(&[1, 2][..], "slice").is_not_empty().is_valid());
}

#[test]
fn is_not_empty_with_uses_the_given_builder() {
    let v = Validator::new("", "name").is_not_empty_with(builders::custom("blank", "name is blank"));
    assert_eq!(v.error().unwrap().kind(), &ErrorKind::Custom("blank".into()));
}

#[test]
fn all_elements_requires_every_element() {
    let v = Validator::new(vec![2, 4, 7], "evens").all_elements(|n: &i32| n % 2 == 0, "odd element");
    assert_eq!(v.error().unwrap().message(), "odd element");

    let v = Validator::new(Vec::<i32>::new(), "evens").all_elements(|n: &i32| n % 2 == 0, "odd element");
    assert!(v.is_valid());
}

#[test]
fn has_no_none_rejects_missing_slots() {
    assert!(Validator::new([Some(1), Some(2)], "slots").has_no_none().is_valid());

    let v = Validator::new(vec![Some("a"), None], "slots").has_no_none();
    assert_eq!(v.error().unwrap().message(), "the sequence cannot contain `None` elements");
}

#[test]
fn ordering_checks_report_the_violated_bound() {
    assert!(Validator::new(5, "n").is_greater_than(4).is_less_than(6).is_valid());
    assert!(Validator::new(5, "n").is_at_least(5).is_at_most(5).is_valid());

    let v = Validator::new(5, "n").is_greater_than(5);
    let error = v.error().unwrap();
    assert_eq!(error.kind(), &ErrorKind::OutOfRange);
    assert_eq!(error.message(), "value must be greater than 5");

    let v = Validator::new(1.5, "ratio").is_at_most(1.0);
    assert_eq!(v.error().unwrap().message(), "value must be less than or equal to 1");
}

#[test]
fn ordering_checks_accept_custom_builders() {
    let v = Validator::new(0, "workers").is_greater_than_with(0, builders::invalid_argument("need a worker"));
    let error = v.error().unwrap();
    assert_eq!(error.kind(), &ErrorKind::InvalidArgument);
    assert_eq!(error.message(), "need a worker");

    let v = Validator::new(9, "n").is_less_than_with(5, builders::custom("limit", "too many"));
    assert_eq!(v.error().unwrap().kind(), &ErrorKind::Custom("limit".into()));

    assert!(Validator::new(5, "n").is_at_least_with(5, builders::out_of_range("low")).is_valid());
    let v = Validator::new(6, "n").is_at_most_with(5, builders::out_of_range("high"));
    assert_eq!(v.error().unwrap().message(), "high");

    let outcome = ValidatorCollection::new()
        .parameter(80u16, "http")
        .parameter(8080u16, "admin")
        .is_in_range_with(1..1024, builders::custom("privileged_port", "not privileged"))
        .to_outcome();
    assert_eq!(outcome.error().unwrap().parameters(), "admin");
}

#[test]
fn is_in_range_is_half_open() {
    assert!(Validator::new(1u32, "port").is_in_range(1..65_536).is_valid());
    assert!(Validator::new(65_535u32, "port").is_in_range(1..65_536).is_valid());
    assert!(Validator::new(65_536u32, "port").is_in_range(1..65_536).is_invalid());

    #[allow(clippy::reversed_empty_ranges)]
    let empty = Validator::new(3, "n").is_in_range(5..1);
    assert!(empty.is_invalid());
}

#[test]
fn checks_apply_to_every_collection_element() {
    let outcome = ValidatorCollection::new()
        .parameter(Some(vec![1]), "a")
        .parameter(Some(vec![]), "b")
        .parameter(None, "c")
        .is_present_and_not_empty()
        .to_outcome();

    let kinds: Vec<_> = outcome.errors().iter().map(|e| e.kind().clone()).collect();
    assert_eq!(kinds, vec![ErrorKind::InvalidArgument, ErrorKind::NullArgument]);
    assert_eq!(outcome.error().unwrap().parameters(), "b, c");
}

#[test]
fn checks_chain_with_custom_predicates() {
    let v = Validator::new("guest", "user")
        .is_not_empty()
        .check_false(|name: &&str| *name == "guest", "guest access is disabled")
        .is_not_empty();

    assert_eq!(v.error().unwrap().message(), "guest access is disabled");
}
