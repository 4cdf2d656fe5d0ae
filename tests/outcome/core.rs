use guard_rail::outcome::Outcome;
use guard_rail::types::{AggregateError, ArgumentError, EnsureError};
use std::cell::Cell;

fn failure(name: &'static str) -> Outcome {
    Outcome::failure(ArgumentError::null_argument(name))
}

fn names(outcome: &Outcome) -> Vec<&str> {
    outcome.errors().iter().map(|e| e.parameter()).collect()
}

#[test]
fn success_and_failure_are_exclusive() {
    let ok = Outcome::success();
    assert!(ok.is_success());
    assert!(!ok.is_failure());
    assert!(ok.errors().is_empty());
    assert!(ok.error().is_none());

    let failed = failure("a");
    assert!(failed.is_failure());
    assert!(!failed.is_success());
    assert_eq!(failed.errors().len(), 1);
}

#[test]
fn combining_two_successes_is_success() {
    assert_eq!(Outcome::combine(Outcome::success(), Outcome::success()), Outcome::success());
}

#[test]
fn combining_a_single_failure_wraps_it_in_an_aggregate() {
    let combined = Outcome::combine(failure("a"), Outcome::success());

    let error = combined.error().unwrap();
    assert!(error.is_aggregate());
    assert_eq!(names(&combined), vec!["a"]);
}

#[test]
fn combining_aggregates_flattens_instead_of_nesting() {
    let left = Outcome::combine(failure("a"), failure("b"));
    let right = Outcome::combine(failure("c"), failure("d"));

    let combined = Outcome::combine(left, right);

    assert_eq!(names(&combined), vec!["a", "b", "c", "d"]);
    match combined {
        Outcome::Failure(EnsureError::Aggregate(aggregate)) => assert_eq!(aggregate.len(), 4),
        other => panic!("expected a flat aggregate, got {other:?}"),
    }
}

#[test]
fn combining_preserves_duplicates_and_order() {
    let combined = Outcome::combine(failure("x"), Outcome::combine(failure("x"), failure("y")));
    assert_eq!(names(&combined), vec!["x", "x", "y"]);
}

#[test]
fn from_errors_builds_success_or_aggregate() {
    assert!(Outcome::from_errors(Vec::<ArgumentError>::new()).is_success());

    let outcome = Outcome::from_errors([
        ArgumentError::null_argument("a"),
        ArgumentError::invalid_argument("b", "bad"),
    ]);
    assert_eq!(names(&outcome), vec!["a", "b"]);
}

#[test]
fn match_with_invokes_exactly_one_branch() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let value = Outcome::success().match_with(
        || {
            successes.set(successes.get() + 1);
            1
        },
        |_| {
            failures.set(failures.get() + 1);
            2
        },
    );
    assert_eq!(value, 1);

    let value = failure("a").match_with(
        || {
            successes.set(successes.get() + 1);
            1
        },
        |_| {
            failures.set(failures.get() + 1);
            2
        },
    );
    assert_eq!(value, 2);

    assert_eq!(successes.get(), 1);
    assert_eq!(failures.get(), 1);
}

#[test]
fn on_failure_only_runs_for_failures() {
    let calls = Cell::new(0);

    Outcome::success().on_failure(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);

    failure("a").on_failure(|err| {
        assert_eq!(err.errors()[0].parameter(), "a");
        calls.set(calls.get() + 1);
    });
    assert_eq!(calls.get(), 1);
}

#[test]
fn match_or_raise_returns_the_error_unchanged() {
    assert_eq!(Outcome::success().match_or_raise(|| "done"), Ok("done"));

    let aggregate = Outcome::combine(failure("a"), failure("b"));
    let err = aggregate.clone().match_or_raise(|| "done").unwrap_err();
    assert_eq!(Some(&err), aggregate.error());
    assert!(err.is_aggregate());
}

#[test]
fn collecting_outcomes_folds_with_combine() {
    let collected: Outcome =
        vec![Outcome::success(), failure("a"), Outcome::success(), failure("b")]
            .into_iter()
            .collect();
    assert_eq!(names(&collected), vec!["a", "b"]);

    let empty: Outcome = Vec::<Outcome>::new().into_iter().collect();
    assert!(empty.is_success());
}

#[test]
fn conversions_to_and_from_result() {
    let result: Result<(), EnsureError> = failure("a").into();
    assert!(result.is_err());

    let outcome = Outcome::from(Ok::<u8, EnsureError>(1));
    assert!(outcome.is_success());

    let outcome = Outcome::from(ArgumentError::null_argument("a"));
    assert!(!outcome.error().unwrap().is_aggregate());

    assert_eq!(Outcome::success().into_result(), Ok(()));
}

#[test]
fn aggregate_display_lists_every_component() {
    let aggregate = AggregateError::from_errors([
        ArgumentError::null_argument("a"),
        ArgumentError::out_of_range("b", "too big"),
    ])
    .unwrap();

    assert_eq!(
        aggregate.to_string(),
        "2 parameter check(s) failed: value cannot be none (parameter `a`); too big (parameter `b`)"
    );
}

#[test]
#[cfg(feature = "serde")]
fn outcome_survives_a_serde_round_trip() {
    let outcome = Outcome::combine(failure("a"), failure("b"));
    let serialized = serde_json::to_string(&outcome).unwrap();
    let deserialized: Outcome = serde_json::from_str(&serialized).unwrap();
    assert_eq!(outcome, deserialized);
}

#[test]
#[cfg(feature = "serde")]
fn deserializing_an_empty_aggregate_is_rejected() {
    let failure = serde_json::from_str::<Outcome>(r#"{"Failure":{"Aggregate":{"errors":[]}}}"#);
    assert!(failure.is_err());

    let aggregate = serde_json::from_str::<AggregateError>(r#"{"errors":[]}"#);
    assert!(aggregate.is_err());

    let one = serde_json::to_string(&AggregateError::from_errors([ArgumentError::null_argument("a")]).unwrap())
        .unwrap();
    let restored: AggregateError = serde_json::from_str(&one).unwrap();
    assert_eq!(restored.len(), 1);
}
