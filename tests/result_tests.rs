//! Integration tests for the eager `Result<S, F>` type.
//!
//! Covers variant exclusivity, value equality, short-circuiting of
//! non-applicable functions, side-effecting actions and the factory
//! functions.

use resultant::{
    Action, LazyAction, Result, ResultError, combine, failure, lazy_action, of_callable,
    of_nullable, success,
};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

fn never_called<T, U>(_: T) -> U {
    panic!("mapper for the other variant must not be called")
}

// =============================================================================
// Variant Exclusivity and Equality
// =============================================================================

#[rstest]
#[case(success(1))]
#[case(failure("boom"))]
fn exactly_one_variant_is_present(#[case] result: Result<i32, &str>) {
    assert_ne!(result.has_success(), result.has_failure());
}

#[rstest]
fn equality_is_by_value() {
    assert_eq!(success::<_, ()>("x".to_string()), success("x".to_string()));
    assert_ne!(success::<_, ()>("x"), success("y"));
    assert_ne!(success::<_, &str>("v"), failure("v"));
}

#[rstest]
fn equal_results_collapse_in_a_set() {
    let set: HashSet<Result<i32, &str>> =
        [success(1), success(1), failure("e"), failure("e")].into_iter().collect();
    assert_eq!(set.len(), 2);
}

// =============================================================================
// Terminal Operations
// =============================================================================

#[rstest]
fn success_length_or_else() {
    let length = success::<_, String>("HELLO").map_success(str::len).or_else(0);
    assert_eq!(length, 5);
}

#[rstest]
fn failure_or_else_map() {
    let recovered = failure::<usize, _>("boom").or_else_map(str::len);
    assert_eq!(recovered, 4);
}

#[rstest]
fn absent_failure_payload_is_a_failure() {
    let result = failure::<i32, Option<&str>>(None);
    assert!(result.has_failure());
    assert_eq!(result.get_failure(), Some(None));
}

#[rstest]
fn or_else_get_is_only_called_for_failure() {
    let value = success::<_, ()>(1).or_else_get(|| panic!("supplier must not be called"));
    assert_eq!(value, 1);
    assert_eq!(failure::<i32, _>(()).or_else_get(|| 7), 7);
}

#[rstest]
#[case(success(3), vec![3], vec![])]
#[case(failure("e"), vec![], vec!["e"])]
fn streams_yield_at_most_one_element(
    #[case] result: Result<i32, &str>,
    #[case] successes: Vec<i32>,
    #[case] failures: Vec<&str>,
) {
    assert_eq!(result.stream_success().collect::<Vec<_>>(), successes);
    assert_eq!(result.stream_failure().collect::<Vec<_>>(), failures);
}

#[rstest]
fn wrong_variant_accessors_report_errors() {
    assert_eq!(
        failure::<i32, _>("x").success_or_error(),
        Err(ResultError::NotSuccess)
    );
    assert_eq!(
        success::<_, &str>(1).failure_or_error(),
        Err(ResultError::NotFailure)
    );
    assert_eq!(
        failure::<i32, _>("x").success_or_raise(|error| error.len()),
        Err(1)
    );
}

// =============================================================================
// Short-circuit of Non-applicable Functions
// =============================================================================

#[rstest]
fn map_on_failure_skips_success_mapper() {
    let result = failure::<i32, &str>("e").map(never_called::<i32, String>, str::len);
    assert_eq!(result, failure(1));
}

#[rstest]
fn flat_map_on_success_skips_failure_mapper() {
    let result = success::<i32, &str>(2)
        .flat_map(|value| success(value * 2), never_called::<&str, Result<i32, &str>>);
    assert_eq!(result, success(4));
}

#[rstest]
fn filter_on_failure_skips_predicate_and_mapper() {
    let result = failure::<i32, &str>("e").filter(
        |_| panic!("predicate must not be called"),
        never_called::<i32, &str>,
    );
    assert_eq!(result, failure("e"));
}

#[rstest]
#[case(4, success(4))]
#[case(5, failure("odd: 5".to_string()))]
fn filter_rejects_values(#[case] value: i32, #[case] expected: Result<i32, String>) {
    let result = success(value).filter(|value| value % 2 == 0, |value| format!("odd: {value}"));
    assert_eq!(result, expected);
}

#[rstest]
#[case("retry", success(0))]
#[case("fatal", failure("fatal"))]
fn recover_accepts_recoverable_failures(
    #[case] error: &'static str,
    #[case] expected: Result<usize, &str>,
) {
    let result = failure(error).recover(|error| *error == "retry", |_| 0);
    assert_eq!(result, expected);
}

// =============================================================================
// Side-effecting Actions
// =============================================================================

#[rstest]
fn if_success_runs_action_and_returns_same_value() {
    let seen = Cell::new(0);
    let result = success::<_, ()>(9).if_success(|value: &i32| seen.set(*value));
    assert_eq!(seen.get(), 9);
    assert_eq!(result, success(9));
}

#[rstest]
fn if_failure_ignores_success() {
    let result = success::<i32, &str>(1).if_failure(|_: &&str| panic!("must not run"));
    assert_eq!(result, success(1));
}

#[rstest]
fn if_success_or_else_runs_matching_side() {
    let log = RefCell::new(Vec::new());
    let _ = failure::<i32, _>("e").if_success_or_else(
        |_: &i32| log.borrow_mut().push("success"),
        |_: &&str| log.borrow_mut().push("failure"),
    );
    assert_eq!(*log.borrow(), vec!["failure"]);
}

#[rstest]
fn lazy_marked_actions_run_immediately_on_eager_results() {
    let seen = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&seen);
    let _ = success::<_, ()>(1)
        .if_success(lazy_action(move |_: &i32| flag.store(true, Ordering::SeqCst)));
    assert!(seen.load(Ordering::SeqCst));
}

#[rstest]
fn custom_action_types_are_supported() {
    struct Record(Arc<Mutex<Vec<i32>>>);

    impl Action<i32> for Record {
        fn perform(self, value: &i32) {
            self.0.lock().unwrap().push(*value);
        }
    }

    let sink = Arc::new(Mutex::new(Vec::new()));
    let _ = success::<_, ()>(1).if_success(Record(Arc::clone(&sink)));
    let _ = success::<_, ()>(2).if_success(LazyAction::new(Record(Arc::clone(&sink))));
    assert_eq!(*sink.lock().unwrap(), vec![1, 2]);
}

// =============================================================================
// Factories
// =============================================================================

#[rstest]
fn combine_collects_failures_in_order() {
    let combined = combine([success(1), failure("e1"), failure("e2"), success(2)]);
    assert_eq!(combined, failure(vec!["e1", "e2"]));
}

#[rstest]
fn combine_collects_successes_in_order() {
    let combined = combine([success::<_, ()>(1), success(2), success(3)]);
    assert_eq!(combined, success(vec![1, 2, 3]));
}

#[rstest]
fn of_nullable_maps_absence_to_failure() {
    assert_eq!(of_nullable(Some("x")), success("x"));
    assert!(of_nullable::<&str>(None).has_failure());
}

#[rstest]
fn of_callable_captures_error_channel() {
    let parsed = of_callable(|| "12".parse::<u8>()).map_success(u32::from);
    assert_eq!(parsed.get_success(), Some(12));
    assert!(of_callable(|| "300".parse::<u8>()).has_failure());
}

// =============================================================================
// Formatting and Conversion
// =============================================================================

#[rstest]
#[case(success("x"), "Success[x]")]
#[case(failure(7), "Failure[7]")]
fn display_shows_variant_and_payload(#[case] result: Result<&str, i32>, #[case] expected: &str) {
    assert_eq!(result.to_string(), expected);
}

#[rstest]
fn converts_to_and_from_std_result() {
    let result: Result<i32, String> = Ok::<_, String>(1).into();
    assert_eq!(result, success(1));
    let back: std::result::Result<i32, String> = failure::<i32, _>("e".to_string()).into();
    assert_eq!(back, Err("e".to_string()));
}
