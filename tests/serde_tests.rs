#![cfg(feature = "serde")]

//! Integration tests for serde support in resultant.

use resultant::{Result, failure, success};
use rstest::rstest;

// =============================================================================
// Result Integration Tests
// =============================================================================

#[rstest]
fn test_result_json_roundtrip() {
    let ok: Result<i32, String> = success(42);
    let failed: Result<i32, String> = failure("error".to_string());

    let ok_json = serde_json::to_string(&ok).unwrap();
    let failed_json = serde_json::to_string(&failed).unwrap();

    let restored_ok: Result<i32, String> = serde_json::from_str(&ok_json).unwrap();
    let restored_failed: Result<i32, String> = serde_json::from_str(&failed_json).unwrap();

    assert_eq!(ok, restored_ok);
    assert_eq!(failed, restored_failed);
}

#[rstest]
#[case(success(1), r#"{"Success":1}"#)]
#[case(failure("e".to_string()), r#"{"Failure":"e"}"#)]
fn test_result_json_shape(#[case] result: Result<i32, String>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&result).unwrap(), expected);
}

#[rstest]
fn test_result_with_absent_payload() {
    let result: Result<i32, Option<String>> = failure(None);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"Failure":null}"#);
    let restored: Result<i32, Option<String>> = serde_json::from_str(&json).unwrap();
    assert!(restored.has_failure());
}

// =============================================================================
// LazyResult Integration Tests
// =============================================================================

#[cfg(feature = "lazy")]
#[rstest]
fn test_lazy_result_serializes_backing_result() {
    let lazy_result = resultant::lazy(|| success::<_, String>(vec![1, 2]));
    let json = serde_json::to_string(&lazy_result).unwrap();
    assert_eq!(json, r#"{"Success":[1,2]}"#);
    assert!(lazy_result.is_resolved());

    let restored: Result<Vec<i32>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(lazy_result, restored);
}
