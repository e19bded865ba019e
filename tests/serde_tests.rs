//! Serialization round-trip tests for the containers.

#![cfg(all(feature = "container", feature = "serde"))]

use rstest::rstest;
use twofold::prelude::*;

#[rstest]
fn optional_json_representation() {
    let present: Optional<i32> = Present(5);
    assert_eq!(serde_json::to_string(&present).unwrap(), r#"{"Present":5}"#);

    let empty: Optional<i32> = Empty;
    assert_eq!(serde_json::to_string(&empty).unwrap(), r#""Empty""#);
}

#[rstest]
fn optional_roundtrip_preserves_variant_and_payload() {
    for value in [Present(String::from("hi")), Empty] {
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: Optional<String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }
}

#[rstest]
fn outcome_json_representation() {
    let success: Outcome<i32, String> = Success(5);
    assert_eq!(serde_json::to_string(&success).unwrap(), r#"{"Success":5}"#);

    let failure: Outcome<i32, String> = Failure(String::from("boom"));
    assert_eq!(serde_json::to_string(&failure).unwrap(), r#"{"Failure":"boom"}"#);
}

#[rstest]
fn outcome_roundtrip_preserves_variant_and_payload() {
    let values: [Outcome<i32, String>; 2] = [Success(5), Failure(String::from("boom"))];

    for value in values {
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: Outcome<i32, String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }
}
