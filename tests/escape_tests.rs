//! Behavioral tests for the escape hatches: panic capture via `catch`, and
//! early-return propagation via `propagate` + `try_guard`.
//!
//! The propagation signal is a typed value threaded by `?`, so these tests
//! pin down the boundary semantics: short-circuiting skips the rest of the
//! guard body, guards nest to the innermost scope, and unrecognized panic
//! payloads keep unwinding.

#![cfg(feature = "escape")]

use rstest::rstest;
use std::hint::black_box;
use twofold::prelude::*;

fn half(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 {
        Success(n / 2)
    } else {
        Failure(format!("{n} is odd"))
    }
}

// =============================================================================
// Panic Capture
// =============================================================================

#[rstest]
fn catch_wraps_normal_return_in_success() {
    assert_eq!(catch(|| 42), Success(42));
    assert_eq!(catch(|| "done"), Success("done"));
}

#[rstest]
fn catch_captures_arithmetic_panic() {
    let divisor = black_box(0);
    let result = catch(move || 1 / divisor);
    assert!(result.is_failure_and(|message| message.contains("divide by zero")));
}

#[rstest]
fn catch_captures_literal_and_formatted_messages() {
    let result = catch(|| -> i32 { panic!("plain message") });
    assert_eq!(result, Failure(String::from("plain message")));

    let code = black_box(7);
    let result = catch(move || -> i32 { panic!("error code {code}") });
    assert_eq!(result, Failure(String::from("error code 7")));
}

#[rstest]
fn catch_captures_unwrap_panics() {
    let result = catch(|| {
        let empty: Optional<i32> = Empty;
        empty.unwrap()
    });
    assert!(result.is_failure_and(|message| message.contains("`Empty` value")));
}

#[rstest]
fn catch_map_chooses_the_error_type() {
    #[derive(Debug, PartialEq)]
    struct AppError(String);

    assert_eq!(catch_map(|| 42, AppError), Success(42));

    let result = catch_map(|| -> i32 { panic!("boom") }, AppError);
    assert_eq!(result, Failure(AppError(String::from("boom"))));
}

#[rstest]
#[should_panic]
fn catch_resumes_unwinding_for_unrecognized_payloads() {
    struct Opaque;

    let _ = catch(|| -> i32 { std::panic::panic_any(Opaque) });
}

// =============================================================================
// Propagation and Guard Scopes
// =============================================================================

#[rstest]
fn propagate_success_yields_the_value() {
    let result: Outcome<i32, &str> = try_guard(|| Ok(Success(5).propagate()? + 1));
    assert_eq!(result, Success(6));
}

#[rstest]
fn propagate_failure_short_circuits_the_guard_body() {
    let mut reached = false;
    let failing: Outcome<i32, &str> = Failure("e");

    let result = try_guard(|| {
        failing.propagate()?;
        reached = true;
        Ok(1)
    });

    assert_eq!(result, Failure("e"));
    assert!(!reached);
}

#[rstest]
fn guard_composes_multiple_propagations() {
    let result: Outcome<i32, String> = try_guard(|| {
        let once = half(8).propagate()?;
        let twice = half(once).propagate()?;
        Ok(twice)
    });
    assert_eq!(result, Success(2));

    let result: Outcome<i32, String> = try_guard(|| {
        let once = half(6).propagate()?;
        let twice = half(once).propagate()?;
        Ok(twice)
    });
    assert_eq!(result, Failure(String::from("3 is odd")));
}

#[rstest]
fn nested_guards_catch_at_the_innermost_scope() {
    let inner_failure: Outcome<i32, String> = Failure(String::from("inner"));

    let result: Outcome<i32, String> = try_guard(|| {
        let inner: Outcome<i32, String> = try_guard(|| {
            let value = inner_failure.propagate()?;
            Ok(value + 1)
        });
        // The inner guard already converted the interrupt back to a value,
        // so the outer scope keeps running.
        assert_eq!(inner, Failure(String::from("inner")));
        Ok(10)
    });

    assert_eq!(result, Success(10));
}

#[rstest]
fn interrupt_lifts_bare_errors_for_question_mark() {
    let result: Outcome<i32, std::num::ParseIntError> =
        try_guard(|| Ok("42".parse::<i32>()? * 2));
    assert_eq!(result, Success(84));

    let result: Outcome<i32, std::num::ParseIntError> =
        try_guard(|| Ok("not a number".parse::<i32>()? * 2));
    assert!(result.is_failure_and(|error| error.to_string().contains("invalid digit")));
}

#[rstest]
fn interrupt_exposes_its_payload() {
    let carrier = Interrupt::new(String::from("boom"));
    assert_eq!(carrier.clone().into_inner(), "boom");
    assert_eq!(carrier, Interrupt(String::from("boom")));
}

#[rstest]
fn guard_round_trips_both_variants() {
    let success: Outcome<i32, String> = Success(5);
    assert_eq!(try_guard(|| success.propagate()), Success(5));

    let failure: Outcome<i32, String> = Failure(String::from("e"));
    assert_eq!(try_guard(|| failure.propagate()), Failure(String::from("e")));
}
