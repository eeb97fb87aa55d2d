use std::cell::Cell;

use outcome_rail::{field_errors, Outcome, OutcomeKind};

#[test]
fn success_carries_no_error_state() {
    let outcome = Outcome::success(5).with_count(1).with_message("loaded");

    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert!(!outcome.has_error());
    assert_eq!(outcome.kind(), OutcomeKind::None);
    assert_eq!(outcome.payload(), Some(&5));
    assert_eq!(outcome.count(), 1);
    assert_eq!(outcome.message(), Some("loaded"));
    assert!(outcome.errors().is_empty());
    assert!(outcome.validation_errors().is_empty());
}

#[test]
fn failure_normalizes_single_error_into_sequence() {
    let outcome: Outcome<()> = Outcome::failure("bad input");

    assert_eq!(outcome.kind(), OutcomeKind::GeneralError);
    assert_eq!(outcome.errors(), ["bad input"]);
    assert!(outcome.validation_errors().is_empty());
}

#[test]
fn failure_many_preserves_error_order() {
    let outcome: Outcome<()> = Outcome::failure_many(["first", "second", "third"]);
    assert_eq!(outcome.errors(), ["first", "second", "third"]);
}

#[test]
fn from_error_uses_rendered_text_and_source() {
    #[derive(Debug)]
    struct Inner;
    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("connection reset")
        }
    }
    impl std::error::Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);
    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("query failed")
        }
    }
    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    let outcome: Outcome<i32> = Outcome::from_error(&Outer(Inner));
    assert_eq!(outcome.errors(), ["query failed"]);
    assert_eq!(outcome.message(), Some("connection reset"));
}

#[test]
fn from_error_falls_back_when_text_is_empty() {
    #[derive(Debug)]
    struct Silent;
    impl std::fmt::Display for Silent {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }
    impl std::error::Error for Silent {}

    let outcome: Outcome<i32> = Outcome::from_error(&Silent);
    assert_eq!(outcome.errors(), ["Unknown error"]);
}

#[test]
fn invalid_records_under_the_general_key() {
    let outcome: Outcome<()> = Outcome::invalid("payload malformed");

    assert_eq!(outcome.kind(), OutcomeKind::ValidationError);
    assert_eq!(
        outcome.validation_errors().get("General"),
        Some(&["payload malformed".to_string()][..])
    );
}

#[test]
fn validation_failure_may_keep_partial_payload() {
    let outcome = Outcome::validation_failure_with_payload(
        field_errors! { "name" => ["required"] },
        "draft".to_string(),
    );

    assert_eq!(outcome.kind(), OutcomeKind::ValidationError);
    assert_eq!(outcome.payload(), Some(&"draft".to_string()));
}

#[test]
fn add_error_transitions_success_to_general_error() {
    let mut outcome = Outcome::success(1);
    outcome.add_error("post-check failed");
    outcome.add_error("second problem");

    assert_eq!(outcome.kind(), OutcomeKind::GeneralError);
    assert_eq!(outcome.errors(), ["post-check failed", "second problem"]);
}

#[test]
fn add_validation_error_appends_under_one_key_in_order() {
    let mut outcome: Outcome<()> = Outcome::success_empty();
    outcome.add_validation_error("name", ["required"]);
    outcome.add_validation_error("age", ["must be positive"]);
    outcome.add_validation_error("name", ["too short", "forbidden characters"]);

    assert_eq!(outcome.kind(), OutcomeKind::ValidationError);
    assert_eq!(outcome.validation_errors().len(), 2);
    assert_eq!(
        outcome.validation_errors().get("name").unwrap(),
        ["required", "too short", "forbidden characters"]
    );
    assert_eq!(
        outcome.validation_errors().fields().collect::<Vec<_>>(),
        ["name", "age"]
    );
}

#[test]
fn into_result_surfaces_failure_text() {
    let err = Outcome::<i32>::failure_many(["bad input", "bad state"])
        .with_message("create failed")
        .into_result()
        .unwrap_err();

    assert_eq!(err.kind(), OutcomeKind::GeneralError);
    assert_eq!(err.detail(), "bad input; bad state; create failed");
}

#[test]
fn into_result_rejects_payload_free_success() {
    let outcome: Outcome<i32> = Outcome::success_empty();
    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.kind(), OutcomeKind::None);
}

#[test]
fn payload_or_returns_fallback_on_failure() {
    assert_eq!(Outcome::success(3).payload_or(0), 3);
    assert_eq!(Outcome::<i32>::failure("nope").payload_or(0), 0);
    assert_eq!(Outcome::<i32>::not_found().payload_or_else(|| 9), 9);
}

#[test]
fn map_identity_preserves_successful_outcomes() {
    let outcome = Outcome::success(7).with_count(1).with_message("one row");
    let mapped = outcome.clone().map(|n| n);
    assert_eq!(mapped, outcome);
}

#[test]
fn map_on_failure_never_invokes_transform() {
    let called = Cell::new(false);
    let outcome = Outcome::<i32>::failure("bad input")
        .with_message("create failed")
        .map(|n| {
            called.set(true);
            n.to_string()
        });

    assert!(!called.get());
    assert_eq!(outcome.kind(), OutcomeKind::GeneralError);
    assert_eq!(outcome.errors(), ["bad input"]);
    assert_eq!(outcome.message(), Some("create failed"));
    assert!(outcome.payload().is_none());
}

#[test]
fn map_preserves_not_found_kind() {
    let outcome = Outcome::<i32>::not_found().with_message("user 7").map(|n| n * 2);
    assert_eq!(outcome.kind(), OutcomeKind::NotFound);
    assert_eq!(outcome.message(), Some("user 7"));
    assert!(outcome.errors().is_empty());
}

#[test]
fn and_then_satisfies_left_identity() {
    fn describe(n: i32) -> Outcome<String> {
        Outcome::success(format!("value {}", n)).with_message("described")
    }

    assert_eq!(Outcome::success(4).and_then(describe), describe(4));
}

#[test]
fn and_then_short_circuits_with_original_errors() {
    let called = Cell::new(false);
    let outcome = Outcome::<i32>::failure_many(["first", "second"]).and_then(|n| {
        called.set(true);
        Outcome::success(n)
    });

    assert!(!called.get());
    assert_eq!(outcome.errors(), ["first", "second"]);
}

#[test]
fn map_errors_applies_only_on_failure() {
    let rewritten = Outcome::<i32>::failure("raw")
        .map_errors(|errors| errors.into_iter().map(|e| format!("wrapped: {}", e)));
    assert_eq!(rewritten.errors(), ["wrapped: raw"]);

    let untouched = Outcome::success(2)
        .map_errors(|_| ["should not appear".to_string()]);
    assert!(untouched.is_success());
    assert!(untouched.errors().is_empty());
    assert_eq!(untouched.payload(), Some(&2));
}

#[test]
fn fold_runs_exactly_one_branch() {
    let success = Outcome::success(10).fold(
        |payload| payload.unwrap_or_default(),
        |_| -1,
    );
    assert_eq!(success, 10);

    let failure = Outcome::<i32>::failure("boom").fold(
        |_| -1,
        |errors| errors.len() as i32,
    );
    assert_eq!(failure, 1);
}

#[test]
fn fold_message_hands_the_message_to_the_success_branch() {
    let rendered = Outcome::done().with_message("saved").fold_message(
        |message| message.unwrap_or_default(),
        |errors| errors.join(", "),
    );
    assert_eq!(rendered, "saved");

    let rendered = Outcome::<()>::failure("no dice").fold_message(
        |_| String::new(),
        |errors| errors.join(", "),
    );
    assert_eq!(rendered, "no dice");
}

#[test]
fn combine_returns_left_when_both_succeed() {
    let left = Outcome::success(1).with_message("left");
    let right = Outcome::success(2).with_message("right");

    let combined = left.clone().combine(right);
    assert_eq!(combined, left);
}

#[test]
fn combine_concatenates_failures_left_to_right() {
    let combined = Outcome::<i32>::failure("left broke")
        .combine(Outcome::failure_many(["right broke", "badly"]));

    assert_eq!(combined.kind(), OutcomeKind::GeneralError);
    assert_eq!(combined.errors(), ["left broke", "right broke", "badly"]);
}

#[test]
fn combine_flattens_message_only_and_validation_sides() {
    let combined = Outcome::<i32>::not_found()
        .with_message("user 7")
        .combine(Outcome::invalid_field("name", "required"));

    assert_eq!(combined.kind(), OutcomeKind::GeneralError);
    assert_eq!(combined.errors(), ["user 7", "name: required"]);
}

#[test]
fn combine_keeps_the_failing_side_when_one_succeeds() {
    let combined = Outcome::success(1).combine(Outcome::failure("right broke"));
    assert_eq!(combined.errors(), ["right broke"]);
}

#[test]
fn failure_detail_joins_errors_and_message_once() {
    let outcome = Outcome::<i32>::failure("boom").with_message("boom");
    assert_eq!(outcome.failure_detail(), "boom");

    let outcome = Outcome::<i32>::failure("boom").with_message("save failed");
    assert_eq!(outcome.failure_detail(), "boom; save failed");
}
