use outcome_rail::{db, OutcomeKind};

#[derive(Debug, PartialEq)]
struct Invoice {
    id: u64,
}

#[test]
fn positive_rows_affected_is_success() {
    let outcome = db::from_rows_affected(Invoice { id: 1 }, 1, None);
    assert!(outcome.is_success());
    assert_eq!(outcome.payload(), Some(&Invoice { id: 1 }));
}

#[test]
fn zero_rows_affected_uses_type_derived_message() {
    let outcome = db::from_rows_affected(Invoice { id: 1 }, 0, None);
    assert_eq!(outcome.kind(), OutcomeKind::GeneralError);
    assert_eq!(outcome.errors(), ["Error saving Invoice"]);
}

#[test]
fn custom_message_is_trimmed() {
    let outcome = db::from_rows_affected(Invoice { id: 1 }, 0, Some("  insert rejected  "));
    assert_eq!(outcome.errors(), ["insert rejected"]);
}

#[test]
fn blank_custom_message_falls_back_to_default() {
    let outcome = db::from_rows_affected(Invoice { id: 1 }, 0, Some("   "));
    assert_eq!(outcome.errors(), ["Error saving Invoice"]);
}

#[test]
fn unit_variant_has_its_own_default_message() {
    assert!(db::unit_from_rows_affected(3, None).is_success());

    let outcome = db::unit_from_rows_affected(0, None);
    assert_eq!(outcome.errors(), ["Database operation failed."]);

    let outcome = db::unit_from_rows_affected(0, Some("delete failed"));
    assert_eq!(outcome.errors(), ["delete failed"]);
}
