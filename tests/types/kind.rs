use outcome_rail::{OutcomeKind, SortDirection};

#[test]
fn labels_come_from_the_static_table() {
    assert_eq!(OutcomeKind::None.label(), "None");
    assert_eq!(OutcomeKind::ValidationError.label(), "Validation Error");
    assert_eq!(OutcomeKind::NotFound.label(), "Not Found");
    assert_eq!(OutcomeKind::Unauthorized.label(), "Unauthorized");
    assert_eq!(OutcomeKind::Forbidden.label(), "Forbidden");
    assert_eq!(OutcomeKind::GeneralError.label(), "Error");
}

#[test]
fn status_codes_follow_the_boundary_table() {
    assert_eq!(OutcomeKind::None.status_code(), 200);
    assert_eq!(OutcomeKind::ValidationError.status_code(), 400);
    assert_eq!(OutcomeKind::Unauthorized.status_code(), 401);
    assert_eq!(OutcomeKind::Forbidden.status_code(), 403);
    assert_eq!(OutcomeKind::NotFound.status_code(), 404);
    assert_eq!(OutcomeKind::GeneralError.status_code(), 500);
}

#[test]
fn only_none_is_not_an_error() {
    assert!(!OutcomeKind::None.is_error());
    for kind in [
        OutcomeKind::ValidationError,
        OutcomeKind::NotFound,
        OutcomeKind::Unauthorized,
        OutcomeKind::Forbidden,
        OutcomeKind::GeneralError,
    ] {
        assert!(kind.is_error(), "{} should be an error", kind);
    }
}

#[test]
fn display_matches_label() {
    assert_eq!(OutcomeKind::GeneralError.to_string(), "Error");
    assert_eq!(SortDirection::Ascending.to_string(), "Asc");
    assert_eq!(SortDirection::Descending.to_string(), "Desc");
}
