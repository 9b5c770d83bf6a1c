use super::*;

#[test]
fn fresh_boundary_has_no_failure() {
    let state = BoundaryState::default();
    assert!(!state.has_failed());
    assert_eq!(state.attempt, 0);
}

#[test]
fn fail_records_latest_message() {
    let mut state = BoundaryState::default();
    state.fail("first");
    state.fail("second");
    assert!(state.has_failed());
    assert_eq!(state.failure.as_deref(), Some("second"));
    assert_eq!(state.attempt, 0);
}

#[test]
fn retry_clears_failure_and_starts_new_attempt() {
    let mut state = BoundaryState::default();
    state.fail("boom");
    state.retry();
    assert!(!state.has_failed());
    assert_eq!(state.attempt, 1);
}

#[test]
fn retry_without_failure_still_rerenders() {
    let mut state = BoundaryState::default();
    state.retry();
    state.retry();
    assert_eq!(state.attempt, 2);
}

#[test]
fn detail_hidden_when_not_requested() {
    let model = ErrorScreenModel::new(&["secret stack".to_owned()], false);
    assert_eq!(model.detail, None);
    assert_eq!(model.title, FAILURE_TITLE);
    assert_eq!(model.message, FAILURE_MESSAGE);
}

#[test]
fn detail_joins_failures_when_requested() {
    let model = ErrorScreenModel::new(&["a".to_owned(), "b".to_owned()], true);
    assert_eq!(model.detail.as_deref(), Some("a\nb"));
}

#[test]
fn detail_absent_without_failures() {
    let model = ErrorScreenModel::new(&[], true);
    assert_eq!(model.detail, None);
}

#[test]
fn build_profile_controls_detail() {
    let model = ErrorScreenModel::for_build(&["x".to_owned()]);
    assert_eq!(model.detail.is_some(), cfg!(debug_assertions));
}

#[test]
fn home_path_is_root() {
    assert_eq!(HOME_PATH, "/");
    assert_ne!(RecoveryAction::Retry, RecoveryAction::GoHome);
}
