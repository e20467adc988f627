use super::*;
use crate::state::session::{SessionAction, reduce};

#[test]
fn pending_while_restoration_is_loading() {
    let state = SessionState::booting();
    assert_eq!(evaluate(&state), GuardDecision::Pending);
}

#[test]
fn pending_wins_even_with_a_stale_user_present() {
    let mut state = SessionState::booting();
    state.user = None;
    state.loading = true;
    assert_eq!(evaluate(&state), GuardDecision::Pending);
}

#[test]
fn granted_only_when_authenticated_and_settled() {
    let user = serde_json::from_str(r#"{"id":"u1","username":"ada","email":"a@b.com"}"#).expect("user");
    let state = reduce(
        &SessionState::booting(),
        SessionAction::Authenticated { user, token: "tok".to_owned() },
    );
    assert_eq!(evaluate(&state), GuardDecision::Granted);
}

#[test]
fn denied_once_settled_without_a_session() {
    let state = reduce(&SessionState::booting(), SessionAction::Restored);
    assert_eq!(evaluate(&state), GuardDecision::Denied);
}

#[test]
fn login_redirect_target_carries_the_requested_location() {
    assert_eq!(login_redirect_target("/dashboard"), "/admin/login?from=%2Fdashboard");
}

#[test]
fn login_redirect_target_without_a_location_is_bare() {
    assert_eq!(login_redirect_target(""), "/admin/login");
    assert_eq!(login_redirect_target("/admin/login"), "/admin/login");
}
