use super::*;

fn sample_user() -> User {
    serde_json::from_str(
        r#"{"id":"u1","username":"ada","email":"ada@example.com","firstName":"Ada","lastName":"Lovelace"}"#,
    )
    .expect("user")
}

fn authenticated_state() -> SessionState {
    reduce(
        &SessionState::booting(),
        SessionAction::Authenticated { user: sample_user(), token: "tok-1".to_owned() },
    )
}

#[test]
fn booting_state_is_loading_and_unauthenticated() {
    let state = SessionState::booting();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
}

#[test]
fn start_sets_loading_and_clears_the_previous_error() {
    let failed = reduce(&SessionState::default(), SessionAction::Failed("nope".to_owned()));
    let state = reduce(&failed, SessionAction::Start);
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn authenticated_sets_user_token_and_clears_loading() {
    let state = authenticated_state();
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("ada"));
}

#[test]
fn authenticated_is_never_combined_with_loading() {
    // invariant check across every action applied to an authenticated state
    let state = authenticated_state();
    for action in [
        SessionAction::Restored,
        SessionAction::ClearError,
        SessionAction::UserUpdated(UserPatch::default()),
    ] {
        let next = reduce(&state, action);
        assert!(!(next.authenticated && next.loading));
        assert!(!next.authenticated || (next.user.is_some() && next.token.is_some()));
    }
}

#[test]
fn failed_records_the_message_and_resets_credentials() {
    let state = reduce(&SessionState::booting(), SessionAction::Failed("Invalid credentials".to_owned()));
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert!(!state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
}

#[test]
fn login_then_logout_returns_to_the_baseline() {
    let state = reduce(&authenticated_state(), SessionAction::Logout);
    assert_eq!(state, SessionState::default());
}

#[test]
fn restored_only_clears_loading() {
    let state = reduce(&SessionState::booting(), SessionAction::Restored);
    assert_eq!(state, SessionState::default());

    // restoring an already-settled state changes nothing
    let settled = reduce(&state, SessionAction::Restored);
    assert_eq!(settled, state);
}

#[test]
fn clear_error_drops_only_the_error() {
    let failed = reduce(&SessionState::default(), SessionAction::Failed("nope".to_owned()));
    let state = reduce(&failed, SessionAction::ClearError);
    assert_eq!(state.error, None);
    assert_eq!(state, SessionState::default());
}

#[test]
fn user_updated_merges_into_the_current_user() {
    let patch = UserPatch { first_name: Some("Augusta".to_owned()), ..UserPatch::default() };
    let state = reduce(&authenticated_state(), SessionAction::UserUpdated(patch));
    let user = state.user.expect("user");
    assert_eq!(user.first_name.as_deref(), Some("Augusta"));
    // fields absent from the patch survive
    assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(user.email, "ada@example.com");
    assert!(state.authenticated);
}

#[test]
fn user_updated_without_a_user_is_a_no_op() {
    let patch = UserPatch { first_name: Some("X".to_owned()), ..UserPatch::default() };
    let state = reduce(&SessionState::default(), SessionAction::UserUpdated(patch));
    assert_eq!(state.user, None);
}

#[test]
fn merge_user_keeps_the_id() {
    let patch = UserPatch { username: Some("countess".to_owned()), ..UserPatch::default() };
    let merged = merge_user(sample_user(), patch);
    assert_eq!(merged.id, "u1");
    assert_eq!(merged.username, "countess");
}

#[test]
fn merge_user_with_empty_patch_is_identity() {
    let user = sample_user();
    assert_eq!(merge_user(user.clone(), UserPatch::default()), user);
}
