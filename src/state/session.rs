//! Client-side authentication session: state, reducer, and store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for who is signed in. The route guard and the
//! navbar read the state signal; pages drive transitions through
//! [`SessionStore`]. The restoration pass runs once at startup and settles
//! before any user-initiated operation because the UI keeps auth actions
//! disabled while `loading` is set.
//!
//! Invariants: `authenticated` is never true while `loading` is true, and
//! never true without both `user` and `token` present.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Credentials, RegisterData, User, UserPatch};
use crate::state::toast::{ToastLevel, ToastState};
use crate::util::storage;

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub authenticated: bool,
    /// True during restoration and while a login/registration call is in
    /// flight.
    pub loading: bool,
    /// Message from the last failed login/registration, until cleared or
    /// the next attempt starts.
    pub error: Option<String>,
}

impl SessionState {
    /// State at application start, before restoration has settled.
    pub fn booting() -> Self {
        Self { loading: true, ..Self::default() }
    }
}

/// A session transition, consumed by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// A login or registration attempt started.
    Start,
    /// Credentials accepted; the session is authenticated.
    Authenticated { user: User, token: String },
    /// A login or registration attempt failed with a user-facing message.
    Failed(String),
    /// Local sign-out; returns to the unauthenticated baseline.
    Logout,
    /// Profile fields echoed by the backend after an update.
    UserUpdated(UserPatch),
    /// Restoration settled without a session to restore.
    Restored,
    /// Drop the last operation error.
    ClearError,
}

/// Pure transition function over session state.
pub fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::Start => SessionState { loading: true, error: None, ..state.clone() },
        SessionAction::Authenticated { user, token } => SessionState {
            user: Some(user),
            token: Some(token),
            authenticated: true,
            loading: false,
            error: None,
        },
        SessionAction::Failed(message) => SessionState { error: Some(message), ..SessionState::default() },
        SessionAction::Logout => SessionState::default(),
        SessionAction::UserUpdated(patch) => SessionState {
            user: state.user.clone().map(|user| merge_user(user, patch)),
            ..state.clone()
        },
        SessionAction::Restored => SessionState { loading: false, ..state.clone() },
        SessionAction::ClearError => SessionState { error: None, ..state.clone() },
    }
}

/// Overlay the fields present in `patch` onto `user`, preserving everything
/// the patch does not mention.
pub fn merge_user(user: User, patch: UserPatch) -> User {
    User {
        id: user.id,
        username: patch.username.unwrap_or(user.username),
        email: patch.email.unwrap_or(user.email),
        first_name: patch.first_name.or(user.first_name),
        last_name: patch.last_name.or(user.last_name),
        title: patch.title.or(user.title),
        bio: patch.bio.or(user.bio),
        avatar_url: patch.avatar_url.or(user.avatar_url),
    }
}

/// Session operations bound to the HTTP client and the toast queue.
/// Constructed once by the application shell and provided through context.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    client: ApiClient,
    toasts: RwSignal<ToastState>,
}

impl SessionStore {
    pub fn new(client: ApiClient, toasts: RwSignal<ToastState>) -> Self {
        Self { state: RwSignal::new(SessionState::booting()), client, toasts }
    }

    /// The readable session state signal.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    fn dispatch(&self, action: SessionAction) {
        self.state.update(|state| *state = reduce(state, action));
    }

    fn toast(&self, level: ToastLevel, message: &str) {
        let message = message.to_owned();
        self.toasts.update(|toasts| {
            toasts.push(level, message);
        });
    }

    /// Revalidate a persisted token at startup. Runs exactly once; settles
    /// into either the authenticated state or the unauthenticated baseline
    /// and never fails the caller.
    pub async fn restore(&self) {
        let Some(token) = storage::load_string(storage::TOKEN_KEY) else {
            self.dispatch(SessionAction::Restored);
            return;
        };
        self.client.attach_token(&token);
        match api::fetch_current_user(&self.client).await {
            Ok(user) => self.dispatch(SessionAction::Authenticated { user, token }),
            Err(_) => {
                // Invalid or expired token; drop it and start signed out.
                storage::remove(storage::TOKEN_KEY);
                self.client.detach_token();
                self.dispatch(SessionAction::Logout);
            }
        }
    }

    /// Authenticate and persist the returned credential.
    pub async fn login(&self, credentials: Credentials) -> Result<(), String> {
        self.dispatch(SessionAction::Start);
        match api::login(&self.client, &credentials).await {
            Ok(payload) => {
                storage::save_string(storage::TOKEN_KEY, &payload.token);
                self.client.attach_token(&payload.token);
                self.dispatch(SessionAction::Authenticated { user: payload.user, token: payload.token });
                self.toast(ToastLevel::Success, "Login successful!");
                Ok(())
            }
            Err(error) => {
                let message = error.server_message().unwrap_or("Login failed").to_owned();
                self.dispatch(SessionAction::Failed(message.clone()));
                self.toast(ToastLevel::Error, &message);
                Err(message)
            }
        }
    }

    /// Create an account; on success the session is immediately
    /// authenticated, mirroring `login`.
    pub async fn register(&self, data: RegisterData) -> Result<(), String> {
        self.dispatch(SessionAction::Start);
        match api::register(&self.client, &data).await {
            Ok(payload) => {
                storage::save_string(storage::TOKEN_KEY, &payload.token);
                self.client.attach_token(&payload.token);
                self.dispatch(SessionAction::Authenticated { user: payload.user, token: payload.token });
                self.toast(ToastLevel::Success, "Registration successful!");
                Ok(())
            }
            Err(error) => {
                let message = error.server_message().unwrap_or("Registration failed").to_owned();
                self.dispatch(SessionAction::Failed(message.clone()));
                self.toast(ToastLevel::Error, &message);
                Err(message)
            }
        }
    }

    /// Sign out. The backend call is best-effort: local logout always
    /// succeeds, whatever the network does.
    pub async fn logout(&self) {
        self.client.post_best_effort("/auth/logout").await;
        storage::remove(storage::TOKEN_KEY);
        self.client.detach_token();
        self.dispatch(SessionAction::Logout);
        self.toast(ToastLevel::Success, "Logged out successfully");
    }

    /// Reset to the unauthenticated baseline without touching the backend.
    /// Used when a 401 has already wiped the credential.
    pub fn force_logout(&self) {
        self.dispatch(SessionAction::Logout);
    }

    /// Update the current user's profile and merge the echoed fields into
    /// the session copy.
    pub async fn update_user(&self, patch: UserPatch) -> Result<(), String> {
        match api::update_current_user(&self.client, &patch).await {
            Ok(returned) => {
                self.dispatch(SessionAction::UserUpdated(returned));
                self.toast(ToastLevel::Success, "Profile updated successfully!");
                Ok(())
            }
            Err(error) => {
                let message = error.server_message().unwrap_or("Update failed").to_owned();
                self.toast(ToastLevel::Error, &message);
                Err(message)
            }
        }
    }

    /// Clear the last operation error with no other side effect.
    pub fn clear_error(&self) {
        self.dispatch(SessionAction::ClearError);
    }
}
