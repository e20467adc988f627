//! API failure taxonomy and side-effect planning.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure is classified exactly once, here, so call sites
//! never branch on raw status codes. Classification and the side-effect
//! plan (which toasts to show, whether to wipe credentials, whether to
//! force the login screen) are pure functions; `http` executes the plan.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

use crate::state::toast::ToastLevel;

/// One field-level validation failure from a 422 body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Error body shape shared by all failure responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<FieldIssue>>,
}

/// A normalized backend failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response reached the client: connection refused, DNS failure, or
    /// the fixed request timeout expired.
    #[error("network error")]
    Network,
    /// 401: credential invalid or expired.
    #[error("unauthorized")]
    Auth { message: Option<String> },
    /// 403: authenticated but not allowed.
    #[error("access denied")]
    Forbidden { message: Option<String> },
    /// 404.
    #[error("resource not found")]
    NotFound,
    /// 422, optionally carrying a field-level issue list.
    #[error("validation failed")]
    Validation { message: Option<String>, issues: Vec<FieldIssue> },
    /// 429.
    #[error("rate limited")]
    RateLimited,
    /// 5xx.
    #[error("server error")]
    Server { message: Option<String> },
    /// Any other response status.
    #[error("request failed with status {status}")]
    Unexpected { status: u16, message: Option<String> },
}

impl ApiError {
    /// Map a response status and parsed body into the taxonomy.
    pub fn classify(status: u16, body: ErrorBody) -> Self {
        match status {
            401 => ApiError::Auth { message: body.message },
            403 => ApiError::Forbidden { message: body.message },
            404 => ApiError::NotFound,
            422 => ApiError::Validation {
                message: body.message,
                issues: body.errors.unwrap_or_default(),
            },
            429 => ApiError::RateLimited,
            500..=599 => ApiError::Server { message: body.message },
            _ => ApiError::Unexpected { status, message: body.message },
        }
    }

    /// The server-supplied message, when the body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Auth { message }
            | ApiError::Forbidden { message }
            | ApiError::Validation { message, .. }
            | ApiError::Server { message }
            | ApiError::Unexpected { message, .. } => message.as_deref(),
            ApiError::Network | ApiError::NotFound | ApiError::RateLimited => None,
        }
    }
}

/// Side effects owed for one failure. Computed pure so the dispatch table
/// is testable without a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailurePlan {
    /// Toasts to emit, in order. Multi-field validation produces one entry
    /// per field; 401 produces none (the forced login screen is its signal).
    pub notifications: Vec<(ToastLevel, String)>,
    /// Wipe the persisted token and the attached credential.
    pub clear_credentials: bool,
    /// Navigate to the login entry point.
    pub force_login: bool,
}

impl FailurePlan {
    /// Plan the side effects for `error`. `on_login_page` suppresses the
    /// forced navigation when the user is already at a login entry point.
    pub fn for_error(error: &ApiError, on_login_page: bool) -> Self {
        let mut plan = FailurePlan::default();
        match error {
            ApiError::Network => {
                plan.notify("Network error. Please check your connection.");
            }
            ApiError::Auth { .. } => {
                plan.clear_credentials = true;
                plan.force_login = !on_login_page;
            }
            ApiError::Forbidden { .. } => {
                plan.notify("Access denied. You do not have permission to perform this action.");
            }
            ApiError::NotFound => {
                plan.notify("Resource not found.");
            }
            ApiError::Validation { message, issues } => {
                if issues.is_empty() {
                    plan.notify(message.as_deref().unwrap_or("Validation failed"));
                } else {
                    for issue in issues {
                        plan.notify(&format!("{}: {}", issue.field, issue.message));
                    }
                }
            }
            ApiError::RateLimited => {
                plan.notify("Too many requests. Please try again later.");
            }
            ApiError::Server { message } => {
                plan.notify(message.as_deref().unwrap_or("Server error. Please try again later."));
            }
            ApiError::Unexpected { message, .. } => {
                plan.notify(message.as_deref().unwrap_or("An error occurred."));
            }
        }
        plan
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push((ToastLevel::Error, message.to_owned()));
    }
}

/// True when `path` is already one of the login entry points, in which case
/// a 401 must not trigger another navigation there.
pub fn is_login_path(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    path == "/login" || path == "/admin/login"
}
