use super::*;

fn body(message: &str) -> ErrorBody {
    ErrorBody { message: Some(message.to_owned()), errors: None }
}

#[test]
fn classify_maps_the_known_statuses() {
    assert_eq!(
        ApiError::classify(401, body("Invalid credentials")),
        ApiError::Auth { message: Some("Invalid credentials".to_owned()) }
    );
    assert_eq!(
        ApiError::classify(403, ErrorBody::default()),
        ApiError::Forbidden { message: None }
    );
    assert_eq!(ApiError::classify(404, ErrorBody::default()), ApiError::NotFound);
    assert_eq!(ApiError::classify(429, ErrorBody::default()), ApiError::RateLimited);
    assert_eq!(ApiError::classify(500, ErrorBody::default()), ApiError::Server { message: None });
    assert_eq!(ApiError::classify(503, body("upstream down")), ApiError::Server {
        message: Some("upstream down".to_owned())
    });
}

#[test]
fn classify_falls_through_to_unexpected() {
    assert_eq!(
        ApiError::classify(409, body("Duplicate title")),
        ApiError::Unexpected { status: 409, message: Some("Duplicate title".to_owned()) }
    );
    assert_eq!(
        ApiError::classify(418, ErrorBody::default()),
        ApiError::Unexpected { status: 418, message: None }
    );
}

#[test]
fn classify_keeps_validation_issues() {
    let body = ErrorBody {
        message: Some("Validation failed".to_owned()),
        errors: Some(vec![FieldIssue { field: "email".to_owned(), message: "invalid".to_owned() }]),
    };
    let ApiError::Validation { issues, .. } = ApiError::classify(422, body) else {
        panic!("expected validation error");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "email");
}

#[test]
fn error_body_deserializes_with_missing_fields() {
    let body: ErrorBody = serde_json::from_str("{}").expect("empty body");
    assert_eq!(body.message, None);
    assert!(body.errors.is_none());

    let body: ErrorBody =
        serde_json::from_str(r#"{"message":"nope","errors":[{"field":"name","message":"required"}]}"#)
            .expect("full body");
    assert_eq!(body.message.as_deref(), Some("nope"));
    assert_eq!(body.errors.as_ref().map(Vec::len), Some(1));
}

#[test]
fn plan_for_auth_clears_credentials_and_forces_login_silently() {
    let error = ApiError::Auth { message: Some("Token expired".to_owned()) };
    let plan = FailurePlan::for_error(&error, false);
    assert!(plan.clear_credentials);
    assert!(plan.force_login);
    assert!(plan.notifications.is_empty());
}

#[test]
fn plan_for_auth_skips_navigation_on_the_login_page() {
    let plan = FailurePlan::for_error(&ApiError::Auth { message: None }, true);
    assert!(plan.clear_credentials);
    assert!(!plan.force_login);
}

#[test]
fn plan_for_multi_field_validation_emits_one_toast_per_field() {
    let error = ApiError::Validation {
        message: Some("Validation failed".to_owned()),
        issues: vec![
            FieldIssue { field: "email".to_owned(), message: "invalid".to_owned() },
            FieldIssue { field: "name".to_owned(), message: "required".to_owned() },
        ],
    };
    let plan = FailurePlan::for_error(&error, false);
    let messages: Vec<&str> = plan.notifications.iter().map(|(_, m)| m.as_str()).collect();
    assert_eq!(messages, vec!["email: invalid", "name: required"]);
    assert!(!plan.clear_credentials);
    assert!(!plan.force_login);
}

#[test]
fn plan_for_bare_validation_uses_the_top_level_message() {
    let error = ApiError::Validation { message: Some("Title taken".to_owned()), issues: vec![] };
    let plan = FailurePlan::for_error(&error, false);
    assert_eq!(plan.notifications.len(), 1);
    assert_eq!(plan.notifications[0].1, "Title taken");
}

#[test]
fn plan_messages_for_fixed_categories() {
    let cases = [
        (ApiError::Network, "Network error. Please check your connection."),
        (ApiError::Forbidden { message: None }, "Access denied. You do not have permission to perform this action."),
        (ApiError::NotFound, "Resource not found."),
        (ApiError::RateLimited, "Too many requests. Please try again later."),
        (ApiError::Server { message: None }, "Server error. Please try again later."),
        (ApiError::Unexpected { status: 400, message: None }, "An error occurred."),
    ];
    for (error, expected) in cases {
        let plan = FailurePlan::for_error(&error, false);
        assert_eq!(plan.notifications.len(), 1, "one toast for {error:?}");
        assert_eq!(plan.notifications[0].1, expected);
    }
}

#[test]
fn plan_prefers_the_server_message_when_present() {
    let error = ApiError::Server { message: Some("Database unavailable".to_owned()) };
    let plan = FailurePlan::for_error(&error, false);
    assert_eq!(plan.notifications[0].1, "Database unavailable");
}

#[test]
fn server_message_is_surfaced_for_auth_failures() {
    let error = ApiError::Auth { message: Some("Invalid credentials".to_owned()) };
    assert_eq!(error.server_message(), Some("Invalid credentials"));
    assert_eq!(ApiError::Network.server_message(), None);
}

#[test]
fn is_login_path_covers_both_entry_points() {
    assert!(is_login_path("/login"));
    assert!(is_login_path("/admin/login"));
    assert!(is_login_path("/admin/login?from=%2Fdashboard"));
    assert!(!is_login_path("/dashboard"));
    assert!(!is_login_path("/"));
    assert!(!is_login_path("/admin/login2"));
}
