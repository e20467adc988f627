use super::*;

#[test]
fn validate_login_trims_the_identifier() {
    let credentials = validate_login("  ada@example.com  ", "hunter2").expect("valid");
    assert_eq!(credentials.identifier, "ada@example.com");
    assert_eq!(credentials.password, "hunter2");
}

#[test]
fn validate_login_keeps_password_whitespace() {
    let credentials = validate_login("ada", " spaced pass ").expect("valid");
    assert_eq!(credentials.password, " spaced pass ");
}

#[test]
fn validate_login_requires_both_fields() {
    assert!(validate_login("", "hunter2").is_err());
    assert!(validate_login("ada", "").is_err());
    assert!(validate_login("   ", "   ").is_err());
}

#[test]
fn post_login_target_defaults_to_the_dashboard() {
    assert_eq!(post_login_target(None), "/dashboard");
    assert_eq!(post_login_target(Some("")), "/dashboard");
}

#[test]
fn post_login_target_honors_same_origin_paths() {
    assert_eq!(post_login_target(Some("/dashboard")), "/dashboard");
    assert_eq!(post_login_target(Some("/projects")), "/projects");
}

#[test]
fn post_login_target_rejects_external_destinations() {
    assert_eq!(post_login_target(Some("https://evil.example")), "/dashboard");
    assert_eq!(post_login_target(Some("//evil.example")), "/dashboard");
}
