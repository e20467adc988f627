use super::*;

#[test]
fn valid_input_produces_a_trimmed_payload() {
    let message = validate_contact(
        "  Ada Lovelace ",
        " ada@example.com ",
        " Collaboration ",
        "  I would like to talk about a project.  ",
    )
    .expect("valid form");
    assert_eq!(message.name, "Ada Lovelace");
    assert_eq!(message.email, "ada@example.com");
    assert_eq!(message.subject, "Collaboration");
    assert_eq!(message.message, "I would like to talk about a project.");
}

#[test]
fn blank_fields_are_each_reported() {
    let errors = validate_contact("", "", "", "").expect_err("invalid form");
    for field in ["name", "email", "subject", "message"] {
        assert!(error_for(&errors, field).is_some(), "missing error for {field}");
    }
}

#[test]
fn malformed_email_is_rejected_with_a_specific_message() {
    let errors = validate_contact("Ada", "not-an-email", "Hi", "A long enough message").expect_err("invalid");
    assert_eq!(error_for(&errors, "email"), Some("Enter a valid email address"));
    assert_eq!(error_for(&errors, "name"), None);
}

#[test]
fn short_messages_are_rejected() {
    let errors = validate_contact("Ada", "ada@example.com", "Hi", "Too short").expect_err("invalid");
    assert_eq!(error_for(&errors, "message"), Some("Message must be at least 10 characters"));
}

#[test]
fn message_length_is_measured_after_trimming() {
    let errors = validate_contact("Ada", "ada@example.com", "Hi", "  spaced  ").expect_err("invalid");
    assert!(error_for(&errors, "message").is_some());
}
