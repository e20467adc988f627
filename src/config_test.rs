use super::*;

#[test]
fn normalize_base_url_strips_trailing_slash() {
    assert_eq!(normalize_base_url("http://localhost:5001/api/"), "http://localhost:5001/api");
}

#[test]
fn normalize_base_url_keeps_clean_url_unchanged() {
    assert_eq!(normalize_base_url("https://api.example.com/v1"), "https://api.example.com/v1");
}

#[test]
fn normalize_base_url_trims_whitespace() {
    assert_eq!(normalize_base_url(" http://localhost:5001/api "), "http://localhost:5001/api");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
