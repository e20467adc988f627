use super::*;

#[test]
fn errors_linger_longer_than_successes() {
    assert_eq!(dismiss_after_ms(ToastLevel::Success), 3_000);
    assert_eq!(dismiss_after_ms(ToastLevel::Error), 5_000);
    assert!(dismiss_after_ms(ToastLevel::Error) > dismiss_after_ms(ToastLevel::Success));
}

#[test]
fn level_class_maps_to_modifier_names() {
    assert_eq!(level_class(ToastLevel::Success), "success");
    assert_eq!(level_class(ToastLevel::Error), "error");
}
