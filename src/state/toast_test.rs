use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Success, "one");
    let second = state.push(ToastLevel::Error, "two");
    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(state.next_id, 2);
}

#[test]
fn push_preserves_insertion_order() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Error, "first");
    state.push(ToastLevel::Success, "second");
    let messages: Vec<&str> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Success, "keep");
    let second = state.push(ToastLevel::Error, "drop");
    state.dismiss(second);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, first);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "keep");
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Success, "one");
    state.dismiss(first);
    let second = state.push(ToastLevel::Success, "two");
    assert!(second > first);
}
