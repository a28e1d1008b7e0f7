use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationState::default();
    let a = state.push(NoticeLevel::Success, "one");
    let b = state.push(NoticeLevel::Error, "two");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "two");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NotificationState::default();
    let a = state.push(NoticeLevel::Success, "one");
    let b = state.push(NoticeLevel::Error, "two");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = NotificationState::default();
    let a = state.push(NoticeLevel::Success, "one");
    state.dismiss(a);
    let b = state.push(NoticeLevel::Success, "two");
    assert_ne!(a, b);
}

#[test]
fn errors_linger_longer_than_successes() {
    assert!(NoticeLevel::Error.lifetime() > NoticeLevel::Success.lifetime());
}
