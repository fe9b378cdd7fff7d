use super::*;

use crate::input::event::KeyCode;
use crate::state::Action;

fn handled() -> KeyHandler {
    Box::new(|_, _| KeyDispatch::Handled(Vec::new()))
}

fn ignored() -> KeyHandler {
    Box::new(|_, _| KeyDispatch::Ignored)
}

#[test]
fn mount_installs_exactly_one_listener_and_drop_removes_it() {
    let registry = ListenerRegistry::new();
    assert_eq!(registry.listener_count(), 0);

    let guard = registry.mount(handled());
    assert_eq!(registry.listener_count(), 1);

    drop(guard);
    assert_eq!(registry.listener_count(), 0);
}

#[test]
fn repeated_mount_unmount_cycles_never_accumulate_listeners() {
    let registry = ListenerRegistry::new();
    for _ in 0..5 {
        let guard = registry.mount(handled());
        assert_eq!(registry.listener_count(), 1);
        drop(guard);
        assert_eq!(registry.listener_count(), 0);
    }
}

#[test]
fn dispatch_without_listeners_ignores_the_key() {
    let registry = ListenerRegistry::new();
    let state = AppState::new();
    let key = KeyPress::plain(KeyCode::Enter);
    assert!(!registry.dispatch(&state, &key).is_handled());
}

#[test]
fn first_handling_listener_consumes_the_event() {
    let registry = ListenerRegistry::new();
    let state = AppState::new();
    let key = KeyPress::plain(KeyCode::Enter);

    let _skip = registry.mount(ignored());
    let _take = registry.mount(Box::new(|_, _| {
        KeyDispatch::Handled(vec![Action::CloseModal])
    }));
    let _late = registry.mount(Box::new(|_, _| {
        KeyDispatch::Handled(vec![Action::CloseModal, Action::CloseModal])
    }));

    let actions = registry.dispatch(&state, &key).into_actions();
    assert_eq!(actions.len(), 1);
}

#[test]
fn guard_outliving_the_registry_is_harmless() {
    let registry = ListenerRegistry::new();
    let guard = registry.mount(handled());
    drop(registry);
    drop(guard);
}
