use bulkmail_core::{update, ComposeState, Msg};

#[test]
fn update_is_noop() {
    let state = ComposeState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
