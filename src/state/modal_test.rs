use super::*;

fn record(name: &str) -> NameRecord {
    NameRecord { name: name.to_owned(), category: "pets".to_owned(), ..NameRecord::default() }
}

#[test]
fn modal_state_default_is_closed() {
    assert_eq!(ModalState::default(), ModalState::Closed);
}

#[test]
fn open_update_captures_record() {
    let state = ModalState::Closed.apply(ModalEvent::OpenUpdate(record("Zenith")));
    assert_eq!(state, ModalState::UpdateOpen(record("Zenith")));
}

#[test]
fn close_discards_captured_record() {
    let state = ModalState::UpdateOpen(record("Zenith")).apply(ModalEvent::Close);
    assert_eq!(state, ModalState::Closed);
}

#[test]
fn opening_another_modal_replaces_current() {
    let state = ModalState::UpdateOpen(record("Zenith")).apply(ModalEvent::OpenSearch);
    assert_eq!(state, ModalState::SearchOpen);

    let state = state.apply(ModalEvent::OpenCreate);
    assert_eq!(state, ModalState::CreateOpen);
}

#[test]
fn reopening_update_swaps_target() {
    let state = ModalState::UpdateOpen(record("Zenith")).apply(ModalEvent::OpenUpdate(record("Orbit")));
    assert_eq!(state, ModalState::UpdateOpen(record("Orbit")));
}
