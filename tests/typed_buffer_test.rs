//! Typed buffer semantics

use nose_keyboard::{
    buffer::TypedBuffer,
    keyboard::Key,
    selection::CommitEvent,
};
use proptest::prelude::*;
use std::time::Duration;

fn commit(key: Key) -> CommitEvent {
    CommitEvent {
        key,
        row: 0,
        col: 0,
        at: Duration::ZERO,
    }
}

#[test]
fn test_commit_sequence_states() {
    let mut buffer = TypedBuffer::new();
    let keys = [Key::Char('A'), Key::Char('B'), Key::Backspace, Key::Clear, Key::Space];
    let expected_text = ["A", "AB", "A", "", " "];
    let expected_spoken = ["A", "B", "backspace", "cleared", "space"];

    for ((key, text), spoken) in keys.into_iter().zip(expected_text).zip(expected_spoken) {
        let announcement = buffer.apply(&commit(key));
        assert_eq!(buffer.text(), text);
        assert_eq!(announcement.text(), spoken);
    }
}

#[test]
fn test_repeated_backspace_on_empty() {
    let mut buffer = TypedBuffer::new();
    for _ in 0..5 {
        buffer.apply(&commit(Key::Backspace));
    }
    assert!(buffer.is_empty());
}

fn printable_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        prop::char::range('A', 'Z').prop_map(Key::Char),
        Just(Key::Space),
    ]
}

fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => printable_key(),
        1 => Just(Key::Backspace),
        1 => Just(Key::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_clear_then_appends_reproduces_sequence(
        prefix in prop::collection::vec(any_key(), 0..30),
        typed in prop::collection::vec(printable_key(), 0..30),
    ) {
        let mut buffer = TypedBuffer::new();
        for key in prefix {
            buffer.apply_key(key);
        }
        buffer.apply_key(Key::Clear);
        for key in &typed {
            buffer.apply_key(*key);
        }

        let expected: String = typed.iter().map(|key| key.symbol()).collect();
        prop_assert_eq!(buffer.text(), expected.as_str());
    }

    #[test]
    fn prop_append_then_backspace_restores(
        prefix in prop::collection::vec(any_key(), 0..30),
        key in printable_key(),
    ) {
        let mut buffer = TypedBuffer::new();
        for k in prefix {
            buffer.apply_key(k);
        }
        let before = buffer.clone();
        buffer.apply_key(key);
        buffer.apply_key(Key::Backspace);
        prop_assert_eq!(buffer, before);
    }
}
