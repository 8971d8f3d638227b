use std::error::Error;

use evdev::Key;

use super::remap::{EventRemapper, RemapError, RemapRule, RemapTable};
use super::sink::{EventSink, SinkError};

/// Sink that records everything written to it.
#[derive(Default)]
struct RecordingSink {
    keys: Vec<(Key, i32)>,
    syncs: usize,
}

impl EventSink for RecordingSink {
    fn key(&mut self, key: Key, value: i32) -> Result<(), SinkError> {
        self.keys.push((key, value));
        Ok(())
    }

    fn sync(&mut self) -> Result<(), SinkError> {
        self.syncs += 1;
        Ok(())
    }
}

fn select_to_enter(verbose: bool) -> EventRemapper {
    let table = RemapTable::new(&[RemapRule::new(Key::KEY_SELECT, Key::KEY_ENTER)])
        .expect("the table should build");
    EventRemapper::new(table, verbose)
}

#[test]
fn test_remap_single_fire() -> Result<(), Box<dyn Error>> {
    let remapper = select_to_enter(false);

    // Press and release both fire exactly once.
    for value in [1, 0] {
        let mut sink = RecordingSink::default();
        let handled = remapper.remap(&mut sink, Key::KEY_SELECT, value)?;
        assert!(handled, "select should be handled");
        assert_eq!(
            sink.keys,
            vec![(Key::KEY_ENTER, value)],
            "exactly one enter event carrying the source value"
        );
        assert_eq!(sink.syncs, 1, "exactly one sync");
    }

    Ok(())
}

#[test]
fn test_unhandled_key_has_no_side_effects() -> Result<(), Box<dyn Error>> {
    let remapper = select_to_enter(false);
    let mut sink = RecordingSink::default();

    let handled = remapper.remap(&mut sink, Key::KEY_A, 1)?;
    assert!(!handled, "keys without a rule fall back to the caller");
    assert!(sink.keys.is_empty());
    assert_eq!(sink.syncs, 0);

    Ok(())
}

#[test]
fn test_static_binding_mirrors_table() {
    let remapper = select_to_enter(true);
    assert_eq!(
        remapper.static_binding(Key::KEY_SELECT),
        Some(Key::KEY_ENTER)
    );
    assert_eq!(remapper.static_binding(Key::KEY_A), None);
}

#[test]
fn test_duplicate_source_rejected() {
    let result = RemapTable::new(&[
        RemapRule::new(Key::KEY_SELECT, Key::KEY_ENTER),
        RemapRule::new(Key::KEY_SELECT, Key::KEY_ESC),
    ]);
    assert_eq!(
        result.unwrap_err(),
        RemapError::DuplicateSource(Key::KEY_SELECT)
    );
}

#[test]
fn test_self_map_rejected() {
    let result = RemapTable::new(&[RemapRule::new(Key::KEY_ENTER, Key::KEY_ENTER)]);
    assert_eq!(result.unwrap_err(), RemapError::SelfMap(Key::KEY_ENTER));
}
