//! Key remapping tables and the per-event remapper.

use std::collections::HashMap;

use evdev::Key;
use thiserror::Error;

use super::sink::{EventSink, SinkError};

/// A single remap rule: events arriving with the source key code are
/// re-reported with the target key code, value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapRule {
    pub source: Key,
    pub target: Key,
}

impl RemapRule {
    pub const fn new(source: Key, target: Key) -> Self {
        Self { source, target }
    }
}

/// Errors constructing a [RemapTable].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemapError {
    #[error("duplicate rule for source key {0:?}")]
    DuplicateSource(Key),
    #[error("rule maps {0:?} to itself")]
    SelfMap(Key),
}

/// Source-to-target key mapping. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RemapTable {
    targets: HashMap<u16, Key>,
}

impl RemapTable {
    /// Build a table from the given rules. Each source key may appear at
    /// most once, and a rule mapping a key to itself is rejected.
    pub fn new(rules: &[RemapRule]) -> Result<Self, RemapError> {
        let mut targets = HashMap::with_capacity(rules.len());
        for rule in rules {
            if rule.source == rule.target {
                return Err(RemapError::SelfMap(rule.source));
            }
            if targets.insert(rule.source.code(), rule.target).is_some() {
                return Err(RemapError::DuplicateSource(rule.source));
            }
        }
        Ok(Self { targets })
    }

    /// Returns the target key for the given source key, if a rule exists.
    pub fn target_for(&self, source: Key) -> Option<Key> {
        self.targets.get(&source.code()).copied()
    }

    /// Iterate over the source keys of every rule in the table.
    pub fn sources(&self) -> impl Iterator<Item = Key> + '_ {
        self.targets.keys().map(|code| Key::new(*code))
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// [EventRemapper] applies a [RemapTable] at the two extension points the
/// host offers: static key binding at device setup time and per-event
/// interception at runtime. Both paths consult the same table, so enabling
/// them together can never double-report a press.
#[derive(Debug, Clone)]
pub struct EventRemapper {
    table: RemapTable,
    verbose: bool,
}

impl EventRemapper {
    pub fn new(table: RemapTable, verbose: bool) -> Self {
        Self { table, verbose }
    }

    /// Intercept a single decoded key event. If the key is on the remap
    /// list, report the target key with the same value followed by one
    /// sync, and return `Ok(true)`: the event is fully handled and the
    /// caller must not also report the original. Otherwise return
    /// `Ok(false)` with no sink side effects, and the caller applies its
    /// default handling.
    pub fn remap(
        &self,
        sink: &mut dyn EventSink,
        key: Key,
        value: i32,
    ) -> Result<bool, SinkError> {
        let Some(target) = self.table.target_for(key) else {
            return Ok(false);
        };

        if self.verbose {
            log::debug!("converting {key:?} to {target:?} (value={value})");
        }

        sink.key(target, value)?;
        sink.sync()?;

        Ok(true)
    }

    /// Static binding counterpart of [EventRemapper::remap]: maps a key the
    /// device can produce to the key that should be advertised for it.
    /// Returns `None` for keys without a rule.
    pub fn static_binding(&self, key: Key) -> Option<Key> {
        if self.verbose && key.code() != 0 {
            log::debug!("static binding: key {key:?} (code {})", key.code());
        }
        let target = self.table.target_for(key);
        if let Some(target) = target {
            log::debug!("binding {key:?} as {target:?}");
        }
        target
    }

    /// Returns true if the table remaps any of the given supported keys.
    /// Used to decide whether a source device needs interception at all.
    pub fn applies_to(&self, keys: &evdev::AttributeSet<Key>) -> bool {
        self.table.sources().any(|source| keys.contains(source))
    }
}
