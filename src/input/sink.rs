use evdev::Key;
use thiserror::Error;

/// Errors writing to an output event sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write to output device: {0}")]
    Io(#[from] std::io::Error),
}

/// Output sink for synthesized input events. Key events are buffered until
/// [EventSink::sync] commits them, making the batch visible to downstream
/// listeners in one frame.
pub trait EventSink {
    /// Report a key event. Value semantics follow the input subsystem:
    /// 0 is a release, nonzero a press or repeat.
    fn key(&mut self, key: Key, value: i32) -> Result<(), SinkError>;

    /// Commit all buffered events.
    fn sync(&mut self) -> Result<(), SinkError>;
}
