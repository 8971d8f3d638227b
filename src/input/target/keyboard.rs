use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, InputId, Key};

use crate::input::sink::{EventSink, SinkError};

/// Virtual uinput keyboard that synthesized key events are written to.
/// Key events are buffered and committed as one frame per sync, so a
/// remapped press is never visible to listeners without its sync.
pub struct VirtualKeyboard {
    device: VirtualDevice,
    pending: Vec<InputEvent>,
}

impl VirtualKeyboard {
    /// Create the virtual device. `keys` is the full key set the device
    /// advertises; for remapped sources this is the source's supported
    /// keys translated through the static binding.
    pub fn new(name: &str, id: InputId, keys: &AttributeSet<Key>) -> Result<Self, SinkError> {
        let device = VirtualDeviceBuilder::new()?
            .name(name)
            .input_id(id)
            .with_keys(keys)?
            .build()?;

        Ok(Self {
            device,
            pending: Vec::new(),
        })
    }
}

impl EventSink for VirtualKeyboard {
    fn key(&mut self, key: Key, value: i32) -> Result<(), SinkError> {
        self.pending
            .push(InputEvent::new(EventType::KEY, key.code(), value));
        Ok(())
    }

    fn sync(&mut self) -> Result<(), SinkError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        // emit() appends a SYN_REPORT after the batch
        self.device.emit(&self.pending)?;
        self.pending.clear();
        Ok(())
    }
}
