use std::error::Error;

use evdev::{AttributeSet, Device, InputEventKind, Key};

use crate::input::remap::EventRemapper;
use crate::input::sink::EventSink;
use crate::input::target::keyboard::VirtualKeyboard;
use crate::quirks::Quirk;

/// [RemapSource] is a grabbed event node whose key events are translated
/// through a remap table and re-emitted on a virtual keyboard. Grabbing
/// makes the virtual device the only consumer-visible source, so
/// forwarding unhandled events unchanged is the default handling.
pub struct RemapSource {
    device: Device,
    remapper: EventRemapper,
    sink: VirtualKeyboard,
}

impl RemapSource {
    /// Open the given event node and prepare the virtual keyboard.
    /// Returns `Ok(None)` if the node does not produce any of the quirk's
    /// remapped keys (e.g. the mouse interface of a combo device); callers
    /// should leave such nodes alone.
    pub fn open(
        devnode: &str,
        quirk: &Quirk,
        verbose: bool,
    ) -> Result<Option<Self>, Box<dyn Error + Send + Sync>> {
        log::debug!("Opening device at: {devnode}");
        let mut device = Device::open(devnode)?;

        let remapper = EventRemapper::new(quirk.remap().clone(), verbose);
        let Some(supported) = device.supported_keys() else {
            return Ok(None);
        };
        if !remapper.applies_to(supported) {
            return Ok(None);
        }

        // Advertise the source's keys translated through the static
        // binding, so the environment sees the target capability instead
        // of the source one.
        let mut keys = AttributeSet::<Key>::new();
        for key in supported.iter() {
            keys.insert(remapper.static_binding(key).unwrap_or(key));
        }

        let id = device.input_id();
        let name = format!("quirkd {}", quirk.name());
        let sink = VirtualKeyboard::new(&name, id, &keys)?;

        // Grab exclusive access so the original node stops delivering
        // events to other clients.
        device.grab()?;

        Ok(Some(Self {
            device,
            remapper,
            sink,
        }))
    }

    /// Stream events until the device goes away.
    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let Self {
            device,
            remapper,
            mut sink,
        } = self;
        let mut events = device.into_event_stream()?;

        loop {
            let event = events.next_event().await?;
            match event.kind() {
                InputEventKind::Key(key) => {
                    if remapper.remap(&mut sink, key, event.value())? {
                        // Handled: the original key must not also be reported.
                        continue;
                    }
                    sink.key(key, event.value())?;
                }
                InputEventKind::Synchronization(_) => sink.sync()?,
                _ => (),
            }
        }
    }
}
