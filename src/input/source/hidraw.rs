use std::error::Error;
use std::ffi::CString;

use hidapi::{HidApi, HidDevice};

use crate::input::target::uhid::VirtualHidDevice;
use crate::quirks::QuirkRegistry;
use crate::udev::DiscoveredDevice;

// Raw report buffer size
const PACKET_SIZE: usize = 64;

// HID buffer read timeout
const HID_TIMEOUT: i32 = 200;

/// [HidrawProxy] proxies a device with a defective report descriptor: raw
/// input reports from the real hidraw node are forwarded unchanged to a
/// virtual HID device that carries the corrected descriptor, so the kernel
/// parses them against the corrected layout.
pub struct HidrawProxy {
    device: HidDevice,
    target: VirtualHidDevice,
}

impl HidrawProxy {
    pub fn new(
        node: &DiscoveredDevice,
        registry: &QuirkRegistry,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let raw = node.read_report_descriptor()?;
        let corrected = registry.correct_descriptor(&node.id, &raw);

        let cs_path = CString::new(node.devnode.clone())?;
        let api = HidApi::new()?;
        let device = api.open_path(&cs_path)?;

        let name = format!("{} (corrected)", node.name);
        let target = VirtualHidDevice::new(name, &node.id, corrected)?;

        Ok(Self { device, target })
    }

    /// Pump raw reports until the device goes away.
    pub fn run(mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut buf = [0; PACKET_SIZE];
        loop {
            let bytes_read = match self.device.read_timeout(&mut buf[..], HID_TIMEOUT) {
                Ok(bytes_read) => bytes_read,
                Err(e) => {
                    self.target.destroy();
                    return Err(e.into());
                }
            };
            if bytes_read == 0 {
                continue;
            }
            if let Err(e) = self.target.write_report(&buf[..bytes_read]) {
                self.target.destroy();
                return Err(e.into());
            }
        }
    }
}
