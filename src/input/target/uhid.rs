use std::fs::File;
use std::io;

use evdev::BusType;
use uhid_virt::{Bus, CreateParams, UHIDDevice};

use crate::quirks::DeviceId;

/// Virtual HID device carrying a corrected report descriptor. Raw input
/// reports read from the real device are forwarded to it unchanged; the
/// kernel parses them against the corrected descriptor instead of the
/// defective one the hardware reported.
pub struct VirtualHidDevice {
    device: UHIDDevice<File>,
}

impl VirtualHidDevice {
    pub fn new(name: String, id: &DeviceId, descriptor: &[u8]) -> io::Result<Self> {
        let device = UHIDDevice::create(CreateParams {
            name,
            phys: String::from(""),
            uniq: String::from(""),
            bus: bus_from(id.bus),
            vendor: id.vendor_id as u32,
            product: id.product_id as u32,
            version: 0,
            country: 0,
            rd_data: descriptor.to_vec(),
        })?;

        Ok(Self { device })
    }

    /// Forward one raw input report.
    pub fn write_report(&mut self, data: &[u8]) -> io::Result<()> {
        self.device.write(data)?;
        Ok(())
    }

    /// Tear the virtual device down. The kernel also removes it when the
    /// backing fd closes, so failure here is not worth surfacing.
    pub fn destroy(&mut self) {
        if let Err(e) = self.device.destroy() {
            log::debug!("Failed to destroy virtual HID device: {e:?}");
        }
    }
}

fn bus_from(bus: BusType) -> Bus {
    match bus {
        BusType::BUS_USB => Bus::USB,
        BusType::BUS_BLUETOOTH => Bus::BLUETOOTH,
        BusType::BUS_I2C => Bus::I2C,
        _ => Bus::VIRTUAL,
    }
}
