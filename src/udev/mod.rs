//! Device discovery. Matching devices are found by walking the hidraw and
//! input subsystems and parsing the HID identity from each node's `hid`
//! parent.

use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use ::udev::Enumerator;
use evdev::BusType;

use crate::quirks::DeviceId;


/// A discovered device node together with the identity parsed from its
/// `hid` parent.
#[derive(Debug, Clone)]
pub struct DiscoveredDevice {
    pub id: DeviceId,
    pub devnode: String,
    pub name: String,
    /// sysfs path of the hid parent's report descriptor blob.
    descriptor_path: PathBuf,
}

impl DiscoveredDevice {
    /// Read the raw report descriptor as the device reported it.
    pub fn read_report_descriptor(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.descriptor_path)
    }
}

/// All hidraw nodes with a parseable HID identity.
pub fn discover_hidraw() -> Result<Vec<DiscoveredDevice>, Box<dyn Error + Send + Sync>> {
    Ok(discover_devices("hidraw")?
        .iter()
        .filter_map(from_hid_parent)
        .collect())
}

/// All input event nodes with a parseable HID identity. Nodes of the
/// input subsystem that are not event devices (e.g. the inputNN parents
/// themselves) are skipped.
pub fn discover_event_nodes() -> Result<Vec<DiscoveredDevice>, Box<dyn Error + Send + Sync>> {
    Ok(discover_devices("input")?
        .iter()
        .filter(|device| device.sysname().to_string_lossy().starts_with("event"))
        .filter_map(from_hid_parent)
        .collect())
}

/// Returns a list of devices in the given subsystem.
fn discover_devices(subsystem: &str) -> Result<Vec<::udev::Device>, Box<dyn Error + Send + Sync>> {
    let mut enumerator = Enumerator::new()?;
    enumerator.match_subsystem(subsystem)?;

    log::debug!("Started udev {subsystem} enumerator.");

    Ok(enumerator.scan_devices()?.into_iter().collect())
}

fn from_hid_parent(device: &::udev::Device) -> Option<DiscoveredDevice> {
    let devnode = device.devnode()?.to_string_lossy().to_string();
    let parent = device.parent_with_subsystem("hid").ok()??;
    let hid_id = parent.property_value("HID_ID")?.to_string_lossy();
    let Some(id) = parse_hid_id(&hid_id) else {
        log::warn!("Unable to parse HID identity '{hid_id}' for {devnode}");
        return None;
    };
    let name = parent
        .property_value("HID_NAME")
        .map(|value| value.to_string_lossy().to_string())
        .unwrap_or_default();
    let descriptor_path = parent.syspath().join("report_descriptor");

    Some(DiscoveredDevice {
        id,
        devnode,
        name,
        descriptor_path,
    })
}

/// Parse a `HID_ID` property value (`0005:00001D5A:0000C081`) into a
/// [DeviceId].
fn parse_hid_id(value: &str) -> Option<DeviceId> {
    let mut parts = value.split(':');
    let bus = u16::from_str_radix(parts.next()?, 16).ok()?;
    let vendor = u32::from_str_radix(parts.next()?, 16).ok()?;
    let product = u32::from_str_radix(parts.next()?, 16).ok()?;

    Some(DeviceId {
        bus: BusType(bus),
        vendor_id: vendor as u16,
        product_id: product as u16,
    })
}
