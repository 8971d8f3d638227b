use evdev::{BusType, Key};

use crate::input::remap::RemapRule;
use crate::quirks::{DeviceId, Quirk, RegistryError, Signature};

use super::report_descriptor::{DEFECTIVE_LENGTH, DEFECTIVE_PREFIX, REPORT_DESCRIPTOR};
use super::{NAME, PID, VID};

/// The OK button in the middle of the directional pad arrives as
/// KEY_SELECT, which most applications ignore; it is re-reported as
/// KEY_ENTER.
pub const REMAP_RULES: [RemapRule; 1] = [RemapRule::new(Key::KEY_SELECT, Key::KEY_ENTER)];

/// Builds the quirk entry for the G20S Bluetooth remote.
pub fn quirk() -> Result<Quirk, RegistryError> {
    Quirk::new(
        NAME,
        DeviceId {
            bus: BusType::BUS_BLUETOOTH,
            vendor_id: VID,
            product_id: PID,
        },
        Signature::new(DEFECTIVE_LENGTH, &DEFECTIVE_PREFIX),
        &REPORT_DESCRIPTOR,
        &REMAP_RULES,
    )
}
