//! Quirk catalog: device identities, defective-descriptor signatures, and
//! the corrections and remap rules that apply to them.
//!
//! Entries are validated when the [QuirkRegistry] is built, so a defective
//! catalog is a startup error rather than a runtime hazard. After that the
//! registry is read-only and may be shared across device tasks freely.

use std::fmt;

use evdev::BusType;
use thiserror::Error;

use crate::hid::report_descriptor::{self, DescriptorError};
use crate::input::remap::{RemapError, RemapRule, RemapTable};


/// Transport-level identity of a HID device, as reported at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub bus: BusType,
    pub vendor_id: u16,
    pub product_id: u16,
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}:{:04x}:{:04x}",
            self.bus.0, self.vendor_id, self.product_id
        )
    }
}

/// The identifying shape of a known-defective report descriptor: its exact
/// byte length and a prefix of expected leading bytes.
///
/// A signature has to be specific enough that it can never match the
/// descriptor of a different, healthy device; correction is gated on an
/// exact match, never on a heuristic.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    length: usize,
    prefix: &'static [u8],
}

impl Signature {
    pub const fn new(length: usize, prefix: &'static [u8]) -> Self {
        Self { length, prefix }
    }

    /// Returns true if the raw descriptor matches this signature exactly.
    /// A buffer shorter than the prefix never matches and is never read
    /// past its end.
    pub fn matches(&self, raw: &[u8]) -> bool {
        raw.len() == self.length && raw.starts_with(self.prefix)
    }
}

/// Errors building a [Quirk] or a [QuirkRegistry].
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("quirk '{name}': replacement descriptor is malformed: {source}")]
    MalformedReplacement {
        name: &'static str,
        source: DescriptorError,
    },
    #[error("quirk '{name}': signature matches its own replacement descriptor")]
    SelfMatchingSignature { name: &'static str },
    #[error("quirk '{name}': invalid remap table: {source}")]
    InvalidRemap {
        name: &'static str,
        source: RemapError,
    },
    #[error("duplicate quirk for device {device}")]
    DuplicateDevice { device: DeviceId },
}

/// A [Quirk] associates one device identity with the signature of its
/// defective descriptor, the corrected replacement, and the key remap
/// rules that apply to its events.
#[derive(Debug, Clone)]
pub struct Quirk {
    name: &'static str,
    device: DeviceId,
    signature: Signature,
    replacement: &'static [u8],
    remap: RemapTable,
}

impl Quirk {
    /// Build and validate a quirk entry. The replacement descriptor must be
    /// structurally well formed, and must not itself match the signature:
    /// feeding corrected bytes back through the corrector has to be a
    /// pass-through, not a loop.
    pub fn new(
        name: &'static str,
        device: DeviceId,
        signature: Signature,
        replacement: &'static [u8],
        rules: &[RemapRule],
    ) -> Result<Self, RegistryError> {
        report_descriptor::validate(replacement)
            .map_err(|source| RegistryError::MalformedReplacement { name, source })?;

        if signature.matches(replacement) {
            return Err(RegistryError::SelfMatchingSignature { name });
        }

        let remap = RemapTable::new(rules)
            .map_err(|source| RegistryError::InvalidRemap { name, source })?;

        Ok(Self {
            name,
            device,
            signature,
            replacement,
            remap,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn device(&self) -> &DeviceId {
        &self.device
    }

    pub fn remap(&self) -> &RemapTable {
        &self.remap
    }
}

/// Catalog of every known quirk, looked up by device identity.
#[derive(Debug, Clone, Default)]
pub struct QuirkRegistry {
    quirks: Vec<Quirk>,
}

impl QuirkRegistry {
    /// Build a registry from validated quirk entries. Each device identity
    /// may appear at most once.
    pub fn new(quirks: Vec<Quirk>) -> Result<Self, RegistryError> {
        for (i, quirk) in quirks.iter().enumerate() {
            if quirks[..i].iter().any(|other| other.device == quirk.device) {
                return Err(RegistryError::DuplicateDevice {
                    device: quirk.device,
                });
            }
        }
        Ok(Self { quirks })
    }

    /// Exact-match lookup by device identity.
    pub fn get(&self, device: &DeviceId) -> Option<&Quirk> {
        self.quirks.iter().find(|quirk| quirk.device == *device)
    }

    /// Correct the raw report descriptor reported by the given device.
    ///
    /// Devices without a catalog entry pass through byte-for-byte. For a
    /// known device the raw bytes are compared against the entry's
    /// signature; only an exact match substitutes the stored replacement.
    /// On a mismatch (a firmware update may have fixed the device, or the
    /// blob is too short to compare) the original is returned unchanged,
    /// since fabricating a replacement for an already-valid or
    /// differently-broken descriptor is unsafe.
    pub fn correct_descriptor<'a>(&'a self, device: &DeviceId, raw: &'a [u8]) -> &'a [u8] {
        let Some(quirk) = self.get(device) else {
            return raw;
        };

        if !quirk.signature.matches(raw) {
            log::debug!(
                "{}: descriptor for {device} ({} bytes) does not match the known-defective shape, leaving it alone",
                quirk.name,
                raw.len()
            );
            return raw;
        }

        log::info!("{}: fixing report descriptor for {device}", quirk.name);
        quirk.replacement
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quirk> {
        self.quirks.iter()
    }
}
