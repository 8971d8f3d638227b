//! Report descriptor item grammar. A descriptor is a sequence of
//! tag-length-value items; this module tokenizes that sequence and checks
//! the structural invariants a replacement descriptor has to hold before
//! it may be handed to the kernel.

use thiserror::Error;

/// Item type from the short-item prefix. HID 1.11 section 6.2.2.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Main,
    Global,
    Local,
    Reserved,
}

/// Main item tags.
pub mod main_item {
    pub const INPUT: u8 = 0x8;
    pub const OUTPUT: u8 = 0x9;
    pub const COLLECTION: u8 = 0xa;
    pub const FEATURE: u8 = 0xb;
    pub const END_COLLECTION: u8 = 0xc;
}

/// Global item tags.
pub mod global_item {
    pub const USAGE_PAGE: u8 = 0x0;
    pub const LOGICAL_MINIMUM: u8 = 0x1;
    pub const LOGICAL_MAXIMUM: u8 = 0x2;
    pub const REPORT_SIZE: u8 = 0x7;
    pub const REPORT_ID: u8 = 0x8;
    pub const REPORT_COUNT: u8 = 0x9;
}

/// Local item tags.
pub mod local_item {
    pub const USAGE: u8 = 0x0;
    pub const USAGE_MINIMUM: u8 = 0x1;
    pub const USAGE_MAXIMUM: u8 = 0x2;
}

/// Structural defects [validate] can find in a descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("item at offset {offset} declares {declared} payload byte(s) but only {available} remain")]
    TruncatedItem {
        offset: usize,
        declared: usize,
        available: usize,
    },
    #[error("End Collection at offset {offset} closes a collection that was never opened")]
    UnmatchedEndCollection { offset: usize },
    #[error("descriptor ends with {depth} collection(s) still open")]
    UnclosedCollection { depth: usize },
}

/// A single descriptor item: prefix-derived kind and tag plus the payload
/// bytes that follow the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub kind: ItemKind,
    pub tag: u8,
    pub data: &'a [u8],
    /// Byte offset of the item prefix within the descriptor.
    pub offset: usize,
}

/// Iterator over the items of a raw report descriptor.
pub struct Items<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Items<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }
}

impl<'a> Iterator for Items<'a> {
    type Item = Result<Item<'a>, DescriptorError>;

    fn next(&mut self) -> Option<Self::Item> {
        let prefix = *self.bytes.get(self.offset)?;
        let start = self.offset;
        self.offset += 1;

        let kind = match (prefix >> 2) & 0x03 {
            0 => ItemKind::Main,
            1 => ItemKind::Global,
            2 => ItemKind::Local,
            _ => ItemKind::Reserved,
        };
        let mut tag = prefix >> 4;
        let mut size = (prefix & 0x03) as usize;
        if size == 3 {
            // a declared size of 3 encodes a 4 byte payload
            size = 4;
        }

        // Long item: the real payload size and tag follow the prefix byte.
        if prefix == 0xfe {
            match (self.bytes.get(self.offset), self.bytes.get(self.offset + 1)) {
                (Some(&declared), Some(&long_tag)) => {
                    size = declared as usize;
                    tag = long_tag;
                    self.offset += 2;
                }
                _ => {
                    let available = self.bytes.len() - self.offset;
                    self.offset = self.bytes.len();
                    return Some(Err(DescriptorError::TruncatedItem {
                        offset: start,
                        declared: 2,
                        available,
                    }));
                }
            }
        }

        let end = self.offset + size;
        if end > self.bytes.len() {
            let available = self.bytes.len() - self.offset;
            self.offset = self.bytes.len();
            return Some(Err(DescriptorError::TruncatedItem {
                offset: start,
                declared: size,
                available,
            }));
        }

        let data = &self.bytes[self.offset..end];
        self.offset = end;

        Some(Ok(Item {
            kind,
            tag,
            data,
            offset: start,
        }))
    }
}

/// Checks the invariants a well-formed descriptor must hold: every item
/// payload complete, every opened collection closed, and the nesting depth
/// never dropping below zero when scanned left to right.
pub fn validate(descriptor: &[u8]) -> Result<(), DescriptorError> {
    let mut depth: usize = 0;
    for item in Items::new(descriptor) {
        let item = item?;
        if item.kind != ItemKind::Main {
            continue;
        }
        match item.tag {
            main_item::COLLECTION => depth += 1,
            main_item::END_COLLECTION => match depth.checked_sub(1) {
                Some(remaining) => depth = remaining,
                None => {
                    return Err(DescriptorError::UnmatchedEndCollection {
                        offset: item.offset,
                    })
                }
            },
            _ => (),
        }
    }

    if depth > 0 {
        return Err(DescriptorError::UnclosedCollection { depth });
    }

    Ok(())
}
