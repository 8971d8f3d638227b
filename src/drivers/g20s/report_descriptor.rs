//! The G20S firmware reports a 139 byte descriptor that is cut off before
//! its collections are closed, so the kernel rejects the whole device. The
//! table below is the complete descriptor the firmware should have sent:
//! the same keyboard, consumer-control and mouse layout, with every
//! collection properly ended.

/// Byte length of the truncated descriptor the defective firmware reports.
pub const DEFECTIVE_LENGTH: usize = 139;

/// Leading bytes of the defective descriptor (Usage Page (Generic Desktop)).
pub const DEFECTIVE_PREFIX: [u8; 2] = [0x05, 0x01];

/// Corrected report descriptor with proper collection endings.
pub const REPORT_DESCRIPTOR: [u8; 175] = [
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xa1, 0x01, // Collection (Application)
    0x85, 0x01, //  Report ID (1)
    0x75, 0x01, //  Report Size (1)
    0x95, 0x08, //  Report Count (8)
    0x05, 0x07, //  Usage Page (Keyboard)
    0x19, 0xe0, //  Usage Minimum (224)
    0x29, 0xe7, //  Usage Maximum (231)
    0x15, 0x00, //  Logical Minimum (0)
    0x25, 0x01, //  Logical Maximum (1)
    0x81, 0x02, //  Input (Data,Var,Abs)
    0x95, 0x01, //  Report Count (1)
    0x75, 0x08, //  Report Size (8)
    0x81, 0x01, //  Input (Const,Array,Abs)
    0x95, 0x05, //  Report Count (5)
    0x75, 0x01, //  Report Size (1)
    0x05, 0x08, //  Usage Page (LEDs)
    0x19, 0x01, //  Usage Minimum (1)
    0x29, 0x05, //  Usage Maximum (5)
    0x91, 0x02, //  Output (Data,Var,Abs)
    0x95, 0x01, //  Report Count (1)
    0x75, 0x03, //  Report Size (3)
    0x91, 0x01, //  Output (Const,Array,Abs)
    0x95, 0x06, //  Report Count (6)
    0x75, 0x08, //  Report Size (8)
    0x15, 0x00, //  Logical Minimum (0)
    0x25, 0xff, //  Logical Maximum (255)
    0x05, 0x07, //  Usage Page (Keyboard)
    0x19, 0x00, //  Usage Minimum (0)
    0x29, 0xff, //  Usage Maximum (255)
    0x81, 0x00, //  Input (Data,Array,Abs)
    0xc0, // End Collection
    0x05, 0x0c, // Usage Page (Consumer)
    0x09, 0x01, // Usage (Consumer Control)
    0xa1, 0x01, // Collection (Application)
    0x85, 0x03, //  Report ID (3)
    0x19, 0x00, //  Usage Minimum (0)
    0x2a, 0x9c, 0x02, //  Usage Maximum (668)
    0x15, 0x00, //  Logical Minimum (0)
    0x26, 0x9c, 0x02, //  Logical Maximum (668)
    0x95, 0x01, //  Report Count (1)
    0x75, 0x10, //  Report Size (16)
    0x81, 0x00, //  Input (Data,Array,Abs)
    0x09, 0x02, //  Usage (Numeric Key Pad)
    0xa1, 0x02, //  Collection (Logical)
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (1)
    0x29, 0x0a, //   Usage Maximum (10)
    0x15, 0x01, //   Logical Minimum (1)
    0x25, 0x0a, //   Logical Maximum (10)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x40, //   Input (Data,Array,Abs,Null)
    0xc0, //  End Collection
    0xc0, // End Collection
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xa1, 0x01, // Collection (Application)
    0x85, 0x02, //  Report ID (2)
    0x09, 0x01, //  Usage (Pointer)
    0xa1, 0x00, //  Collection (Physical)
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (1)
    0x29, 0x03, //   Usage Maximum (3)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x95, 0x03, //   Report Count (3)
    0x75, 0x01, //   Report Size (1)
    0x81, 0x02, //   Input (Data,Var,Abs)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x05, //   Report Size (5)
    0x81, 0x01, //   Input (Const,Array,Abs)
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7f, //   Logical Maximum (127)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x02, //   Report Count (2)
    0x81, 0x06, //   Input (Data,Var,Rel)
    0x09, 0x38, //   Usage (Wheel)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7f, //   Logical Maximum (127)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x06, //   Input (Data,Var,Rel)
    0xc0, //  End Collection
    0xc0, // End Collection
];
