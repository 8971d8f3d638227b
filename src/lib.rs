pub mod drivers;
pub mod hid;
pub mod input;
pub mod quirks;
pub mod udev;
