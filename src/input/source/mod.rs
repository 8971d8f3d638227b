pub mod evdev;
pub mod hidraw;
