pub mod keyboard;
pub mod uhid;
