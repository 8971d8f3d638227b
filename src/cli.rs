use clap::Parser;

/// Userspace HID quirk daemon: fixes defective report descriptors and
/// remaps keys for devices in the quirk catalog.
#[derive(Parser, Debug)]
#[command(name = "quirkd", version, about)]
pub struct Args {
    /// Log every key seen during static binding and every remapped event
    #[arg(short, long)]
    pub verbose: bool,
}
