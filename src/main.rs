use std::env;
use std::error::Error;
use std::process;
use std::sync::Arc;

use clap::Parser;

use quirkd::drivers;
use quirkd::input::source::evdev::RemapSource;
use quirkd::input::source::hidraw::HidrawProxy;
use quirkd::quirks::QuirkRegistry;
use quirkd::udev;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let log_level = match env::var("LOG_LEVEL") {
        Ok(value) => value,
        Err(_) => "info".to_string(),
    };
    env::set_var("RUST_LOG", log_level);
    env_logger::init();
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    log::info!("Starting quirkd v{}", VERSION);

    let args = cli::Args::parse();

    // Build the quirk catalog. A defective catalog entry is caught here,
    // before any device is touched.
    let registry = Arc::new(QuirkRegistry::new(drivers::quirks()?)?);

    // Setup CTRL+C handler
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        log::info!("Shutting down");
        process::exit(0);
    });

    let mut tasks = Vec::new();

    // Descriptor correction: proxy every matching hidraw node.
    for node in udev::discover_hidraw()? {
        let Some(quirk) = registry.get(&node.id) else {
            continue;
        };
        log::info!(
            "Attaching descriptor fixup for '{}' at {}",
            quirk.name(),
            node.devnode
        );

        let registry = registry.clone();
        tasks.push(tokio::task::spawn_blocking(move || {
            let proxy = match HidrawProxy::new(&node, &registry) {
                Ok(proxy) => proxy,
                Err(e) => {
                    log::error!("Unable to proxy {}: {e}", node.devnode);
                    return;
                }
            };
            if let Err(e) = proxy.run() {
                log::info!("Proxy for {} stopped: {e}", node.devnode);
            }
        }));
    }

    // Key remapping: grab every matching event node that produces a
    // remapped key.
    for node in udev::discover_event_nodes()? {
        let Some(quirk) = registry.get(&node.id) else {
            continue;
        };

        let source = match RemapSource::open(&node.devnode, quirk, args.verbose) {
            Ok(Some(source)) => source,
            Ok(None) => continue,
            Err(e) => {
                log::error!("Unable to open {}: {e}", node.devnode);
                continue;
            }
        };
        log::info!(
            "Attaching key remapping for '{}' at {}",
            quirk.name(),
            node.devnode
        );

        tasks.push(tokio::spawn(async move {
            if let Err(e) = source.run().await {
                log::info!("Remapper for {} stopped: {e}", node.devnode);
            }
        }));
    }

    if tasks.is_empty() {
        log::warn!("No devices matching the quirk catalog were found");
        return Ok(());
    }

    for task in tasks {
        let _ = task.await;
    }

    log::info!("quirkd stopped");

    Ok(())
}
