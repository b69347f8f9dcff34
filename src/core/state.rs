//! Process-wide interrupt handling.
//!
//! The first Ctrl+C only raises the shutdown flag: the batch finishes the
//! image in progress, stops, and `main` exits with status 1. A second
//! Ctrl+C exits immediately.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Exit status used when the user interrupts an import twice.
const FORCED_EXIT_CODE: i32 = 1;

/// Install the global Ctrl+C handler.
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        if SHUTDOWN.swap(true, Ordering::SeqCst) {
            std::process::exit(FORCED_EXIT_CODE);
        }
        println!();
        crate::log!("import"; "stopping after the current image...");
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Check if shutdown has been requested
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
