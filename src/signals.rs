//! Ctrl+C handling
//!
//! The handler only flips a flag; the query loop polls it between requests
//! so the current request finishes and output stays line-complete.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static SECOND_INTERRUPT: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

#[inline]
pub fn set_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

#[inline]
pub fn reset_interrupted() {
    INTERRUPTED.store(false, Ordering::SeqCst);
    SECOND_INTERRUPT.store(false, Ordering::SeqCst);
}

/// Install the Ctrl+C handler.
///
/// The first interrupt stops the batch after the in-flight query; a second
/// one exits immediately with status 130.
pub fn install_handler() {
    let installed = ctrlc::set_handler(|| {
        set_interrupted();
        eprintln!("\nInterrupted");

        if SECOND_INTERRUPT.swap(true, Ordering::SeqCst) {
            std::process::exit(crate::status::ExitStatus::Interrupted as i32);
        }
    });

    // Runs before logging is set up
    if let Err(e) = installed {
        eprintln!("Warning: Ctrl+C handler not installed: {}", e);
    }
}
