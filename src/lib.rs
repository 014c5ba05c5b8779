#![doc(test(attr(deny(warnings))))]

//! Menu Core offers catalog, selection-ledger, and pricing primitives that
//! power a restaurant ordering session and its CLI.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod pricing;
pub mod selection;
pub mod stats;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Menu Core tracing initialized.");
    });
}
