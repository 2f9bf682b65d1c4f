//! Using the renderer as the `log` crate backend
//!
//! Run with: cargo run --example log_facade

use rust_log_renderer::prelude::*;
use std::io;

fn main() {
    let handler = Handler::new(
        io::stderr(),
        HandlerOptions::default()
            .with_min_level(LogLevel::Debug)
            .with_template("{{.Timestamp}} {{.Level}} {{.FileName}}:{{.Line}} {{.Message}}"),
    );

    if let Err(e) = LogBridge::install(handler) {
        eprintln!("[LOGGER ERROR] Failed to install log backend: {}", e);
        return;
    }

    log::info!(user = "alice", attempts = 3; "Login succeeded");
    log::debug!("Session cache warmed");
    log::trace!("Filtered out by the max level");
}
