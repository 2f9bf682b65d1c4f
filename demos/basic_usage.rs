//! Basic renderer usage
//!
//! Demonstrates templates, level gating, color and derived handlers on stdout.
//!
//! Run with: cargo run --example basic_usage

use rust_log_renderer::prelude::*;
use rust_log_renderer::{attrs, debug, info, warn};
use std::io;

fn main() -> Result<()> {
    println!("=== Rust Log Renderer - Basic Usage Example ===\n");

    let handler = Handler::new(
        io::stdout(),
        HandlerOptions::default()
            .with_min_level(LogLevel::Info)
            .with_color(true),
    );

    println!("1. Default template:");
    info!(handler, "Application started", "version" => "0.1.0")?;
    debug!(handler, "Hidden below the minimum level")?;
    warn!(handler, "Cache nearly full", "used" => 97, "unit" => "%")?;

    println!("\n2. Call-site template:");
    let located = Handler::new(
        io::stdout(),
        HandlerOptions::default()
            .with_template("{{.Level}} {{.FileName}}:{{.Line}} {{.Function}} {{.Message}}"),
    );
    info!(located, "Where am I?")?;

    println!("\n3. Derived handlers:");
    let request = handler
        .with_attrs(attrs!["request_id" => "abc-123"])
        .with_group("http");
    info!(request, "Request received", "path" => "/health")?;
    info!(request, "Request completed", "status" => 200)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
