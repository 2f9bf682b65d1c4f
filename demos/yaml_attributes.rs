//! YAML and multi-line attribute output
//!
//! Run with: cargo run --example yaml_attributes

use rust_log_renderer::prelude::*;
use rust_log_renderer::{attrs, error, info};
use std::io;

fn main() -> Result<()> {
    println!("=== Rust Log Renderer - Attribute Formatters ===\n");

    let config = HandlerConfig::from_json(
        r#"{ "template": "{{.Timestamp}} [{{.Level}}] {{.Message}}", "attr_format": "yaml" }"#,
    )?;
    let yaml = Handler::new(io::stdout(), config.into_options());

    println!("1. YAML block:");
    error!(
        yaml.with_group("job"),
        "Import failed",
        "file" => "orders.csv",
        "cause" => attrs!["row" => 1042, "column" => "amount"]
    )?;

    println!("\n2. One attribute per line:");
    let multi = Handler::new(
        io::stdout(),
        HandlerOptions::default().with_attr_format(AttrFormat::MultiLine),
    );
    info!(multi, "Worker stats", "queued" => 12, "running" => 4, "failed" => 0)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
