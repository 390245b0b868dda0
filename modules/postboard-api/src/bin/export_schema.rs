//! Export the GraphQL schema as SDL.
//!
//! Usage: cargo run --bin export-schema [output_path]

use std::sync::Arc;

use anyhow::{Context, Result};

use postboard_api::graphql::build_schema;
use postboard_common::Config;
use postboard_store::Store;

fn main() -> Result<()> {
    let schema = build_schema(Arc::new(Store::new()), &Config::default());
    let sdl = schema.sdl();

    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "schema.graphql".to_string());

    std::fs::write(&out_path, &sdl).with_context(|| format!("Failed to write {out_path}"))?;
    eprintln!("Schema exported to {out_path} ({} bytes)", sdl.len());
    Ok(())
}
