//! Prints the JSON schema of `config.toml`, or writes it to the path given as
//! the first argument.

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let schema = doodlepad::Config::json_schema();
    let json = serde_json::to_string_pretty(&schema)?;

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
