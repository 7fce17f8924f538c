//! Common utilities shared across CLI commands.

use super::EntityArgs;
use crate::log;
use crate::page::EntityData;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read a JSON argument: `@path` reads a file, anything else is inline JSON.
pub fn read_json_arg(arg: &str) -> Result<Value> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path))
        }
        None => serde_json::from_str(arg).context("Invalid inline JSON"),
    }
}

/// Entity data from `--entity`, if given.
pub fn load_entity(args: &EntityArgs) -> Result<Option<EntityData>> {
    let Some(arg) = args.entity.as_deref() else {
        return Ok(None);
    };
    let value = read_json_arg(arg).context("Failed to load entity data")?;
    let entity = EntityData::from_value(value).context("Failed to load entity data")?;
    Ok(Some(entity))
}

/// Print `content` to stdout, or write it to `output`.
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("write"; "{}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
