//! Version command implementation.

use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let info = VersionInfo {
        name: "sb",
        version: env!("CARGO_PKG_VERSION"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{} {}", info.name, info.version);
    }
    Ok(())
}
