//! Schema command implementation.

use pagepack_config::ProjectConfig;

use crate::error::Result;

/// Print the JSON schema of `pagepack.toml` to stdout.
///
/// # Errors
///
/// Returns serialization errors.
pub async fn execute() -> Result<()> {
    let schema = ProjectConfig::json_schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
