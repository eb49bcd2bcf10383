//! Loading seed records from disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use super::model::{SeedEntry, default_seed};
use crate::error::Result;

/// Environment variable that overrides the seed file location.
pub const SEED_PATH_ENV: &str = "RECIPIENT_PICKER_SEED";

/// Returns where the seed file is expected.
///
/// Uses `$RECIPIENT_PICKER_SEED` when set, otherwise
/// `<config dir>/recipient-picker/recipients.json`.
#[must_use]
pub fn seed_path() -> PathBuf {
    resolve_seed_path(std::env::var_os(SEED_PATH_ENV))
}

fn resolve_seed_path(override_path: Option<OsString>) -> PathBuf {
    override_path.filter(|p| !p.is_empty()).map_or_else(
        || {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("recipient-picker")
                .join("recipients.json")
        },
        PathBuf::from,
    )
}

/// Parses a JSON array of seed records.
///
/// # Errors
///
/// Returns [`crate::Error::Serde`] if the input is not a valid seed array.
pub fn parse_seed(json: &str) -> Result<Vec<SeedEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads seed records from `path`, falling back to [`default_seed`] if the
/// file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn load_seed(path: impl AsRef<Path>) -> Result<Vec<SeedEntry>> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        info!("No seed file at {:?}, using built-in recipients", path);
        return Ok(default_seed());
    }

    let contents = tokio::fs::read_to_string(path).await?;
    let seed = parse_seed(&contents)?;

    info!("Loaded {} seed recipients from {:?}", seed.len(), path);
    Ok(seed)
}
