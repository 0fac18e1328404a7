// Prompt collection stored as one JSON blob

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::domain::Prompt;

pub const STORAGE_KEY: &str = "promptvault_prompts";

/// Load the stored prompts.
///
/// `None` means nothing was ever saved. Unreadable or malformed data is logged and
/// treated as an empty collection.
pub async fn load_prompts(pool: &SqlitePool) -> Option<Vec<Prompt>> {
    let raw = match super::load_blob(pool, STORAGE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read stored prompts: {:#}", e);
            return Some(Vec::new());
        }
    };

    match serde_json::from_str(&raw) {
        Ok(prompts) => Some(prompts),
        Err(e) => {
            tracing::warn!("Stored prompts are malformed, starting empty: {}", e);
            Some(Vec::new())
        }
    }
}

pub async fn save_prompts(pool: &SqlitePool, prompts: &[Prompt]) -> Result<()> {
    let json = serde_json::to_string(prompts).context("Failed to serialize prompts")?;
    super::save_blob(pool, STORAGE_KEY, &json).await
}
