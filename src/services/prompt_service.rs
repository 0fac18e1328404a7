// Prompt service - business logic for the prompt vault

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::{
    db,
    domain::{Prompt, PromptDraft},
    error::{AppError, DbResultExt},
    services::serializers::{PromptSerializer, YamlSerializer},
    validation,
};

/// Prompts shipped with the binary, used when nothing has been stored yet
pub const DEFAULT_SEED: &str = include_str!("../../prompts.yml");

pub struct PromptService {
    pool: SqlitePool,
    prompts: RwLock<Vec<Prompt>>,
}

impl PromptService {
    /// Load stored prompts, seeding the store from `seed_yaml` if it was never written
    pub async fn open(pool: SqlitePool, seed_yaml: &str) -> Result<Self> {
        let prompts = match db::prompts::load_prompts(&pool).await {
            Some(prompts) => {
                tracing::info!(count = prompts.len(), "loaded stored prompts");
                prompts
            }
            None => {
                let seeded = YamlSerializer
                    .deserialize(seed_yaml)
                    .context("Failed to parse prompt seed")?;
                db::prompts::save_prompts(&pool, &seeded).await?;
                tracing::info!(count = seeded.len(), "seeded default prompts");
                seeded
            }
        };

        Ok(Self {
            pool,
            prompts: RwLock::new(prompts),
        })
    }

    pub async fn list(&self) -> Vec<Prompt> {
        self.prompts.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Prompt, AppError> {
        self.prompts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown prompt: '{}'", id)))
    }

    /// Validate, assign an id, append and persist
    pub async fn create(&self, draft: PromptDraft) -> Result<Prompt, AppError> {
        validation::validate_prompt_draft(&draft)?;

        let prompt = draft.into_prompt(uuid::Uuid::new_v4().to_string());

        let mut prompts = self.prompts.write().await;
        prompts.push(prompt.clone());
        if let Err(e) = db::prompts::save_prompts(&self.pool, &prompts).await {
            prompts.pop();
            return Err(e).db_err();
        }

        tracing::info!(id = %prompt.id, title = %prompt.title, "created prompt");
        Ok(prompt)
    }

    pub async fn delete(&self, id: &str) -> Result<Prompt, AppError> {
        let mut prompts = self.prompts.write().await;
        let index = prompts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown prompt: '{}'", id)))?;

        let removed = prompts.remove(index);
        if let Err(e) = db::prompts::save_prompts(&self.pool, &prompts).await {
            prompts.insert(index, removed);
            return Err(e).db_err();
        }

        tracing::info!(id, "deleted prompt");
        Ok(removed)
    }

    /// Export all prompts in the serializer's format
    pub async fn export(&self, serializer: &dyn PromptSerializer) -> Result<String> {
        let prompts = self.prompts.read().await;
        serializer.serialize(&prompts)
    }
}
