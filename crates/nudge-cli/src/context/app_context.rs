use std::path::Path;

use anyhow::Context;
use nudge_config::NudgeConfig;
use nudge_db::service::{LibsqlPromptQueue, open_prompt_queue};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub queue: LibsqlPromptQueue,
    pub config: NudgeConfig,
}

impl AppContext {
    /// Open the configured database and build the prompt queue over it.
    pub async fn init(config: NudgeConfig) -> anyhow::Result<Self> {
        if !config.database.is_in_memory() {
            if let Some(parent) = Path::new(&config.database.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        let queue = open_prompt_queue(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self { queue, config })
    }
}
