use nudge_config::NudgeConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<NudgeConfig> {
    let mut config = NudgeConfig::load_with_dotenv()?;

    if let Some(path) = &flags.database {
        tracing::debug!(%path, "database path overridden by --database");
        config.database.path.clone_from(path);
    }

    config.validate()?;
    Ok(config)
}
