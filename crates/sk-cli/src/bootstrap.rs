use std::path::Path;

use anyhow::Context;
use sk_config::SkConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, and apply `--database`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SkConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;

    let config = SkConfig::load().context("failed to load shopkeep configuration")?;
    apply_overrides(config, flags)
}

fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_overrides(config: SkConfig, flags: &GlobalFlags) -> anyhow::Result<SkConfig> {
    let Some(path) = &flags.database else {
        return Ok(config);
    };
    let config = config.with_database_path(path.as_str());
    config
        .validate()
        .context("invalid --database value")?;
    Ok(config)
}
