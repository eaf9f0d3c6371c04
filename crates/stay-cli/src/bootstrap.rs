use anyhow::Context;
use stay_config::StayConfig;

use crate::cli::GlobalFlags;

const BASE_URL_KEY: &str = "STAY_API__BASE_URL";

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<StayConfig> {
    load_dotenv()?;

    StayConfig::load_with_cli_overrides(&cli_overrides(flags))
        .context("failed to load stay configuration")
}

fn cli_overrides(flags: &GlobalFlags) -> Vec<(String, String)> {
    flags
        .api_url
        .iter()
        .map(|url| (BASE_URL_KEY.to_string(), url.clone()))
        .collect()
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
