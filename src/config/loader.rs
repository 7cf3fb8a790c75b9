use std::path::Path;

use anyhow::{anyhow, Result};

use crate::config::settings::SettingsConfig;

/// Load the optional YAML settings file. No path means all defaults.
pub async fn load_settings(config_path: Option<&str>) -> Result<SettingsConfig> {
    let Some(config_path) = config_path else {
        return Ok(SettingsConfig::default());
    };

    let path = Path::new(config_path);
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow!("reading config '{}': {}", path.display(), e))?;
    serde_yaml::from_str(&raw).map_err(|e| anyhow!("Invalid config format: {}", e))
}
