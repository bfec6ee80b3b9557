use serde::{Deserialize, Serialize};
use std::any::type_name;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

fn config_name<TConfig>() -> &'static str {
    let full = type_name::<TConfig>();
    full.rsplit("::").next().unwrap_or(full)
}

/// YAML through `serde_yaml_ng`. Errors name the config type so a bad
/// console config file points at `ConsoleConfig`.
#[derive(Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config {}: {}", config_name::<TConfig>(), e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err(format!(
                "Failed to deserialize config {}: file is empty",
                config_name::<TConfig>()
            ));
        }
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config {}: {}", config_name::<TConfig>(), e))
    }
}
