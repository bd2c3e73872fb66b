use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_resource")]
    pub resource: String,
    #[serde(default = "default_answer_prefix")]
    pub answer_prefix: String,
}

fn default_resource() -> String {
    "input".to_string()
}

fn default_answer_prefix() -> String {
    "A-ha! The answer to your little game is:".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource: default_resource(),
            answer_prefix: default_answer_prefix(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load() -> Result<Config, ConfigError> {
    parse_raw(DEFAULT_CONFIG)
}

pub fn parse_raw(raw: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(raw)?;
    Ok(cfg)
}
