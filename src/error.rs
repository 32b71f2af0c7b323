use thiserror::Error;

/// Errors raised while loading an appearance from configuration text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse appearance: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color `{0}`, expected RGB, RRGGBB or RRGGBBAA hex")]
    InvalidColor(String),
}
