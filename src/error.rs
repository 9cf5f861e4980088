use thiserror::Error;

/// Raised by [`crate::Encryptor::try_encrypt`] before a strategy is chosen.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionError {
    #[error("Encryption strategy not set.")]
    StrategyNotSet,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse demo scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Node at '{path}' has an empty name")]
    EmptyName { path: String },

    #[error("Demo scenario lists no roles")]
    NoRoles,
}

/// Everything a demo binary can fail with.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_not_set_message_is_the_notice() {
        assert_eq!(
            EncryptionError::StrategyNotSet.to_string(),
            "Encryption strategy not set."
        );
    }

    #[test]
    fn test_config_error_converts_into_demo_error() {
        let err: DemoError = ConfigError::NoRoles.into();
        assert!(matches!(err, DemoError::Config(ConfigError::NoRoles)));
        assert_eq!(err.to_string(), "Demo scenario lists no roles");
    }

    #[test]
    fn test_empty_name_mentions_path() {
        let err = ConfigError::EmptyName {
            path: "Root/Documents".to_string(),
        };
        assert!(err.to_string().contains("Root/Documents"));
    }
}
