//! Error types for Helm

use thiserror::Error;

/// The main error type for Helm operations
#[derive(Debug, Error)]
pub enum HelmError {
    #[error("Missing subsystem: {0}")]
    MissingSubsystem(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Presentation error: {0}")]
    Presentation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Image error: {0}")]
    Image(String),
}

/// Result type alias for Helm operations
pub type Result<T> = std::result::Result<T, HelmError>;

impl From<toml::de::Error> for HelmError {
    fn from(err: toml::de::Error) -> Self {
        HelmError::TomlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = HelmError::MissingSubsystem("presenter");
        assert_eq!(err.to_string(), "Missing subsystem: presenter");

        let err = HelmError::InvalidConfig("target_fps must be positive".into());
        assert!(err.to_string().contains("target_fps"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("x = ");
        let err: HelmError = parsed.unwrap_err().into();
        assert!(matches!(err, HelmError::TomlParse(_)));
    }
}
