//! Persona configuration loader.
//!
//! Reads a TOML file delivered by the host's configuration surface and
//! deserializes it into [`PersonaConfig`]. Unlike optional tuning values
//! (which fall back to documented defaults via serde), a missing or
//! unparseable file is a startup error: there is no meaningful default
//! persona to fall back to.
//!
//! Required identity fields are validated at turn start, not at load time,
//! so a half-filled configuration still loads and the user is told what is
//! missing in-world when they first mention the persona.

use std::path::{Path, PathBuf};

use worldmate_types::persona::PersonaConfig;

/// Errors from loading the persona configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the persona configuration from a TOML file.
pub async fn load_persona_config(path: &Path) -> Result<PersonaConfig, ConfigLoadError> {
    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

    let config = toml::from_str::<PersonaConfig>(&content).map_err(|source| {
        ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(persona = %config.name, "persona configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FULL_CONFIG: &str = r#"
name = "Luna"
age = "25"
gender = "female"
personality = "warm, curious"
interests = "music, astronomy"
api_key = "sk-test-not-real"

[generation]
max_tokens = 250
temperature = 0.7
"#;

    async fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("persona.toml");
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn load_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, FULL_CONFIG).await;

        let config = load_persona_config(&path).await.unwrap();
        assert_eq!(config.name, "Luna");
        assert_eq!(config.interests, "music, astronomy");
        assert_eq!(config.generation.max_tokens, 250);
        assert!((config.generation.temperature - 0.7).abs() < f64::EPSILON);
        // Unspecified tuning values keep their documented defaults.
        assert_eq!(config.generation.presence_penalty, 0.0);
        assert_eq!(config.generation.frequency_penalty, 0.0);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn omitted_generation_table_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
name = "Luna"
age = "25"
gender = "female"
personality = "warm"
interests = "music"
api_key = "sk-test-not-real"
"#,
        )
        .await;

        let config = load_persona_config(&path).await.unwrap();
        assert_eq!(config.generation.max_tokens, 100);
        assert!((config.generation.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.generation.presence_penalty, 0.0);
        assert_eq!(config.generation.frequency_penalty, 0.0);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");

        let err = load_persona_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigLoadError::Read { .. }));
    }

    #[tokio::test]
    async fn invalid_toml_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "this is not { valid toml !!!").await;

        let err = load_persona_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn missing_identity_key_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        // No `name` key at all -- deserialization fails (an empty value, by
        // contrast, loads fine and is caught by turn-start validation).
        let path = write_config(
            &tmp,
            r#"
age = "25"
gender = "female"
personality = "warm"
interests = "music"
api_key = "sk-test-not-real"
"#,
        )
        .await;

        let err = load_persona_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn empty_identity_value_loads_but_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
name = "Luna"
age = ""
gender = "female"
personality = "warm"
interests = "music"
api_key = "sk-test-not-real"
"#,
        )
        .await;

        let config = load_persona_config(&path).await.unwrap();
        assert!(config.validate().is_err());
    }
}
