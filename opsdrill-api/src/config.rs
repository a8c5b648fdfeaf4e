//! Server configuration stored in an optional TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// API server configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable.
/// A missing file or missing fields fall back to development defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Path prefix the JSON API routes are nested under.
    pub api_prefix: String,

    /// Origins the CORS layer allows.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api".to_string(),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.api_prefix.starts_with('/') || self.api_prefix.len() < 2 {
            return Err(anyhow!("api_prefix must start with '/' and name a path"));
        }
        if self
            .allowed_origins
            .iter()
            .any(|origin| origin.trim().is_empty())
        {
            return Err(anyhow!("allowed_origins must not contain empty entries"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ServerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        let cfg = ServerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ServerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ServerConfig::default());
    }

    #[test]
    fn load_reads_overrides() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("opsdrill.toml");
        fs::write(
            &path,
            "api_prefix = \"/v1\"\nallowed_origins = [\"https://drills.example\"]\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.api_prefix, "/v1");
        assert_eq!(cfg.allowed_origins, vec!["https://drills.example".to_string()]);
    }

    #[test]
    fn validate_rejects_bad_prefix() {
        let cfg = ServerConfig {
            api_prefix: "api".to_string(),
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            api_prefix: "/".to_string(),
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_origin() {
        let cfg = ServerConfig {
            allowed_origins: vec![String::new()],
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
