use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::DashfwError;

/// Environment variable that overrides `api_key` from the config file, so
/// credentials can stay out of files checked into version control.
pub const API_KEY_ENV: &str = "DASHFW_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Dashboard API key; the `DASHFW_API_KEY` environment variable wins.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Organization whose catalog and networks this run targets.
    pub org_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// When non-empty, only appliance networks with these names are targeted.
    #[serde(default)]
    pub network_names: Vec<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ConfigFile {
    /// Load configuration file
    pub fn load(path: &Path) -> Result<Self, DashfwError> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| DashfwError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Resolve the API key from the environment or the config file.
    pub fn resolved_api_key(&self) -> Result<String, DashfwError> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone())
            .ok_or(DashfwError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_full_config() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            r#"
api_key = "secret"
org_id = "123456"
base_url = "https://api.example.com/api/v1"
network_names = ["HQ", "Branch-1"]
"#
        )
        .unwrap();

        let config = ConfigFile::load(tmp.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.org_id, "123456");
        assert_eq!(config.base_url, "https://api.example.com/api/v1");
        assert_eq!(config.network_names, vec!["HQ", "Branch-1"]);
    }

    #[test]
    fn base_url_and_filter_default() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "org_id = \"123456\"").unwrap();

        let config = ConfigFile::load(tmp.path()).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.network_names.is_empty());
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn missing_org_id_is_a_parse_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "api_key = \"secret\"").unwrap();

        let err = ConfigFile::load(tmp.path()).unwrap_err();
        assert!(matches!(err, DashfwError::ConfigParse { .. }));
    }

    #[test]
    fn missing_api_key_everywhere_is_an_error() {
        let config = ConfigFile {
            api_key: None,
            org_id: "123456".to_string(),
            base_url: default_base_url(),
            network_names: vec![],
        };
        // Only meaningful when the override variable is not set in the
        // test environment.
        if std::env::var(API_KEY_ENV).is_err() {
            assert!(matches!(
                config.resolved_api_key(),
                Err(DashfwError::MissingApiKey)
            ));
        }
    }

    #[test]
    fn file_key_is_used_without_env_override() {
        let config = ConfigFile {
            api_key: Some("from-file".to_string()),
            org_id: "123456".to_string(),
            base_url: default_base_url(),
            network_names: vec![],
        };
        if std::env::var(API_KEY_ENV).is_err() {
            assert_eq!(config.resolved_api_key().unwrap(), "from-file");
        }
    }
}
