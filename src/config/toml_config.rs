use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATALOG_PATH: &str = "./src/configbot.json";
pub const DEFAULT_PREFIX: &str = "!";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub owners: OwnersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnersConfig {
    #[serde(default)]
    pub ids: Vec<String>,
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

fn default_prefixes() -> Vec<String> {
    vec![DEFAULT_PREFIX.to_string()]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
        }
    }
}

impl BotConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("catalog.path", &self.catalog.path)?;
        validate_non_empty_list("commands.prefixes", &self.commands.prefixes)?;
        Ok(())
    }
}

impl ConfigProvider for BotConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog.path
    }

    fn command_prefixes(&self) -> &[String] {
        &self.commands.prefixes
    }

    fn owner_ids(&self) -> &[String] {
        &self.owners.ids
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
