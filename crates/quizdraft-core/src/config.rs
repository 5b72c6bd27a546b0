//! Draft configuration and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::model::{UserRef, DEFAULT_OPTION_COUNT};

/// Limits and defaults governing how drafts are edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Options seeded into every new choice item.
    #[serde(default = "default_option_count")]
    pub default_option_count: usize,
    /// Fewest options a choice item may be trimmed to.
    #[serde(default = "default_min_options")]
    pub min_options: usize,
    /// Most options a choice item may hold.
    #[serde(default = "default_max_options")]
    pub max_options: usize,
    /// Make the store itself refuse option adds/removes past the limits.
    /// Off by default: the limits only drive the UI button flags.
    #[serde(default)]
    pub enforce_option_limits: bool,
    /// Owner used when no other current-user provider is available.
    #[serde(default)]
    pub owner: Option<UserRef>,
}

fn default_option_count() -> usize {
    DEFAULT_OPTION_COUNT
}
fn default_min_options() -> usize {
    2
}
fn default_max_options() -> usize {
    5
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            default_option_count: default_option_count(),
            min_options: default_min_options(),
            max_options: default_max_options(),
            enforce_option_limits: false,
            owner: None,
        }
    }
}

impl DraftConfig {
    /// Check the limits are consistent with each other.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.min_options == 0 {
            return Err(DraftError::InvalidConfig(
                "min_options must be at least 1".into(),
            ));
        }
        if self.min_options > self.max_options {
            return Err(DraftError::InvalidConfig(format!(
                "min_options ({}) exceeds max_options ({})",
                self.min_options, self.max_options
            )));
        }
        if !(self.min_options..=self.max_options).contains(&self.default_option_count) {
            return Err(DraftError::InvalidConfig(format!(
                "default_option_count ({}) must lie within {}..={}",
                self.default_option_count, self.min_options, self.max_options
            )));
        }
        Ok(())
    }

    /// The configured owner, or an anonymous placeholder.
    pub fn owner_or_anonymous(&self) -> UserRef {
        self.owner
            .clone()
            .unwrap_or_else(|| UserRef::new("anonymous", "Anonymous"))
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizdraft.toml` in the current directory
/// 2. `~/.config/quizdraft/config.toml`
///
/// Environment variable overrides: `QUIZDRAFT_OWNER_ID`, `QUIZDRAFT_OWNER_NAME`.
pub fn load_config() -> Result<DraftConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<DraftConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdraft.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<DraftConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => DraftConfig::default(),
    };

    apply_env_overrides(&mut config);
    config.validate()?;

    Ok(config)
}

fn apply_env_overrides(config: &mut DraftConfig) {
    let id = std::env::var("QUIZDRAFT_OWNER_ID").ok();
    let name = std::env::var("QUIZDRAFT_OWNER_NAME").ok();
    if id.is_none() && name.is_none() {
        return;
    }

    let owner = config.owner.get_or_insert_with(|| UserRef::new("", ""));
    if let Some(id) = id {
        owner.id = id;
    }
    if let Some(name) = name {
        owner.name = name;
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdraft"))
}
