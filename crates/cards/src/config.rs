use anyhow::{anyhow, Result};
use cards_core::widget::{DEFAULT_LIMIT, DEFAULT_ORGANIZATION, DEFAULT_REPO};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_backend::GITHUB_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration for the cards binary.
///
/// Every key has a built-in default, so running with no config at all works
/// (and fetches the built-in organization/repo, exactly like the widget's
/// first mount).
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// API base URL (swapped out for a local listener in tests)
    pub api_url: String,
    /// Default organization for `show` and `open`
    pub organization: String,
    /// Default repository for `show` and `open`
    pub repo: String,
    /// Contributors requested per fetch (single page)
    pub limit: usize,
    /// Locale code for card labels
    pub locale: String,
    /// Theme preset name
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: GITHUB_API_URL.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            repo: DEFAULT_REPO.to_string(),
            limit: DEFAULT_LIMIT,
            locale: "en".to_string(),
            theme: "default".to_string(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("CARDS_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    /// CLI flags win over files and environment
    pub fn merge_with_cli(&mut self, cli_api_url: Option<String>, cli_locale: Option<String>) {
        if let Some(api_url) = cli_api_url {
            self.api_url = api_url;
        }
        if let Some(locale) = cli_locale {
            self.locale = locale;
        }
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cards").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("cards").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("cards")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("config.toml"))
}
