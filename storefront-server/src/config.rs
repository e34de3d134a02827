//! Configuration loading.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file, then
//! CLI flags and their environment variables.

use std::path::Path;
use storefront_types::models::{AppConfig, DeploymentEnv};
use storefront_types::ConfigError;
use url::Url;

use crate::cli::Cli;

/// Read the config file, or defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let display = path.display().to_string();
    if !path.exists() {
        return Err(ConfigError::NotFound { path: display });
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::from_io_error(&display, &e))?;
    serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))
}

/// Overlay CLI/env values. `node_env` is the legacy environment flag, used
/// only when no explicit environment was given.
pub fn apply_cli(config: &mut AppConfig, cli: &Cli, node_env: Option<String>) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = &cli.static_dir {
        config.server.static_dir = Some(dir.clone());
    }
    if let Some(wordlist) = &cli.wordlist {
        config.server.wordlist = Some(wordlist.clone());
    }
    if let Some(url) = &cli.upstream_url {
        config.proxy.upstream.base_url = url.trim().to_string();
    }
    if let Some(path) = &cli.upstream_path {
        config.proxy.upstream.path = path.trim().to_string();
    }
    if let Some(flag) = cli.environment.clone().or(node_env) {
        config.proxy.environment = DeploymentEnv::from_flag(&flag);
    }
}

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let upstream = &config.proxy.upstream;
    let url = Url::parse(&upstream.base_url).map_err(|e| ConfigError::ValidationError {
        field: "proxy.upstream.base_url".to_string(),
        message: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            field: "proxy.upstream.base_url".to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if upstream.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "proxy.upstream.path".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if config.proxy.api_key_vars.iter().any(|v| v.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: "proxy.api_key_vars".to_string(),
            message: "variable names must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Full resolution: file, overrides, validation.
pub fn resolve(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_cli(&mut config, cli, std::env::var("NODE_ENV").ok());
    validate(&config)?;
    Ok(config)
}
