//! File configuration for CLI request defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "HTTP_ADAPTER_CONFIG";

/// TOML-style `key = value` defaults applied before CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Default proxy URL.
    pub proxy: Option<String>,
    /// Default connect timeout in seconds.
    pub open_timeout_secs: Option<u64>,
    /// Default read timeout in seconds.
    pub read_timeout_secs: Option<u64>,
    /// Request gzip/deflate content by default.
    pub gzip: Option<bool>,
}

impl FileConfig {
    /// Validates config values against CLI constraints.
    pub fn validate(&self) -> Result<()> {
        validate_timeout_secs("open_timeout_secs", self.open_timeout_secs)?;
        validate_timeout_secs("read_timeout_secs", self.read_timeout_secs)?;
        if let Some(proxy) = &self.proxy
            && !proxy.starts_with("http")
        {
            bail!("Invalid config value for `proxy`: '{proxy}'. Expected an http(s) URL");
        }
        Ok(())
    }
}

fn validate_timeout_secs(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=3600).contains(&value) {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 1..=3600");
    }
    Ok(())
}

/// Resolves the config path.
///
/// Priority:
/// 1. `$HTTP_ADAPTER_CONFIG`
/// 2. `$XDG_CONFIG_HOME/http-adapter/config.toml`
/// 3. `$HOME/.config/http-adapter/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = env_var_non_empty_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("http-adapter")
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("http-adapter")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from the resolved path, if a file exists there.
pub fn load_default_file_config() -> Result<Option<(PathBuf, FileConfig)>> {
    let Some(path) = resolve_default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let config = load_file_config(&path)?;
    Ok(Some((path, config)))
}

/// Reads and parses one config file.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Expected `key = value` on line {}", line_index + 1);
        };
        let value = raw_value.trim();
        match raw_key.trim() {
            "proxy" => {
                let parsed = parse_string_literal(value).with_context(|| {
                    format!("Invalid `proxy` value on line {}", line_index + 1)
                })?;
                cfg.proxy = Some(parsed);
            }
            "open_timeout_secs" => {
                let parsed = parse_integer_u64(value).with_context(|| {
                    format!("Invalid `open_timeout_secs` value on line {}", line_index + 1)
                })?;
                cfg.open_timeout_secs = Some(parsed);
            }
            "read_timeout_secs" => {
                let parsed = parse_integer_u64(value).with_context(|| {
                    format!("Invalid `read_timeout_secs` value on line {}", line_index + 1)
                })?;
                cfg.read_timeout_secs = Some(parsed);
            }
            "gzip" => {
                let parsed = parse_boolean(value).with_context(|| {
                    format!("Invalid `gzip` value on line {}", line_index + 1)
                })?;
                cfg.gzip = Some(parsed);
            }
            unknown => {
                bail!(
                    "Unknown configuration key: '{}' on line {}",
                    unknown,
                    line_index + 1
                );
            }
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_integer_u64(raw_value: &str) -> Result<u64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected integer value");
    }
    let value = token.parse::<i128>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    u64::try_from(value).map_err(|_| anyhow::anyhow!("Integer value out of range for u64"))
}

fn parse_boolean(raw_value: &str) -> Result<bool> {
    match raw_value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("Expected 'true' or 'false'"),
    }
}
