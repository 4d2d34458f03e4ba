//! Command implementations
//!
//! Each command returns the text to print so it can be tested without
//! spawning the binary.

use std::path::Path;
use std::str::FromStr;

use conf_tree::{Config, ConfigValue, Format};

use crate::cli::ValueType;
use crate::error::{CliError, Result};

/// Load a config file, honouring an explicit format when given
pub fn load(file: &Path, format: Option<Format>) -> Result<Config> {
    let config = match format {
        Some(format) => Config::from_file_as(file, format)?,
        None => Config::from_file(file)?,
    };
    tracing::debug!(?file, entries = config.len(), "Loaded config");
    Ok(config)
}

/// Render the value under `key`
pub fn run_get(
    config: &Config,
    key: &str,
    value_type: ValueType,
    default: Option<&str>,
) -> Result<String> {
    let value = config.get(key);
    tracing::debug!(key, kind = value.kind(), ?value_type, "Resolved key");

    let rendered = match (value_type, default) {
        (ValueType::Any, None) => render(&value, key)?,
        (ValueType::Any, Some(default)) if !value.is_set() => default.to_string(),
        (ValueType::Any, Some(_)) => render(&value, key)?,

        (ValueType::Int, None) => value
            .must_int()
            .map_err(|e| CliError::value(key, e))?
            .to_string(),
        (ValueType::Int, Some(d)) => value.def_int(parse_default(d, "int")?).to_string(),

        (ValueType::Float, None) => value
            .must_float()
            .map_err(|e| CliError::value(key, e))?
            .to_string(),
        (ValueType::Float, Some(d)) => value.def_float(parse_default(d, "float")?).to_string(),

        (ValueType::String, None) => value.must_string().map_err(|e| CliError::value(key, e))?,
        (ValueType::String, Some(d)) => value.def_string(d),

        (ValueType::Bool, None) => value
            .must_bool()
            .map_err(|e| CliError::value(key, e))?
            .to_string(),
        (ValueType::Bool, Some(d)) => value.def_bool(parse_default(d, "bool")?).to_string(),
    };

    Ok(rendered)
}

/// One line per entry of the list or map under `key`, or of the root
pub fn run_list(config: &Config, key: Option<&str>) -> Result<Vec<String>> {
    let iter = match key {
        Some(key) => {
            let value = require(config, key)?;
            value.iterate()
        }
        None => config.iterate(),
    };

    Ok(iter
        .map(|entry| match entry.key() {
            Some(name) => format!("{name}: {}", entry.value()),
            None => format!("{}: {}", entry.index(), entry.value()),
        })
        .collect())
}

/// Number of elements in the list under `key`
pub fn run_count(config: &Config, key: &str) -> Result<usize> {
    Ok(require(config, key)?.count())
}

fn require<'a>(config: &'a Config, key: &str) -> Result<ConfigValue<'a>> {
    let value = config.get(key);
    if !value.is_set() {
        return Err(CliError::value(key, conf_tree::Error::NotSet));
    }
    Ok(value)
}

fn render(value: &ConfigValue<'_>, key: &str) -> Result<String> {
    match value.raw() {
        None => Err(CliError::value(key, conf_tree::Error::NotSet)),
        Some(raw) if value.is_map() || value.is_slice() => Ok(serde_json::to_string_pretty(raw)?),
        Some(_) => Ok(value.to_string()),
    }
}

fn parse_default<T: FromStr>(default: &str, type_name: &str) -> Result<T> {
    default
        .parse()
        .map_err(|_| CliError::user(format!("Invalid default '{default}' for type {type_name}")))
}
