//! Loaded configuration root

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::iter::Iter;
use crate::path;
use crate::value::{ConfigValue, kind_name};

/// A loaded configuration tree.
///
/// The root is always a map. Values are reached with dotted keys through
/// [`Config::get`].
///
/// ```
/// use conf_tree::Config;
///
/// let config = Config::from_json(r#"{"db": {"user": "admin", "port": 5432}}"#).unwrap();
/// assert_eq!(config.get("db.user").string(), "admin");
/// assert_eq!(config.get("db.port").must_int().unwrap(), 5432);
/// assert_eq!(config.get("db.timeout").def_int(30), 30);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    data: Map<String, Value>,
}

impl Config {
    /// Wrap an already prepared map
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Parse JSON text
    pub fn from_json(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_str(source).map_err(|e| Error::parse("JSON", e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse JSON bytes
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        if data.trim_ascii().is_empty() {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_slice(data).map_err(|e| Error::parse("JSON", e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse YAML text
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: YamlValue =
            serde_yaml::from_str(source).map_err(|e| Error::parse("YAML", e.to_string()))?;
        Self::from_value(yaml_to_json(value)?)
    }

    /// Parse YAML bytes
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self> {
        if data.trim_ascii().is_empty() {
            return Ok(Self::default());
        }
        let value: YamlValue =
            serde_yaml::from_slice(data).map_err(|e| Error::parse("YAML", e.to_string()))?;
        Self::from_value(yaml_to_json(value)?)
    }

    /// Read all of `reader` and parse it as `format`
    pub fn from_reader<R: Read>(mut reader: R, format: Format) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::parse_as(&data, format)
    }

    /// Load a file, detecting its format from the extension.
    ///
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        let format = Format::from_extension(extension)
            .ok_or_else(|| Error::UnsupportedFormat(extension.to_string()))?;

        Self::from_file_as(path, format)
    }

    /// Load a file with an explicit format, ignoring its extension
    pub fn from_file_as(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, %format, "Loading config file");

        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, format).map_err(|e| match e {
            Error::Read(source) => Error::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse raw bytes in the given format
    pub fn parse_as(data: &[u8], format: Format) -> Result<Self> {
        match format {
            Format::Json => Self::from_json_slice(data),
            Format::Yaml => Self::from_yaml_slice(data),
        }
    }

    /// Get the value at `key`.
    ///
    /// A top-level entry named exactly `key` is preferred; otherwise the key
    /// is split on dots and resolved section by section. Missing keys
    /// produce an unset value rather than an error.
    pub fn get(&self, key: &str) -> ConfigValue<'_> {
        ConfigValue::new(path::resolve(&self.data, key))
    }

    /// Iterate over the top-level entries
    pub fn iterate(&self) -> Iter<'_> {
        Iter::over_map(&self.data)
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Underlying top-level map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Self::new(data)),
            Value::Null => Ok(Self::default()),
            other => Err(Error::NotAMap {
                found: kind_name(&other),
            }),
        }
    }
}

impl From<Map<String, Value>> for Config {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}

/// Convert a YAML tree into the JSON tree used for lookups.
///
/// Scalar mapping keys are stringified; sequence and mapping keys cannot be
/// addressed by a dotted path and are rejected, as are keys that collide
/// once stringified (`1` and `"1"`).
fn yaml_to_json(value: YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = yaml_key(key)?;
                if map.contains_key(&key) {
                    return Err(Error::parse(
                        "YAML",
                        format!("duplicate key '{key}' after key normalisation"),
                    ));
                }
                map.insert(key, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_key(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => yaml_key(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(Error::parse(
            "YAML",
            "mapping keys must be scalars to be addressable",
        )),
    }
}
