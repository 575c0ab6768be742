//! Shared YAML/JSON loading for route datasets.
//!
//! Files are parsed into a `serde_json::Value` first, whichever format they
//! are in, and then handed to [`crate::validation::decode_records`]. That
//! keeps a single structural decode path for the embedded seed, replacement
//! payloads, and files named on the command line.

use std::path::Path;

use serde_json::Value;

use crate::error::{PackError, PackResult};

/// Dataset formats accepted for route files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// JSON array of route records.
    Json,
    /// YAML sequence of route records.
    Yaml,
}

impl DatasetFormat {
    /// Pick the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> PackResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(PackError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn read_file(path: &Path) -> PackResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackError::Io(e)
        }
    })
}

/// Parse a JSON document into a generic value.
pub fn parse_json_str(content: &str) -> PackResult<Value> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a YAML document into a generic value.
///
/// YAML scalars map onto JSON scalars; route records only use strings,
/// integers, sequences and mappings, so nothing is lost.
pub fn parse_yaml_str(content: &str) -> PackResult<Value> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a dataset file into a generic value, choosing the parser from the
/// file extension.
pub fn load_dataset_value(path: &Path) -> PackResult<Value> {
    let format = DatasetFormat::from_path(path)?;
    let content = read_file(path)?;
    match format {
        DatasetFormat::Json => {
            serde_json::from_str(&content).map_err(|e| PackError::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })
        }
        DatasetFormat::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| PackError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("routes_update.json")).unwrap(),
            DatasetFormat::Json
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("seed.YML")).unwrap(),
            DatasetFormat::Yaml
        );
        assert!(matches!(
            DatasetFormat::from_path(Path::new("routes.csv")),
            Err(PackError::UnsupportedFormat { .. })
        ));
        assert!(DatasetFormat::from_path(Path::new("routes")).is_err());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_dataset_value(Path::new("/nonexistent/routes.json")).unwrap_err();
        match err {
            PackError::FileNotFound { path } => {
                assert_eq!(path, Path::new("/nonexistent/routes.json"))
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, r#"[{"id": 1}]"#).unwrap();
        let value = load_dataset_value(&path).unwrap();
        assert_eq!(value[0]["id"], 1);
    }

    #[test]
    fn load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "- id: 4\n  fee: $200\n  timeWeeks: '2'").unwrap();
        let value = load_dataset_value(file.path()).unwrap();
        assert_eq!(value[0]["id"], 4);
        assert_eq!(value[0]["fee"], "$200");
        assert_eq!(value[0]["timeWeeks"], "2");
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();
        let err = load_dataset_value(&path).unwrap_err();
        assert!(matches!(err, PackError::JsonParse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&serde_json::json!({})), "object");
        assert_eq!(value_kind(&serde_json::json!([])), "list");
        assert_eq!(value_kind(&serde_json::json!("x")), "string");
    }
}
