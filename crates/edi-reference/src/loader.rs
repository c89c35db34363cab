//! Specification table file loader
//!
//! Partner or extension tables can be supplied as JSON or YAML files and
//! registered alongside the built-in tables. Loading happens once at
//! startup; a malformed file is a startup failure, never a per-request
//! condition.

use crate::{Error, Result};
use edi_explain::{SegmentEntry, SpecDescriptor, SpecRegistry, SpecificationTable, Standard};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serializable table format for loading from files
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    standard: String,
    message_type: String,
    #[serde(default)]
    version: String,
    display_name: String,
    segments: Vec<SegmentFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SegmentFile {
    key: String,
    explanation: String,
    usage: String,
}

/// Loader for specification table files
pub struct TableLoader {
    search_paths: Vec<PathBuf>,
}

impl TableLoader {
    /// Create a new loader with the given search paths
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Load a table from a specific file path
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, parsed, or converted
    /// into a valid table.
    pub fn load_from_file(&self, path: &Path) -> Result<SpecificationTable> {
        debug!(path = %path.display(), "loading specification table file");
        let content = std::fs::read_to_string(path)?;

        if path
            .extension()
            .map(|e| e == "yaml" || e == "yml")
            .unwrap_or(false)
        {
            self.load_from_yaml(&content)
        } else {
            self.load_from_json(&content)
        }
    }

    /// Load a table from a JSON string
    pub fn load_from_json(&self, json: &str) -> Result<SpecificationTable> {
        let table_file: TableFile = serde_json::from_str(json)
            .map_err(|e| Error::InvalidFormat(format!("JSON parse error: {e}")))?;
        convert_table_file(table_file)
    }

    /// Load a table from a YAML string
    pub fn load_from_yaml(&self, yaml: &str) -> Result<SpecificationTable> {
        let table_file: TableFile = serde_yaml::from_str(yaml)
            .map_err(|e| Error::InvalidFormat(format!("YAML parse error: {e}")))?;
        convert_table_file(table_file)
    }

    /// Load every table file in the search paths and register it.
    /// Returns the number of tables registered.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable, unparseable, or conflicting file;
    /// callers abort startup rather than continue with a partial registry.
    pub fn register_all(&self, registry: &mut SpecRegistry) -> Result<usize> {
        let mut registered = 0;

        for dir in &self.search_paths {
            let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
                .collect::<std::io::Result<Vec<_>>>()?
                .into_iter()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.extension()
                        .map(|e| e == "json" || e == "yaml" || e == "yml")
                        .unwrap_or(false)
                })
                .collect();
            paths.sort();

            for path in paths {
                let table = self.load_from_file(&path)?;
                info!(
                    path = %path.display(),
                    table = %table.descriptor().display_name,
                    entries = table.len(),
                    "registering specification table from file"
                );
                registry.register(table)?;
                registered += 1;
            }
        }

        Ok(registered)
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(vec![PathBuf::from(".")])
    }
}

fn convert_table_file(table_file: TableFile) -> Result<SpecificationTable> {
    let standard = Standard::parse(&table_file.standard)?;
    let descriptor = SpecDescriptor::new(
        standard,
        table_file.message_type,
        table_file.version,
        table_file.display_name,
    );

    let entries = table_file
        .segments
        .into_iter()
        .map(|s| SegmentEntry::new(s.key, s.explanation, s.usage))
        .collect();

    Ok(SpecificationTable::build(descriptor, entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_json() {
        let loader = TableLoader::default();
        let json = r#"
        {
            "standard": "EDIFACT",
            "message_type": "DELJIT",
            "version": "D04A",
            "display_name": "EDIFACT DELJIT D04A",
            "segments": [
                {
                    "key": "UNH",
                    "explanation": "Message header.",
                    "usage": "Mandatory."
                }
            ]
        }
        "#;

        let table = loader.load_from_json(json).unwrap();
        assert_eq!(table.descriptor().selection_key(), "DELJIT_D04A");
        assert!(table.lookup("unh").is_some());
    }

    #[test]
    fn test_load_from_yaml_without_version() {
        let loader = TableLoader::default();
        let yaml = r#"
standard: X12
message_type: "830"
display_name: X12 830 Planning Schedule
segments:
  - key: ST
    explanation: Transaction set header.
    usage: Mandatory.
"#;

        let table = loader.load_from_yaml(yaml).unwrap();
        assert_eq!(table.descriptor().selection_key(), "830");
        assert_eq!(table.descriptor().version, "");
    }

    #[test]
    fn test_load_from_json_invalid_syntax() {
        let loader = TableLoader::default();
        let result = loader.load_from_json("not valid json");
        assert!(matches!(result, Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_load_from_json_unknown_field() {
        let loader = TableLoader::default();
        let json = r#"
        {
            "standard": "EDIFACT",
            "message_type": "DELJIT",
            "version": "D04A",
            "display_name": "EDIFACT DELJIT D04A",
            "segments": [],
            "extra": true
        }
        "#;
        assert!(matches!(
            loader.load_from_json(json),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_standard() {
        let loader = TableLoader::default();
        let json = r#"
        {
            "standard": "TRADACOMS",
            "message_type": "ORDERS",
            "display_name": "TRADACOMS ORDERS",
            "segments": []
        }
        "#;
        assert!(matches!(
            loader.load_from_json(json),
            Err(Error::Definition(_))
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_keys() {
        let loader = TableLoader::default();
        let json = r#"
        {
            "standard": "EDIFACT",
            "message_type": "DELJIT",
            "version": "D04A",
            "display_name": "EDIFACT DELJIT D04A",
            "segments": [
                { "key": "UNH", "explanation": "a", "usage": "b" },
                { "key": "unh", "explanation": "c", "usage": "d" }
            ]
        }
        "#;
        assert!(matches!(
            loader.load_from_json(json),
            Err(Error::Definition(_))
        ));
    }
}
