//! Flux configuration
//!
//! Declarative description of how one flux type flattens into a table. A
//! config file is a YAML mapping of flux type to [`FluxConfig`]; a default
//! set covering the standard distributor fluxes is embedded in the crate.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading flux configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unknown flux type: {0}")]
    UnknownFlux(String),
    #[error("Invalid file_regex `{pattern}`: {source}")]
    InvalidFileRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Source document format of a flux.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    #[default]
    Xml,
    Json,
}

impl SourceFormat {
    /// File extension used during directory discovery.
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Xml => "xml",
            SourceFormat::Json => "json",
        }
    }
}

/// A single condition a nested candidate must satisfy.
///
/// The path key also accepts the historical spellings `xpath` and
/// `jsonpath`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(alias = "xpath", alias = "jsonpath")]
    pub path: String,
    pub value: String,
}

/// Extraction of a nested child collection into dynamically named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedField {
    /// Prepended to every produced column name.
    #[serde(default)]
    pub prefix: String,
    /// Path from the row node to the candidate children.
    pub child_path: String,
    /// Path from a candidate to the value naming its column.
    pub id_field: String,
    /// Path from a candidate to the cell value.
    pub value_field: String,
    /// Every condition must hold for a candidate to contribute.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Statically named companion columns resolved from the same candidates.
    #[serde(default)]
    pub additional_fields: IndexMap<String, String>,
}

/// How one flux type flattens into a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FluxConfig {
    /// Regex a file name must contain for directory processing.
    #[serde(default)]
    pub file_regex: Option<String>,
    /// Source document format, XML unless declared otherwise.
    #[serde(default)]
    pub source: SourceFormat,
    /// Path selecting the row nodes.
    pub row_level: String,
    /// Document-constant columns, resolved once against the root.
    #[serde(default)]
    pub metadata_fields: IndexMap<String, String>,
    /// Per-row scalar columns.
    #[serde(default)]
    pub data_fields: IndexMap<String, String>,
    /// Dynamically named columns from child collections.
    #[serde(default)]
    pub nested_fields: Vec<NestedField>,
}

impl FluxConfig {
    /// Compile `file_regex`, if any.
    pub fn compiled_file_regex(&self) -> Result<Option<Regex>, ConfigError> {
        self.file_regex
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidFileRegex {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

/// Parse a YAML mapping of flux type to [`FluxConfig`].
pub fn parse_config(content: &str) -> Result<IndexMap<String, FluxConfig>, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a config file from disk.
pub fn load_config_file(path: &Path) -> Result<IndexMap<String, FluxConfig>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// The embedded default config covering the standard distributor fluxes.
pub fn default_configs() -> Result<IndexMap<String, FluxConfig>, ConfigError> {
    parse_config(include_str!("default_flux.yaml"))
}

/// Look up one flux type, from `config_path` when given, otherwise from the
/// embedded defaults. Requesting a flux type the config does not define is
/// fatal.
pub fn load_flux_config(
    flux_type: &str,
    config_path: Option<&Path>,
) -> Result<FluxConfig, ConfigError> {
    let mut configs = match config_path {
        Some(path) => load_config_file(path)?,
        None => default_configs()?,
    };
    configs
        .shift_remove(flux_type)
        .ok_or_else(|| ConfigError::UnknownFlux(flux_type.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_with_nested_rules() {
        let content = r#"
C15:
  row_level: './/PRM'
  data_fields:
    pdl: 'Id_PRM'
  nested_fields:
    - prefix: 'Avant_'
      child_path: 'Releves/Donnees_Releve/Classe_Temporelle_Distributeur'
      id_field: 'Id_Classe_Temporelle'
      value_field: 'Valeur'
      conditions:
        - xpath: '../Code_Qualification'
          value: '1'
      additional_fields:
        Date_Releve: '../Date_Releve'
"#;
        let configs = parse_config(content).unwrap();
        let c15 = &configs["C15"];

        assert_eq!(c15.row_level, ".//PRM");
        assert_eq!(c15.source, SourceFormat::Xml);
        assert_eq!(c15.data_fields["pdl"], "Id_PRM");

        let rule = &c15.nested_fields[0];
        assert_eq!(rule.prefix, "Avant_");
        assert_eq!(rule.conditions[0].path, "../Code_Qualification");
        assert_eq!(rule.conditions[0].value, "1");
        assert_eq!(rule.additional_fields["Date_Releve"], "../Date_Releve");
    }

    #[test]
    fn test_condition_path_accepts_both_spellings() {
        let content = r#"
RX5:
  source: json
  row_level: '$.mesures[*]'
  nested_fields:
    - prefix: 'CT_'
      child_path: 'contexte[*]'
      id_field: 'id'
      value_field: 'valeur'
      conditions:
        - jsonpath: 'codeStatut'
          value: 'VALIDE'
"#;
        let configs = parse_config(content).unwrap();
        let rx5 = &configs["RX5"];
        assert_eq!(rx5.source, SourceFormat::Json);
        assert_eq!(rx5.nested_fields[0].conditions[0].path, "codeStatut");
    }

    #[test]
    fn test_default_configs_cover_the_standard_fluxes() {
        let configs = default_configs().unwrap();
        for flux in ["C15", "F12", "F15", "R15", "R151", "RX5"] {
            assert!(configs.contains_key(flux), "missing default for {}", flux);
        }
        assert_eq!(configs["R15"].row_level, ".//PRM");
        assert_eq!(configs["RX5"].source, SourceFormat::Json);
        assert!(configs["F12"].compiled_file_regex().unwrap().is_some());
    }

    #[test]
    fn test_unknown_flux_type_is_fatal() {
        let result = load_flux_config("NOT_A_FLUX", None);
        assert!(matches!(result, Err(ConfigError::UnknownFlux(_))));
    }

    #[test]
    fn test_invalid_file_regex() {
        let config = FluxConfig {
            file_regex: Some("[unclosed".to_string()),
            ..FluxConfig::default()
        };
        assert!(matches!(
            config.compiled_file_regex(),
            Err(ConfigError::InvalidFileRegex { .. })
        ));
    }
}
