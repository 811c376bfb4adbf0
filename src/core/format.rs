//! Selection of the serialization format for config files and API documents.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::FormatError;

/// Text format of a config file or OpenAPI document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension; `yaml`/`yml` select YAML,
    /// anything else (including no extension) selects JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self::from_extension(path.extension().and_then(|ext| ext.to_str()))
    }

    /// Pick the format from the path component of a URL, ignoring any query
    /// string or fragment. Strings that don't parse as URLs are treated as
    /// filesystem paths.
    pub fn from_source(source: &str) -> Self {
        match url::Url::parse(source) {
            Ok(url) => Self::from_path(Path::new(url.path())),
            Err(_) => Self::from_path(Path::new(source)),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, FormatError> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("config.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("config.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("config.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("config")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("config.txt")), DocumentFormat::Json);
    }

    #[test]
    fn test_format_from_url_ignores_query() {
        assert_eq!(
            DocumentFormat::from_source("https://example.com/pets/openapi.yaml?v=2"),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_source("https://example.com/pets/openapi.json#top"),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_source("https://example.com/swagger"),
            DocumentFormat::Json
        );
    }

    #[test]
    fn test_format_from_relative_path_source() {
        assert_eq!(DocumentFormat::from_source("specs/orders.yml"), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_source("specs/orders.json"), DocumentFormat::Json);
    }

    #[test]
    fn test_parse_dispatches_on_format() {
        let json: Value = DocumentFormat::Json.parse(r#"{"title": "Pets"}"#).unwrap();
        assert_eq!(json["title"], "Pets");

        let yaml: Value = DocumentFormat::Yaml.parse("title: Pets\n").unwrap();
        assert_eq!(yaml["title"], "Pets");

        let err = DocumentFormat::Json.parse::<Value>("title: Pets\n").unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
    }
}
