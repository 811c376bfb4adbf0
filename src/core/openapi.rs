//! Minimal view of an OpenAPI (or Swagger 2.0) document.
//!
//! The prefixer only needs the document title and the tags of each operation,
//! so everything else is left as raw JSON and walked leniently: unexpected
//! shapes produce fewer tags, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// HTTP methods that can hold an operation inside a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Get all HTTP methods as an array
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Post,
            HttpMethod::Delete,
            HttpMethod::Options,
            HttpMethod::Head,
            HttpMethod::Patch,
            HttpMethod::Trace,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fetched API document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenApiDoc {
    #[serde(default)]
    pub info: JsonValue,

    /// Path string to path item
    #[serde(default)]
    pub paths: JsonValue,
}

impl OpenApiDoc {
    /// The declared `info.title`, or an empty string if absent or not a scalar
    pub fn title(&self) -> String {
        match self.info.get("title") {
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Number(n)) => n.to_string(),
            Some(JsonValue::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Every tag string on every operation, in path order, duplicates included
    pub fn operation_tags(&self) -> impl Iterator<Item = &str> {
        self.paths
            .as_object()
            .into_iter()
            .flat_map(|paths| paths.values())
            .filter_map(JsonValue::as_object)
            .flat_map(|item| {
                HttpMethod::all()
                    .iter()
                    .filter_map(move |method| item.get(method.as_str()))
            })
            .filter_map(|operation| operation.get("tags"))
            .filter_map(JsonValue::as_array)
            .flatten()
            .filter_map(JsonValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::DocumentFormat;

    #[test]
    fn test_operation_tags_walks_all_methods() {
        let doc: OpenApiDoc = DocumentFormat::Json
            .parse(
                r#"{
                "openapi": "3.0.0",
                "info": { "title": "Pets", "version": "1.0.0" },
                "paths": {
                    "/pets": {
                        "get": { "tags": ["pet"], "responses": {} },
                        "post": { "tags": ["pet", "admin"] }
                    },
                    "/store": {
                        "delete": { "tags": ["store"] }
                    }
                }
            }"#,
            )
            .unwrap();

        assert_eq!(doc.title(), "Pets");
        let tags: Vec<_> = doc.operation_tags().collect();
        assert_eq!(tags, vec!["pet", "pet", "admin", "store"]);
    }

    #[test]
    fn test_non_operation_keys_are_skipped() {
        let doc: OpenApiDoc = DocumentFormat::Yaml
            .parse(
                r#"
swagger: "2.0"
info:
  title: Orders
paths:
  /orders/{id}:
    parameters:
      - name: id
        in: path
    summary: one order
    x-tags: ["ignored"]
    get:
      tags: [orders]
"#,
            )
            .unwrap();

        let tags: Vec<_> = doc.operation_tags().collect();
        assert_eq!(tags, vec!["orders"]);
    }

    #[test]
    fn test_malformed_shapes_yield_no_tags() {
        let doc: OpenApiDoc = DocumentFormat::Json
            .parse(
                r#"{
                "paths": {
                    "/a": "not an object",
                    "/b": { "get": "not an operation" },
                    "/c": { "get": { "tags": "not a list" } },
                    "/d": { "get": { "tags": [1, null, "kept"] } }
                }
            }"#,
            )
            .unwrap();

        assert_eq!(doc.title(), "");
        let tags: Vec<_> = doc.operation_tags().collect();
        assert_eq!(tags, vec!["kept"]);
    }

    #[test]
    fn test_null_sections_are_tolerated() {
        let doc: OpenApiDoc = DocumentFormat::Json
            .parse(r#"{"info": null, "paths": null}"#)
            .unwrap();
        assert_eq!(doc.title(), "");
        assert_eq!(doc.operation_tags().count(), 0);
    }

    #[test]
    fn test_missing_paths_is_empty() {
        let doc: OpenApiDoc = DocumentFormat::Json
            .parse(r#"{"info": {"title": "Empty"}}"#)
            .unwrap();
        assert_eq!(doc.operation_tags().count(), 0);
    }

    #[test]
    fn test_http_method_display() {
        let names: Vec<_> = HttpMethod::all().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            vec!["get", "put", "post", "delete", "options", "head", "patch", "trace"]
        );
    }
}
