//! In-memory model of a swagger-combine configuration file.
//!
//! Only the parts the prefixer reads or edits are typed. Everything else in
//! the file is kept in the `extra` maps and written back unchanged, and the
//! typed top-level fields are only written when the input had them.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Top-level combine-config document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombineConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swagger: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    /// Source APIs, in declaration order
    pub apis: Vec<ApiEntry>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// One source API of the combined document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEntry {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagEdit>,

    /// Path overrides understood by swagger-combine (base, include, exclude, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Map<String, JsonValue>>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Tag edit instructions for one API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagEdit {
    /// Old tag name to new tag name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename: Option<BTreeMap<String, String>>,

    /// Tags added to every operation of the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl ApiEntry {
    #[cfg(test)]
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// The tag edit block, created empty if the entry had none
    pub fn tag_edit_mut(&mut self) -> &mut TagEdit {
        self.tags.get_or_insert_with(TagEdit::default)
    }
}

impl TagEdit {
    pub fn rename_mut(&mut self) -> &mut BTreeMap<String, String> {
        self.rename.get_or_insert_with(BTreeMap::new)
    }

    pub fn add_mut(&mut self) -> &mut Vec<String> {
        self.add.get_or_insert_with(Vec::new)
    }
}

// Deserialized by hand: `#[serde(flatten)]` buffers values through
// `deserialize_any`, which reads an unquoted YAML `1.10` as the float 1.1.

impl<'de> Deserialize<'de> for CombineConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = CombineConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a swagger-combine config mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CombineConfig, A::Error> {
                let mut config = CombineConfig::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "swagger" => {
                            config.swagger = map.next_value::<Option<ScalarText>>()?.map(|s| s.0)
                        }
                        "info" => config.info = map.next_value()?,
                        "apis" => {
                            config.apis = map.next_value::<Option<Vec<ApiEntry>>>()?.unwrap_or_default()
                        }
                        _ => {
                            config.extra.insert(key, map.next_value()?);
                        }
                    }
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

impl<'de> Deserialize<'de> for Info {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InfoVisitor;

        impl<'de> Visitor<'de> for InfoVisitor {
            type Value = Info;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an info mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Info, A::Error> {
                let mut info = Info::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "title" => info.title = map.next_value::<Option<ScalarText>>()?.map(|s| s.0),
                        "version" => {
                            info.version = map.next_value::<Option<ScalarText>>()?.map(|s| s.0)
                        }
                        _ => {
                            info.extra.insert(key, map.next_value()?);
                        }
                    }
                }
                Ok(info)
            }
        }

        deserializer.deserialize_map(InfoVisitor)
    }
}

/// A scalar read as text. YAML hands over plain scalars exactly as written,
/// so `1.10` stays `"1.10"`.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = ScalarText;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or scalar")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ScalarText, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ScalarText, E> {
                Ok(ScalarText(v))
            }
        }

        deserializer.deserialize_string(ScalarVisitor)
    }
}
