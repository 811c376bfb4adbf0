//! Prefixes every tag of an API with the API's title.
//!
//! Once several APIs are merged by swagger-combine, a tag such as `status`
//! could belong to any of them. The prefixer turns it into `Pets: status`
//! by recording a rename instruction on the owning [`ApiEntry`].

use std::collections::BTreeMap;

use super::config::ApiEntry;
use super::openapi::OpenApiDoc;

/// Separator placed between the API title and the original tag
pub const PREFIX_SEPARATOR: &str = ": ";

/// Tag name added when an API declares no tags at all
pub const DEFAULT_TAG: &str = "default";

/// Original tag name to prefixed tag name, built fresh for each API
pub type PrefixMap = BTreeMap<String, String>;

/// What the prefixer did to one API entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixOutcome {
    /// Tags were found; these rename entries were merged into the entry
    Renamed(PrefixMap),
    /// No tags were found; this tag was appended to the entry's add list
    DefaultAdded(String),
}

/// Derives the tag prefix from an API document title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPrefixer {
    prefix: String,
}

impl TagPrefixer {
    pub fn new(title: &str) -> Self {
        Self {
            prefix: format!("{title}{PREFIX_SEPARATOR}"),
        }
    }

    pub fn for_document(doc: &OpenApiDoc) -> Self {
        Self::new(&doc.title())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn prefixed(&self, tag: &str) -> String {
        format!("{}{}", self.prefix, tag)
    }

    /// Collect the distinct tags of `doc` into a rename map
    pub fn prefix_map(&self, doc: &OpenApiDoc) -> PrefixMap {
        doc.operation_tags()
            .map(|tag| (tag.to_string(), self.prefixed(tag)))
            .collect()
    }

    /// Record the tag edits for `doc` on `api`.
    ///
    /// Existing rename entries for other tags and existing add entries are
    /// kept. A tag already present in the rename map is overwritten with its
    /// prefixed name.
    pub fn apply(&self, doc: &OpenApiDoc, api: &mut ApiEntry) -> PrefixOutcome {
        let prefix_map = self.prefix_map(doc);

        if prefix_map.is_empty() {
            let tag = self.prefixed(DEFAULT_TAG);
            api.tag_edit_mut().add_mut().push(tag.clone());
            return PrefixOutcome::DefaultAdded(tag);
        }

        let rename = api.tag_edit_mut().rename_mut();
        for (tag, prefixed) in &prefix_map {
            rename.insert(tag.clone(), prefixed.clone());
        }
        PrefixOutcome::Renamed(prefix_map)
    }
}
