//! Meta tag extraction.

use scraper::node::Element;
use serde::Serialize;

use crate::extract::document::{compile, Document};
use crate::extract::error::ParseError;

/// Attributes that can name a meta element, highest priority first.
const NAME_ATTRIBUTES: [&str; 3] = ["name", "property", "charset"];

/// One named `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaEntry {
    pub name: String,
    pub content: Option<String>,
}

impl MetaEntry {
    /// Reduce a meta element to a name/content pair.
    ///
    /// Returns `None` when no naming attribute has a non-empty value.
    pub fn from_element(element: &Element) -> Option<Self> {
        let name = NAME_ATTRIBUTES
            .iter()
            .filter_map(|attr| element.attr(attr))
            .find(|value| !value.is_empty())?;

        Some(Self {
            name: name.to_string(),
            content: element.attr("content").map(str::to_string),
        })
    }
}

impl Document {
    /// Named meta elements in document order. Repeated names are kept.
    pub fn meta_tags(&self) -> Result<Vec<MetaEntry>, ParseError> {
        let selector = compile("meta")?;
        Ok(self
            .select(&selector)
            .filter_map(|element| MetaEntry::from_element(element.value()))
            .collect())
    }
}
