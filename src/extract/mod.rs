//! Document feature extraction subsystem.
//!
//! # Data Flow
//! ```text
//! HTML text (fetched upstream or posted raw)
//!     → document.rs (permissive parse into a DOM tree)
//!     → headings.rs (H1..H6 grouped by tag, first-seen order)
//!     → meta.rs (name/content pairs, unnamed entries dropped)
//!     → canonical.rs (link[rel=canonical] href)
//!     → serialized as JSON by the http layer
//! ```
//!
//! # Design Decisions
//! - Extraction is synchronous and owns its parsed tree; nothing is shared between calls
//! - Parsing is permissive: malformed markup degrades, it never aborts
//! - One parse serves every feature when callers use [`DocumentFeatureExtractor::extract`]

pub mod canonical;
pub mod document;
pub mod error;
pub mod headings;
pub mod meta;

use serde::Serialize;

pub use document::Document;
pub use error::ParseError;
pub use headings::HeadingGroup;
pub use meta::MetaEntry;

use crate::config::ExtractorConfig;

/// Every feature of one page, taken from a single parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFeatures {
    pub headings: Vec<HeadingGroup>,
    pub meta: Vec<MetaEntry>,
    pub canonical: Option<String>,
}

/// Configurable front door to the extraction pipeline.
///
/// Cheap to clone; holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct DocumentFeatureExtractor {
    config: ExtractorConfig,
}

impl DocumentFeatureExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Heading elements grouped by uppercase tag name.
    pub fn extract_headings(&self, html: &str) -> Result<Vec<HeadingGroup>, ParseError> {
        Document::parse(html).headings(self.config.collect_contents)
    }

    /// Meta elements reduced to name/content pairs.
    pub fn extract_meta_tags(&self, html: &str) -> Result<Vec<MetaEntry>, ParseError> {
        Document::parse(html).meta_tags()
    }

    /// Same as [`Self::extract_headings`] for a raw body; fails unless it is UTF-8.
    pub fn extract_headings_from_bytes(&self, raw: &[u8]) -> Result<Vec<HeadingGroup>, ParseError> {
        Document::from_utf8(raw)?.headings(self.config.collect_contents)
    }

    pub fn extract_meta_tags_from_bytes(&self, raw: &[u8]) -> Result<Vec<MetaEntry>, ParseError> {
        Document::from_utf8(raw)?.meta_tags()
    }

    pub fn extract_canonical(&self, html: &str) -> Result<Option<String>, ParseError> {
        Document::parse(html).canonical()
    }

    /// Parse once and pull every feature out of the same tree.
    ///
    /// Fails as a whole: if any selection fails, no partial result is returned.
    pub fn extract(&self, html: &str) -> Result<PageFeatures, ParseError> {
        self.extract_document(&Document::parse(html))
    }

    pub fn extract_document(&self, document: &Document) -> Result<PageFeatures, ParseError> {
        Ok(PageFeatures {
            headings: document.headings(self.config.collect_contents)?,
            meta: document.meta_tags()?,
            canonical: document.canonical()?,
        })
    }
}
