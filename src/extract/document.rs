//! Permissive HTML parsing.
//!
//! # Responsibilities
//! - Turn HTML text (or raw UTF-8 bytes) into a traversable tree
//! - Compile the CSS selectors the feature extractors run against it
//!
//! # Design Decisions
//! - html5ever-backed parsing via `scraper`: unclosed or stray tags are
//!   recovered the way a browser would, so text input never fails to parse
//! - Scripting is off while parsing, as in a DOM that never runs scripts:
//!   `<noscript>` content is markup, not raw text
//! - `<template>` content is inert and never matches a selection
//! - The tree is `!Send`; callers extract owned values before any `.await`

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, HtmlTreeSink, Selector};

use crate::extract::error::ParseError;

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a complete document from text.
    pub fn parse(html: &str) -> Self {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let sink = HtmlTreeSink::new(Html::new_document());

        Self {
            html: driver::parse_document(sink, opts).one(html),
        }
    }

    /// Parse a document from raw bytes, which must be UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::parse(text))
    }

    /// Elements matching `selector` in document order, skipping template content.
    pub(crate) fn select<'a>(
        &'a self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .select(selector)
            .filter(|element| !in_template(element))
    }

    /// Parser recovery notes (unclosed tags, stray end tags, ...).
    fn recovery_notes(&self) -> usize {
        self.html.errors.len()
    }
}

fn in_template(element: &ElementRef<'_>) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|e| e.name() == "template")
    })
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("recovery_notes", &self.recovery_notes())
            .finish()
    }
}

pub(crate) fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
