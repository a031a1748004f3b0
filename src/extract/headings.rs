//! Heading extraction and grouping.
//!
//! # Responsibilities
//! - Select H1..H6 in document pre-order
//! - Group them by uppercase tag name, keeping first-seen order
//! - Optionally collect the inner markup of every heading
//!
//! # Design Decisions
//! - Tag name → group index map plus an insertion-ordered Vec: O(n) grouping
//! - A group never moves once created; later sightings only update it
//! - Counting-only mode skips inner markup serialization entirely

use std::collections::HashMap;

use serde::Serialize;

use crate::extract::document::{compile, Document};
use crate::extract::error::ParseError;

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// All headings sharing one tag name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingGroup {
    /// Uppercase tag name, `H1` through `H6`.
    pub tag_name: String,

    /// Number of headings with this tag name.
    pub count: usize,

    /// Inner markup of each heading in document order.
    /// `None` when the extractor only counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<String>>,
}

/// Accumulates headings into groups as they are discovered.
#[derive(Debug, Default)]
pub struct HeadingGrouper {
    index: HashMap<String, usize>,
    groups: Vec<HeadingGroup>,
    collect_contents: bool,
}

impl HeadingGrouper {
    pub fn new(collect_contents: bool) -> Self {
        Self {
            collect_contents,
            ..Self::default()
        }
    }

    /// Record one heading. `inner` is only evaluated when contents are collected.
    pub fn push(&mut self, tag_name: &str, inner: impl FnOnce() -> String) {
        let tag_name = tag_name.to_ascii_uppercase();
        let content = self.collect_contents.then(inner);

        match self.index.get(&tag_name) {
            Some(&i) => {
                let group = &mut self.groups[i];
                group.count += 1;
                if let (Some(contents), Some(content)) = (group.contents.as_mut(), content) {
                    contents.push(content);
                }
            }
            None => {
                self.index.insert(tag_name.clone(), self.groups.len());
                self.groups.push(HeadingGroup {
                    tag_name,
                    count: 1,
                    contents: content.map(|c| vec![c]),
                });
            }
        }
    }

    pub fn finish(self) -> Vec<HeadingGroup> {
        self.groups
    }
}

impl Document {
    /// Headings grouped by tag name, in the order each tag name first appears.
    pub fn headings(&self, collect_contents: bool) -> Result<Vec<HeadingGroup>, ParseError> {
        let selector = compile(HEADING_SELECTOR)?;
        let mut grouper = HeadingGrouper::new(collect_contents);

        for element in self.select(&selector) {
            grouper.push(element.value().name(), || element.inner_html());
        }

        Ok(grouper.finish())
    }
}
