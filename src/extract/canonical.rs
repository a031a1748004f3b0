//! Canonical link extraction.

use crate::extract::document::{compile, Document};
use crate::extract::error::ParseError;

const CANONICAL_SELECTOR: &str = r#"link[rel="canonical"]"#;

impl Document {
    /// `href` of the first `<link rel="canonical">`, if any.
    pub fn canonical(&self) -> Result<Option<String>, ParseError> {
        let selector = compile(CANONICAL_SELECTOR)?;
        let href = self
            .select(&selector)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string);
        Ok(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_found() {
        let doc = Document::parse(
            r#"<head><link rel="stylesheet" href="/a.css"><link rel="canonical" href="https://example.com/page"></head>"#,
        );
        assert_eq!(doc.canonical().unwrap().as_deref(), Some("https://example.com/page"));
    }

    #[test]
    fn test_first_canonical_wins() {
        let doc = Document::parse(
            r#"<link rel="canonical" href="/one"><link rel="canonical" href="/two">"#,
        );
        assert_eq!(doc.canonical().unwrap().as_deref(), Some("/one"));
    }

    #[test]
    fn test_canonical_missing() {
        assert_eq!(Document::parse("<p>no links</p>").canonical().unwrap(), None);
        assert_eq!(
            Document::parse(r#"<link rel="canonical">"#).canonical().unwrap(),
            None
        );
    }
}
