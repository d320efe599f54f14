use std::str::FromStr;

use thiserror::Error;

/// Subtag delimiter in BCP-47 style tags
pub const SUBTAG_DELIMITER: char = '-';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Empty language tag")]
    Empty,
}

/// A language tag split into subtags
///
/// Only the primary subtag has meaning here; region, script, variant and
/// extension subtags are kept as opaque lowercase tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    /// Tag as written
    text: String,

    /// Lowercased subtags, primary first
    subtags: Vec<String>,
}

impl LanguageTag {
    /// Parse a tag. Empty input is not a tag and yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let subtags = text
            .split(SUBTAG_DELIMITER)
            .map(str::to_ascii_lowercase)
            .collect();

        Some(Self {
            text: text.to_string(),
            subtags,
        })
    }

    /// Tag text exactly as given
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Primary language subtag, lowercased
    pub fn primary(&self) -> &str {
        // Splitting a non-empty string always yields at least one item
        self.subtags.first().map_or("", String::as_str)
    }

    /// All subtags, lowercased
    pub fn subtags(&self) -> &[String] {
        &self.subtags
    }

    /// Number of subtags (always at least 1)
    pub fn len(&self) -> usize {
        self.subtags.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.subtags.is_empty()
    }
}

impl FromStr for LanguageTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(TagError::Empty)
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let tag = LanguageTag::parse("en").unwrap();
        assert_eq!(tag.primary(), "en");
        assert_eq!(tag.len(), 1);
        assert_eq!(tag.as_str(), "en");
    }

    #[test]
    fn test_parse_region_lowercases_subtags() {
        let tag = LanguageTag::parse("fr-CA").unwrap();
        assert_eq!(tag.subtags(), &["fr", "ca"]);
        assert_eq!(tag.to_string(), "fr-CA");
    }

    #[test]
    fn test_parse_extension_sequence() {
        let tag = LanguageTag::parse("gsw-u-sd-chzh").unwrap();
        assert_eq!(tag.primary(), "gsw");
        assert_eq!(tag.subtags(), &["gsw", "u", "sd", "chzh"]);
        assert!(!tag.is_empty());
    }

    #[test]
    fn test_parse_empty_is_absent() {
        assert!(LanguageTag::parse("").is_none());
        assert_eq!("".parse::<LanguageTag>(), Err(TagError::Empty));
    }

    #[test]
    fn test_parse_keeps_empty_subtags_opaque() {
        let tag = LanguageTag::parse("en-").unwrap();
        assert_eq!(tag.subtags(), &["en", ""]);
    }

    #[test]
    fn test_from_str() {
        let tag: LanguageTag = "PT-br".parse().unwrap();
        assert_eq!(tag.primary(), "pt");
        assert_eq!(tag.subtags(), &["pt", "br"]);
    }
}
