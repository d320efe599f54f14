use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::validation::is_alpha_code;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read code table: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse code table: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid language code '{code}': expected {expected} ASCII letters")]
    InvalidCode { code: String, expected: usize },

    #[error("Duplicate language code '{0}'")]
    DuplicateCode(String),
}

/// Table version for compatibility checking
pub const TABLE_VERSION: &str = "1.0.0";

/// One language with its two-letter code and every three-letter alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCode {
    /// ISO 639-1 code (e.g., "fr"), also the canonical comparison form
    pub alpha2: String,

    /// ISO 639-2 codes, terminologic first then bibliographic (e.g., "fra", "fre")
    pub alpha3: Vec<String>,

    /// English name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl LanguageCode {
    pub fn new(alpha2: impl Into<String>, alpha3: &[&str]) -> Self {
        Self {
            alpha2: alpha2.into(),
            alpha3: alpha3.iter().map(|s| (*s).to_string()).collect(),
            name: String::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Serializable table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    pub version: String,
    pub languages: Vec<LanguageCode>,
}

/// Two-letter / three-letter language code equivalences
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    /// All known languages in table order
    pub languages: Vec<LanguageCode>,

    /// Index: any lowercase code (two- or three-letter) -> index in languages vec
    code_to_index: HashMap<String, usize>,
}

static EMBEDDED_TABLE: OnceLock<CodeTable> = OnceLock::new();

impl CodeTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared embedded table, parsed on first access
    ///
    /// `build.rs` validates the embedded data, so the fallback to an empty table
    /// only exists to keep primary-code normalization total.
    pub fn global() -> &'static CodeTable {
        EMBEDDED_TABLE.get_or_init(|| {
            Self::load_embedded().unwrap_or_else(|e| {
                error!("Embedded code table is unusable, comparing codes verbatim: {e}");
                Self::new()
            })
        })
    }

    /// Load the embedded ISO 639 table
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed or has invalid codes.
    pub fn load_embedded() -> Result<Self, TableError> {
        // Validated at compile time by build.rs
        const EMBEDDED_TABLE_JSON: &str = include_str!("../../data/iso639.json");
        Self::from_json(EMBEDDED_TABLE_JSON)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `TableError::ReadError` if the file cannot be read, or a parse or
    /// validation error for bad content.
    pub fn load_from_file(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a table from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `TableError::ParseError` for malformed JSON, `InvalidCode` for
    /// codes that are not ASCII letters of the right length, or
    /// `DuplicateCode` when a code appears twice.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let data: TableData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != TABLE_VERSION {
            warn!(
                "Code table version mismatch (expected {}, found {})",
                TABLE_VERSION, data.version
            );
        }

        let mut table = Self::new();
        for language in data.languages {
            table.add_language(language)?;
        }

        Ok(table)
    }

    /// Add a language, lowercasing its codes
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidCode` or `TableError::DuplicateCode`; the
    /// table is left unchanged on error.
    pub fn add_language(&mut self, mut language: LanguageCode) -> Result<(), TableError> {
        language.alpha2 = checked_code(&language.alpha2, 2)?;
        language.alpha3 = language
            .alpha3
            .iter()
            .map(|code| checked_code(code, 3))
            .collect::<Result<_, _>>()?;

        let codes: Vec<&String> = std::iter::once(&language.alpha2)
            .chain(language.alpha3.iter())
            .collect();
        for (i, code) in codes.iter().enumerate() {
            if self.code_to_index.contains_key(*code) || codes[..i].contains(code) {
                return Err(TableError::DuplicateCode((*code).clone()));
            }
        }

        let index = self.languages.len();
        for code in codes {
            self.code_to_index.insert(code.clone(), index);
        }
        self.languages.push(language);
        Ok(())
    }

    /// Look up a language by any of its codes, ignoring case
    pub fn lookup(&self, code: &str) -> Option<&LanguageCode> {
        self.code_to_index
            .get(&code.to_ascii_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Canonical comparison form of a primary language subtag.
    ///
    /// Known codes map to their two-letter form; anything else comes back
    /// case-folded and otherwise unchanged.
    #[must_use]
    pub fn normalize_primary(&self, code: &str) -> String {
        let folded = code.to_ascii_lowercase();
        match self.code_to_index.get(&folded) {
            Some(&idx) => self.languages[idx].alpha2.clone(),
            None => folded,
        }
    }

    /// Whether two primary subtags name the same language
    #[must_use]
    pub fn same_primary(&self, a: &str, b: &str) -> bool {
        if a.eq_ignore_ascii_case(b) {
            return true;
        }
        self.normalize_primary(a) == self.normalize_primary(b)
    }

    /// Export table to JSON
    ///
    /// # Errors
    ///
    /// Returns `TableError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, TableError> {
        let data = TableData {
            version: TABLE_VERSION.to_string(),
            languages: self.languages.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of languages in the table
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Check if table is empty
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Normalize a primary subtag against the embedded table
#[must_use]
pub fn normalize_primary(code: &str) -> String {
    CodeTable::global().normalize_primary(code)
}

fn checked_code(code: &str, expected: usize) -> Result<String, TableError> {
    if code.len() == expected && is_alpha_code(code) {
        Ok(code.to_ascii_lowercase())
    } else {
        Err(TableError::InvalidCode {
            code: code.to_string(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> CodeTable {
        let mut table = CodeTable::new();
        table
            .add_language(LanguageCode::new("en", &["eng"]).with_name("English"))
            .unwrap();
        table
            .add_language(LanguageCode::new("fr", &["fra", "fre"]).with_name("French"))
            .unwrap();
        table
    }

    #[test]
    fn test_load_embedded_table() {
        let table = CodeTable::load_embedded().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.len(), 184);
    }

    #[test]
    fn test_global_is_singleton() {
        let a = CodeTable::global();
        let b = CodeTable::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_normalize_two_and_three_letter() {
        let table = small_table();
        assert_eq!(table.normalize_primary("en"), "en");
        assert_eq!(table.normalize_primary("eng"), "en");
        assert_eq!(table.normalize_primary("ENG"), "en");
        assert_eq!(table.normalize_primary("fra"), "fr");
        assert_eq!(table.normalize_primary("Fre"), "fr");
    }

    #[test]
    fn test_normalize_unknown_is_case_folded() {
        let table = small_table();
        assert_eq!(table.normalize_primary("AX"), "ax");
        assert_eq!(table.normalize_primary("gsw"), "gsw");
        assert_eq!(table.normalize_primary(""), "");
    }

    #[test]
    fn test_embedded_bibliographic_aliases() {
        let table = CodeTable::load_embedded().unwrap();
        for (b, t) in [("ger", "deu"), ("chi", "zho"), ("dut", "nld"), ("cze", "ces")] {
            assert_eq!(table.normalize_primary(b), table.normalize_primary(t));
        }
        assert_eq!(table.normalize_primary("pol"), "pl");
        assert_eq!(table.normalize_primary("jpn"), "ja");
    }

    #[test]
    fn test_same_primary() {
        let table = small_table();
        assert!(table.same_primary("en", "eng"));
        assert!(table.same_primary("FRE", "fra"));
        assert!(table.same_primary("ax", "AX"));
        assert!(!table.same_primary("en", "fr"));
        assert!(!table.same_primary("ax", "en"));
    }

    #[test]
    fn test_lookup() {
        let table = small_table();
        let french = table.lookup("FRE").unwrap();
        assert_eq!(french.alpha2, "fr");
        assert_eq!(french.name, "French");
        assert!(table.lookup("xx").is_none());
    }

    #[test]
    fn test_add_language_rejects_duplicates() {
        let mut table = small_table();
        let result = table.add_language(LanguageCode::new("xx", &["eng"]));
        assert!(matches!(result, Err(TableError::DuplicateCode(code)) if code == "eng"));
        assert!(table.lookup("xx").is_none());
        assert_eq!(table.len(), 2);

        let result = table.add_language(LanguageCode::new("yy", &["yyy", "YYY"]));
        assert!(matches!(result, Err(TableError::DuplicateCode(_))));
    }

    #[test]
    fn test_add_language_rejects_bad_codes() {
        let mut table = CodeTable::new();
        assert!(matches!(
            table.add_language(LanguageCode::new("eng", &["eng"])),
            Err(TableError::InvalidCode { expected: 2, .. })
        ));
        assert!(matches!(
            table.add_language(LanguageCode::new("e1", &["eng"])),
            Err(TableError::InvalidCode { expected: 2, .. })
        ));
        assert!(matches!(
            table.add_language(LanguageCode::new("en", &["en"])),
            Err(TableError::InvalidCode { expected: 3, .. })
        ));
    }

    #[test]
    fn test_codes_are_lowercased_on_insert() {
        let mut table = CodeTable::new();
        table
            .add_language(LanguageCode::new("DE", &["DEU", "Ger"]))
            .unwrap();
        assert_eq!(table.normalize_primary("ger"), "de");
        assert_eq!(table.languages[0].alpha3, vec!["deu", "ger"]);
    }

    #[test]
    fn test_json_round_trip_preserves_lookups() {
        let table = small_table();
        let json = table.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"fre\""));

        let reloaded = CodeTable::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.normalize_primary("fre"), "fr");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            CodeTable::from_json("{not json"),
            Err(TableError::ParseError(_))
        ));
        let bad = r#"{"version": "1.0.0", "languages": [{"alpha2": "e", "alpha3": ["eng"]}]}"#;
        assert!(matches!(
            CodeTable::from_json(bad),
            Err(TableError::InvalidCode { .. })
        ));
    }
}
