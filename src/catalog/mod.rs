//! Language code equivalence table.
//!
//! Track metadata mixes ISO 639-1 two-letter codes (`en`), ISO 639-2
//! terminologic codes (`deu`) and ISO 639-2 bibliographic codes (`ger`). The
//! table maps all of them onto one canonical form so that primary subtags can
//! be compared. An ISO 639 table is compiled into the binary, but custom tables
//! can also be loaded from JSON files.
//!
//! ## Embedded Table
//!
//! The default table lists every ISO 639-1 language with its three-letter
//! codes. Codes outside the table (e.g. `gsw`) are compared verbatim after
//! case-folding.
//!
//! ## Example
//!
//! ```rust
//! use lang_rank::CodeTable;
//!
//! let table = CodeTable::global();
//! assert_eq!(table.normalize_primary("ENG"), "en");
//! assert_eq!(table.normalize_primary("fre"), table.normalize_primary("fra"));
//! assert_eq!(table.normalize_primary("gsw"), "gsw");
//! ```
//!
//! ## Custom Tables
//!
//! ```rust,no_run
//! use lang_rank::CodeTable;
//! use std::path::Path;
//!
//! let table = CodeTable::load_embedded().unwrap();
//! let json = table.to_json().unwrap();
//!
//! let custom = CodeTable::load_from_file(Path::new("my_codes.json")).unwrap();
//! ```

pub mod store;
