//! # lang-rank
//!
//! A library for scoring media track languages against a user's preferences.
//!
//! Audio and subtitle tracks are labelled with language tags of every shape:
//! `en`, `eng`, `fre`, `fr-CA`, `gsw-u-sd-chzh`. A user states an ordered list
//! of preferred languages, and a player needs to know which track fits that list
//! best.
//!
//! `lang-rank` solves this by computing one integer score per candidate tag.
//! Higher is better, 0 means no match, and the scores of different candidates
//! can be compared directly.
//!
//! ## Features
//!
//! - **Code aliasing**: ISO 639-1, 639-2/T and 639-2/B codes for the same language are equal
//! - **Subtag matching**: region, script and extension subtags refine a match
//! - **Generality forgiveness**: `fr` satisfies a preference for `fr-CA` fully
//! - **Specificity penalty**: `fr-CA` satisfies a preference for `fr` only partially
//! - **Deterministic ties**: earlier preferences always win within a class
//! - **Total**: empty or absent input scores 0 instead of failing
//!
//! ## Example
//!
//! ```rust
//! use lang_rank::score_language_match;
//!
//! let prefs = ["fr-CA", "fr-FR"];
//!
//! assert_eq!(score_language_match(prefs, Some("fr-CA")), i32::MAX);
//! assert_eq!(score_language_match(prefs, Some("fre")), i32::MAX);
//! assert_eq!(score_language_match(prefs, Some("fr-FR")), i32::MAX - 1);
//! assert_eq!(score_language_match(prefs, Some("en")), 0);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: ISO 639 code equivalence table
//! - [`core`]: Language tags and match classes
//! - [`matching`]: Tag matcher, scoring and candidate ranking
//! - [`parsing`]: Preference lists and file name language hints
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{normalize_primary, CodeTable};
pub use core::tag::LanguageTag;
pub use core::types::MatchClass;
pub use matching::engine::{RankedCandidate, RankingConfig, RankingEngine};
pub use matching::scoring::{
    score_language_match, MatchScore, TagMatcher, FULL_BASE, PARTIAL_PENALTY,
};
