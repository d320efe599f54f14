//! Language tag matching and candidate ranking.
//!
//! This module provides the core matching functionality:
//!
//! - [`TagMatcher`](scoring::TagMatcher): scores one candidate against a preference list
//! - [`MatchScore`](scoring::MatchScore): the winning score with its classification
//! - [`RankingEngine`](engine::RankingEngine): ranks many candidates against one list
//!
//! ## Matching Algorithm
//!
//! For each preference entry, both tags are split on `-` and compared subtag
//! by subtag. The primary subtags go through the code table first, so `en`,
//! `eng` and `ENG` are equal. The number of equal leading subtags decides the
//! class:
//!
//! 1. **No match**: the primary subtags differ
//! 2. **Full**: every candidate subtag is covered (the candidate is equal to,
//!    or more general than, the preference)
//! 3. **Partial**: the tags diverge, or the candidate is more specific than
//!    the preference
//!
//! ## Scoring
//!
//! | Class | Score at position `i` |
//! |-------|----------------------|
//! | Full | `FULL_BASE - i` |
//! | Partial | `FULL_BASE - PARTIAL_PENALTY - i` |
//! | No match | `0` |
//!
//! The candidate's score is the best over all entries. `PARTIAL_PENALTY`
//! exceeds the longest ranked list, so a full match always beats a partial one.
//!
//! ## Example
//!
//! ```rust
//! use lang_rank::{RankingEngine, MatchClass};
//!
//! let engine = RankingEngine::new(["fr-CA", "fr-FR", "en"]);
//! let best = engine.best_candidate(["eng", "fr-FR", "de"]).unwrap();
//!
//! assert_eq!(best.candidate.as_deref(), Some("fr-FR"));
//! assert_eq!(best.score.class, MatchClass::Full);
//! ```

pub mod engine;
pub mod scoring;
