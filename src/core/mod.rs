//! Core data types for language tag matching.
//!
//! - [`LanguageTag`](tag::LanguageTag): a tag split into subtags on `-`
//! - [`MatchClass`](types::MatchClass): how a candidate relates to one preference
//!
//! ## Tag Shapes
//!
//! | Tag | Primary | Other subtags |
//! |-----|---------|---------------|
//! | `en` | `en` | none |
//! | `fr-CA` | `fr` | region `ca` |
//! | `gsw-u-sd-chzh` | `gsw` | extension `u`, `sd`, `chzh` |
//!
//! Only the primary subtag is normalized (through the code table). Everything
//! after it is compared as an opaque, case-insensitive token.

pub mod tag;
pub mod types;
