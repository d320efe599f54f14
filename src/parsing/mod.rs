//! Parsers for the places language tags come from.
//!
//! This module provides parsers for:
//!
//! - **Preference lists**: comma-separated option strings such as `"pt,it,pol,ger"`,
//!   or files with one tag per line
//! - **File names**: language hints in external subtitle names such as
//!   `movie.en.forced.srt` or `movie[jpn].srt`
//!
//! ## Example
//!
//! ```rust
//! use lang_rank::parsing::list::parse_language_list;
//! use lang_rank::parsing::filename::guess_language_from_filename;
//!
//! let prefs = parse_language_list("pt-BR, pt,,en").unwrap();
//! assert_eq!(prefs.len(), 4);
//! assert!(prefs[2].is_none());
//!
//! let guess = guess_language_from_filename("movie.pt-BR.forced.srt").unwrap();
//! assert_eq!(guess.tag, "pt-BR");
//! assert!(guess.flags.forced);
//! ```

use thiserror::Error;

use crate::matching::scoring::MAX_PREFERENCES;

pub mod filename;
pub mod list;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many preferences: {0} exceeds maximum allowed ({MAX_PREFERENCES})")]
    TooManyPreferences(usize),
}
