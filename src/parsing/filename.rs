use serde::Serialize;

use crate::core::tag::SUBTAG_DELIMITER;
use crate::utils::validation::{is_primary_code, is_secondary_subtag};

/// Track markers that may follow the language in an external file name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrackFlags {
    /// `.forced`
    pub forced: bool,
    /// `.default`
    pub default: bool,
    /// `.sdh` or `.cc`
    pub hearing_impaired: bool,
}

impl TrackFlags {
    /// Record a marker; returns false if `suffix` is not a known marker
    fn apply(&mut self, suffix: &str) -> bool {
        match suffix.to_ascii_lowercase().as_str() {
            "forced" => self.forced = true,
            "default" => self.default = true,
            "sdh" | "cc" => self.hearing_impaired = true,
            _ => return false,
        }
        true
    }
}

/// Language found in a file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameLanguage {
    /// Tag as written in the name (e.g., "pt-BR")
    pub tag: String,

    /// Byte offset of the tag in the input
    pub start: usize,

    /// Markers found after the tag
    pub flags: TrackFlags,
}

/// Guess the language of an external track from its file name.
///
/// Recognizes `name.<lang>.ext` and `name[<lang>].ext`, optionally followed
/// by `.forced`, `.default`, `.sdh` or `.cc` before the extension. Directory
/// components are ignored. The language must look like a tag: a 2 or 3 letter
/// primary subtag followed by short alphanumeric subtags.
///
/// ```
/// use lang_rank::parsing::filename::guess_language_from_filename;
///
/// let guess = guess_language_from_filename("Show.S01E01.de.sdh.srt").unwrap();
/// assert_eq!(guess.tag, "de");
/// assert!(guess.flags.hearing_impaired);
///
/// assert!(guess_language_from_filename("movie.srt").is_none());
/// ```
pub fn guess_language_from_filename(name: &str) -> Option<FilenameLanguage> {
    let base = name.rfind(|c: char| c == '/' || c == '\\').map_or(0, |i| i + 1);
    let file = &name[base..];

    // Strip extension and surrounding whitespace
    let stem = file.rfind('.').map_or(file, |i| &file[..i]);
    let lead = stem.len() - stem.trim_start().len();
    let mut end = stem.trim_end().len();
    if end < lead + 2 {
        return None;
    }

    let mut flags = TrackFlags::default();
    while let Some(dot) = file[lead..end].rfind('.') {
        let dot = lead + dot;
        if !flags.apply(&file[dot + 1..end]) {
            break;
        }
        end = dot;
    }

    let rest = &file[lead..end];
    let (token_start, token) = if let Some(inner) = rest.strip_suffix(']') {
        let open = inner.rfind('[')?;
        (open + 1, &inner[open + 1..])
    } else {
        let dot = rest.rfind('.')?;
        (dot + 1, &rest[dot + 1..])
    };

    if !looks_like_tag(token) {
        return None;
    }

    Some(FilenameLanguage {
        tag: token.to_string(),
        start: base + lead + token_start,
        flags,
    })
}

fn looks_like_tag(token: &str) -> bool {
    let mut subtags = token.split(SUBTAG_DELIMITER);
    subtags.next().is_some_and(is_primary_code) && subtags.all(is_secondary_subtag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_language() {
        let guess = guess_language_from_filename("movie.en.srt").unwrap();
        assert_eq!(guess.tag, "en");
        assert_eq!(guess.start, 6);
        assert_eq!(guess.flags, TrackFlags::default());
    }

    #[test]
    fn test_bracket_language() {
        let guess = guess_language_from_filename("movie[jpn].ass").unwrap();
        assert_eq!(guess.tag, "jpn");
        assert_eq!(guess.start, 6);
    }

    #[test]
    fn test_region_and_flags() {
        let name = "movie.pt-BR.forced.default.srt";
        let guess = guess_language_from_filename(name).unwrap();
        assert_eq!(guess.tag, "pt-BR");
        assert_eq!(&name[guess.start..guess.start + guess.tag.len()], "pt-BR");
        assert!(guess.flags.forced);
        assert!(guess.flags.default);
        assert!(!guess.flags.hearing_impaired);
    }

    #[test]
    fn test_flags_are_case_insensitive() {
        let guess = guess_language_from_filename("movie.fr.FORCED.CC.srt").unwrap();
        assert_eq!(guess.tag, "fr");
        assert!(guess.flags.forced);
        assert!(guess.flags.hearing_impaired);
    }

    #[test]
    fn test_directories_are_ignored() {
        let name = "/media/some.dir/Show.S01E01.de.srt";
        let guess = guess_language_from_filename(name).unwrap();
        assert_eq!(guess.tag, "de");
        assert_eq!(&name[guess.start..guess.start + 2], "de");

        assert!(guess_language_from_filename("C:\\subs.en\\movie.srt").is_none());
    }

    #[test]
    fn test_hindi_is_not_a_flag() {
        let guess = guess_language_from_filename("movie.hi.srt").unwrap();
        assert_eq!(guess.tag, "hi");
        assert!(!guess.flags.hearing_impaired);
    }

    #[test]
    fn test_no_language() {
        assert!(guess_language_from_filename("movie.srt").is_none());
        assert!(guess_language_from_filename("movie.english.srt").is_none());
        assert!(guess_language_from_filename("movie.e1.srt").is_none());
        assert!(guess_language_from_filename("movie.en-toolongsubtag.srt").is_none());
        assert!(guess_language_from_filename("movie.forced.srt").is_none());
        assert!(guess_language_from_filename("a.srt").is_none());
        assert!(guess_language_from_filename("").is_none());
        assert!(guess_language_from_filename("movie[].srt").is_none());
    }

    #[test]
    fn test_surrounding_whitespace() {
        let name = "  movie.nl  .srt";
        let guess = guess_language_from_filename(name).unwrap();
        assert_eq!(guess.tag, "nl");
        assert_eq!(&name[guess.start..guess.start + 2], "nl");
    }
}
