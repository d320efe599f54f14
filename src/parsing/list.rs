use std::path::Path;

use tracing::debug;

use crate::parsing::ParseError;
use crate::utils::validation::check_preference_limit;

/// Separator between entries of a preference option string
pub const LIST_SEPARATOR: char = ',';

/// Parse a comma-separated preference list.
///
/// Entries are trimmed. Empty entries stay in the list as `None` so that every
/// later entry keeps its position.
///
/// # Errors
///
/// Returns `ParseError::TooManyPreferences` if the list is longer than the
/// number of distinctly ranked positions.
pub fn parse_language_list(text: &str) -> Result<Vec<Option<String>>, ParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    collect_entries(text.split(LIST_SEPARATOR))
}

/// Parse a preference list file with one tag per line.
///
/// Blank lines and lines starting with `#` are ignored; unlike the option
/// string form, a file has no way to mark an absent entry.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManyPreferences` if the limit is exceeded.
pub fn parse_language_list_file(path: &Path) -> Result<Vec<Option<String>>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_language_list_text(&content)
}

/// Parse line-oriented preference list text
///
/// # Errors
///
/// Returns `ParseError::TooManyPreferences` if the limit is exceeded.
pub fn parse_language_list_text(text: &str) -> Result<Vec<Option<String>>, ParseError> {
    collect_entries(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

fn collect_entries<'a>(
    mut entries: impl Iterator<Item = &'a str>,
) -> Result<Vec<Option<String>>, ParseError> {
    let mut prefs = Vec::new();

    while let Some(entry) = entries.next() {
        if check_preference_limit(prefs.len()).is_some() {
            return Err(ParseError::TooManyPreferences(
                prefs.len() + 1 + entries.count(),
            ));
        }

        let entry = entry.trim();
        prefs.push((!entry.is_empty()).then(|| entry.to_string()));
    }

    debug!("Parsed {} language preferences", prefs.len());
    Ok(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::MAX_PREFERENCES;

    #[test]
    fn test_parse_simple_list() {
        let prefs = parse_language_list("pt,it,pol,ger").unwrap();
        assert_eq!(
            prefs,
            vec![
                Some("pt".to_string()),
                Some("it".to_string()),
                Some("pol".to_string()),
                Some("ger".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_trims_and_keeps_empty_entries() {
        let prefs = parse_language_list(" fr-CA , ,fr-FR,").unwrap();
        assert_eq!(
            prefs,
            vec![
                Some("fr-CA".to_string()),
                None,
                Some("fr-FR".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(parse_language_list("").unwrap().is_empty());
        assert!(parse_language_list("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_too_many() {
        let ok = vec!["en"; MAX_PREFERENCES].join(",");
        assert_eq!(parse_language_list(&ok).unwrap().len(), MAX_PREFERENCES);

        let too_many = vec!["en"; MAX_PREFERENCES + 1].join(",");
        assert!(matches!(
            parse_language_list(&too_many),
            Err(ParseError::TooManyPreferences(n)) if n == MAX_PREFERENCES + 1
        ));
    }

    #[test]
    fn test_parse_list_text() {
        let text = "# audio preferences\njpn\n\n  en-US  \n# trailing comment\n";
        let prefs = parse_language_list_text(text).unwrap();
        assert_eq!(
            prefs,
            vec![Some("jpn".to_string()), Some("en-US".to_string())]
        );
    }
}
