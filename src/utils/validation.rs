//! Centralized validation and helper functions.

use crate::matching::scoring::MAX_PREFERENCES;

/// Longest subtag accepted after the primary one in file names
pub const MAX_SUBTAG_LENGTH: usize = 8;

/// Check that a string is non-empty and made of ASCII letters only.
///
/// # Examples
///
/// ```
/// use lang_rank::utils::validation::is_alpha_code;
///
/// assert!(is_alpha_code("eng"));
/// assert!(!is_alpha_code("en1"));
/// assert!(!is_alpha_code(""));
/// ```
#[must_use]
pub fn is_alpha_code(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// A primary language subtag as it appears in the wild: 2 or 3 ASCII letters.
///
/// # Examples
///
/// ```
/// use lang_rank::utils::validation::is_primary_code;
///
/// assert!(is_primary_code("en"));
/// assert!(is_primary_code("GSW"));
/// assert!(!is_primary_code("english"));
/// ```
#[must_use]
pub fn is_primary_code(s: &str) -> bool {
    (2..=3).contains(&s.len()) && is_alpha_code(s)
}

/// A non-primary subtag: 1 to 8 ASCII alphanumerics.
#[must_use]
pub fn is_secondary_subtag(s: &str) -> bool {
    (1..=MAX_SUBTAG_LENGTH).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check if adding another preference would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new entry.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_preference_limit(prefs.len()).is_some() {
///     return Err(...);
/// }
/// prefs.push(tag); // Safe to add
/// ```
#[must_use]
pub fn check_preference_limit(count: usize) -> Option<String> {
    if count >= MAX_PREFERENCES {
        Some(format!(
            "Too many preferences: adding another would exceed maximum of {MAX_PREFERENCES}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha_code() {
        assert!(is_alpha_code("a"));
        assert!(is_alpha_code("Eng"));
        assert!(!is_alpha_code("e-n"));
        assert!(!is_alpha_code("é"));
    }

    #[test]
    fn test_is_primary_code() {
        assert!(is_primary_code("pt"));
        assert!(is_primary_code("pol"));
        assert!(!is_primary_code("p"));
        assert!(!is_primary_code("polx"));
        assert!(!is_primary_code("p1"));
    }

    #[test]
    fn test_is_secondary_subtag() {
        assert!(is_secondary_subtag("u"));
        assert!(is_secondary_subtag("BR"));
        assert!(is_secondary_subtag("419"));
        assert!(is_secondary_subtag("valencia"));
        assert!(!is_secondary_subtag(""));
        assert!(!is_secondary_subtag("toolongxx"));
        assert!(!is_secondary_subtag("a_b"));
    }

    #[test]
    fn test_check_preference_limit() {
        assert!(check_preference_limit(0).is_none());
        assert!(check_preference_limit(MAX_PREFERENCES - 1).is_none());
        assert!(check_preference_limit(MAX_PREFERENCES).is_some());
    }
}
