use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::store::CodeTable;
use crate::core::tag::LanguageTag;
use crate::core::types::MatchClass;

/// Score of a full match against the first preference
pub const FULL_BASE: i32 = i32::MAX;

/// Gap between the FULL and PARTIAL score bands
///
/// Must exceed the longest preference list whose positions are ranked, so
/// that position decrements never carry a FULL match below a PARTIAL one.
pub const PARTIAL_PENALTY: i32 = 1000;

/// Longest preference list with fully distinct positions.
///
/// Entries beyond this are ranked as if they sat at this position.
#[allow(clippy::cast_sign_loss)]
pub const MAX_PREFERENCES: usize = (PARTIAL_PENALTY - 1) as usize;

/// Best match of a candidate against a preference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    /// Ranking value; 0 means no match, `FULL_BASE` is the best possible
    pub value: i32,

    /// Classification of the winning preference
    pub class: MatchClass,

    /// Position of the winning preference in the list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Winning preference as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
}

impl MatchScore {
    /// The zero score: nothing matched
    #[must_use]
    pub fn none() -> Self {
        Self {
            value: 0,
            class: MatchClass::NoMatch,
            position: None,
            preference: None,
        }
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.class.is_match()
    }
}

impl Default for MatchScore {
    fn default() -> Self {
        Self::none()
    }
}

/// Score for a classified match at a list position.
///
/// Positions past `MAX_PREFERENCES` are clamped so the result stays positive
/// and inside its class band.
#[must_use]
pub fn position_score(class: MatchClass, position: usize) -> i32 {
    let base = match class {
        MatchClass::NoMatch => return 0,
        MatchClass::Full => FULL_BASE,
        MatchClass::Partial => FULL_BASE - PARTIAL_PENALTY,
    };
    let rank = i32::try_from(position.min(MAX_PREFERENCES)).unwrap_or(PARTIAL_PENALTY - 1);
    base - rank
}

/// Length of the longest run of equal leading subtags, ignoring ASCII case
pub fn common_prefix_len<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> usize {
    a.iter()
        .zip(b)
        .take_while(|(x, y)| x.as_ref().eq_ignore_ascii_case(y.as_ref()))
        .count()
}

/// Scores candidate tags against preference lists
#[derive(Debug, Clone, Copy)]
pub struct TagMatcher<'a> {
    table: &'a CodeTable,
}

impl TagMatcher<'static> {
    /// Matcher backed by the embedded code table
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: CodeTable::global(),
        }
    }
}

impl Default for TagMatcher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TagMatcher<'a> {
    /// Matcher backed by a custom code table
    #[must_use]
    pub fn with_table(table: &'a CodeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CodeTable {
        self.table
    }

    /// Number of leading subtags the two tags share.
    ///
    /// The primary subtags are compared through the code table; a mismatch
    /// there means nothing is shared.
    pub fn matched_len(&self, preference: &LanguageTag, candidate: &LanguageTag) -> usize {
        if !self
            .table
            .same_primary(preference.primary(), candidate.primary())
        {
            return 0;
        }
        1 + common_prefix_len(&preference.subtags()[1..], &candidate.subtags()[1..])
    }

    /// Classify one preference entry against the candidate
    pub fn classify(&self, preference: &LanguageTag, candidate: &LanguageTag) -> MatchClass {
        MatchClass::from_prefix(self.matched_len(preference, candidate), candidate.len())
    }

    /// Best match of a parsed candidate against parsed preferences.
    ///
    /// `None` entries are skipped but still occupy their position.
    pub fn evaluate_tags<'p, I>(&self, preferences: I, candidate: Option<&LanguageTag>) -> MatchScore
    where
        I: IntoIterator<Item = Option<&'p LanguageTag>>,
    {
        let Some(candidate) = candidate else {
            return MatchScore::none();
        };

        let mut best = MatchScore::none();
        let mut clamped = false;

        for (position, preference) in preferences.into_iter().enumerate() {
            let Some(preference) = preference else {
                continue;
            };

            let class = self.classify(preference, candidate);
            if !class.is_match() {
                continue;
            }

            clamped |= position > MAX_PREFERENCES;
            let value = position_score(class, position);
            debug!(
                "{} vs preference #{position} {}: {class} ({value})",
                candidate, preference
            );

            if value > best.value {
                best = MatchScore {
                    value,
                    class,
                    position: Some(position),
                    preference: Some(preference.as_str().to_string()),
                };
            }
        }

        if clamped {
            warn!(
                "Preference list longer than {MAX_PREFERENCES} entries; later positions share one rank"
            );
        }

        best
    }

    /// Best match of a candidate string against preference strings.
    ///
    /// Absent (`None`) or empty strings never match.
    pub fn evaluate<'p, I>(&self, preferences: I, candidate: Option<&str>) -> MatchScore
    where
        I: IntoIterator,
        I::Item: Into<Option<&'p str>>,
    {
        let Some(candidate) = candidate.and_then(LanguageTag::parse) else {
            return MatchScore::none();
        };

        let parsed: Vec<Option<LanguageTag>> = preferences
            .into_iter()
            .map(|p| {
                let p: Option<&str> = p.into();
                p.and_then(LanguageTag::parse)
            })
            .collect();

        self.evaluate_tags(parsed.iter().map(Option::as_ref), Some(&candidate))
    }

    /// Ranking value of a candidate string against preference strings
    pub fn score<'p, I>(&self, preferences: I, candidate: Option<&str>) -> i32
    where
        I: IntoIterator,
        I::Item: Into<Option<&'p str>>,
    {
        self.evaluate(preferences, candidate).value
    }
}

/// Score how well `candidate` satisfies an ordered preference list.
///
/// Returns 0 for no match or absent input, `FULL_BASE` for a full match on the
/// first preference, and something in between otherwise. Uses the embedded
/// code table.
///
/// ```
/// use lang_rank::score_language_match;
/// use lang_rank::matching::scoring::{FULL_BASE, PARTIAL_PENALTY};
///
/// assert_eq!(score_language_match(["fr-CA", "fr-FR"], Some("fr-FR")), FULL_BASE - 1);
/// assert_eq!(score_language_match(["fr-FR"], Some("fr-CA")), FULL_BASE - PARTIAL_PENALTY);
/// assert_eq!(score_language_match(["en"], None), 0);
/// ```
pub fn score_language_match<'p, I>(preferences: I, candidate: Option<&str>) -> i32
where
    I: IntoIterator,
    I::Item: Into<Option<&'p str>>,
{
    TagMatcher::new().score(preferences, candidate)
}
