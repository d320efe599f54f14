use serde::Serialize;
use tracing::debug;

use crate::core::tag::LanguageTag;
use crate::matching::scoring::{MatchScore, TagMatcher};

/// Result of scoring one candidate against the preference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    /// Position of the candidate in the input
    pub index: usize,

    /// Candidate tag as given (absent candidates are `None`)
    pub candidate: Option<String>,

    /// Match score details
    pub score: MatchScore,
}

/// Default minimum score for a candidate to be reported (drops non-matches)
pub const DEFAULT_MIN_SCORE: i32 = 1;

/// Configuration for the ranking engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    /// Minimum score for including a candidate in results
    pub min_score: i32,
    /// Maximum number of results, unlimited when `None`
    pub limit: Option<usize>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: None,
        }
    }
}

/// Ranks candidate tags against one preference list
pub struct RankingEngine<'a> {
    matcher: TagMatcher<'a>,
    preferences: Vec<Option<LanguageTag>>,
    config: RankingConfig,
}

impl RankingEngine<'static> {
    /// Create an engine over the embedded code table with default configuration
    pub fn new<'p, I>(preferences: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<&'p str>>,
    {
        Self::with_matcher(TagMatcher::new(), preferences)
    }
}

impl<'a> RankingEngine<'a> {
    /// Create an engine with a specific matcher
    pub fn with_matcher<'p, I>(matcher: TagMatcher<'a>, preferences: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<&'p str>>,
    {
        let preferences = preferences
            .into_iter()
            .map(|p| {
                let p: Option<&str> = p.into();
                p.and_then(LanguageTag::parse)
            })
            .collect();

        Self {
            matcher,
            preferences,
            config: RankingConfig::default(),
        }
    }

    /// Replace the ranking configuration
    #[must_use]
    pub fn with_config(mut self, config: RankingConfig) -> Self {
        self.config = config;
        self
    }

    /// Parsed preference list, absent entries included
    pub fn preferences(&self) -> &[Option<LanguageTag>] {
        &self.preferences
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score a single candidate
    pub fn score(&self, candidate: Option<&str>) -> MatchScore {
        let candidate = candidate.and_then(LanguageTag::parse);
        self.matcher
            .evaluate_tags(self.preferences.iter().map(Option::as_ref), candidate.as_ref())
    }

    /// Rank candidates best first.
    ///
    /// The sort is stable, so among equal scores the earlier candidate wins.
    pub fn rank<'c, I>(&self, candidates: I) -> Vec<RankedCandidate>
    where
        I: IntoIterator,
        I::Item: Into<Option<&'c str>>,
    {
        let mut results: Vec<RankedCandidate> = candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| {
                let candidate: Option<&str> = candidate.into();
                RankedCandidate {
                    index,
                    candidate: candidate.map(str::to_string),
                    score: self.score(candidate),
                }
            })
            .collect();

        // Sort by score descending
        results.sort_by(|a, b| b.score.value.cmp(&a.score.value));

        let total = results.len();
        let ranked: Vec<RankedCandidate> = results
            .into_iter()
            .filter(|r| r.score.value >= self.config.min_score)
            .take(self.config.limit.unwrap_or(usize::MAX))
            .collect();

        debug!(
            "Ranked {total} candidates, {} pass min score {}",
            ranked.len(),
            self.config.min_score
        );

        ranked
    }

    /// Find the single best candidate
    pub fn best_candidate<'c, I>(&self, candidates: I) -> Option<RankedCandidate>
    where
        I: IntoIterator,
        I::Item: Into<Option<&'c str>>,
    {
        self.rank(candidates).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MatchClass;
    use crate::matching::scoring::FULL_BASE;

    #[test]
    fn test_rank_orders_by_score() {
        let engine = RankingEngine::new(["pt-BR", "pt", "en"]);
        let ranked = engine.rank(["eng", "por", "pt-BR", "de"]);

        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
        // "por" is more general than "pt-BR": full match on the first entry
        assert_eq!(ranked[0].candidate.as_deref(), Some("por"));
        assert_eq!(ranked[0].score.value, FULL_BASE);
        assert_eq!(ranked[1].candidate.as_deref(), Some("pt-BR"));
        assert_eq!(ranked[1].score.value, FULL_BASE);
        assert_eq!(ranked[2].score.value, FULL_BASE - 2);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let engine = RankingEngine::new(["ja"]);
        let ranked = engine.rank(["jpn", "ja", "JA"]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_rank_filters_non_matches_by_default() {
        let engine = RankingEngine::new(["de"]);
        let ranked = engine.rank([Some("fr"), None, Some(""), Some("ger")]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 3);
    }

    #[test]
    fn test_rank_with_config() {
        let engine = RankingEngine::new(["en", "fr"]).with_config(RankingConfig {
            min_score: 0,
            limit: Some(2),
        });
        let ranked = engine.rank(["de", "fr", "en"]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 2);
        assert_eq!(ranked[1].index, 1);

        let engine = RankingEngine::new(["en"]).with_config(RankingConfig {
            min_score: 0,
            limit: None,
        });
        let ranked = engine.rank(["de", "it"]);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.score.class == MatchClass::NoMatch));
    }

    #[test]
    fn test_best_candidate() {
        let engine = RankingEngine::new(["fr-CA", "fr-FR"]);
        let best = engine.best_candidate(["fr-FR", "fr-CA", "en"]).unwrap();
        assert_eq!(best.index, 1);
        assert_eq!(best.score.class, MatchClass::Full);

        assert!(engine.best_candidate(["en", "de"]).is_none());
        assert!(engine.best_candidate(Vec::<&str>::new()).is_none());
    }

    #[test]
    fn test_empty_preferences_match_nothing() {
        let engine = RankingEngine::new(Vec::<&str>::new());
        assert!(engine.preferences().is_empty());
        assert_eq!(engine.score(Some("en")), MatchScore::none());
        assert!(engine.rank(["en"]).is_empty());
    }

    #[test]
    fn test_absent_preferences_keep_positions() {
        let engine = RankingEngine::new([None, Some("it")]);
        assert_eq!(engine.preferences().len(), 2);
        assert_eq!(engine.score(Some("ita")).value, FULL_BASE - 1);
    }
}
