use serde::{Deserialize, Serialize};

/// How a candidate tag relates to one preference entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchClass {
    /// Primary languages differ, or either side is absent
    NoMatch,
    /// Primary language agrees but the candidate has subtags the preference
    /// does not account for
    Partial,
    /// Every candidate subtag is covered by the preference, in order
    Full,
}

impl MatchClass {
    /// Classify from the matched prefix length and the candidate's subtag count
    #[must_use]
    pub fn from_prefix(matched: usize, candidate_len: usize) -> Self {
        if matched == 0 {
            Self::NoMatch
        } else if matched >= candidate_len {
            Self::Full
        } else {
            Self::Partial
        }
    }

    #[must_use]
    pub fn is_match(self) -> bool {
        self != Self::NoMatch
    }
}

impl std::fmt::Display for MatchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => write!(f, "no match"),
            Self::Partial => write!(f, "partial"),
            Self::Full => write!(f, "full"),
        }
    }
}
