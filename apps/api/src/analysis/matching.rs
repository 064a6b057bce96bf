//! Keyword matching against lowercased, whitespace-tokenized text.
//!
//! `WholeToken` is the default: a keyword counts only when it equals a whole
//! token, so multi-word phrases ("social media") can never match.
//! `Substring` is the opt-in alternative that lets phrases match.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::domain::UnknownTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    #[default]
    WholeToken,
    Substring,
}

impl FromStr for MatchStrategy {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole_token" | "token" => Ok(MatchStrategy::WholeToken),
            "substring" => Ok(MatchStrategy::Substring),
            other => Err(UnknownTag {
                kind: "match strategy",
                value: other.to_string(),
            }),
        }
    }
}

/// Lowercased view of one input text, prepared once per analysis.
pub struct NormalizedText<'a> {
    lowered: &'a str,
    tokens: HashSet<&'a str>,
}

impl<'a> NormalizedText<'a> {
    /// `lowered` must already be lowercased; tokens borrow from it.
    pub fn new(lowered: &'a str) -> Self {
        Self {
            lowered,
            tokens: lowered.split_whitespace().collect(),
        }
    }

    pub fn contains(&self, keyword: &str, strategy: MatchStrategy) -> bool {
        match strategy {
            MatchStrategy::WholeToken => self.tokens.contains(keyword),
            MatchStrategy::Substring => self.lowered.contains(keyword),
        }
    }
}

/// Keywords split by whether either text contains them, in inventory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordHits {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordHits {
    /// Percentage of matched keywords, rounded half-up and capped at 100.
    /// An empty inventory scores 0.
    pub fn score(&self) -> u8 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            return 0;
        }
        let pct = (self.matched.len() * 100 + total / 2) / total;
        pct.min(100) as u8
    }
}

/// Checks every keyword against both texts.
pub fn match_keywords(
    keywords: &[&str],
    resume_text: &str,
    job_description: &str,
    strategy: MatchStrategy,
) -> KeywordHits {
    let resume_lower = resume_text.to_lowercase();
    let jd_lower = job_description.to_lowercase();
    let resume = NormalizedText::new(&resume_lower);
    let jd = NormalizedText::new(&jd_lower);

    let mut hits = KeywordHits::default();
    for &kw in keywords {
        if resume.contains(kw, strategy) || jd.contains(kw, strategy) {
            hits.matched.push(kw.to_string());
        } else {
            hits.missing.push(kw.to_string());
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_token_requires_exact_token() {
        let hits = match_keywords(
            &["git", "python"],
            "GitHub power user, Python expert",
            "",
            MatchStrategy::WholeToken,
        );
        // "github" and "python," are not whole-token hits.
        assert!(hits.matched.is_empty());
        assert_eq!(hits.missing, vec!["git", "python"]);
    }

    #[test]
    fn test_whole_token_is_case_insensitive() {
        let hits = match_keywords(&["docker"], "DOCKER", "", MatchStrategy::WholeToken);
        assert_eq!(hits.matched, vec!["docker"]);
    }

    #[test]
    fn test_multi_word_keyword_never_matches_whole_token() {
        let hits = match_keywords(
            &["social media"],
            "social media",
            "Social Media",
            MatchStrategy::WholeToken,
        );
        assert!(hits.matched.is_empty());
    }

    #[test]
    fn test_substring_matches_phrases() {
        let hits = match_keywords(
            &["social media", "seo"],
            "",
            "Own our Social Media presence",
            MatchStrategy::Substring,
        );
        assert_eq!(hits.matched, vec!["social media"]);
        assert_eq!(hits.missing, vec!["seo"]);
    }

    #[test]
    fn test_either_text_counts() {
        let hits = match_keywords(
            &["aws", "react"],
            "aws",
            "react",
            MatchStrategy::WholeToken,
        );
        assert_eq!(hits.matched, vec!["aws", "react"]);
    }

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let hits = match_keywords(&["api"], "rest\tapi\nwork", "", MatchStrategy::WholeToken);
        assert_eq!(hits.matched, vec!["api"]);
    }

    #[test]
    fn test_score_rounds_half_up() {
        let hits = KeywordHits {
            matched: vec!["a".into()],
            missing: vec!["b".into(), "c".into(), "d".into(), "e".into(), "f".into(), "g".into(), "h".into()],
        };
        // 1/8 = 12.5% → 13
        assert_eq!(hits.score(), 13);
    }

    #[test]
    fn test_empty_inventory_scores_zero() {
        assert_eq!(KeywordHits::default().score(), 0);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("substring".parse::<MatchStrategy>().unwrap(), MatchStrategy::Substring);
        assert_eq!("WHOLE_TOKEN".parse::<MatchStrategy>().unwrap(), MatchStrategy::WholeToken);
        assert!("fuzzy".parse::<MatchStrategy>().is_err());
    }
}
