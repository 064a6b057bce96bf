//! Scoring engine — keyword-overlap match score plus categorized suggestions.
//!
//! `analyze` is pure and total: same input, same result, no failure path.
//! `Analyzer` is the async seam carried in `AppState` as `Arc<dyn Analyzer>`;
//! the default `KeywordAnalyzer` adds a cosmetic processing delay before scoring.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::domain::Domain;
use crate::analysis::keywords::domain_keywords;
use crate::analysis::matching::{match_keywords, MatchStrategy};
use crate::analysis::suggestions::{build_suggestions, SuggestionsByCategory};

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub job_description: String,
    pub domain: Domain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: u8, // 0 – 100
    pub suggestions: SuggestionsByCategory,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub strategy: MatchStrategy,
}

/// Scores `resume_text` and `job_description` against the keyword inventory of `domain`.
pub fn analyze(
    resume_text: &str,
    job_description: &str,
    domain: Domain,
    strategy: MatchStrategy,
) -> AnalysisResult {
    let hits = match_keywords(domain_keywords(domain), resume_text, job_description, strategy);
    let match_score = hits.score();

    AnalysisResult {
        match_score,
        suggestions: build_suggestions(domain, match_score),
        matched_keywords: hits.matched,
        missing_keywords: hits.missing,
        strategy,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Async seam
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, input: &AnalysisInput) -> AnalysisResult;
}

/// Keyword analyzer with a fixed processing delay. Never fails.
pub struct KeywordAnalyzer {
    pub strategy: MatchStrategy,
    pub delay: Duration,
}

impl KeywordAnalyzer {
    pub fn new(strategy: MatchStrategy, delay: Duration) -> Self {
        Self { strategy, delay }
    }
}

#[async_trait]
impl Analyzer for KeywordAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = analyze(
            &input.resume_text,
            &input.job_description,
            input.domain,
            self.strategy,
        );
        info!(
            domain = %input.domain,
            score = result.match_score,
            matched = result.matched_keywords.len(),
            strategy = ?self.strategy,
            "Resume analysis complete"
        );
        result
    }
}
