// Scoring engine: domain keyword inventories, matching, canned suggestions.
// Pure and synchronous; the only async piece is the `Analyzer` delay wrapper.

pub mod domain;
pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod matching;
pub mod suggestions;
