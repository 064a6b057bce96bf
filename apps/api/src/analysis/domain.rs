//! Closed enumerations accepted at the input boundary: industry domain, visual template,
//! suggestion category and severity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tag outside its closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Domain
// ────────────────────────────────────────────────────────────────────────────

/// Professional field that selects the keyword set and skill templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Software,
    Marketing,
    Finance,
    Healthcare,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Software,
        Domain::Marketing,
        Domain::Finance,
        Domain::Healthcare,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Software => "software",
            Domain::Marketing => "marketing",
            Domain::Finance => "finance",
            Domain::Healthcare => "healthcare",
        }
    }

    /// Human-facing name shown in domain pickers.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Software => "Software Development",
            Domain::Marketing => "Marketing",
            Domain::Finance => "Finance",
            Domain::Healthcare => "Healthcare",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTag {
                kind: "domain",
                value: s.to_string(),
            })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template
// ────────────────────────────────────────────────────────────────────────────

/// Visual resume template. Carried through the session for export only;
/// never consulted by scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
    Professional,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Modern,
        Template::Classic,
        Template::Minimal,
        Template::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
            Template::Professional => "professional",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTag {
                kind: "template",
                value: s.to_string(),
            })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestion tags
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Experience,
    Education,
    Formatting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parses_case_insensitively() {
        assert_eq!("Finance".parse::<Domain>().unwrap(), Domain::Finance);
        assert_eq!(" healthcare ".parse::<Domain>().unwrap(), Domain::Healthcare);
    }

    #[test]
    fn test_unknown_domain_is_rejected() {
        let err = "legal".parse::<Domain>().unwrap_err();
        assert_eq!(err.kind, "domain");
        assert_eq!(err.to_string(), "unknown domain 'legal'");
    }

    #[test]
    fn test_domain_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Domain::Software).unwrap(), r#""software""#);
        let d: Domain = serde_json::from_str(r#""marketing""#).unwrap();
        assert_eq!(d, Domain::Marketing);
        assert!(serde_json::from_str::<Domain>(r#""law""#).is_err());
    }

    #[test]
    fn test_template_defaults_to_modern() {
        assert_eq!(Template::default(), Template::Modern);
        assert_eq!("professional".parse::<Template>().unwrap(), Template::Professional);
    }

    #[test]
    fn test_domain_labels() {
        assert_eq!(Domain::Software.label(), "Software Development");
        assert_eq!(Domain::Healthcare.to_string(), "healthcare");
    }
}
