//! Canned suggestion catalogue.
//!
//! Skills feedback comes from a per-domain `DomainProfile`; the experience, education
//! and formatting lists are shared by every domain and never depend on the score.

use serde::{Deserialize, Serialize};

use crate::analysis::domain::{Category, Domain, Severity};

/// Scores strictly above this read as a strong skills match.
pub const STRONG_MATCH_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Suggestion {
    fn new(severity: Severity, message: &str, detail: Option<&str>) -> Self {
        Self {
            severity,
            message: message.to_string(),
            detail: detail.map(str::to_string),
        }
    }
}

/// One list per category. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsByCategory {
    pub skills: Vec<Suggestion>,
    pub experience: Vec<Suggestion>,
    pub education: Vec<Suggestion>,
    pub formatting: Vec<Suggestion>,
}

impl SuggestionsByCategory {
    pub fn get(&self, category: Category) -> &[Suggestion] {
        match category {
            Category::Skills => &self.skills,
            Category::Experience => &self.experience,
            Category::Education => &self.education,
            Category::Formatting => &self.formatting,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Domain profiles
// ────────────────────────────────────────────────────────────────────────────

/// Skills wording for one domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainProfile {
    pub strong: &'static str,
    pub weak: &'static str,
    pub weak_detail: &'static str,
    pub growth: &'static str,
    pub growth_detail: &'static str,
}

/// Indexed by `Domain` discriminant; order must follow `Domain::ALL`.
static PROFILES: [(Domain, DomainProfile); 4] = [
    (
        Domain::Software,
        DomainProfile {
            strong: "Strong technical skills alignment with job requirements",
            weak: "Technical skills could be better aligned with job requirements",
            weak_detail: "Consider adding experience with key technologies mentioned in the job description",
            growth: "Consider expanding cloud and DevOps skills",
            growth_detail: "Include experience with AWS, Docker, or Kubernetes if applicable",
        },
    ),
    (
        Domain::Marketing,
        DomainProfile {
            strong: "Strong digital marketing skills present",
            weak: "Digital marketing skills could be enhanced",
            weak_detail: "Add experience with modern marketing tools and platforms",
            growth: "Analytics and data-driven marketing skills could be expanded",
            growth_detail: "Highlight experience with Google Analytics, SEO tools, and marketing automation platforms",
        },
    ),
    (
        Domain::Finance,
        DomainProfile {
            strong: "Strong financial analysis skills highlighted",
            weak: "Financial analysis skills could be more prominent",
            weak_detail: "Emphasize experience with financial modeling and analysis tools",
            growth: "Consider adding more specific financial software expertise",
            growth_detail: "Include experience with Bloomberg Terminal, Excel financial modeling, or relevant financial software",
        },
    ),
    (
        Domain::Healthcare,
        DomainProfile {
            strong: "Strong healthcare domain knowledge demonstrated",
            weak: "Healthcare-specific expertise could be enhanced",
            weak_detail: "Highlight relevant certifications and healthcare systems experience",
            growth: "Healthcare compliance and regulations knowledge could be expanded",
            growth_detail: "Emphasize experience with HIPAA compliance and healthcare regulations",
        },
    ),
];

pub fn domain_profile(domain: Domain) -> &'static DomainProfile {
    &PROFILES[domain as usize].1
}

// ────────────────────────────────────────────────────────────────────────────
// Shared lists
// ────────────────────────────────────────────────────────────────────────────

/// (severity, message, detail)
type Canned = (Severity, &'static str, Option<&'static str>);

const EXPERIENCE: [Canned; 2] = [
    (Severity::Success, "Work experience is presented chronologically", None),
    (
        Severity::Warning,
        "Quantifiable achievements could be improved",
        Some("Add specific metrics, percentages, and results to your achievements"),
    ),
];

const EDUCATION: [Canned; 2] = [
    (Severity::Success, "Education section is well-formatted", None),
    (
        Severity::Warning,
        "Consider adding relevant certifications",
        Some("Include industry-specific certifications and continuing education"),
    ),
];

const FORMATTING: [Canned; 2] = [
    (Severity::Success, "Resume length is appropriate", None),
    (
        Severity::Warning,
        "Action verbs could be more impactful",
        Some(r#"Use strong action verbs to begin bullet points (e.g., "Implemented," "Developed," "Led")"#),
    ),
];

fn from_canned(list: &[Canned]) -> Vec<Suggestion> {
    list.iter()
        .map(|(severity, message, detail)| Suggestion::new(*severity, message, *detail))
        .collect()
}

/// Skills feedback for `domain` at `match_score`.
pub fn skills_suggestions(domain: Domain, match_score: u8) -> Vec<Suggestion> {
    let profile = domain_profile(domain);
    let headline = if match_score > STRONG_MATCH_THRESHOLD {
        Suggestion::new(Severity::Success, profile.strong, None)
    } else {
        Suggestion::new(Severity::Warning, profile.weak, Some(profile.weak_detail))
    };
    vec![
        headline,
        Suggestion::new(Severity::Warning, profile.growth, Some(profile.growth_detail)),
    ]
}

pub fn build_suggestions(domain: Domain, match_score: u8) -> SuggestionsByCategory {
    SuggestionsByCategory {
        skills: skills_suggestions(domain, match_score),
        experience: from_canned(&EXPERIENCE),
        education: from_canned(&EDUCATION),
        formatting: from_canned(&FORMATTING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_follow_domain_order() {
        for (i, domain) in Domain::ALL.into_iter().enumerate() {
            assert_eq!(PROFILES[i].0, domain);
        }
    }

    #[test]
    fn test_threshold_is_strictly_greater_than_70() {
        let at = skills_suggestions(Domain::Software, 70);
        assert_eq!(at[0].severity, Severity::Warning);
        assert!(at[0].detail.is_some());

        let above = skills_suggestions(Domain::Software, 71);
        assert_eq!(above[0].severity, Severity::Success);
        assert_eq!(above[0].detail, None);
        assert_eq!(
            above[0].message,
            "Strong technical skills alignment with job requirements"
        );
    }

    #[test]
    fn test_second_skills_entry_is_always_warning() {
        for domain in Domain::ALL {
            for score in [0, 50, 100] {
                let s = skills_suggestions(domain, score);
                assert_eq!(s.len(), 2);
                assert_eq!(s[1].severity, Severity::Warning);
                assert!(s[1].detail.is_some());
            }
        }
    }

    #[test]
    fn test_shared_lists_do_not_vary() {
        let a = build_suggestions(Domain::Finance, 0);
        let b = build_suggestions(Domain::Marketing, 100);
        for category in [Category::Experience, Category::Education, Category::Formatting] {
            assert_eq!(a.get(category), b.get(category));
            assert_eq!(a.get(category).len(), 2);
            assert_eq!(a.get(category)[0].severity, Severity::Success);
            assert_eq!(a.get(category)[1].severity, Severity::Warning);
        }
    }

    #[test]
    fn test_detail_is_omitted_from_json_when_absent() {
        let s = Suggestion::new(Severity::Success, "ok", None);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json, serde_json::json!({"severity": "success", "message": "ok"}));
    }

    #[test]
    fn test_serializes_all_four_categories() {
        let json = serde_json::to_value(build_suggestions(Domain::Healthcare, 10)).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["skills", "experience", "education", "formatting"] {
            assert!(obj.contains_key(key), "{key}");
        }
        assert_eq!(obj.len(), 4);
    }
}
