//! Per-domain keyword inventories. Lowercase, ordered, fixed at compile time.

use crate::analysis::domain::Domain;

const SOFTWARE: &[&str] = &[
    "programming",
    "development",
    "software",
    "web",
    "api",
    "database",
    "cloud",
    "agile",
    "git",
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "devops",
    "aws",
    "docker",
    "kubernetes",
    "microservices",
    "ci/cd",
];

const MARKETING: &[&str] = &[
    "marketing",
    "social media",
    "seo",
    "content",
    "analytics",
    "campaign",
    "brand",
    "strategy",
    "digital marketing",
    "email marketing",
    "ppc",
    "conversion",
    "market research",
    "advertising",
    "crm",
    "lead generation",
    "marketing automation",
    "google analytics",
    "social media marketing",
    "content strategy",
];

const FINANCE: &[&str] = &[
    "financial",
    "accounting",
    "budget",
    "analysis",
    "investment",
    "risk",
    "portfolio",
    "forecasting",
    "banking",
    "trading",
    "compliance",
    "audit",
    "tax",
    "revenue",
    "profit",
    "financial planning",
    "wealth management",
    "financial analysis",
    "financial reporting",
    "business intelligence",
];

const HEALTHCARE: &[&str] = &[
    "patient",
    "clinical",
    "medical",
    "healthcare",
    "treatment",
    "diagnosis",
    "care",
    "health",
    "nursing",
    "hospital",
    "pharmacy",
    "patient care",
    "medical records",
    "hipaa",
    "electronic health records",
    "healthcare management",
    "clinical trials",
    "patient safety",
    "medical procedures",
    "healthcare compliance",
];

/// Returns the keyword inventory scored for `domain`.
pub fn domain_keywords(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Software => SOFTWARE,
        Domain::Marketing => MARKETING,
        Domain::Finance => FINANCE,
        Domain::Healthcare => HEALTHCARE,
    }
}
