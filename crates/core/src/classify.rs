//! Mapping of rule group, priority and rule name onto defect-tracker fields
//!
//! Classification is a pure function of `(rule_group, priority, rule_name)`.
//! The rule-group table is scanned in order and the first substring match
//! wins; high-risk rule names are escalated afterwards and override the table.

use serde::{Deserialize, Serialize};

/// Severity bucket derived from a numeric priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Bucket for a priority; anything outside 1–5 falls back to `Low`.
    pub fn from_priority(priority: i32) -> Self {
        match priority {
            1 | 2 => Impact::High,
            3 => Impact::Medium,
            4 | 5 => Impact::Low,
            other => {
                tracing::debug!(priority = other, "priority out of range, using low impact");
                Impact::Low
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }

    /// Capitalized form used inside category labels ("High impact security")
    pub fn title(&self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level defect-tracking classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueKind {
    Security,
    Quality,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Security => "SECURITY",
            IssueKind::Quality => "QUALITY",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values derived for one violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub subcategory: &'static str,
    pub impact: Impact,
    pub issue_kind: IssueKind,
    pub local_effect: &'static str,
}

/// Rules that are always reported as high impact security issues
pub const HIGH_RISK_RULES: &[&str] = &[
    "ApexSOQLInjection",
    "ApexXSSFromEscapeFalse",
    "ApexXSSFromURLParam",
    "ApexOpenRedirect",
];

const SUBCATEGORY: &str = "none";

const SECURITY_EFFECT: &str = "A potential security flaw that could be exploited to compromise the confidentiality, integrity or availability of the application";

const ESCALATED_EFFECT: &str = "A potential serious security flaw that could be exploited to compromise the confidentiality, integrity and availability of the application";

/// Quality groups in match order: (group substring, category, local effect)
const QUALITY_GROUPS: &[(&str, &str, &str)] = &[
    (
        "Best Practices",
        "Best pratices",
        "Issue with generally accepted coding best practices",
    ),
    (
        "Error Prone",
        "Error prone",
        "Construct that is either broken, extremely confusing or prone to runtime errors",
    ),
    ("Design", "Design", "Design flaw"),
    ("Documentation", "Documentation", "Documentation issue"),
    (
        "Performance",
        "Performance",
        "Suboptimal code which may have a negative impact on the performance of the application",
    ),
    (
        "Multithreading",
        "Multithreading",
        "Issue dealing with multiple threads of execution",
    ),
    ("Code Style", "Code style", "Issue in coding style"),
];

const FALLBACK_CATEGORY: &str = "Code quality";
const FALLBACK_EFFECT: &str = "Potential issue";

/// Whether a rule name belongs to the escalated injection/XSS/redirect set
pub fn is_high_risk(rule_name: &str) -> bool {
    HIGH_RISK_RULES.contains(&rule_name)
}

/// Classify a violation by its rule group, priority and rule name.
pub fn classify(rule_group: &str, priority: i32, rule_name: &str) -> Classification {
    if is_high_risk(rule_name) {
        return Classification {
            category: format!("{} impact security", Impact::High.title()),
            subcategory: SUBCATEGORY,
            impact: Impact::High,
            issue_kind: IssueKind::Security,
            local_effect: ESCALATED_EFFECT,
        };
    }

    let impact = Impact::from_priority(priority);

    if rule_group.contains("Security") {
        return Classification {
            category: format!("{} impact security", impact.title()),
            subcategory: SUBCATEGORY,
            impact,
            issue_kind: IssueKind::Security,
            local_effect: SECURITY_EFFECT,
        };
    }

    let (category, local_effect) = QUALITY_GROUPS
        .iter()
        .find(|(group, _, _)| rule_group.contains(group))
        .map(|(_, category, effect)| (*category, *effect))
        .unwrap_or((FALLBACK_CATEGORY, FALLBACK_EFFECT));

    Classification {
        category: category.to_string(),
        subcategory: SUBCATEGORY,
        impact,
        issue_kind: IssueKind::Quality,
        local_effect,
    }
}
