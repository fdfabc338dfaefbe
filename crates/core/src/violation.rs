//! Violation records handed over by the rule engine

use serde::{Deserialize, Serialize};

/// A single static-analysis finding at a file/line, attributed to a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Absolute or repo-relative path of the offending source file
    pub filename: String,

    /// Identifier of the violated rule (e.g. "AvoidDeeplyNestedIfStmts")
    pub rule_name: String,

    /// Classification group of the rule (e.g. "Best Practices")
    #[serde(default)]
    pub rule_group: String,

    /// Severity 1–5, 1 being the most severe
    #[serde(default = "default_priority")]
    pub priority: i32,

    /// Free-text explanation of this particular finding
    #[serde(default)]
    pub description: String,

    /// 1-based line number
    #[serde(default)]
    pub begin_line: u32,

    /// Enclosing function or method, empty at file scope
    #[serde(default)]
    pub method_name: String,

    /// Rule documentation link
    #[serde(default)]
    pub external_info_url: String,

    /// Short name of the language the rule targets (e.g. "java", "apex")
    #[serde(default)]
    pub rule_language: String,

    /// The rule's own description, shared by all of its violations
    #[serde(default)]
    pub rule_description: String,
}

fn default_priority() -> i32 {
    3
}

impl Default for Violation {
    fn default() -> Self {
        Self {
            filename: String::new(),
            rule_name: String::new(),
            rule_group: String::new(),
            priority: default_priority(),
            description: String::new(),
            begin_line: 0,
            method_name: String::new(),
            external_info_url: String::new(),
            rule_language: String::new(),
            rule_description: String::new(),
        }
    }
}

impl Violation {
    /// Description to show on the violation's event, preferring the rule text
    pub fn event_description(&self) -> &str {
        if self.rule_description.is_empty() {
            &self.description
        } else {
            &self.rule_description
        }
    }
}
