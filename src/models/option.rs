use serde::{Deserialize, Serialize};

/// One cleanup operation the user can include in the generated script.
///
/// Records are static configuration: the `command` text is emitted into the
/// batch file verbatim, so it is treated as pre-vetted, developer-authored
/// data and never escaped or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanerOption {
    pub id: String,
    pub label: String,
    pub description: String,
    pub command: String,
    pub category: Category,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Disk,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Disk => "disk",
            Category::Network => "network",
            Category::System => "system",
        }
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}
