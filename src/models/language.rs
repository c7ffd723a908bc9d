use crate::error::WinCleanError;
use serde::{Deserialize, Serialize};

/// Language used for CLI messages and the AI analysis report.
///
/// The generated batch script itself is always Chinese - its text is part of
/// the byte-exact output contract and is never localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputLanguage {
    English,
    Chinese,
}

impl OutputLanguage {
    pub fn from_str(s: &str) -> Result<Self, WinCleanError> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(OutputLanguage::English),
            "chinese" | "zh" => Ok(OutputLanguage::Chinese),
            other => Err(WinCleanError::InvalidArguments(format!(
                "Unsupported output language '{}'. Use 'english' or 'chinese'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "english",
            OutputLanguage::Chinese => "chinese",
        }
    }

    /// Name of the language as spelled inside LLM prompts.
    pub fn as_llm_language(&self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Chinese => "Chinese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            OutputLanguage::from_str("chinese").unwrap(),
            OutputLanguage::Chinese
        );
        assert_eq!(
            OutputLanguage::from_str("EN").unwrap(),
            OutputLanguage::English
        );
        assert!(OutputLanguage::from_str("klingon").is_err());
    }
}
