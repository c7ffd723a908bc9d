use crate::models::OutputLanguage;
use std::env;

pub struct LocaleDetector;

impl LocaleDetector {
    /// Detect the system locale, if it maps to a supported language.
    pub fn detect_system_locale() -> Option<OutputLanguage> {
        let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"];

        for var in &locale_vars {
            if let Ok(locale) = env::var(var) {
                if let Some(lang) = Self::parse_locale(&locale) {
                    return Some(lang);
                }
            }
        }

        None
    }

    /// Parse a locale string and extract the language.
    fn parse_locale(locale: &str) -> Option<OutputLanguage> {
        // Handles formats like zh_CN.UTF-8, zh_TW, zh, en_US.UTF-8,
        // Chinese (Simplified)_China.936, C.UTF-8.
        let locale_lower = locale.to_lowercase();

        if locale_lower.starts_with("zh")
            || locale_lower.contains("chinese")
            || locale_lower.contains("china")
        {
            return Some(OutputLanguage::Chinese);
        }

        if locale_lower.starts_with("en")
            || locale_lower.contains("english")
            || locale_lower == "c"
            || locale_lower == "posix"
        {
            return Some(OutputLanguage::English);
        }

        None
    }

    /// Current locale environment, for --debug output.
    pub fn get_system_locale_info() -> String {
        let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"];
        locale_vars
            .iter()
            .map(|var| match env::var(var) {
                Ok(value) => format!("{}={}", var, value),
                Err(_) => format!("{}=(not set)", var),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
