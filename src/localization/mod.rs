use crate::models::OutputLanguage;

pub mod locale;
pub mod strings;

pub use locale::LocaleDetector;

pub struct LocalizedStrings {
    pub output_language: OutputLanguage,
}

impl LocalizedStrings {
    pub fn new(output_language: OutputLanguage) -> Self {
        Self { output_language }
    }

    pub fn get(&self, key: &str) -> &'static str {
        match self.output_language {
            OutputLanguage::English => strings::ENGLISH_STRINGS.get(key).unwrap_or(&""),
            OutputLanguage::Chinese => strings::CHINESE_STRINGS.get(key).unwrap_or(&""),
        }
    }

    pub fn get_risk_level(&self, risk_level: &str) -> &'static str {
        let key = format!("risk_level_{}", risk_level.to_lowercase());
        self.get(&key)
    }

    pub fn get_category(&self, category: &str) -> &'static str {
        let key = format!("category_{}", category.to_lowercase());
        self.get(&key)
    }

    pub fn get_message(&self, message: &str) -> &'static str {
        let key = format!("message_{}", message.to_lowercase());
        self.get(&key)
    }
}
