pub mod language;
pub mod option;
pub mod selection;

pub use language::OutputLanguage;
pub use option::{Category, CleanerOption, RiskLevel};
pub use selection::Selection;
