pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod generator;
pub mod localization;
pub mod models;
pub mod output;
pub mod session;

pub use error::WinCleanError;

// Re-export commonly used types
pub use catalog::Catalog;
pub use generator::generate;
pub use models::{Category, CleanerOption, OutputLanguage, RiskLevel, Selection};
pub use session::{AnalysisOutcome, AnalysisState, AnalysisTicket, Session};

pub use cli::CliHandler;
