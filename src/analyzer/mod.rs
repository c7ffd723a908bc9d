pub mod client;
pub mod prompts;

pub use client::{create_analyzer, AnalyzerConfig, RigAnalyzer, ScriptAnalyzer};
pub use prompts::PromptTemplate;
