use crate::error::WinCleanError;
use crate::localization::LocaleDetector;
use crate::models::OutputLanguage;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wincleangen")]
#[command(about = "Generate a Windows C-drive cleanup batch script, with optional AI review")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Include an option on top of the catalog defaults (repeatable)
    #[arg(long = "enable", value_name = "ID")]
    pub enable: Vec<String>,

    /// Exclude an option from the catalog defaults (repeatable)
    #[arg(long = "disable", value_name = "ID")]
    pub disable: Vec<String>,

    /// Start from an empty selection instead of the catalog defaults
    #[arg(long)]
    pub none: bool,

    /// List the catalog options and exit
    #[arg(long)]
    pub list: bool,

    /// Replace the built-in catalog with a JSON document
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Path of the generated batch file
    #[arg(short = 'o', long, default_value = crate::output::BATCH_FILE_NAME)]
    pub output: PathBuf,

    /// Print the raw script to stdout instead of writing a file (no BOM)
    #[arg(long)]
    pub stdout: bool,

    /// Request an AI review of the generated script
    #[arg(long)]
    pub analyze: bool,

    /// LLM model to use for analysis
    #[arg(short = 'm', long, default_value = "gemini-2.5-flash")]
    pub model: String,

    /// Maximum time for the analysis call in seconds (10-300)
    #[arg(short = 't', long, default_value = "60", value_parser = validate_timeout)]
    pub timeout: u64,

    /// Language for CLI messages and the analysis report (english, chinese).
    /// If not specified, automatically detected from the system locale
    #[arg(long, default_value = "chinese")]
    pub output_lang: String,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including locale detection details
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, WinCleanError> {
        let cli = Self::try_parse().map_err(|e| WinCleanError::InvalidArguments(e.to_string()))?;
        cli.validate()?;
        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), WinCleanError> {
        if !(10..=300).contains(&self.timeout) {
            return Err(WinCleanError::InvalidArguments(
                "Timeout must be between 10 and 300 seconds".to_string(),
            ));
        }

        self.get_output_language()?;

        Ok(())
    }

    pub fn get_llm_model(&self) -> String {
        if let Ok(model) = std::env::var("WINCLEAN_DEFAULT_MODEL") {
            if !model.trim().is_empty() {
                return model;
            }
        }
        self.model.clone()
    }

    pub fn get_timeout_seconds(&self) -> u64 {
        if let Ok(timeout_str) = std::env::var("WINCLEAN_DEFAULT_TIMEOUT") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                if (10..=300).contains(&timeout) {
                    return timeout;
                }
            }
        }
        self.timeout
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        std::env::var("NO_COLOR").is_err()
    }

    pub fn get_output_language(&self) -> Result<OutputLanguage, WinCleanError> {
        // Priority 1: Environment variable override
        if let Ok(env_lang) = std::env::var("WINCLEAN_OUTPUT_LANGUAGE") {
            return OutputLanguage::from_str(&env_lang);
        }

        // Priority 2: CLI option (if not default)
        if self.output_lang != "chinese" {
            return OutputLanguage::from_str(&self.output_lang);
        }

        // Priority 3: System locale detection
        if let Some(detected) = LocaleDetector::detect_system_locale() {
            return Ok(detected);
        }

        // Priority 4: Fall back to the CLI default (chinese)
        OutputLanguage::from_str(&self.output_lang)
    }

    /// Debug information about language detection.
    pub fn get_language_debug_info(&self) -> String {
        let mut info = Vec::new();

        match std::env::var("WINCLEAN_OUTPUT_LANGUAGE") {
            Ok(value) => info.push(format!("WINCLEAN_OUTPUT_LANGUAGE={}", value)),
            Err(_) => info.push("WINCLEAN_OUTPUT_LANGUAGE=(not set)".to_string()),
        }

        info.push(format!("CLI --output-lang={}", self.output_lang));
        info.push(format!(
            "System locale: {}",
            LocaleDetector::get_system_locale_info()
        ));

        match self.get_output_language() {
            Ok(lang) => info.push(format!("Detected language: {}", lang.as_str())),
            Err(e) => info.push(format!("Language detection error: {}", e)),
        }

        info.join("\n")
    }
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse().map_err(|_| "Timeout must be a number")?;

    if (10..=300).contains(&timeout) {
        Ok(timeout)
    } else {
        Err("Timeout must be between 10 and 300 seconds".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cli_parsing() {
        let args = vec!["wincleangen"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.enable.is_empty());
        assert!(cli.disable.is_empty());
        assert!(!cli.none);
        assert!(!cli.analyze);
        assert_eq!(cli.model, "gemini-2.5-flash");
        assert_eq!(cli.timeout, 60);
        assert_eq!(cli.output, PathBuf::from("clean_c_drive.bat"));
        assert_eq!(cli.output_lang, "chinese");
    }

    #[test]
    fn test_repeatable_toggles() {
        let args = vec![
            "wincleangen",
            "--enable",
            "recycleBin",
            "--enable",
            "prefetch",
            "--disable",
            "sysTemp",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.enable, vec!["recycleBin", "prefetch"]);
        assert_eq!(cli.disable, vec!["sysTemp"]);
    }

    #[test]
    fn test_cli_with_all_options() {
        let args = vec![
            "wincleangen",
            "--none",
            "--enable",
            "flushDns",
            "--analyze",
            "--model",
            "gemini-2.5-flash",
            "--timeout",
            "120",
            "--output",
            "cleanup.bat",
            "--verbose",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.none);
        assert!(cli.analyze);
        assert_eq!(cli.timeout, 120);
        assert_eq!(cli.output, PathBuf::from("cleanup.bat"));
        assert!(cli.verbose);
        assert!(!cli.debug);
    }

    #[test]
    fn test_debug_implies_verbose() {
        let args = vec!["wincleangen", "--debug"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.is_debug());
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_timeout_validation() {
        let args = vec!["wincleangen", "--timeout", "5"];
        assert!(Cli::try_parse_from(args).is_err());

        let args = vec!["wincleangen", "--timeout", "400"];
        assert!(Cli::try_parse_from(args).is_err());

        let args = vec!["wincleangen", "--timeout", "120"];
        assert!(Cli::try_parse_from(args).is_ok());
    }

    #[test]
    fn test_output_language_parsing() {
        let args = vec!["wincleangen", "--output-lang", "english"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.output_lang, "english");
        assert_eq!(cli.get_output_language().unwrap(), OutputLanguage::English);
    }

    #[test]
    fn test_output_language_validation() {
        let args = vec!["wincleangen", "--output-lang", "invalid"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.get_output_language().is_err());
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_language_debug_info() {
        let args = vec!["wincleangen"];
        let cli = Cli::try_parse_from(args).unwrap();

        let debug_info = cli.get_language_debug_info();
        assert!(debug_info.contains("WINCLEAN_OUTPUT_LANGUAGE="));
        assert!(debug_info.contains("CLI --output-lang="));
        assert!(debug_info.contains("System locale:"));
    }
}
