use crate::catalog::Catalog;
use crate::cli::args::Cli;
use crate::error::WinCleanError;
use crate::localization::LocalizedStrings;

pub struct ReportFormatter {
    use_colors: bool,
    verbose: bool,
    localized_strings: LocalizedStrings,
}

impl ReportFormatter {
    pub fn new(cli: &Cli) -> Result<Self, WinCleanError> {
        let output_language = cli.get_output_language()?;
        Ok(Self {
            use_colors: cli.should_use_color(),
            verbose: cli.is_verbose(),
            localized_strings: LocalizedStrings::new(output_language),
        })
    }

    /// Render the catalog listing for --list.
    pub fn format_catalog(&self, catalog: &Catalog) -> String {
        let mut output = String::new();

        output.push_str(&self.format_section_title(self.localized_strings.get("list_header")));
        output.push('\n');
        output.push_str(self.localized_strings.get("list_hint"));
        output.push_str("\n\n");

        for option in catalog.options() {
            let marker = if catalog.is_default(&option.id) {
                self.localized_strings.get_message("default_on")
            } else {
                self.localized_strings.get_message("default_off")
            };
            let category = self
                .localized_strings
                .get_category(option.category.as_str());
            let risk = self
                .localized_strings
                .get_risk_level(option.risk_level.as_str());

            output.push_str(&format!(
                "  [{}] {:<16} {} ({} / {})\n",
                marker, option.id, option.label, category, risk
            ));
            if self.verbose {
                output.push_str(&format!("        {}\n", option.description));
                output.push_str(&format!("        $ {}\n", option.command));
            }
        }

        output.push('\n');
        output.push_str(self.localized_strings.get("desc_admin_hint"));
        output.push('\n');

        output
    }

    /// Render the free-form analysis report, line by line. Lines starting
    /// with `-` or `*` become bullet items with the marker stripped.
    pub fn format_analysis_report(&self, report: &str) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header());
        output.push('\n');

        for line in report.lines() {
            output.push_str(&self.format_report_line(line));
            output.push('\n');
        }

        output
    }

    fn format_report_line(&self, line: &str) -> String {
        let is_bullet = line.starts_with('-') || line.starts_with('*');
        if !is_bullet {
            return line.to_string();
        }

        // Strip the marker plus one following space, if present.
        let text = line[1..].strip_prefix(' ').unwrap_or(&line[1..]);
        if self.use_colors {
            format!("  \x1b[34m•\x1b[0m {}", text)
        } else {
            format!("  • {}", text)
        }
    }

    fn format_header(&self) -> String {
        let header_text = self.localized_strings.get("report_header");
        if self.use_colors {
            format!("\x1b[1m\x1b[36m═══ {} ═══\x1b[0m", header_text)
        } else {
            format!("=== {} ===", header_text)
        }
    }

    fn format_section_title(&self, title: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[37m{}\x1b[0m", title)
        } else {
            title.to_string()
        }
    }

    /// Localized ERROR block for a failed analysis. Missing-credential and
    /// remote failures get distinct messages.
    pub fn format_error(&self, error: &WinCleanError) -> String {
        let (color_code, reset) = if self.use_colors {
            ("\x1b[1m\x1b[31m", "\x1b[0m")
        } else {
            ("", "")
        };

        let error_title = self.localized_strings.get_message("analysis_error");
        let (message, description) = match error {
            WinCleanError::MissingApiKey { .. } => (
                self.localized_strings.get_message("missing_api_key"),
                self.localized_strings.get("desc_missing_api_key"),
            ),
            _ => (
                self.localized_strings.get_message("analysis_failed"),
                self.localized_strings.get("desc_analysis_failure"),
            ),
        };

        if self.verbose {
            format!(
                "{}🚨 {}{}\n\n{}\n{}\n\n{}",
                color_code, error_title, reset, message, description, error
            )
        } else {
            format!(
                "{}🚨 {}{}\n\n{}\n{}",
                color_code, error_title, reset, message, description
            )
        }
    }

    pub fn format_progress(&self, message: &str) -> String {
        if self.use_colors {
            format!("\x1b[36m{}\x1b[0m", message)
        } else {
            message.to_string()
        }
    }

    pub fn strings(&self) -> &LocalizedStrings {
        &self.localized_strings
    }
}
