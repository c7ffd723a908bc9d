pub mod args;
pub mod reporter;

pub use args::Cli;
pub use reporter::ReportFormatter;

use crate::analyzer::create_analyzer;
use crate::catalog::Catalog;
use crate::error::WinCleanError;
use crate::output;
use crate::session::{AnalysisOutcome, Session};
use chrono::Local;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, WinCleanError> {
        let formatter = ReportFormatter::new(&self.cli)?;

        if self.cli.is_debug() {
            eprintln!("🔧 {}", self.cli.get_language_debug_info());
        }

        // Step 1: Load the option catalog
        let catalog = self.load_catalog()?;

        if self.cli.list {
            println!("{}", formatter.format_catalog(&catalog));
            return Ok(0);
        }

        // Step 2: Build the session and apply the requested toggles
        let mut session = if self.cli.none {
            Session::with_empty_selection(catalog)
        } else {
            Session::new(catalog)
        };

        for id in &self.cli.enable {
            session.set_included(id, true)?;
        }
        for id in &self.cli.disable {
            session.set_included(id, false)?;
        }

        if self.cli.is_verbose() {
            eprintln!(
                "🧹 {} of {} options selected",
                session.selection().included_count(),
                session.catalog().options().len()
            );
        }

        // Step 3: Generate the script for today's date
        let script = session.script(Local::now().date_naive());

        // Step 4: Emit it - raw to stdout, or BOM-prefixed batch file
        if self.cli.stdout {
            print!("{}", script);
        } else {
            output::write_batch_file(&self.cli.output, &script)?;
            eprintln!(
                "💾 {} {}",
                formatter.strings().get_message("script_written"),
                self.cli.output.display()
            );
        }

        // Step 5: Optional AI review of the exact script text
        if self.cli.analyze {
            return self.run_analysis(&mut session, &script, &formatter).await;
        }

        Ok(0)
    }

    fn load_catalog(&self) -> Result<Catalog, WinCleanError> {
        let catalog = match &self.cli.catalog {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(),
        };

        if self.cli.is_verbose() {
            eprintln!("📋 Catalog loaded with {} options", catalog.options().len());
        }

        Ok(catalog)
    }

    async fn run_analysis(
        &self,
        session: &mut Session,
        script: &str,
        formatter: &ReportFormatter,
    ) -> Result<i32, WinCleanError> {
        let ticket = match session.begin_analysis() {
            Some(ticket) => ticket,
            // Already pending; the trigger is disabled in that state.
            None => return Ok(0),
        };

        let model = self.cli.get_llm_model();
        if self.cli.is_verbose() {
            eprintln!("🤖 Starting analysis with model: {}", model);
        }
        eprintln!(
            "{}",
            formatter.format_progress(formatter.strings().get_message("analyzing"))
        );

        let language = self.cli.get_output_language()?;
        let analyzer = match create_analyzer(
            &model,
            None,
            self.cli.get_timeout_seconds(),
            language,
        ) {
            Ok(analyzer) => analyzer,
            Err(e) => return self.fail_analysis(session, ticket, e, formatter),
        };

        match analyzer.analyze(script).await {
            Ok(report) => {
                let accepted =
                    session.complete_analysis(ticket, AnalysisOutcome::Report(report.clone()));
                if accepted {
                    println!("{}", formatter.format_analysis_report(&report));
                } else if self.cli.is_verbose() {
                    eprintln!("⚠️ Dropped stale analysis result");
                }
                Ok(0)
            }
            Err(e) => self.fail_analysis(session, ticket, e, formatter),
        }
    }

    /// Analysis failures are converted to a displayed ERROR status plus a
    /// localized message; they never abort the generated script.
    fn fail_analysis(
        &self,
        session: &mut Session,
        ticket: crate::session::AnalysisTicket,
        error: WinCleanError,
        formatter: &ReportFormatter,
    ) -> Result<i32, WinCleanError> {
        session.complete_analysis(ticket, AnalysisOutcome::Error(error.to_string()));
        eprintln!("{}", formatter.format_error(&error));
        Ok(analysis_exit_code(&error))
    }
}

fn analysis_exit_code(error: &WinCleanError) -> i32 {
    match error {
        WinCleanError::AnalysisTimeout { .. } => 4,
        WinCleanError::LlmClientError(_) | WinCleanError::NetworkError(_) => 5,
        WinCleanError::MissingApiKey { .. } => 6,
        _ => 1,
    }
}
