use crate::catalog::Catalog;
use crate::error::WinCleanError;
use crate::generator;
use crate::models::Selection;
use chrono::NaiveDate;

/// Observable state of the AI analysis task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Pending { revision: u64 },
    Resolved { revision: u64, outcome: AnalysisOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Report(String),
    Error(String),
}

/// Handed out by `begin_analysis`; captures the selection revision at
/// request time so a late-arriving result for a since-changed selection
/// can be detected and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    revision: u64,
}

/// Owns the mutable state of one generator session: the selection, the
/// analysis task state, and the revision counter tying them together.
///
/// All transitions are pure state updates, independent of any rendering
/// front end. Single control flow is assumed; there is no locking.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    selection: Selection,
    analysis: AnalysisState,
    revision: u64,
}

impl Session {
    /// Start from the catalog's default selection.
    pub fn new(catalog: Catalog) -> Self {
        let selection = catalog.default_selection();
        Self {
            catalog,
            selection,
            analysis: AnalysisState::Idle,
            revision: 0,
        }
    }

    /// Start from an all-excluded selection.
    pub fn with_empty_selection(catalog: Catalog) -> Self {
        let selection = catalog.empty_selection();
        Self {
            catalog,
            selection,
            analysis: AnalysisState::Idle,
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Flip one option. Ids outside the catalog are refused.
    ///
    /// Any pending or displayed analysis no longer corresponds to the new
    /// script, so the analysis state falls back to idle.
    pub fn toggle(&mut self, id: &str) -> Result<(), WinCleanError> {
        if !self.catalog.contains(id) {
            return Err(WinCleanError::UnknownOption { id: id.to_string() });
        }
        self.selection = self.selection.toggled(id);
        self.mark_selection_changed();
        Ok(())
    }

    /// Set one option to a definite state. A no-op write (already at the
    /// requested value) leaves the analysis state and revision untouched.
    pub fn set_included(&mut self, id: &str, included: bool) -> Result<(), WinCleanError> {
        if !self.catalog.contains(id) {
            return Err(WinCleanError::UnknownOption { id: id.to_string() });
        }
        if self.selection.is_included(id) == included {
            return Ok(());
        }
        self.selection.set(id, included);
        self.mark_selection_changed();
        Ok(())
    }

    /// Move idle -> pending. Returns `None` while an analysis is already
    /// pending - the trigger is expected to be disabled in that state.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if matches!(self.analysis, AnalysisState::Pending { .. }) {
            return None;
        }
        self.analysis = AnalysisState::Pending {
            revision: self.revision,
        };
        Some(AnalysisTicket {
            revision: self.revision,
        })
    }

    /// Apply an analysis outcome. Returns `true` when the result was
    /// accepted; a ticket whose revision no longer matches the current
    /// selection is stale and is dropped without touching the state.
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket, outcome: AnalysisOutcome) -> bool {
        if ticket.revision != self.revision {
            return false;
        }
        self.analysis = AnalysisState::Resolved {
            revision: ticket.revision,
            outcome,
        };
        true
    }

    /// Dismiss a displayed result without changing the selection.
    pub fn dismiss_analysis(&mut self) {
        self.analysis = AnalysisState::Idle;
    }

    /// Render the script for the current selection.
    pub fn script(&self, date: NaiveDate) -> String {
        generator::generate(&self.selection, &self.catalog, date)
    }

    fn mark_selection_changed(&mut self) {
        self.revision += 1;
        self.analysis = AnalysisState::Idle;
    }
}
