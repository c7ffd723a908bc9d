use chrono::NaiveDate;
use wincleangen::{AnalysisOutcome, AnalysisState, Catalog, Session, WinCleanError};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[test]
fn test_toggle_flips_only_the_target() {
    let mut session = Session::new(Catalog::builtin());
    let before = session.selection().clone();

    session.toggle("logFiles").unwrap();
    assert!(session.selection().is_included("logFiles"));

    let ids: Vec<String> = session
        .catalog()
        .options()
        .iter()
        .map(|o| o.id.clone())
        .collect();
    for id in &ids {
        if id != "logFiles" {
            assert_eq!(
                session.selection().is_included(id),
                before.is_included(id),
                "unrelated id {} changed",
                id
            );
        }
    }

    session.toggle("logFiles").unwrap();
    assert_eq!(*session.selection(), before);
}

#[test]
fn test_toggle_outside_catalog_is_refused() {
    let mut session = Session::new(Catalog::builtin());
    let err = session.toggle("doesNotExist").unwrap_err();
    assert!(matches!(err, WinCleanError::UnknownOption { id } if id == "doesNotExist"));
}

#[test]
fn test_only_one_analysis_pending_at_a_time() {
    let mut session = Session::new(Catalog::builtin());

    assert!(session.begin_analysis().is_some());
    assert!(session.begin_analysis().is_none());
    assert!(matches!(session.analysis(), AnalysisState::Pending { .. }));
}

#[test]
fn test_selection_change_resets_analysis_to_idle() {
    let mut session = Session::new(Catalog::builtin());
    let ticket = session.begin_analysis().unwrap();
    session.complete_analysis(ticket, AnalysisOutcome::Report("report".to_string()));
    assert!(matches!(session.analysis(), AnalysisState::Resolved { .. }));

    session.toggle("prefetch").unwrap();
    assert_eq!(*session.analysis(), AnalysisState::Idle);

    // A fresh analysis can start immediately afterwards.
    assert!(session.begin_analysis().is_some());
}

#[test]
fn test_late_result_for_changed_selection_is_dropped() {
    let mut session = Session::new(Catalog::builtin());
    let stale_ticket = session.begin_analysis().unwrap();

    // Selection changes while the call is in flight.
    session.toggle("recycleBin").unwrap();

    let applied = session.complete_analysis(
        stale_ticket,
        AnalysisOutcome::Report("refers to the old script".to_string()),
    );
    assert!(!applied);
    assert_eq!(*session.analysis(), AnalysisState::Idle);

    // The next request gets a fresh ticket that does apply.
    let ticket = session.begin_analysis().unwrap();
    let applied = session.complete_analysis(ticket, AnalysisOutcome::Report("ok".to_string()));
    assert!(applied);
}

#[test]
fn test_script_tracks_selection_changes() {
    let mut session = Session::with_empty_selection(Catalog::builtin());
    let before = session.script(date());
    assert_eq!(before.matches("正在清理").count(), 0);

    session.toggle("flushDns").unwrap();
    let after = session.script(date());
    assert_eq!(after.matches("正在清理").count(), 1);
    assert!(after.contains("ipconfig /flushdns\r\n"));

    // Same inputs, same bytes: regeneration is a pure recomputation.
    assert_eq!(session.script(date()), after);
}
