use std::path::PathBuf;
use std::sync::Once;

use courier_core::{
    update, AppState, Effect, FormMode, JobResultKind, MatchingParams, Msg, ReportKind, Severity,
    SlotId,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn state_with_both_files() -> AppState {
    let state = AppState::new(&FormMode::Unified, MatchingParams::default());
    let (state, _) = update(
        state,
        Msg::FileChosen {
            form: 0,
            slot: SlotId::Schedule,
            name: "grid.xlsx".to_string(),
            size_bytes: 1024,
            path: PathBuf::from("/tmp/grid.xlsx"),
        },
    );
    let (state, _) = update(
        state,
        Msg::FileChosen {
            form: 0,
            slot: SlotId::Report,
            name: "report.xls".to_string(),
            size_bytes: 2048,
            path: PathBuf::from("/tmp/report.xls"),
        },
    );
    state
}

#[test]
fn submit_with_both_files_emits_job_and_starts_progress() {
    init_logging();
    let (state, effects) = update(state_with_both_files(), Msg::SubmitClicked { form: 0 });
    let view = state.view();

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::SubmitJob {
            form,
            kind,
            schedule,
            report,
            params,
        } => {
            assert_eq!(*form, 0);
            assert_eq!(*kind, ReportKind::Rus);
            assert_eq!(schedule.name, "grid.xlsx");
            assert_eq!(report.name, "report.xls");
            assert_eq!(params.max_shows, 3);
        }
    }
    assert!(view.forms[0].submitting);
    assert!(view.forms[0].progress_visible);
    assert_eq!(view.forms[0].progress_percent, 0);
}

#[test]
fn submit_without_both_files_emits_nothing() {
    init_logging();
    let state = AppState::new(&FormMode::Unified, MatchingParams::default());
    let (state, _) = update(
        state,
        Msg::FileChosen {
            form: 0,
            slot: SlotId::Schedule,
            name: "grid.xlsx".to_string(),
            size_bytes: 1024,
            path: PathBuf::from("/tmp/grid.xlsx"),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked { form: 0 });
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.forms[0].progress_visible);
    let notice = view.forms[0].notice.as_ref().expect("missing-files notice");
    assert_eq!(notice.severity, Severity::Error);
    assert!(notice.text.contains("both files"));
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    init_logging();
    let (state, first) = update(state_with_both_files(), Msg::SubmitClicked { form: 0 });
    assert_eq!(first.len(), 1);

    let (state, second) = update(state, Msg::SubmitClicked { form: 0 });
    assert!(second.is_empty());
    assert!(state.view().forms[0].submitting);
}

#[test]
fn job_success_finalizes_progress_and_reports() {
    init_logging();
    let (state, _) = update(state_with_both_files(), Msg::SubmitClicked { form: 0 });
    let (state, effects) = update(
        state,
        Msg::JobDone {
            form: 0,
            result: JobResultKind::Success {
                filename: "report_rus_ready.xlsx".to_string(),
                saved_to: PathBuf::from("/tmp/downloads/report_rus_ready.xlsx"),
            },
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.forms[0].submitting);
    assert_eq!(view.forms[0].progress_percent, 100);
    let notice = view.forms[0].notice.as_ref().expect("success notice");
    assert_eq!(notice.severity, Severity::Info);
    assert!(notice.text.contains("report_rus_ready.xlsx"));
}

#[test]
fn job_failure_finalizes_progress_and_reports() {
    init_logging();
    let (state, _) = update(state_with_both_files(), Msg::SubmitClicked { form: 0 });
    let (state, _) = update(
        state,
        Msg::JobDone {
            form: 0,
            result: JobResultKind::Failed {
                message: "bad schedule".to_string(),
            },
        },
    );
    let view = state.view();

    assert!(!view.forms[0].submitting);
    let notice = view.forms[0].notice.as_ref().expect("failure notice");
    assert_eq!(notice.severity, Severity::Error);
    assert!(notice.text.contains("bad schedule"));
}

#[test]
fn resubmission_allowed_after_completion() {
    init_logging();
    let (state, _) = update(state_with_both_files(), Msg::SubmitClicked { form: 0 });
    let (state, _) = update(
        state,
        Msg::JobDone {
            form: 0,
            result: JobResultKind::Failed {
                message: "transient".to_string(),
            },
        },
    );

    let (_, effects) = update(state, Msg::SubmitClicked { form: 0 });
    assert_eq!(effects.len(), 1);
}

#[test]
fn per_kind_forms_submit_their_own_kind() {
    init_logging();
    let state = AppState::new(
        &FormMode::PerKind(vec![ReportKind::Rus, ReportKind::Foreign]),
        MatchingParams::default(),
    );
    let form = state.form_for_kind(ReportKind::Foreign).expect("foreign form");

    let (state, _) = update(
        state,
        Msg::FileChosen {
            form,
            slot: SlotId::Schedule,
            name: "grid.xlsx".to_string(),
            size_bytes: 10,
            path: PathBuf::from("/tmp/grid.xlsx"),
        },
    );
    let (state, _) = update(
        state,
        Msg::FileChosen {
            form,
            slot: SlotId::Report,
            name: "report.xlsx".to_string(),
            size_bytes: 10,
            path: PathBuf::from("/tmp/report.xlsx"),
        },
    );
    let (_, effects) = update(state, Msg::SubmitClicked { form });

    match &effects[0] {
        Effect::SubmitJob { kind, .. } => assert_eq!(*kind, ReportKind::Foreign),
    }
}
