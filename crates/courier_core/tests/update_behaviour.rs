use std::path::PathBuf;
use std::sync::Once;

use courier_core::{
    update, AppState, FormMode, MatchingParams, Msg, ParamId, ReportKind, Severity, SlotId,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn unified_state() -> AppState {
    AppState::new(&FormMode::Unified, MatchingParams::default())
}

fn choose(state: AppState, slot: SlotId, name: &str, size_bytes: u64) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FileChosen {
            form: 0,
            slot,
            name: name.to_string(),
            size_bytes,
            path: PathBuf::from(format!("/tmp/{name}")),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn valid_selection_is_stored() {
    init_logging();
    let state = choose(unified_state(), SlotId::Schedule, "grid.xlsx", 2048);
    let view = state.view();

    assert_eq!(view.forms[0].schedule.as_deref(), Some("grid.xlsx"));
    assert!(view.forms[0].notice.is_none());
}

#[test]
fn bad_extension_clears_slot_and_raises_notice() {
    init_logging();
    let state = choose(unified_state(), SlotId::Schedule, "grid.xlsx", 2048);
    let state = choose(state, SlotId::Schedule, "grid.csv", 2048);
    let view = state.view();

    assert_eq!(view.forms[0].schedule, None);
    let notice = view.forms[0].notice.as_ref().expect("rejection notice");
    assert_eq!(notice.severity, Severity::Error);
    assert!(notice.text.contains(".xls"));
}

#[test]
fn oversized_file_clears_slot_regardless_of_extension() {
    init_logging();
    let state = choose(
        unified_state(),
        SlotId::Report,
        "report.xlsx",
        100 * 1024 * 1024 + 1,
    );
    let view = state.view();

    assert_eq!(view.forms[0].report, None);
    let notice = view.forms[0].notice.as_ref().expect("rejection notice");
    assert!(notice.text.contains("100 MB"));
}

#[test]
fn reselection_replaces_previous_file() {
    init_logging();
    let state = choose(unified_state(), SlotId::Report, "first.xls", 10);
    let state = choose(state, SlotId::Report, "second.xlsx", 20);

    assert_eq!(state.view().forms[0].report.as_deref(), Some("second.xlsx"));
}

#[test]
fn drag_highlight_is_presentational() {
    init_logging();
    let (state, effects) = update(
        unified_state(),
        Msg::DragStateChanged {
            form: 0,
            active: true,
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().forms[0].drop_active);

    let (state, _) = update(
        state,
        Msg::DragStateChanged {
            form: 0,
            active: false,
        },
    );
    assert!(!state.view().forms[0].drop_active);
}

#[test]
fn kind_selection_updates_description_on_unified_form() {
    init_logging();
    let (state, _) = update(
        unified_state(),
        Msg::KindSelected {
            form: 0,
            kind: ReportKind::Foreign,
        },
    );
    let view = state.view();

    assert_eq!(view.forms[0].kind, ReportKind::Foreign);
    assert_eq!(view.forms[0].description, ReportKind::Foreign.description());
}

#[test]
fn kind_selection_is_ignored_on_fixed_forms() {
    init_logging();
    let state = AppState::new(
        &FormMode::PerKind(vec![ReportKind::Rus, ReportKind::Foreign]),
        MatchingParams::default(),
    );
    let (state, _) = update(
        state,
        Msg::KindSelected {
            form: 0,
            kind: ReportKind::Third,
        },
    );

    assert_eq!(state.view().forms[0].kind, ReportKind::Rus);
    assert_eq!(state.view().forms[1].kind, ReportKind::Foreign);
}

#[test]
fn slider_values_clamp_to_bounds() {
    init_logging();
    let (state, _) = update(
        unified_state(),
        Msg::ParamChanged {
            form: 0,
            param: ParamId::FuzzyCutoff,
            value: 255,
        },
    );
    let (state, _) = update(
        state,
        Msg::ParamChanged {
            form: 0,
            param: ParamId::MaxShows,
            value: 0,
        },
    );
    let params = state.view().forms[0].params;

    assert_eq!(params.fuzzy_cutoff, 100);
    assert_eq!(params.max_shows, 1);
}
