use crate::guard::validate_selection;
use crate::state::FormPhase;
use crate::view_model::Notice;
use crate::{AppState, Effect, JobResultKind, Msg, ParamId, SelectedFile};

const MISSING_FILES_NOTICE: &str = "select both files (schedule and report)";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen {
            form,
            slot,
            name,
            size_bytes,
            path,
        } => {
            if let Some(form_state) = state.form_mut(form) {
                match validate_selection(&name, size_bytes) {
                    Ok(()) => {
                        *form_state.slot_mut(slot) = Some(SelectedFile {
                            name,
                            size_bytes,
                            path,
                        });
                        form_state.notice = None;
                    }
                    Err(reason) => {
                        // Clear the slot so no stale invalid selection lingers.
                        *form_state.slot_mut(slot) = None;
                        form_state.notice = Some(Notice::error(reason.to_string()));
                    }
                }
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DragStateChanged { form, active } => {
            if let Some(form_state) = state.form_mut(form) {
                if form_state.drop_active != active {
                    form_state.drop_active = active;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::KindSelected { form, kind } => {
            if let Some(form_state) = state.form_mut(form) {
                if !form_state.kind_fixed && form_state.kind != kind {
                    form_state.kind = kind;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::ParamChanged { form, param, value } => {
            if let Some(form_state) = state.form_mut(form) {
                match param {
                    ParamId::MaxShows => form_state.params.max_shows = value.clamp(1, 10),
                    ParamId::FuzzyCutoff => form_state.params.fuzzy_cutoff = value.min(100),
                    ParamId::TokenOverlap => form_state.params.token_overlap = value.min(100),
                }
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DeleteUnmatchedToggled { form, value } => {
            if let Some(form_state) = state.form_mut(form) {
                form_state.params.delete_unmatched = value;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked { form } => {
            let mut effects = Vec::new();
            if let Some(form_state) = state.form_mut(form) {
                // One submission per form at a time; the original left this
                // open and double submissions could race the progress bar.
                if form_state.phase == FormPhase::Submitting {
                    return (state, effects);
                }
                match (form_state.schedule.clone(), form_state.report.clone()) {
                    (Some(schedule), Some(report)) => {
                        let revalidation = validate_selection(&schedule.name, schedule.size_bytes)
                            .and_then(|()| validate_selection(&report.name, report.size_bytes));
                        match revalidation {
                            Ok(()) => {
                                form_state.phase = FormPhase::Submitting;
                                form_state.progress.start();
                                form_state.notice = None;
                                effects.push(Effect::SubmitJob {
                                    form,
                                    kind: form_state.kind,
                                    schedule,
                                    report,
                                    params: form_state.params,
                                });
                            }
                            Err(reason) => {
                                form_state.notice = Some(Notice::error(reason.to_string()));
                            }
                        }
                    }
                    _ => {
                        form_state.notice = Some(Notice::error(MISSING_FILES_NOTICE));
                    }
                }
                state.mark_dirty();
            }
            effects
        }
        Msg::JobDone { form, result } => {
            if let Some(form_state) = state.form_mut(form) {
                // Unconditional finalization: every submission outcome lands
                // here, so the bar settles exactly once per attempt.
                form_state.progress.finish();
                form_state.phase = FormPhase::Idle;
                form_state.notice = Some(match result {
                    JobResultKind::Success { filename, saved_to } => Notice::info(format!(
                        "file processed and saved as {} ({})",
                        filename,
                        saved_to.display()
                    )),
                    JobResultKind::Failed { message } => {
                        Notice::error(format!("processing failed: {message}"))
                    }
                });
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick => {
            let mut changed = false;
            for form_state in state.forms_mut() {
                if form_state.progress.tick() {
                    changed = true;
                }
            }
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
