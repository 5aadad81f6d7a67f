use std::path::PathBuf;

use crate::progress::ProgressState;
use crate::view_model::{AppViewModel, FormView, Notice};

pub type FormId = usize;

/// Which of the two required inputs a file binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotId {
    Schedule,
    Report,
}

/// Category of report being processed; decides the server route and the
/// default delivered filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Rus,
    Foreign,
    Third,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Rus, ReportKind::Foreign, ReportKind::Third];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Rus => "rus",
            ReportKind::Foreign => "foreign",
            ReportKind::Third => "third",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Rus => {
                "Domestic report: matches aired rows against the schedule grid"
            }
            ReportKind::Foreign => {
                "Foreign report: matches titles across languages with relaxed tokenization"
            }
            ReportKind::Third => {
                "Third-party report: matches rows delivered in the partner layout"
            }
        }
    }
}

/// Slider/checkbox-backed parameters forwarded to the server-side matcher.
/// Percent sliders hold 0-100 here; the wire scales them to 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingParams {
    pub max_shows: u8,
    pub fuzzy_cutoff: u8,
    pub token_overlap: u8,
    pub delete_unmatched: bool,
}

impl Default for MatchingParams {
    fn default() -> Self {
        Self {
            max_shows: 3,
            fuzzy_cutoff: 5,
            token_overlap: 10,
            delete_unmatched: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    MaxShows,
    FuzzyCutoff,
    TokenOverlap,
}

/// A user-chosen file bound to one input slot. Replaced on re-selection,
/// cleared when validation rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// How forms are laid out: one fixed-kind form per enabled kind, or a single
/// form with a kind selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    PerKind(Vec<ReportKind>),
    Unified,
}

/// Completion payload for one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobResultKind {
    Success { filename: String, saved_to: PathBuf },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormState {
    pub(crate) kind: ReportKind,
    pub(crate) kind_fixed: bool,
    pub(crate) schedule: Option<SelectedFile>,
    pub(crate) report: Option<SelectedFile>,
    pub(crate) params: MatchingParams,
    pub(crate) progress: ProgressState,
    pub(crate) drop_active: bool,
    pub(crate) phase: FormPhase,
    pub(crate) notice: Option<Notice>,
}

impl FormState {
    fn new(kind: ReportKind, kind_fixed: bool, params: MatchingParams) -> Self {
        Self {
            kind,
            kind_fixed,
            schedule: None,
            report: None,
            params,
            progress: ProgressState::default(),
            drop_active: false,
            phase: FormPhase::Idle,
            notice: None,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: crate::SlotId) -> &mut Option<SelectedFile> {
        match slot {
            crate::SlotId::Schedule => &mut self.schedule,
            crate::SlotId::Report => &mut self.report,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    forms: Vec<FormState>,
    dirty: bool,
}

impl AppState {
    pub fn new(mode: &FormMode, defaults: MatchingParams) -> Self {
        let forms = match mode {
            FormMode::PerKind(kinds) => kinds
                .iter()
                .map(|kind| FormState::new(*kind, true, defaults))
                .collect(),
            FormMode::Unified => vec![FormState::new(ReportKind::Rus, false, defaults)],
        };
        Self {
            forms,
            dirty: true,
        }
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    /// Form bound to the given kind, if any (fixed-kind forms match their
    /// kind; the unified form matches whatever kind is currently selected).
    pub fn form_for_kind(&self, kind: ReportKind) -> Option<FormId> {
        self.forms.iter().position(|form| form.kind == kind)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            forms: self
                .forms
                .iter()
                .enumerate()
                .map(|(id, form)| FormView {
                    form: id,
                    kind: form.kind,
                    kind_selectable: !form.kind_fixed,
                    description: form.kind.description(),
                    schedule: form.schedule.as_ref().map(|file| file.name.clone()),
                    report: form.report.as_ref().map(|file| file.name.clone()),
                    params: form.params,
                    progress_visible: form.progress.visible(),
                    progress_percent: form.progress.percent(),
                    drop_active: form.drop_active,
                    submitting: form.phase == FormPhase::Submitting,
                    notice: form.notice.clone(),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form_mut(&mut self, form: FormId) -> Option<&mut FormState> {
        self.forms.get_mut(form)
    }

    pub(crate) fn forms_mut(&mut self) -> impl Iterator<Item = &mut FormState> {
        self.forms.iter_mut()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&FormMode::Unified, MatchingParams::default())
    }
}
