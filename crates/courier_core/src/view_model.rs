use crate::{FormId, MatchingParams, ReportKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// The user-visible message line for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub forms: Vec<FormView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub form: FormId,
    pub kind: ReportKind,
    pub kind_selectable: bool,
    pub description: &'static str,
    pub schedule: Option<String>,
    pub report: Option<String>,
    pub params: MatchingParams,
    pub progress_visible: bool,
    pub progress_percent: u8,
    pub drop_active: bool,
    pub submitting: bool,
    pub notice: Option<Notice>,
}
