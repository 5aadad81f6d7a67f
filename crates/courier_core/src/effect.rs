use crate::{FormId, MatchingParams, ReportKind, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a validated request to the transfer client. Emitted only when
    /// both files are present and within the size ceiling.
    SubmitJob {
        form: FormId,
        kind: ReportKind,
        schedule: SelectedFile,
        report: SelectedFile,
        params: MatchingParams,
    },
}
