use std::path::PathBuf;

use crate::{FormId, JobResultKind, ParamId, ReportKind, SlotId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A file was selected for a slot, via the chooser or a synthesized
    /// drop. Carries the metadata validation needs; no file content.
    FileChosen {
        form: FormId,
        slot: SlotId,
        name: String,
        size_bytes: u64,
        path: PathBuf,
    },
    /// Drop-region highlight changed. Purely presentational.
    DragStateChanged { form: FormId, active: bool },
    /// User picked a report kind on the unified form's selector.
    KindSelected { form: FormId, kind: ReportKind },
    /// A slider moved; value is clamped to the slider's own bounds only.
    ParamChanged {
        form: FormId,
        param: ParamId,
        value: u8,
    },
    /// The delete-unmatched checkbox toggled.
    DeleteUnmatchedToggled { form: FormId, value: bool },
    /// User submitted the form.
    SubmitClicked { form: FormId },
    /// The transfer client settled this form's submission.
    JobDone {
        form: FormId,
        result: JobResultKind,
    },
    /// Fixed-cadence host tick driving the progress simulation.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
