//! Courier core: pure state machine and view-model helpers.
mod drop;
mod effect;
mod guard;
mod msg;
mod progress;
mod state;
mod update;
mod view_model;

pub use drop::parse_drop_payload;
pub use effect::Effect;
pub use guard::{validate_selection, RejectReason, MAX_FILE_BYTES};
pub use msg::Msg;
pub use progress::{ProgressState, AUTO_INCREMENT_CAP, SETTLE_TICKS, TICK_MS};
pub use state::{
    AppState, FormId, FormMode, FormPhase, JobResultKind, MatchingParams, ParamId, ReportKind,
    SelectedFile, SlotId,
};
pub use update::update;
pub use view_model::{AppViewModel, FormView, Notice, Severity};
