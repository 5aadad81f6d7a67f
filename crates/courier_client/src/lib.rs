//! Courier client: multipart submission, response interpretation and delivery.
mod client;
mod deliver;
mod filename;
mod submit;
mod types;

pub use client::ClientHandle;
pub use deliver::{ensure_download_dir, DeliverError, DownloadWriter};
pub use filename::delivered_filename;
pub use submit::{ClientSettings, ReqwestSubmitter, Submitter};
pub use types::{
    ClientEvent, Delivery, FailureKind, FilePayload, JobId, JobParams, ReportKind, SubmitError,
    SubmitRequest,
};
