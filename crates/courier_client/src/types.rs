use std::fmt;
use std::path::PathBuf;

pub type JobId = u64;

/// Report category as the server routes it: `/api/process/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Rus,
    Foreign,
    Third,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Rus => "rus",
            ReportKind::Foreign => "foreign",
            ReportKind::Third => "third",
        }
    }

    /// Fallback delivered name when the response carries no
    /// Content-Disposition filename.
    pub fn default_filename(&self) -> String {
        format!("report_{}_ready.xlsx", self.as_str())
    }
}

/// One file attachment for a submission; bytes are read at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub name: String,
    pub path: PathBuf,
}

/// Matcher parameters forwarded as plain form fields. The percent values
/// are held as 0-100 and scaled to 0.0-1.0 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobParams {
    pub max_shows: u8,
    pub fuzzy_cutoff: u8,
    pub token_overlap: u8,
    pub delete_unmatched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub job_id: JobId,
    pub kind: ReportKind,
    pub schedule: FilePayload,
    pub report: FilePayload,
    pub params: JobParams,
}

/// Where the transformed spreadsheet landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub filename: String,
    pub saved_to: PathBuf,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    JobCompleted {
        job_id: JobId,
        result: Result<Delivery, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    MissingFiles,
    BadExtension,
    TooLarge { max_bytes: u64, actual: u64 },
    HttpStatus(u16),
    Network,
    Delivery,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingFiles => write!(f, "missing input file"),
            FailureKind::BadExtension => write!(f, "unsupported file extension"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "file too large (max {max_bytes}, actual {actual})")
            }
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Delivery => write!(f, "delivery failed"),
        }
    }
}
