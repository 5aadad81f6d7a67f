use std::fmt;

/// Per-file ceiling enforced both at selection time and at submission time.
pub const MAX_FILE_BYTES: u64 = 100 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &[".xls", ".xlsx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    BadExtension,
    TooLarge,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::BadExtension => {
                write!(f, "please choose an Excel file (.xls or .xlsx)")
            }
            RejectReason::TooLarge => write!(f, "file size must not exceed 100 MB"),
        }
    }
}

/// Validate a selected file against the extension and size policy.
///
/// Runs eagerly when a file is chosen or dropped, and again defensively
/// right before a request is built.
pub fn validate_selection(name: &str, size_bytes: u64) -> Result<(), RejectReason> {
    let lowered = name.to_lowercase();
    if !ALLOWED_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
    {
        return Err(RejectReason::BadExtension);
    }
    if size_bytes > MAX_FILE_BYTES {
        return Err(RejectReason::TooLarge);
    }
    Ok(())
}
