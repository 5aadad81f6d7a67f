use std::path::PathBuf;

/// Parse the text payload a terminal pastes when a file is dropped onto it.
///
/// Terminals hand us one path per line, often quoted, sometimes as a
/// `file://` URI. Only the first dropped file is relevant because each input
/// slot accepts a single file.
pub fn parse_drop_payload(raw: &str) -> Option<PathBuf> {
    let line = raw.lines().map(str::trim).find(|line| !line.is_empty())?;
    let unquoted = strip_quotes(line);
    if unquoted.starts_with("file://") {
        return url::Url::parse(unquoted).ok()?.to_file_path().ok();
    }
    Some(PathBuf::from(unquoted))
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
