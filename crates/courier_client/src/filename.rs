use crate::ReportKind;

/// Derive the delivered filename from the Content-Disposition header if
/// present, else fall back to the kind-specific default.
pub fn delivered_filename(disposition: Option<&str>, kind: ReportKind) -> String {
    disposition
        .and_then(parse_disposition)
        .map(|name| sanitize(&name))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| kind.default_filename())
}

/// Extract the name from `filename="<name>"` or `filename=<name>`.
/// First match wins.
fn parse_disposition(value: &str) -> Option<String> {
    let idx = value.find("filename=")?;
    let rest = value[idx + "filename=".len()..].trim_start();
    let name = if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        &quoted[..end]
    } else {
        rest.split(';').next().unwrap_or(rest).trim()
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// The name comes from the server; keep only a bare filename safe to hand
/// to the filesystem.
fn sanitize(name: &str) -> String {
    let bare = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    bare.chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect::<String>()
        .trim_matches(&[' ', '.'][..])
        .to_string()
}

fn is_forbidden(c: char) -> bool {
    matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_filename_is_extracted() {
        assert_eq!(
            delivered_filename(
                Some("attachment; filename=\"out.xlsx\""),
                ReportKind::Rus
            ),
            "out.xlsx"
        );
    }

    #[test]
    fn unquoted_filename_is_extracted() {
        assert_eq!(
            delivered_filename(
                Some("attachment; filename=report_rus_ready.xlsx"),
                ReportKind::Foreign
            ),
            "report_rus_ready.xlsx"
        );
    }

    #[test]
    fn missing_header_falls_back_to_kind_default() {
        assert_eq!(
            delivered_filename(None, ReportKind::Foreign),
            "report_foreign_ready.xlsx"
        );
        assert_eq!(
            delivered_filename(None, ReportKind::Third),
            "report_third_ready.xlsx"
        );
    }

    #[test]
    fn malformed_header_degrades_to_default() {
        assert_eq!(
            delivered_filename(Some("attachment"), ReportKind::Rus),
            "report_rus_ready.xlsx"
        );
        assert_eq!(
            delivered_filename(Some("attachment; filename="), ReportKind::Rus),
            "report_rus_ready.xlsx"
        );
        assert_eq!(
            delivered_filename(Some("attachment; filename=\"unterminated"), ReportKind::Rus),
            "report_rus_ready.xlsx"
        );
    }

    #[test]
    fn path_components_are_stripped() {
        assert_eq!(
            delivered_filename(
                Some("attachment; filename=\"../../etc/out.xlsx\""),
                ReportKind::Rus
            ),
            "out.xlsx"
        );
    }

    #[test]
    fn trailing_parameters_are_ignored() {
        assert_eq!(
            delivered_filename(
                Some("attachment; filename=out.xlsx; size=42"),
                ReportKind::Rus
            ),
            "out.xlsx"
        );
    }
}
