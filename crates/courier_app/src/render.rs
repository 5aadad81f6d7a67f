//! Terminal rendering of the view model. Pure: view in, lines out.

use courier_core::{AppViewModel, FormView, Severity};

const BAR_WIDTH: usize = 20;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    for form in &view.forms {
        render_form(form, &mut lines);
    }
    lines
}

fn render_form(form: &FormView, lines: &mut Vec<String>) {
    let selector = if form.kind_selectable {
        " (kind selectable)"
    } else {
        ""
    };
    lines.push(format!(
        "[{}]{} {}",
        form.kind.as_str(),
        selector,
        form.description
    ));

    let schedule = form.schedule.as_deref().unwrap_or("(none)");
    let report = form.report.as_deref().unwrap_or("(none)");
    let drop_marker = if form.drop_active { "  << drop here" } else { "" };
    lines.push(format!(
        "  schedule: {schedule} | report: {report}{drop_marker}"
    ));

    lines.push(format!(
        "  shows {} | fuzzy {}% | overlap {}% | delete unmatched {}",
        form.params.max_shows,
        form.params.fuzzy_cutoff,
        form.params.token_overlap,
        if form.params.delete_unmatched { "on" } else { "off" }
    ));

    if form.progress_visible {
        lines.push(format!(
            "  {} {}%{}",
            progress_bar(form.progress_percent),
            form.progress_percent,
            if form.submitting { "  (uploading...)" } else { "" }
        ));
    }

    if let Some(notice) = &form.notice {
        let marker = match notice.severity {
            Severity::Info => "*",
            Severity::Error => "!",
        };
        lines.push(format!("  {marker} {}", notice.text));
    }
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    let mut bar = String::with_capacity(BAR_WIDTH + 2);
    bar.push('[');
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '.' });
    }
    bar.push(']');
    bar
}
