//! Line-oriented host commands. One line per gesture; dropped files arrive
//! as pasted paths and go through `drop` so validation runs the same way a
//! chooser selection does.

use courier_core::{ParamId, ReportKind, SlotId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Select a file for a slot via an explicit path.
    Choose { slot: SlotId, path: String },
    /// A file was dropped onto a slot; the raw paste is parsed first.
    Drop { slot: SlotId, payload: String },
    /// Pick the report kind on the unified form.
    Kind(ReportKind),
    /// Focus the form bound to a kind (per-kind layout).
    Form(ReportKind),
    /// Move a slider.
    Set { param: ParamId, value: u8 },
    /// Toggle the delete-unmatched checkbox.
    DeleteUnmatched(bool),
    Submit,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<HostCommand, String> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "schedule" | "report" => {
            if rest.is_empty() {
                return Err(format!("usage: {word} <path>"));
            }
            Ok(HostCommand::Choose {
                slot: slot_for(word),
                path: rest.to_string(),
            })
        }
        "drop" => {
            let (slot_word, payload) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: drop schedule|report <path>")?;
            match slot_word.to_ascii_lowercase().as_str() {
                "schedule" | "report" => Ok(HostCommand::Drop {
                    slot: slot_for(slot_word),
                    payload: payload.to_string(),
                }),
                other => Err(format!("unknown slot '{other}'")),
            }
        }
        "kind" => parse_kind(rest).map(HostCommand::Kind),
        "form" => parse_kind(rest).map(HostCommand::Form),
        "set" => {
            let (param_word, value_word) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: set shows|fuzzy|overlap <value>")?;
            let param = match param_word.to_ascii_lowercase().as_str() {
                "shows" => ParamId::MaxShows,
                "fuzzy" => ParamId::FuzzyCutoff,
                "overlap" => ParamId::TokenOverlap,
                other => return Err(format!("unknown parameter '{other}'")),
            };
            let value = value_word
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("'{value_word}' is not a number in 0-100"))?;
            Ok(HostCommand::Set { param, value })
        }
        "delete" => match rest.to_ascii_lowercase().as_str() {
            "on" => Ok(HostCommand::DeleteUnmatched(true)),
            "off" => Ok(HostCommand::DeleteUnmatched(false)),
            other => Err(format!("usage: delete on|off (got '{other}')")),
        },
        "submit" => Ok(HostCommand::Submit),
        "show" => Ok(HostCommand::Show),
        "help" | "?" => Ok(HostCommand::Help),
        "quit" | "exit" => Ok(HostCommand::Quit),
        "" => Ok(HostCommand::Show),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn slot_for(word: &str) -> SlotId {
    if word.eq_ignore_ascii_case("schedule") {
        SlotId::Schedule
    } else {
        SlotId::Report
    }
}

fn parse_kind(word: &str) -> Result<ReportKind, String> {
    ReportKind::from_str(word.trim()).ok_or_else(|| format!("unknown report kind '{word}'"))
}

pub const HELP_TEXT: &str = "\
commands:
  schedule <path>        select the schedule grid file
  report <path>          select the aired report file
  drop schedule <paste>  treat a pasted/dropped path as a selection
  drop report <paste>
  kind rus|foreign|third pick the report kind (unified layout)
  form rus|foreign|third focus a form (per-kind layout)
  set shows <1-10>       max shows per row
  set fuzzy <0-100>      fuzzy cutoff percent
  set overlap <0-100>    token overlap percent
  delete on|off          drop unmatched rows server-side
  submit                 send the current form
  show                   redraw
  quit                   exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_selection() {
        assert_eq!(
            parse_command("schedule /tmp/grid.xlsx"),
            Ok(HostCommand::Choose {
                slot: SlotId::Schedule,
                path: "/tmp/grid.xlsx".to_string(),
            })
        );
    }

    #[test]
    fn parses_drop_with_quoted_payload() {
        assert_eq!(
            parse_command("drop report '/tmp/a b.xlsx'"),
            Ok(HostCommand::Drop {
                slot: SlotId::Report,
                payload: "'/tmp/a b.xlsx'".to_string(),
            })
        );
    }

    #[test]
    fn parses_kind_and_sliders() {
        assert_eq!(
            parse_command("kind foreign"),
            Ok(HostCommand::Kind(ReportKind::Foreign))
        );
        assert_eq!(
            parse_command("set fuzzy 40"),
            Ok(HostCommand::Set {
                param: ParamId::FuzzyCutoff,
                value: 40,
            })
        );
    }

    #[test]
    fn rejects_unknown_words() {
        assert!(parse_command("fling report.xlsx").is_err());
        assert!(parse_command("set fuzzy lots").is_err());
        assert!(parse_command("kind klingon").is_err());
    }
}
