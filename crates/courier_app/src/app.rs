use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use courier_core::{
    parse_drop_payload, update, AppState, FormId, Msg, ReportKind, SlotId, TICK_MS,
};

use crate::config::{AppConfig, FormModeConfig};
use crate::effects::EffectRunner;
use crate::input::{self, HostCommand};
use crate::render;

pub enum AppMsg {
    Core(Msg),
    Redraw,
    Quit,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let mut state = AppState::new(&config.form_mode(), config.matching_defaults());
    if let Err(err) = courier_client::ensure_download_dir(&config.download_dir) {
        client_warn!("Download directory check failed: {}", err);
        eprintln!("Warning: {err}");
    }

    let (msg_tx, msg_rx) = mpsc::channel::<AppMsg>();
    let runner = EffectRunner::new(config.client_settings(), msg_tx.clone());

    // Fixed-cadence tick driving the progress simulation. Best effort: it
    // may fire late under load, never early.
    let tick_tx = msg_tx.clone();
    thread::spawn(move || {
        let interval = Duration::from_millis(TICK_MS);
        while tick_tx.send(AppMsg::Core(Msg::Tick)).is_ok() {
            thread::sleep(interval);
        }
    });

    client_info!("Courier ready, server at {}", config.server_base_url);
    spawn_input_thread(config, msg_tx);

    state.consume_dirty();
    print_view(&state);
    run_loop(state, msg_rx, runner)
}

fn run_loop(
    mut state: AppState,
    msg_rx: mpsc::Receiver<AppMsg>,
    runner: EffectRunner,
) -> anyhow::Result<()> {
    while let Ok(msg) = msg_rx.recv() {
        match msg {
            AppMsg::Core(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    print_view(&state);
                }
            }
            AppMsg::Redraw => print_view(&state),
            AppMsg::Quit => break,
        }
    }
    client_info!("Courier exiting");
    Ok(())
}

fn spawn_input_thread(config: AppConfig, msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        // In the per-kind layout the `form` command moves focus between the
        // fixed forms; the unified layout has a single form.
        let kinds = match config.mode {
            FormModeConfig::PerKind => config.enabled_kinds(),
            FormModeConfig::Unified => Vec::new(),
        };
        let mut focus: FormId = 0;

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match input::parse_command(&line) {
                Ok(command) => {
                    if !dispatch_command(command, &kinds, &mut focus, &msg_tx) {
                        return;
                    }
                }
                Err(message) => println!("{message}"),
            }
        }
        // stdin closed; shut the loop down.
        let _ = msg_tx.send(AppMsg::Quit);
    });
}

fn dispatch_command(
    command: HostCommand,
    kinds: &[ReportKind],
    focus: &mut FormId,
    msg_tx: &mpsc::Sender<AppMsg>,
) -> bool {
    match command {
        HostCommand::Choose { slot, path } => {
            send_selection(*focus, slot, Path::new(&path), msg_tx)
        }
        HostCommand::Drop { slot, payload } => {
            let _ = msg_tx.send(AppMsg::Core(Msg::DragStateChanged {
                form: *focus,
                active: true,
            }));
            match parse_drop_payload(&payload) {
                Some(path) => {
                    send_selection(*focus, slot, &path, msg_tx);
                }
                None => println!("nothing droppable in that paste"),
            }
            msg_tx
                .send(AppMsg::Core(Msg::DragStateChanged {
                    form: *focus,
                    active: false,
                }))
                .is_ok()
        }
        HostCommand::Kind(kind) => msg_tx
            .send(AppMsg::Core(Msg::KindSelected { form: *focus, kind }))
            .is_ok(),
        HostCommand::Form(kind) => {
            match kinds.iter().position(|candidate| *candidate == kind) {
                Some(index) => {
                    *focus = index;
                    let _ = msg_tx.send(AppMsg::Redraw);
                }
                None => println!("no form for kind '{}'", kind.as_str()),
            }
            true
        }
        HostCommand::Set { param, value } => msg_tx
            .send(AppMsg::Core(Msg::ParamChanged {
                form: *focus,
                param,
                value,
            }))
            .is_ok(),
        HostCommand::DeleteUnmatched(value) => msg_tx
            .send(AppMsg::Core(Msg::DeleteUnmatchedToggled {
                form: *focus,
                value,
            }))
            .is_ok(),
        HostCommand::Submit => msg_tx
            .send(AppMsg::Core(Msg::SubmitClicked { form: *focus }))
            .is_ok(),
        HostCommand::Show => msg_tx.send(AppMsg::Redraw).is_ok(),
        HostCommand::Help => {
            println!("{}", input::HELP_TEXT);
            true
        }
        HostCommand::Quit => {
            let _ = msg_tx.send(AppMsg::Quit);
            false
        }
    }
}

/// Stat the chosen file and synthesize the same selection-changed message a
/// chooser produces, so guard validation runs identically for drops.
fn send_selection(
    form: FormId,
    slot: SlotId,
    path: &Path,
    msg_tx: &mpsc::Sender<AppMsg>,
) -> bool {
    let name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_string(),
        None => {
            println!("not a file path: {}", path.display());
            return true;
        }
    };
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => msg_tx
            .send(AppMsg::Core(Msg::FileChosen {
                form,
                slot,
                name,
                size_bytes: meta.len(),
                path: path.to_path_buf(),
            }))
            .is_ok(),
        Ok(_) => {
            println!("{} is not a regular file", path.display());
            true
        }
        Err(err) => {
            println!("cannot read {}: {}", path.display(), err);
            client_warn!("Selection failed for {:?}: {}", path, err);
            true
        }
    }
}

fn print_view(state: &AppState) {
    for line in render::render(&state.view()) {
        println!("{line}");
    }
    let _ = io::stdout().flush();
}
