use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use courier_client::{
    ClientEvent, ClientHandle, ClientSettings, FilePayload, JobParams, SubmitRequest,
};
use courier_core::{Effect, FormId, JobResultKind, Msg, ReportKind};

use crate::app::AppMsg;

/// Executes core effects against the transfer client and feeds completion
/// events back into the message loop.
pub struct EffectRunner {
    client: Arc<ClientHandle>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<AppMsg>) -> Self {
        let client = Arc::new(ClientHandle::new(settings));
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitJob {
                    form,
                    kind,
                    schedule,
                    report,
                    params,
                } => {
                    client_info!(
                        "SubmitJob form={} kind={} schedule={} report={}",
                        form,
                        kind.as_str(),
                        schedule.name,
                        report.name
                    );
                    // One submission per form at a time, so the form id
                    // doubles as the job id.
                    self.client.submit(SubmitRequest {
                        job_id: form as u64,
                        kind: map_kind(kind),
                        schedule: FilePayload {
                            name: schedule.name,
                            path: schedule.path,
                        },
                        report: FilePayload {
                            name: report.name,
                            path: report.path,
                        },
                        params: JobParams {
                            max_shows: params.max_shows,
                            fuzzy_cutoff: params.fuzzy_cutoff,
                            token_overlap: params.token_overlap,
                            delete_unmatched: params.delete_unmatched,
                        },
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<AppMsg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                match event {
                    ClientEvent::JobCompleted { job_id, result } => {
                        let result = match result {
                            Ok(delivery) => JobResultKind::Success {
                                filename: delivery.filename,
                                saved_to: delivery.saved_to,
                            },
                            Err(err) => {
                                client_warn!("Job {} failed ({}): {}", job_id, err.kind, err);
                                JobResultKind::Failed {
                                    message: err.message,
                                }
                            }
                        };
                        let form = job_id as FormId;
                        let msg = AppMsg::Core(Msg::JobDone { form, result });
                        if msg_tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_kind(kind: ReportKind) -> courier_client::ReportKind {
    match kind {
        ReportKind::Rus => courier_client::ReportKind::Rus,
        ReportKind::Foreign => courier_client::ReportKind::Foreign,
        ReportKind::Third => courier_client::ReportKind::Third,
    }
}
