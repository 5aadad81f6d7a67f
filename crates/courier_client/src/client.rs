use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::submit::{ClientSettings, ReqwestSubmitter, Submitter};
use crate::{ClientEvent, SubmitRequest};

enum ClientCommand {
    Submit(SubmitRequest),
}

/// Bridge between the synchronous host loop and the async submitter: one
/// background thread owns a tokio runtime, commands go in, completion
/// events come out. Every submitted request produces exactly one
/// `JobCompleted`, whichever way it settles.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Mutex<mpsc::Receiver<ClientEvent>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let submitter = Arc::new(ReqwestSubmitter::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(submitter.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn submit(&self, request: SubmitRequest) {
        let _ = self.cmd_tx.send(ClientCommand::Submit(request));
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit(request) => {
            let result = submitter.submit(&request).await;
            let _ = event_tx.send(ClientEvent::JobCompleted {
                job_id: request.job_id,
                result,
            });
        }
    }
}
