use std::path::PathBuf;
use std::time::Duration;

use client_logging::client_info;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::deliver::DownloadWriter;
use crate::filename::delivered_filename;
use crate::{Delivery, FailureKind, FilePayload, ReportKind, SubmitError, SubmitRequest};

const ALLOWED_EXTENSIONS: &[&str] = &[".xls", ".xlsx"];

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub download_dir: PathBuf,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_file_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            download_dir: PathBuf::from("./downloads"),
            connect_timeout: Duration::from_secs(10),
            // The server does the matching work inline, so responses can
            // lag well behind the upload itself.
            request_timeout: Duration::from_secs(300),
            max_file_bytes: 100 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &SubmitRequest) -> Result<Delivery, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: ClientSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn endpoint(&self, kind: ReportKind) -> String {
        format!(
            "{}/api/process/{}",
            self.settings.base_url.trim_end_matches('/'),
            kind.as_str()
        )
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
    }

    /// Read one attachment, re-running the extension and size checks the UI
    /// already did. Guards against stale or programmatic selections.
    async fn load_payload(&self, payload: &FilePayload) -> Result<Vec<u8>, SubmitError> {
        let lowered = payload.name.to_lowercase();
        if !ALLOWED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
            return Err(SubmitError::new(
                FailureKind::BadExtension,
                format!("{}: expected .xls or .xlsx", payload.name),
            ));
        }
        let meta = tokio::fs::metadata(&payload.path).await.map_err(|err| {
            SubmitError::new(
                FailureKind::MissingFiles,
                format!("{}: {}", payload.path.display(), err),
            )
        })?;
        if meta.len() > self.settings.max_file_bytes {
            return Err(SubmitError::new(
                FailureKind::TooLarge {
                    max_bytes: self.settings.max_file_bytes,
                    actual: meta.len(),
                },
                "file size must not exceed 100 MB",
            ));
        }
        tokio::fs::read(&payload.path).await.map_err(|err| {
            SubmitError::new(
                FailureKind::MissingFiles,
                format!("{}: {}", payload.path.display(), err),
            )
        })
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, request: &SubmitRequest) -> Result<Delivery, SubmitError> {
        let schedule_bytes = self.load_payload(&request.schedule).await?;
        let report_bytes = self.load_payload(&request.report).await?;

        let form = Form::new()
            .part(
                "schedule_file",
                Part::bytes(schedule_bytes).file_name(request.schedule.name.clone()),
            )
            .part(
                "report_file",
                Part::bytes(report_bytes).file_name(request.report.name.clone()),
            )
            .text("max_shows", request.params.max_shows.to_string())
            .text(
                "fuzzy_cutoff",
                percent_as_fraction(request.params.fuzzy_cutoff),
            )
            .text(
                "min_token_overlap",
                percent_as_fraction(request.params.token_overlap),
            )
            .text(
                "delete_unmatched",
                request.params.delete_unmatched.to_string(),
            );

        let endpoint = self.endpoint(request.kind);
        client_info!("Submitting job {} to {}", request.job_id, endpoint);

        let client = self.build_client()?;
        let response = client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = match response.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(_) => Vec::new(),
            };
            let message =
                error_detail(&body).unwrap_or_else(|| format!("HTTP error, status {code}"));
            return Err(SubmitError::new(FailureKind::HttpStatus(code), message));
        }

        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        let filename = delivered_filename(disposition.as_deref(), request.kind);
        let writer = DownloadWriter::new(self.settings.download_dir.clone());
        let saved_to = writer
            .write(&filename, &bytes)
            .map_err(|err| SubmitError::new(FailureKind::Delivery, err.to_string()))?;

        client_info!(
            "Job {} delivered {} ({} bytes)",
            request.job_id,
            filename,
            bytes.len()
        );
        Ok(Delivery {
            filename,
            saved_to,
            byte_len: bytes.len() as u64,
        })
    }
}

/// Sliders hold 0-100; the server validates these fields as 0.0-1.0.
fn percent_as_fraction(value: u8) -> String {
    format!("{:.2}", f64::from(value) / 100.0)
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Failure bodies SHOULD be JSON with a `detail` string; anything else
/// falls back to a generic status-code message at the call site.
fn error_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.detail)
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    SubmitError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::percent_as_fraction;

    #[test]
    fn percent_scaling_matches_server_contract() {
        assert_eq!(percent_as_fraction(0), "0.00");
        assert_eq!(percent_as_fraction(5), "0.05");
        assert_eq!(percent_as_fraction(100), "1.00");
    }
}
