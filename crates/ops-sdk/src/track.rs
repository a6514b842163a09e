use crate::config::SdkConfig;
use crate::error::{Result, SdkError};
use serde::Serialize;
use serde_json::Value;

/// Receiver for tracked events.
pub trait Tracker: Send {
    /// Submit one event. `tags` and `event` may be empty; `metadata` carries
    /// the event record itself.
    fn track(&self, tags: &[String], event: &str, metadata: &Value) -> Result<()>;
}

/// Body of a `POST /track` request to the platform daemon.
#[derive(Debug, Serialize)]
pub struct TrackRequest<'a> {
    pub tags: &'a [String],
    pub event: &'a str,
    pub metadata: &'a Value,
}

// ---------------------------------------------------------------------------
// DaemonTracker
// ---------------------------------------------------------------------------

/// Sends events to the platform daemon over HTTP.
pub struct DaemonTracker {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl DaemonTracker {
    pub fn new(daemon_url: &str, config: &SdkConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            endpoint: format!("{}/track", daemon_url.trim_end_matches('/')),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Tracker for DaemonTracker {
    fn track(&self, tags: &[String], event: &str, metadata: &Value) -> Result<()> {
        let body = TrackRequest {
            tags,
            event,
            metadata,
        };
        let response = self.http.post(&self.endpoint).json(&body).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SdkError::TrackRejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(endpoint = %self.endpoint, "event tracked");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// LogTracker
// ---------------------------------------------------------------------------

/// Writes events to the log instead of sending them. Used when no daemon is
/// configured.
#[derive(Debug, Default)]
pub struct LogTracker;

impl Tracker for LogTracker {
    fn track(&self, tags: &[String], event: &str, metadata: &Value) -> Result<()> {
        let body = serde_json::to_string(&TrackRequest {
            tags,
            event,
            metadata,
        })?;
        tracing::info!(track = %body, "no daemon configured; event logged only");
        Ok(())
    }
}
