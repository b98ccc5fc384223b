//! HTTP poller: owns the refresh timer and fetches `/data` once per tick.
//!
//! The cadence is assumed slower than the endpoint's round-trip time; only
//! one fetch is logically in flight and nothing enforces that. A failed
//! tick reports and the next tick simply tries again — no retry/backoff.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use reqwest::Client;
use tokio::{sync::mpsc, task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, warn};

use crate::types::MetricSample;

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("bad response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub enum PollEvent {
    /// A fetch is about to start; drives the transient "loading" badge.
    Loading,
    Sample(Box<MetricSample>),
    Failed(String),
}

/// Periodic fetcher. `start`/`set_interval` cancel any pending timer, fire
/// one immediate fetch, and reschedule; `stop` guarantees no further fetch
/// is issued. Responses belonging to a cancelled schedule are discarded via
/// a generation counter, so a slow in-flight reply can never land after a
/// newer schedule already produced events.
pub struct Poller {
    client: Client,
    url: String,
    tx: mpsc::UnboundedSender<PollEvent>,
    generation: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn new(url: String, tx: mpsc::UnboundedSender<PollEvent>) -> Self {
        Self {
            client: Client::new(),
            url,
            tx,
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    pub fn start(&mut self, interval: Duration) {
        self.respawn(interval);
    }

    /// Takes effect immediately: the pending timer is cancelled and a fetch
    /// fires right away on the new cadence.
    pub fn set_interval(&mut self, interval: Duration) {
        self.respawn(interval);
    }

    pub fn stop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn respawn(&mut self, interval: Duration) {
        let my_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let client = self.client.clone();
        let url = self.url.clone();
        let tx = self.tx.clone();
        let generation = Arc::clone(&self.generation);

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // First tick completes immediately.
                ticker.tick().await;
                if tx.send(PollEvent::Loading).is_err() {
                    return;
                }
                let res = fetch_sample(&client, &url).await;
                if generation.load(Ordering::SeqCst) != my_gen {
                    // Stale in-flight response after a reschedule/stop.
                    debug!(url = %url, "discarding stale poll response");
                    return;
                }
                let event = match res {
                    Ok(sample) => PollEvent::Sample(Box::new(sample)),
                    Err(e) => {
                        warn!(url = %url, error = %e, "poll failed");
                        PollEvent::Failed(e.to_string())
                    }
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
        }));
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One `GET` of the metrics endpoint, decoded into a sample.
pub async fn fetch_sample(client: &Client, url: &str) -> Result<MetricSample, PollError> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(PollError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

// Failure bodies are either {"error": "..."} JSON or plain text.
pub fn error_detail(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v.get("error").and_then(|e| e.as_str()) {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no detail from server".into()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_prefers_json_error_field() {
        assert_eq!(error_detail(r#"{"error": "sensor exploded"}"#), "sensor exploded");
    }

    #[test]
    fn error_detail_falls_back_to_plain_text() {
        assert_eq!(error_detail("  Internal Server Error \n"), "Internal Server Error");
        assert_eq!(error_detail(""), "no detail from server");
        // JSON without an "error" string field is treated as text
        assert_eq!(error_detail(r#"{"status": 500}"#), r#"{"status": 500}"#);
    }

    #[tokio::test]
    async fn stop_prevents_further_fetches() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        // Nothing listens on this port; every tick would produce a Failed event.
        let mut poller = Poller::new("http://127.0.0.1:9/data".into(), tx);
        poller.start(Duration::from_millis(10));
        poller.stop();
        // Drain whatever raced in before the stop, then verify silence.
        tokio::time::sleep(Duration::from_millis(50)).await;
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err(), "poller produced events after stop()");
    }
}
