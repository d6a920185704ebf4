//! Cycle request dispatch.
//!
//! One GET per computation, no retry. Every dispatch takes a sequence
//! number before the request goes out; callers pair the reply's number with
//! a [`crate::ResponseGate`] to drop replies that resolve after a newer
//! request has already been answered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use cv_model::{CycleRequest, CycleResult};
use tracing::{debug, warn};
use url::Url;

use crate::{ClientError, ClientResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A decoded response tagged with its dispatch sequence number.
#[derive(Debug, Clone)]
pub struct DispatchReply {
    /// Dispatch order of the originating request. The dispatcher itself
    /// does not order replies; an embedding that can have more than one
    /// request in flight feeds this through a [`crate::ResponseGate`] and
    /// skips rendering when the gate rejects it. A single-shot caller can
    /// ignore it.
    pub seq: u64,
    pub cycle: CycleResult,
}

pub struct Dispatcher {
    http: reqwest::Client,
    endpoint: Url,
    seq: AtomicU64,
}

impl Dispatcher {
    /// Build a dispatcher for a service base URL such as
    /// `http://127.0.0.1:5000`.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut base = Url::parse(base_url)?;
        // `Url::join` replaces the last path segment, so a mount prefix like
        // `/app` would vanish without a trailing slash.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let endpoint = base.join("_runcycle")?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint,
            seq: AtomicU64::new(0),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Submit one cycle computation and decode the reply.
    pub async fn run_cycle(&self, request: &CycleRequest) -> ClientResult<DispatchReply> {
        request.validate().map_err(ClientError::Request)?;
        let seq = self.next_seq();
        debug!(seq, fluid = %request.fluid, "dispatching cycle request");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(seq, %status, "cycle service rejected the request");
            return Err(ClientError::Status { status });
        }

        let body = response.text().await?;
        let cycle = CycleResult::from_json(&body).map_err(ClientError::Malformed)?;
        debug!(seq, states = cycle.states.len(), "cycle response decoded");
        Ok(DispatchReply { seq, cycle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_run_cycle_path() {
        let d = Dispatcher::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(d.endpoint().as_str(), "http://127.0.0.1:5000/_runcycle");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let d = Dispatcher::new("http://host/app/").unwrap();
        assert_eq!(d.endpoint().as_str(), "http://host/app/_runcycle");
    }

    #[test]
    fn keeps_base_path_prefix_without_trailing_slash() {
        let d = Dispatcher::new("http://host/app").unwrap();
        assert_eq!(d.endpoint().as_str(), "http://host/app/_runcycle");
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(matches!(
            Dispatcher::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let d = Dispatcher::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(d.next_seq(), 1);
        assert_eq!(d.next_seq(), 2);
        assert_eq!(d.next_seq(), 3);
    }
}
