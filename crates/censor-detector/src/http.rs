//! HTTP detector with retry, exponential backoff, and timeout.

use std::time::Duration;

use censor_core::config::DetectorConfig;
use censor_core::errors::{CensorResult, DetectorError};
use censor_core::traits::IDetector;
use serde::Serialize;

/// Request body posted to the detection endpoint.
#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    text: &'a str,
}

/// Delays slept before each retry: `initial`, doubling, capped at `max`.
pub fn backoff_delays(config: &DetectorConfig) -> impl Iterator<Item = Duration> {
    let max = config.max_backoff();
    std::iter::successors(Some(config.initial_backoff().min(max)), move |d| {
        Some((*d * 2).min(max))
    })
    .take(config.max_retries as usize)
}

/// Remote detector. Wraps blocking reqwest when the `http` feature is
/// enabled; otherwise every call reports the detector as unavailable.
#[derive(Debug)]
pub struct HttpDetector {
    config: DetectorConfig,
    bearer_token: Option<String>,
}

impl HttpDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            bearer_token: None,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Set the bearer token for authenticated requests.
    pub fn set_bearer_token(&mut self, token: String) {
        self.bearer_token = Some(token);
    }

    pub fn clear_bearer_token(&mut self) {
        self.bearer_token = None;
    }

    fn post(&self, text: &str) -> CensorResult<String> {
        let _request = DetectRequest { text };

        #[cfg(feature = "http")]
        {
            self.do_request(&_request)
        }

        #[cfg(not(feature = "http"))]
        {
            Err(DetectorError::Unavailable {
                reason: "http feature not enabled".into(),
            }
            .into())
        }
    }

    #[cfg(feature = "http")]
    fn do_request(&self, request: &DetectRequest<'_>) -> CensorResult<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout())
            .gzip(true)
            .build()
            .map_err(|e| DetectorError::RequestFailed {
                reason: e.to_string(),
            })?;

        let mut delays = backoff_delays(&self.config);
        let mut last_err;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let mut req = client.post(&self.config.endpoint).json(request);
            if let Some(ref token) = self.bearer_token {
                req = req.bearer_auth(token);
            }

            match req.send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.text().map_err(|e| {
                            DetectorError::RequestFailed {
                                reason: format!("failed to read response body: {e}"),
                            }
                            .into()
                        });
                    }
                    if status.is_client_error() {
                        let body = resp.text().unwrap_or_default();
                        return Err(DetectorError::HttpStatus {
                            status: status.as_u16(),
                            body,
                        }
                        .into());
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }

            let Some(delay) = delays.next() else {
                break;
            };
            tracing::debug!(
                "detector: retry attempt {}/{} after {:?}",
                attempt,
                self.config.max_retries,
                delay
            );
            std::thread::sleep(delay);
        }

        Err(DetectorError::RetriesExhausted {
            attempts: attempt,
            last_error: last_err,
        }
        .into())
    }
}

impl IDetector for HttpDetector {
    fn detect(&self, text: &str) -> CensorResult<String> {
        if !self.config.has_endpoint() {
            return Err(DetectorError::Unavailable {
                reason: "no detector endpoint configured".into(),
            }
            .into());
        }
        self.post(text)
    }
}
