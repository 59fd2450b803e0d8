use crate::config::Config;
use crate::error::Error;
use crate::process::{ScheduleRequest, ScheduleResponse};

/// Thin wrapper around a `reqwest::Client` pointed at the schedule endpoint.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    url: String,
}

impl ScheduleClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.schedule_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the processes as JSON and read back the `result`.
    ///
    /// A non-2xx status turns the body text into [`Error::Server`]; a 2xx body
    /// that is not the expected JSON becomes [`Error::Parse`].
    pub async fn schedule(&self, request: ScheduleRequest) -> Result<ScheduleResponse, Error> {
        log::info!(
            "posting {} process(es) to {}",
            request.processes.len(),
            self.url
        );

        let response = self.http.post(&self.url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::debug!("{} answered {}", self.url, status);
            return Err(Error::Server(body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
