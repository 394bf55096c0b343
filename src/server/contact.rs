use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use crate::configs::SIMULATED_LATENCY_MS;
use crate::error::SubmitError;
use crate::utils::FormSubmission;

/// Receives one validated submission and resolves once it is delivered.
pub trait Submitter {
    fn submit(&self, data: FormSubmission) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Debug line logged for each simulated delivery.
pub fn submission_trace(data: &FormSubmission) -> Result<String, SubmitError> {
    Ok(format!("Form submitted: {}", serde_json::to_string(data)?))
}

/// Stand-in for a contact backend: waits, logs the payload and succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }

    pub fn latency_ms(&self) -> u32 {
        self.latency_ms
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(SIMULATED_LATENCY_MS)
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, data: FormSubmission) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let latency_ms = self.latency_ms;
        (async move {
            gloo_timers::future::TimeoutFuture::new(latency_ms).await;
            log::info!("{}", submission_trace(&data)?);
            Ok::<(), SubmitError>(())
        }).boxed_local()
    }
}

/// Posts the submission as a JSON object to `endpoint`.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, data: FormSubmission) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        (async move {
            log::debug!("Posting {} fields to {}", data.len(), endpoint);
            let response = Request::post(&endpoint).json(&data)?.send().await?;
            if response.ok() {
                log::info!("Contact submission accepted by {}", endpoint);
                Ok::<(), SubmitError>(())
            } else {
                log::error!(
                    "Contact submission rejected: {} {}",
                    response.status(),
                    response.status_text()
                );
                Err(SubmitError::Rejected(response.status()))
            }
        }).boxed_local()
    }
}
