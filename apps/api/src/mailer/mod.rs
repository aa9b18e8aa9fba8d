//! Email delivery — the single point of entry for all EmailJS calls.
//!
//! One template send per call, no retries; the signup flow decides how many
//! deliveries a submission needs and in what order. The `Deliverer` trait
//! lets the flow be tested with a recording double.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Sends one templated email through the configured delivery service.
#[async_trait]
pub trait Deliverer: Send + Sync {
    async fn send(&self, template_id: &str, params: Value) -> Result<(), DeliveryError>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: Value,
}

#[derive(Clone)]
pub struct EmailJsClient {
    client: Client,
    service_id: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn new(service_id: String, public_key: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            service_id,
            public_key,
        })
    }
}

#[async_trait]
impl Deliverer for EmailJsClient {
    async fn send(&self, template_id: &str, params: Value) -> Result<(), DeliveryError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self
            .client
            .post(EMAILJS_API_URL)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Email delivery succeeded (template {template_id})");
        Ok(())
    }
}
