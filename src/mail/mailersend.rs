use crate::config::{Config, REQUEST_TIMEOUT};
use crate::error::{AppError, Result};
use reqwest::Client;
use serde::Serialize;

use super::SendOutcome;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mailbox {
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Payload {
    pub from: Mailbox,
    pub to: Vec<Mailbox>,
    pub subject: String,
    pub text: String,
}

#[derive(Clone)]
pub struct MailerSendClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl MailerSendClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::HttpClient(format!("Failed to build MailerSend client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/email", config.mailersend_api_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    /// POST one message. Never errors: rejections and transport failures come back as outcomes.
    pub async fn send(&self, payload: &Payload) -> SendOutcome {
        let res = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => return SendOutcome::Transport(e.to_string()),
        };

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return SendOutcome::Rejected {
                status: status.as_u16(),
                body,
            };
        }

        SendOutcome::Delivered
    }
}
