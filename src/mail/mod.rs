pub mod mailersend;
pub mod template;

use async_trait::async_trait;

pub use template::{compose_message, InviteMessage};

use crate::config::Config;
use crate::dispatcher::InviteMailer;
use crate::error::Result;
use crate::models::InviteRecord;
use mailersend::{Mailbox, MailerSendClient, Payload};

/// Result of one send attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Provider accepted the message
    Delivered,
    /// Provider answered with a non-success status
    Rejected { status: u16, body: String },
    /// No usable response (connect failure, timeout, ...)
    Transport(String),
}

/// Mailer abstraction (currently backed by MailerSend)
#[derive(Clone)]
pub struct Mailer {
    inner: MailerSendClient,
    from: Mailbox,
}

impl Mailer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            inner: MailerSendClient::new(config)?,
            from: Mailbox {
                email: config.from_email.clone(),
                name: config.from_name.clone(),
            },
        })
    }

    /// Build the provider payload for one invitation
    pub fn build_payload(&self, record: &InviteRecord) -> Payload {
        let InviteMessage { subject, body } = compose_message(record, &self.from.name);

        Payload {
            from: self.from.clone(),
            to: vec![Mailbox {
                email: record.candidate_email.clone(),
                name: record.candidate_name.clone(),
            }],
            subject,
            text: body,
        }
    }

    /// Send the invitation email for a validated record
    pub async fn send_invite(&self, record: &InviteRecord) -> SendOutcome {
        let payload = self.build_payload(record);
        self.inner.send(&payload).await
    }
}

#[async_trait]
impl InviteMailer for Mailer {
    async fn send_invite(&self, record: &InviteRecord) -> SendOutcome {
        Mailer::send_invite(self, record).await
    }
}
