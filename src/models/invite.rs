use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{cell_text, AirtableRecord};

/// Longest error text ever written back to a record.
pub const MAX_ERROR_CHARS: usize = 300;

pub const MISSING_FIELDS_ERROR: &str = "Missing email or Calendly link";

/// Delivery state of an interview round row (`Mail Status`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MailStatus {
    Pending,
    Sent,
    Failed,
}

impl MailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MailStatus::Pending => "Pending",
            MailStatus::Sent => "Sent",
            MailStatus::Failed => "Failed",
        }
    }
}

/// Raw `Interview_Rounds` fields as Airtable returns them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InviteFields {
    #[serde(rename = "Candidate Email", default, deserialize_with = "cell_text")]
    pub candidate_email: Option<String>,
    #[serde(rename = "Candidate", default, deserialize_with = "cell_text")]
    pub candidate: Option<String>,
    #[serde(rename = "Rounds", default, deserialize_with = "cell_text")]
    pub rounds: Option<String>,
    #[serde(rename = "Calendly Link", default, deserialize_with = "cell_text")]
    pub calendly_link: Option<String>,
}

/// One interview round awaiting (or past) its invitation email
#[derive(Debug, Clone, PartialEq)]
pub struct InviteRecord {
    pub id: String,
    pub candidate_email: String,
    pub candidate_name: String,
    pub round_name: String,
    pub scheduling_link: String,
}

impl InviteRecord {
    /// Both an address and a scheduling link are needed to send anything.
    pub fn is_sendable(&self) -> bool {
        !self.candidate_email.trim().is_empty() && !self.scheduling_link.trim().is_empty()
    }
}

impl From<AirtableRecord<InviteFields>> for InviteRecord {
    fn from(record: AirtableRecord<InviteFields>) -> Self {
        let trimmed = |value: Option<String>| value.unwrap_or_default().trim().to_string();
        let fields = record.fields;

        Self {
            id: record.id,
            candidate_email: trimmed(fields.candidate_email),
            candidate_name: trimmed(fields.candidate),
            round_name: trimmed(fields.rounds),
            scheduling_link: trimmed(fields.calendly_link),
        }
    }
}

/// Terminal result of processing one record
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Sent { at: DateTime<Utc> },
    Failed { error: String },
}

impl Delivery {
    pub fn sent_now() -> Self {
        Delivery::Sent { at: Utc::now() }
    }

    /// Failure with the reason capped at [`MAX_ERROR_CHARS`].
    pub fn failed(reason: impl AsRef<str>) -> Self {
        Delivery::Failed {
            error: truncate_chars(reason.as_ref(), MAX_ERROR_CHARS),
        }
    }

    pub fn status(&self) -> MailStatus {
        match self {
            Delivery::Sent { .. } => MailStatus::Sent,
            Delivery::Failed { .. } => MailStatus::Failed,
        }
    }
}

/// Partial field map merged into a row by `PATCH`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InviteUpdate {
    #[serde(rename = "Mail Status")]
    pub mail_status: MailStatus,
    #[serde(rename = "Mail Sent Time", skip_serializing_if = "Option::is_none")]
    pub mail_sent_time: Option<String>,
    #[serde(rename = "Error")]
    pub error: String,
}

impl From<&Delivery> for InviteUpdate {
    fn from(delivery: &Delivery) -> Self {
        match delivery {
            Delivery::Sent { at } => Self {
                mail_status: MailStatus::Sent,
                mail_sent_time: Some(at.to_rfc3339_opts(SecondsFormat::Micros, false)),
                error: String::new(),
            },
            Delivery::Failed { error } => Self {
                mail_status: MailStatus::Failed,
                mail_sent_time: None,
                error: error.clone(),
            },
        }
    }
}

/// First `max` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
