use serde::{Deserialize, Serialize};

use super::{cell_text, MailStatus};

/// One row of the raw CSV import, one per candidate/interviewer pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImportFields {
    #[serde(rename = "Company", default, deserialize_with = "cell_text")]
    pub company: Option<String>,
    #[serde(rename = "Interviewer", default, deserialize_with = "cell_text")]
    pub interviewer: Option<String>,
    #[serde(rename = "Interviewer Email", default, deserialize_with = "cell_text")]
    pub interviewer_email: Option<String>,
    #[serde(rename = "Candidate", default, deserialize_with = "cell_text")]
    pub candidate: Option<String>,
    #[serde(rename = "Candidate Email", default, deserialize_with = "cell_text")]
    pub candidate_email: Option<String>,
    /// Newline separated `Round N: <url>` entries
    #[serde(rename = "Scheduling Method", default, deserialize_with = "cell_text")]
    pub scheduling_method: Option<String>,
    /// Passed through untouched (date, string or null)
    #[serde(rename = "Added On", default)]
    pub added_on: Option<serde_json::Value>,
}

/// Fields for a new `Interview_Rounds` row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoundFields {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Interviewer")]
    pub interviewer: String,
    #[serde(rename = "Interviewer Email")]
    pub interviewer_email: String,
    #[serde(rename = "Candidate")]
    pub candidate: String,
    #[serde(rename = "Candidate Email")]
    pub candidate_email: String,
    #[serde(rename = "Added On")]
    pub added_on: Option<serde_json::Value>,
    #[serde(rename = "Rounds")]
    pub rounds: String,
    #[serde(rename = "Calendly Link")]
    pub calendly_link: String,
    #[serde(rename = "Mail Status")]
    pub mail_status: MailStatus,
}
