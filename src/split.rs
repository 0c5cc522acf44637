//! Turns raw candidate imports into one `Interview_Rounds` row per scheduling link.
//!
//! A raw row's `Scheduling Method` holds lines like `Round1: https://calendly.com/...`.
//! Lines that don't look like `<label>: <http(s) url>` are ignored.

use crate::airtable::RoundRepository;
use crate::error::Result;
use crate::models::{MailStatus, RawImportFields, RoundFields};

/// A `(round label, scheduling link)` pair parsed from one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSlot {
    pub round: String,
    pub link: String,
}

/// Parse every well-formed `label: url` line of a `Scheduling Method` cell
pub fn parse_schedule(raw: &str) -> Vec<RoundSlot> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<RoundSlot> {
    let (label, rest) = line.split_once(':')?;
    let label = label.trim();
    let link = rest.trim_start();

    if label.is_empty() || link.chars().any(char::is_whitespace) {
        return None;
    }

    let lower = link.to_ascii_lowercase();
    let scheme_len = if lower.starts_with("https://") {
        "https://".len()
    } else if lower.starts_with("http://") {
        "http://".len()
    } else {
        return None;
    };
    if link.len() == scheme_len {
        return None;
    }

    Some(RoundSlot {
        round: normalize_round_label(label),
        link: link.to_string(),
    })
}

/// Rewrite the first `round<ws><digits>` (any case, leading zeros dropped) as `Round N`
pub fn normalize_round_label(label: &str) -> String {
    const KEYWORD: &[u8] = b"round";
    let bytes = label.as_bytes();

    for start in 0..bytes.len().saturating_sub(KEYWORD.len() - 1) {
        if !bytes[start..start + KEYWORD.len()].eq_ignore_ascii_case(KEYWORD) {
            continue;
        }

        let after_keyword = start + KEYWORD.len();
        let tail = &label[after_keyword..];
        let digits_at = after_keyword + (tail.len() - tail.trim_start().len());
        let digits_len = label[digits_at..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits_len == 0 {
            continue;
        }

        let digits = &label[digits_at..digits_at + digits_len];
        let number = match digits.trim_start_matches('0') {
            "" => "0",
            n => n,
        };

        return format!(
            "{}Round {}{}",
            &label[..start],
            number,
            &label[digits_at + digits_len..]
        );
    }

    label.to_string()
}

/// Output rows for one raw import row (empty when it has no usable schedule)
pub fn rounds_for(raw: &RawImportFields) -> Vec<RoundFields> {
    let text = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();

    let schedule = text(&raw.scheduling_method);
    if schedule.is_empty() {
        return Vec::new();
    }

    parse_schedule(&schedule)
        .into_iter()
        .map(|slot| RoundFields {
            company: text(&raw.company),
            interviewer: text(&raw.interviewer),
            interviewer_email: text(&raw.interviewer_email),
            candidate: text(&raw.candidate),
            candidate_email: text(&raw.candidate_email),
            added_on: raw.added_on.clone(),
            rounds: slot.round,
            calendly_link: slot.link,
            mail_status: MailStatus::Pending,
        })
        .collect()
}

/// Read the whole raw import table and create the round rows; returns how many were created
pub async fn split_rounds(repo: &RoundRepository) -> Result<usize> {
    let raw_rows = repo.list_raw_imports().await?;

    let rounds: Vec<RoundFields> = raw_rows
        .iter()
        .flat_map(|row| rounds_for(&row.fields))
        .collect();

    tracing::info!(
        raw_rows = raw_rows.len(),
        rounds = rounds.len(),
        "Parsed scheduling links"
    );

    repo.create_rounds(&rounds).await
}
