use crate::models::InviteRecord;

/// Greeting used when the candidate's name is blank
pub const FALLBACK_GREETING_NAME: &str = "there";

/// Subject and plain-text body of one invitation
#[derive(Debug, Clone, PartialEq)]
pub struct InviteMessage {
    pub subject: String,
    pub body: String,
}

/// Fill the invitation template for `record`, signed by `from_name`
pub fn compose_message(record: &InviteRecord, from_name: &str) -> InviteMessage {
    let name = match record.candidate_name.trim() {
        "" => FALLBACK_GREETING_NAME,
        name => name,
    };

    let subject = format!("Interview Invitation – {}", record.round_name);
    let body = format!(
        "Hi {},\n\nYou have been invited for {}.\n\nPlease book a suitable slot using the Calendly link below:\n{}\n\nBest regards,\n{}",
        name, record.round_name, record.scheduling_link, from_name
    );

    InviteMessage { subject, body }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(name: &str) -> InviteRecord {
        InviteRecord {
            id: "rec1".to_string(),
            candidate_email: "a@x.com".to_string(),
            candidate_name: name.to_string(),
            round_name: "Round 1".to_string(),
            scheduling_link: "https://cal.com/x".to_string(),
        }
    }

    #[test]
    fn test_blank_name_falls_back_to_there() {
        let message = compose_message(&record(""), "Weekday Interviews");

        assert!(message.body.starts_with("Hi there,"));
        assert!(message.body.contains("https://cal.com/x"));
        assert_eq!(message.subject, "Interview Invitation – Round 1");
    }

    #[test]
    fn test_whitespace_name_falls_back_to_there() {
        let message = compose_message(&record("   "), "Weekday Interviews");
        assert!(message.body.starts_with("Hi there,"));
    }

    #[test]
    fn test_full_body() {
        let message = compose_message(&record("Ada"), "Acme Hiring");

        assert_eq!(
            message.body,
            "Hi Ada,\n\n\
             You have been invited for Round 1.\n\n\
             Please book a suitable slot using the Calendly link below:\n\
             https://cal.com/x\n\n\
             Best regards,\n\
             Acme Hiring"
        );
    }
}
