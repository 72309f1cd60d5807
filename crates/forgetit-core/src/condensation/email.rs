use super::CondensationLevel;
use crate::text::{extract_key_sentences, scaled};

const FROM_PREFIX: &str = "From:";
const SUBJECT_PREFIX: &str = "Subject:";

/// Lines before this index are treated as headers
const BODY_START_LINE: usize = 3;

/// Header lines and flattened body of an email
struct EmailParts<'a> {
    from: &'a str,
    subject: &'a str,
    body: String,
}

impl<'a> EmailParts<'a> {
    fn parse(content: &'a str) -> Self {
        let lines: Vec<&str> = content.split('\n').collect();
        let header = |prefix: &str| {
            lines
                .iter()
                .find(|line| line.starts_with(prefix))
                .copied()
                .unwrap_or("")
        };

        EmailParts {
            from: header(FROM_PREFIX),
            subject: header(SUBJECT_PREFIX),
            body: lines.get(BODY_START_LINE..).unwrap_or(&[]).join(" "),
        }
    }

    fn with_body(&self, body: &str) -> String {
        format!("{}\n{}\n\n{}", self.from, self.subject, body)
    }

    /// Headers plus the body sampled down to `ratio` of its character length
    fn sampled(&self, ratio: f64) -> String {
        let target = scaled(self.body.chars().count(), ratio);
        self.with_body(&extract_key_sentences(&self.body, target))
    }
}

pub(super) fn condense(content: &str, level: CondensationLevel) -> String {
    let email = EmailParts::parse(content);
    match level {
        CondensationLevel::Original => content.to_string(),
        CondensationLevel::Light => email.sampled(0.75),
        CondensationLevel::Medium => email.sampled(0.5),
        CondensationLevel::Heavy => email.sampled(0.25),
        CondensationLevel::Severe => email.with_body("[Email body condensed]"),
        CondensationLevel::Maximum => format!("{} [Email reference]", email.subject),
    }
}
