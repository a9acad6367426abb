//! Text preview of the certificate.
//!
//! Mirrors the document's text in the same order, with placeholders for
//! fields the user has not filled yet.

use std::fmt;

use super::common::issue_date_line;
use super::form::FormState;
use super::layout::{
    CERTIFY_LINE, COMPLETION_LINE, COURSE_NAME, FOUNDER, ORGANIZATION, PROGRAM_NAME, TITLE,
};

pub const NAME_PLACEHOLDER: &str = "Participant Name";
pub const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub participant_name: String,
    pub issue_date: String,
}

impl Preview {
    /// Empty fields show a placeholder; anything else is shown verbatim,
    /// including whitespace-only names.
    pub fn from_state(state: &FormState) -> Self {
        let or_placeholder = |value: &str, placeholder: &str| {
            if value.is_empty() {
                placeholder.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            participant_name: or_placeholder(&state.participant_name, NAME_PLACEHOLDER),
            issue_date: or_placeholder(&state.issue_date, DATE_PLACEHOLDER),
        }
    }

    pub fn issue_date_line(&self) -> String {
        issue_date_line(&self.issue_date)
    }

    /// Preview lines in document order. `None` marks the divider.
    pub fn lines(&self) -> Vec<Option<String>> {
        vec![
            Some(TITLE.to_string()),
            Some(COURSE_NAME.to_string()),
            Some(PROGRAM_NAME.to_string()),
            None,
            Some(CERTIFY_LINE.to_string()),
            Some(self.participant_name.clone()),
            Some(COMPLETION_LINE.to_string()),
            Some(self.issue_date_line()),
            Some(ORGANIZATION.to_string()),
            Some(FOUNDER.to_string()),
        ]
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 48;
        for line in self.lines() {
            match line {
                Some(text) => writeln!(f, "{:^width$}", text, width = WIDTH)?,
                None => writeln!(f, "{}", "-".repeat(WIDTH))?,
            }
        }
        Ok(())
    }
}
