use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("The document_number must be a valid positive integer.")]
    InvalidDocumentNumber,
    #[error("The account_id must be a valid positive integer.")]
    InvalidAccountId
}

/// All rules a transaction request broke. Displays as the messages joined by single spaces.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Violations(Vec<&'static str>);

impl Violations {
    pub fn new(messages: Vec<&'static str>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> &[&'static str] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Violations {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.join(" "))
    }
}

impl std::error::Error for Violations {}
