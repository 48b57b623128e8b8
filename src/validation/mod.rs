mod names;

pub use names::NameValidator;

use crate::error::{K6GenError, Result};
use crate::models::Block;

/// Kind of problem found in a script tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    InvalidIdentifier,
    DuplicateRequestName,
    DuplicateCheckName,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::InvalidIdentifier => write!(f, "Invalid identifier"),
            IssueKind::DuplicateRequestName => write!(f, "Duplicate request name"),
            IssueKind::DuplicateCheckName => write!(f, "Duplicate check name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Check a block tree before rendering.
///
/// All issues are collected and reported together as one
/// `ValidationError`.
pub fn validate_block(block: &Block) -> Result<()> {
    let issues = NameValidator::new()?.validate(block);
    if issues.is_empty() {
        return Ok(());
    }

    for issue in &issues {
        tracing::warn!(kind = %issue.kind, "{}", issue.message);
    }

    let message = issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(K6GenError::ValidationError(message))
}
