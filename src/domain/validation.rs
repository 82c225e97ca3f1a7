use serde::Serialize;

use super::{Candidate, SubscriberEmail};

/// Why a candidate was turned away.
///
/// A closed taxonomy, one tag per failure mode, so the caller can branch
/// exhaustively and tests can assert exactly why a candidate failed. The
/// `Display` messages are what the subscription endpoint shows end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("An email address is required")]
    EmptyOrWrongType,
    #[error("An email address must contain a single '@'")]
    MissingOrMultipleAt,
    #[error("Both sides of the '@' must be non-empty")]
    EmptyLocalOrDomain,
    #[error("The part before the '@' is malformed")]
    InvalidLocalPart,
    #[error("The domain must end in a top-level label of at least two letters")]
    InvalidDomain,
    #[error("An email address may not contain whitespace or control characters")]
    InvalidCharacters,
}

/// The verdict on one candidate.
///
/// Built once per call and handed to the caller, which decides persistence
/// and user-facing messaging. Serializes with a `status` tag so the endpoint
/// can forward it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Accepted { email: SubscriberEmail },
    Rejected { reason: RejectReason },
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn email(&self) -> Option<&SubscriberEmail> {
        match self {
            Self::Accepted { email } => Some(email),
            Self::Rejected { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<SubscriberEmail, RejectReason> {
        match self {
            Self::Accepted { email } => Ok(email),
            Self::Rejected { reason } => Err(reason),
        }
    }
}

impl From<Result<SubscriberEmail, RejectReason>> for ValidationResult {
    fn from(outcome: Result<SubscriberEmail, RejectReason>) -> Self {
        match outcome {
            Ok(email) => Self::Accepted { email },
            Err(reason) => Self::Rejected { reason },
        }
    }
}

/// Classifies a candidate as a usable subscription address.
///
/// Total over every shape the endpoint can receive: whatever arrives, the
/// caller gets a [`ValidationResult`] back, never a panic. Pure function, no
/// I/O, safe to call from any number of concurrent requests.
pub fn validate(candidate: impl Into<Candidate>) -> ValidationResult {
    let outcome = match candidate.into() {
        Candidate::Text(raw) => SubscriberEmail::parse(&raw),
        Candidate::Absent | Candidate::Other => Err(RejectReason::EmptyOrWrongType),
    };
    match &outcome {
        Ok(email) => tracing::trace!(email = %email, "subscription candidate accepted"),
        Err(reason) => tracing::debug!(%reason, "subscription candidate rejected"),
    }
    outcome.into()
}
