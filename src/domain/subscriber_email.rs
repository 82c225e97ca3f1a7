use serde::{Deserialize, Serialize};

use super::RejectReason;

/// An e-mail address that passed validation, held in normalized form.
///
/// Normalization trims surrounding whitespace and lowercases the rest, so two
/// submissions differing only in case or padding deduplicate to the same
/// stored row. Parsing an already-normalized address returns it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Checks a candidate string against the subscription address grammar
    /// and returns the normalized address.
    ///
    /// The checks run from cheapest to most specific so the common malformed
    /// shapes (no `@`, no top-level label) fail fastest, and each failure
    /// mode carries its own [`RejectReason`].
    pub fn parse(s: &str) -> Result<Self, RejectReason> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RejectReason::EmptyOrWrongType);
        }
        if s.matches('@').count() != 1 {
            return Err(RejectReason::MissingOrMultipleAt);
        }
        let (local, domain) = match s.split_once('@') {
            Some(parts) => parts,
            None => return Err(RejectReason::MissingOrMultipleAt),
        };
        if local.is_empty() || domain.is_empty() {
            return Err(RejectReason::EmptyLocalOrDomain);
        }
        if local.contains("..") || local.starts_with('.') || local.ends_with('.') {
            return Err(RejectReason::InvalidLocalPart);
        }
        let labels: Vec<&str> = domain.split('.').collect();
        let tld_ok = labels
            .last()
            .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) || !tld_ok {
            return Err(RejectReason::InvalidDomain);
        }
        // `s` is already trimmed, so any whitespace left is interior.
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(RejectReason::InvalidCharacters);
        }
        Ok(Self(s.to_lowercase()))
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = RejectReason;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<SubscriberEmail> for String {
    fn from(email: SubscriberEmail) -> Self {
        email.0
    }
}
