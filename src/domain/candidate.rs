use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A raw subscription candidate as it arrives at the trust boundary.
///
/// The subscription endpoint is reachable from arbitrary JSON bodies, so the
/// address field may be missing, `null`, or not a string at all. Modelling
/// every shape as a closed sum is what lets [`validate`](super::validate)
/// stay total instead of failing on malformed input.
///
/// `Default` is [`Candidate::Absent`], so a request-body field annotated with
/// `#[serde(default)]` maps a missing key to `Absent` without extra glue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Candidate {
    /// A textual candidate. May still be blank or malformed.
    Text(String),
    /// Field missing, or explicit JSON `null`.
    #[default]
    Absent,
    /// A non-string value: number, bool, array, or object.
    ///
    /// The payload is dropped on purpose. It has no bearing on the verdict
    /// and must never end up in logs.
    Other,
}

impl<'de> Deserialize<'de> for Candidate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Value::deserialize(deserializer)?.into())
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Null => Self::Absent,
            _ => Self::Other,
        }
    }
}

impl From<String> for Candidate {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Option<String>> for Candidate {
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::Absent, Self::Text)
    }
}

impl From<Option<&str>> for Candidate {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Self::Absent, Self::from)
    }
}
