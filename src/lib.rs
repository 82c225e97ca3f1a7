pub mod domain;
pub mod locale;
pub mod telemetry;

pub use domain::{validate, Candidate, RejectReason, SubscriberEmail, ValidationResult};
