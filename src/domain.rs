mod candidate;
mod subscriber_email;
mod validation;

pub use candidate::Candidate;
pub use subscriber_email::SubscriberEmail;
pub use validation::{validate, RejectReason, ValidationResult};
