//! Submission-time validation of the user details form

mod clock;
mod error;
mod rules;

pub use clock::{Clock, SystemClock};
pub use error::ValidationError;
pub use rules::validate;

#[cfg(test)]
pub use clock::MockClock;
