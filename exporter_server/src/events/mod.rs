//! Run state transitions derived from webhook events.

pub mod run;

pub use run::{RunOutcome, RunTransition};
