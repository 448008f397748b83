//! Inbound webhook payload models.

pub mod workflow_run;
