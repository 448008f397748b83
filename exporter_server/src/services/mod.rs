//! Exporter services — state that outlives a single request.

pub mod run_ledger;
