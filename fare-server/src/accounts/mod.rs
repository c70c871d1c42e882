//! Credential store.
//!
//! A flat-file account store keyed by email. Registration conflicts and
//! failed logins are ordinary outcome values, never errors; errors are
//! reserved for I/O and corrupt data.

mod store;

pub use store::{Account, AccountError, AccountStore, AuthOutcome, RegisterOutcome};
