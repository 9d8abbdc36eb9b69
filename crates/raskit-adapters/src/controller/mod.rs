//! Connectors for the external application's automation interface.
//!
//! No platform automation binding ships with raskit. The CLI defaults to
//! [`UnavailableConnector`], which reports the application as missing, and
//! offers [`RehearsalConnector`] to walk through a whole session without it.

mod rehearsal;
mod unavailable;

pub use rehearsal::{RehearsalCall, RehearsalConnector, RehearsalController};
pub use unavailable::UnavailableConnector;
