//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::ledger::Ledger;

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The display timezone as a canonical timezone name, e.g. "Europe/Chisinau".
    pub local_timezone: String,

    /// The in-memory transaction ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Europe/Chisinau".
    pub fn new(local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            ledger: Arc::new(Mutex::new(Ledger::new())),
        }
    }
}
