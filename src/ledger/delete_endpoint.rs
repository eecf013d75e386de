//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::extract::{FromRef, Path, State};
use maud::{Markup, html};

use crate::{AppState, html::format_currency, ledger::Ledger};

use super::models::TransactionId;

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The in-memory transaction ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Deletion is idempotent: an ID that is no longer in the ledger still
/// succeeds, so a stale delete button never surfaces an error.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Markup {
    let mut ledger = state.ledger.lock().unwrap();
    ledger.remove(transaction_id);
    let total = ledger.total();
    drop(ledger);

    // The status code has to be 200 OK or HTMX will not delete the table row.
    // The response body only carries the out-of-band total update.
    html! {
        span id="total-amount" hx-swap-oob="true" { (format_currency(total)) }
    }
}
