//! Defines the endpoint that serves the detail panel for a clicked row.

use std::sync::{Arc, Mutex};

use axum::extract::{FromRef, Path, State};
use maud::{Markup, html};

use crate::{AppState, ledger::Ledger};

use super::models::TransactionId;

/// The state needed to look up a transaction's details.
#[derive(Debug, Clone)]
pub struct TransactionDetailsState {
    /// The in-memory transaction ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TransactionDetailsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler returning the detail panel with the full description of
/// the requested transaction.
///
/// An ID that is not in the ledger returns the empty panel, matching the
/// table the client was looking at going stale.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn transaction_details_endpoint(
    State(state): State<TransactionDetailsState>,
    Path(transaction_id): Path<TransactionId>,
) -> Markup {
    let ledger = state.ledger.lock().unwrap();
    let description = ledger
        .get(transaction_id)
        .map(|transaction| transaction.description.clone())
        .unwrap_or_default();
    drop(ledger);

    details_panel(&description)
}

/// The detail panel partial. An empty `description` renders the placeholder
/// shown before any row has been clicked.
pub(crate) fn details_panel(description: &str) -> Markup {
    html! {
        div id="transaction-details" class="text-sm text-gray-700 dark:text-gray-300"
        {
            @if description.is_empty() {
                span class="text-gray-400 dark:text-gray-500"
                {
                    "Click a transaction's description to see the full text."
                }
            } @else {
                p { (description) }
            }
        }
    }
}
