//! The transaction ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `Ledger` store that owns the active set
//! - Formatting helpers for timestamps and shortened descriptions
//! - View handlers for the ledger page and the htmx partials that mutate it

mod create_endpoint;
mod delete_endpoint;
mod details_endpoint;
mod form;
mod format;
mod models;
mod store;
mod transactions_page;

pub use models::{NewTransaction, Transaction, TransactionId};
pub use store::Ledger;

pub(crate) use create_endpoint::create_transaction_endpoint;
pub(crate) use delete_endpoint::delete_transaction_endpoint;
pub(crate) use details_endpoint::transaction_details_endpoint;
pub(crate) use transactions_page::get_transactions_page;
