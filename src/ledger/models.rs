//! The core data models for ledger entries.

use time::{OffsetDateTime, UtcOffset};

use crate::endpoints;

use super::format::{datetime_attr, format_timestamp, short_description};

/// The unique, caller-supplied identifier of a [Transaction].
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created by passing a validated [NewTransaction] to
/// [crate::Ledger::add] and are never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub timestamp: OffsetDateTime,
    /// The kind of the transaction, e.g. "Groceries", "Transport", "Rent".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values render as income and negative values as expenses; the
    /// sign carries no further meaning.
    pub amount: f64,
}

/// A candidate transaction, parsed from the add-transaction form but not yet
/// validated against the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The caller-supplied ID for the new transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub timestamp: OffsetDateTime,
    /// The kind of the transaction.
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned.
    pub amount: f64,
}

/// Renders a transaction as a table row.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct TransactionTableRow {
    /// The ID of the transaction.
    pub(crate) id: TransactionId,
    /// The timestamp rendered in the display timezone.
    pub(crate) timestamp_label: String,
    /// The timestamp for the row's `<time datetime>` attribute.
    pub(crate) timestamp_attr: String,
    /// The amount of money spent or earned in this transaction.
    pub(crate) amount: f64,
    /// The category of the transaction.
    pub(crate) category: String,
    /// The description shortened for display in the table.
    pub(crate) short_description: String,
    /// The full description, set when it was shortened for display.
    pub(crate) tooltip: Option<String>,
    /// The API path to fetch this transaction's detail partial.
    pub(crate) details_url: String,
    /// The API path to delete this transaction.
    pub(crate) delete_url: String,
}

impl TransactionTableRow {
    pub(crate) fn new_from_transaction(transaction: &Transaction, offset: UtcOffset) -> Self {
        let (short, tooltip) = short_description(&transaction.description);

        Self {
            id: transaction.id,
            timestamp_label: format_timestamp(transaction.timestamp, offset),
            timestamp_attr: datetime_attr(transaction.timestamp, offset),
            amount: transaction.amount,
            category: transaction.category.clone(),
            short_description: short,
            tooltip: tooltip.map(str::to_owned),
            details_url: endpoints::format_endpoint(endpoints::TRANSACTION_DETAILS, transaction.id),
            delete_url: endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id),
        }
    }
}
