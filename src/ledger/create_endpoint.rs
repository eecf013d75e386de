//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::UtcOffset;

use crate::{AppState, Error, endpoints, ledger::Ledger, timezone::get_local_offset};

use super::{format::parse_datetime_local, models::NewTransaction};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The display timezone as a canonical timezone name.
    pub local_timezone: String,
    /// The in-memory transaction ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            ledger: state.ledger.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// Every field arrives as raw text so that validation can name the offending
/// field instead of failing inside the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// The unique ID for the transaction.
    #[serde(default)]
    pub id: Option<String>,
    /// When the transaction occurred, as a `datetime-local` value.
    #[serde(default)]
    pub date: Option<String>,
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: Option<String>,
    /// The kind of the transaction.
    #[serde(default)]
    pub category: Option<String>,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: Option<String>,
}

/// A route handler for creating a new transaction, redirects to the
/// transactions view on success.
///
/// Validation failures are returned as an alert partial with 400 Bad Request
/// and leave the ledger unchanged.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let offset = match get_local_offset(&state.local_timezone) {
        Some(offset) => offset,
        None => return Error::InvalidTimezone(state.local_timezone).into_alert_response(),
    };

    let candidate = match parse_form(form, offset) {
        Ok(candidate) => candidate,
        Err(error) => return error.into_alert_response(),
    };

    let mut ledger = state.ledger.lock().unwrap();

    if let Err(error) = ledger.add(candidate) {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// Turn the raw form text into a candidate transaction.
///
/// # Errors
/// This function will return a:
/// - [Error::MissingField] if a field is absent or blank,
/// - or [Error::InvalidField] if the id, date, or amount text cannot be parsed.
fn parse_form(form: TransactionForm, offset: UtcOffset) -> Result<NewTransaction, Error> {
    let id = require_field("id", form.id)?;
    let id = id
        .parse()
        .map_err(|_| Error::InvalidField("id", id.clone()))?;

    let date = require_field("date", form.date)?;
    let timestamp =
        parse_datetime_local(&date, offset).ok_or_else(|| Error::InvalidField("date", date))?;

    let amount = require_field("amount", form.amount)?;
    let amount: f64 = amount
        .parse()
        .map_err(|_| Error::InvalidField("amount", amount.clone()))?;

    let category = require_field("category", form.category)?;
    let description = require_field("description", form.description)?;

    Ok(NewTransaction {
        id,
        timestamp,
        category,
        description,
        amount,
    })
}

fn require_field(name: &'static str, value: Option<String>) -> Result<String, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField(name)),
    }
}
