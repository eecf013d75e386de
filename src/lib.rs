//! Ledgerbook is a self-hosted, single-user transaction ledger.
//!
//! This library provides a small web app that directly serves HTML pages: an
//! in-memory ledger of transactions rendered as a table with a running total,
//! plus endpoints for adding and deleting entries.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use time::OffsetDateTime;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod html;
mod internal_server_error;
mod ledger;
mod not_found;
mod routing;
mod timezone;

pub use app_state::AppState;
pub use ledger::{Ledger, NewTransaction, Transaction, TransactionId};
pub use routing::build_router;
pub use timezone::DEFAULT_TIMEZONE;

use crate::{
    alert::alert_error,
    internal_server_error::{InternalServerErrorPage, render_internal_server_error},
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required form field was left empty.
    ///
    /// Insertion is all-or-nothing, so a missing field rejects the whole
    /// candidate transaction.
    #[error("the {0} field is required")]
    MissingField(&'static str),

    /// A form field contained text that could not be parsed as a value of the
    /// expected type.
    ///
    /// Callers should pass in the field name and the raw text that caused the
    /// error.
    #[error("could not read {1:?} as a value for the {0} field")]
    InvalidField(&'static str, String),

    /// A NaN or infinite amount was used to create a transaction.
    #[error("{0} is not a finite amount")]
    NonFiniteAmount(f64),

    /// The ID used to create a transaction already belongs to a transaction
    /// in the ledger.
    #[error("a transaction with the ID {0} already exists")]
    DuplicateId(TransactionId),

    /// A timestamp in the future was used to create a transaction.
    ///
    /// Transactions record events that have already happened, therefore
    /// future timestamps are not allowed.
    #[error("{0} is a timestamp in the future, which is not allowed")]
    FutureTimestamp(OffsetDateTime),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the display offset from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezone(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get the display offset for \"{timezone}\". Check your server \
                    settings and ensure the timezone has been set to a valid, canonical timezone \
                    string"
                    ),
                })
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        let (status_code, message, details) = match self {
            Error::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                "Missing field",
                format!("The {field} field is required. Fill it out and try again."),
            ),
            Error::InvalidField(field, value) => (
                StatusCode::BAD_REQUEST,
                "Invalid field",
                format!("Could not read {value:?} as a value for the {field} field."),
            ),
            Error::NonFiniteAmount(amount) => (
                StatusCode::BAD_REQUEST,
                "Invalid amount",
                format!("{amount} is not a finite amount."),
            ),
            Error::DuplicateId(id) => (
                StatusCode::BAD_REQUEST,
                "Duplicate transaction ID",
                format!(
                    "A transaction with the ID {id} already exists. \
                    Choose a different ID, or delete the existing transaction first."
                ),
            ),
            Error::FutureTimestamp(timestamp) => (
                StatusCode::BAD_REQUEST,
                "Invalid transaction date",
                format!("{timestamp} is in the future, which is not allowed."),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status_code, alert_error(message, &details)).into_response()
    }
}
