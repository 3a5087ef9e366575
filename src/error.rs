//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::{internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Reading or writing a backing file failed.
    ///
    /// Callers should pass in the original error as a string.
    #[error("an I/O error occurred: {0}")]
    Io(String),

    /// A backing file could not be read or written as CSV.
    #[error("could not process the CSV data: {0}")]
    Csv(String),

    /// A stored amount could not be parsed as a decimal number.
    ///
    /// Amounts are stored exactly as they were entered, so this only surfaces
    /// when a request tries to add them up.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// A total of stored amounts does not fit in a decimal number.
    #[error("the amounts add up to more than can be represented")]
    AmountOverflow,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The lock guarding an in-memory store was poisoned.
    #[error("could not acquire the store lock")]
    StoreLock,
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        if value.is_io_error() {
            Error::Io(value.to_string())
        } else {
            Error::Csv(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezone(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::InvalidAmount(amount) => {
                tracing::error!("Could not add up amounts: \"{amount}\" is not a number");
                InternalServerError {
                    description: "Invalid Amount",
                    fix: &format!(
                        "The amount \"{amount}\" is not a number. Edit or delete the entry \
                        with this amount and try again."
                    ),
                }
                .into_response()
            }
            Error::AmountOverflow => {
                tracing::error!("Could not add up amounts: the total is out of range");
                InternalServerError {
                    description: "Amounts Too Large",
                    fix: "The stored amounts add up to more than can be shown. Edit or delete \
                        the largest entries and try again.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
