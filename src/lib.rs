//! Pennywise is a web app for keeping track of personal spending and income.
//!
//! Expenses and income are kept in CSV files, one row per entry, and every
//! page is rendered on the server as plain HTML.
//!
//! This library provides the routes and the storage layer. The `server`
//! binary wires them up to files on disk.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod app_state;
mod dashboard;
mod endpoints;
mod error;
mod expense;
mod html;
mod income;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod report;
mod routing;
mod store;
mod summary_page;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use aggregation::{
    CategoryTotal, HasAmount, Summary, balance, group_by_category, parse_amount, total_amount,
};
pub use app_state::AppState;
pub use error::Error;
pub use expense::{Expense, ExpenseForm};
pub use income::{Income, IncomeForm};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use store::{
    CsvFile, MemoryRows, Mutation, Positioned, Record, RecordStore, Row, RowStore, Table,
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
