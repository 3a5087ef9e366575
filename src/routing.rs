//! Application router configuration.

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_create_expense_page, get_edit_expense_page, get_expenses_page,
    },
    income::{create_income_endpoint, get_income_page},
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    report::get_report_page,
    summary_page::get_summary_page,
};

/// Return a router with all the app's routes.
///
/// Static files are served from `static_dir` under [endpoints::STATIC].
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_summary_page))
        .route(
            endpoints::ADD_EXPENSE,
            get(get_create_expense_page).post(create_expense_endpoint),
        )
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::DELETE_EXPENSE, get(delete_expense_endpoint))
        .route(
            endpoints::EDIT_EXPENSE,
            get(get_edit_expense_page).post(edit_expense_endpoint),
        )
        .route(
            endpoints::INCOME,
            get(get_income_page).post(create_income_endpoint),
        )
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::REPORT_VIEW, get(get_report_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir))
        .fallback(get_404_not_found)
        .with_state(state)
}
