//! The URIs of the app's pages and endpoints.
//!
//! For endpoints that take a parameter, e.g., '/edit/{expense_id}', use [format_endpoint].

/// The home page with total spending, income and the balance.
pub const ROOT: &str = "/";
/// The page with the expense form, also accepts the submitted form.
pub const ADD_EXPENSE: &str = "/add";
/// The page listing every expense.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The route for deleting an expense by position.
pub const DELETE_EXPENSE: &str = "/delete/{expense_id}";
/// The page for editing an expense by position, also accepts the submitted form.
pub const EDIT_EXPENSE: &str = "/edit/{expense_id}";
/// The page listing and recording income.
pub const INCOME: &str = "/income";
/// The page with the spending breakdown chart.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page with spending summed per category.
pub const REPORT_VIEW: &str = "/report";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/edit/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: usize) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
