//! Dashboard module
//!
//! Provides an overview page showing the total spent and a chart of spending
//! per category.

mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
