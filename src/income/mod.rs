//! Recording and listing income.

mod core;
mod create_endpoint;
mod income_page;

pub use core::{Income, IncomeForm};
pub use create_endpoint::create_income_endpoint;
pub use income_page::get_income_page;
