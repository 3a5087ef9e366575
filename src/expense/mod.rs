//! Recording, listing, editing and deleting expenses.

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod expenses_page;
mod form;

pub use core::{Expense, ExpenseForm};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_create_expense_page;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use edit_page::get_edit_expense_page;
pub use expenses_page::get_expenses_page;
