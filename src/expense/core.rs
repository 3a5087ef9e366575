//! The expense record and the form used to create and edit one.

use serde::Deserialize;
use time::Date;

use crate::{
    aggregation::HasAmount,
    store::{Record, Row},
};

/// Money that was spent.
///
/// Every field is kept as the text that was entered. The amount is only
/// parsed when expenses are added up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expense {
    /// How much was spent, e.g. "12.50".
    pub amount: String,
    /// What the money was spent on, e.g. "Food".
    pub category: String,
    /// When the money was spent, usually formatted as YYYY-MM-DD.
    pub date: String,
    /// Free text, may be empty.
    pub notes: String,
}

fn field(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

impl Record for Expense {
    const HEADER: &'static [&'static str] = &["Amount", "Category", "Date", "Notes"];

    fn from_row(row: &[String]) -> Self {
        Self {
            amount: field(row, 0),
            category: field(row, 1),
            date: field(row, 2),
            notes: field(row, 3),
        }
    }

    fn to_row(&self) -> Row {
        vec![
            self.amount.clone(),
            self.category.clone(),
            self.date.clone(),
            self.notes.clone(),
        ]
    }
}

impl HasAmount for Expense {
    fn amount(&self) -> &str {
        &self.amount
    }
}

/// The form data for creating or editing an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The amount as entered.
    pub amount: String,
    /// The category as entered.
    pub category: String,
    /// The date the expense occurred, today if left empty.
    #[serde(default)]
    pub date: Option<String>,
    /// Optional notes.
    #[serde(default)]
    pub notes: String,
}

impl ExpenseForm {
    /// Convert the form into an [Expense], using `today` if no date was given.
    pub fn into_expense(self, today: Date) -> Expense {
        Expense {
            amount: self.amount,
            category: self.category,
            date: self.date.unwrap_or_else(|| today.to_string()),
            notes: self.notes,
        }
    }

    /// Convert the form into an [Expense] exactly as submitted.
    ///
    /// Used when editing, where clearing the date stores an empty date.
    pub fn into_submitted_expense(self) -> Expense {
        Expense {
            amount: self.amount,
            category: self.category,
            date: self.date.unwrap_or_default(),
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        expense::{Expense, ExpenseForm},
        store::Record,
    };

    #[test]
    fn short_row_pads_missing_fields() {
        let row = vec!["10.00".to_owned(), "Food".to_owned()];

        let expense = Expense::from_row(&row);

        assert_eq!(
            expense,
            Expense {
                amount: "10.00".to_owned(),
                category: "Food".to_owned(),
                date: String::new(),
                notes: String::new(),
            }
        );
    }

    #[test]
    fn row_follows_header_order() {
        let expense = Expense {
            amount: "5.50".to_owned(),
            category: "Transport".to_owned(),
            date: "2024-01-02".to_owned(),
            notes: "Bus".to_owned(),
        };

        assert_eq!(expense.to_row(), vec!["5.50", "Transport", "2024-01-02", "Bus"]);
    }

    #[test]
    fn form_without_date_uses_today() {
        let form: ExpenseForm = serde_html_form::from_str("amount=3&category=Food&date=").unwrap();

        let expense = form.into_expense(date!(2024 - 03 - 09));

        assert_eq!(expense.date, "2024-03-09");
        assert_eq!(expense.notes, "");
    }

    #[test]
    fn submitted_form_keeps_empty_date() {
        let form: ExpenseForm = serde_html_form::from_str("amount=3&category=Food&date=").unwrap();

        let expense = form.into_submitted_expense();

        assert_eq!(expense.date, "");
    }

    #[test]
    fn form_keeps_given_date_and_notes() {
        let form: ExpenseForm = serde_html_form::from_str(
            "amount=3&category=Food&date=2024-01-01&notes=Lunch+with+Sam",
        )
        .unwrap();

        let expense = form.into_expense(date!(2024 - 03 - 09));

        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.notes, "Lunch with Sam");
    }
}
