//! The income record and its form.

use serde::Deserialize;
use time::Date;

use crate::{
    aggregation::HasAmount,
    store::{Record, Row},
};

/// Money that was earned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Income {
    /// How much was earned, kept as entered.
    pub amount: String,
    /// Where the money came from, e.g. "Salary".
    pub source: String,
    /// When the money was received.
    pub date: String,
}

impl Record for Income {
    const HEADER: &'static [&'static str] = &["Amount", "Source", "Date"];

    fn from_row(row: &[String]) -> Self {
        let field = |index: usize| row.get(index).cloned().unwrap_or_default();

        Self {
            amount: field(0),
            source: field(1),
            date: field(2),
        }
    }

    fn to_row(&self) -> Row {
        vec![self.amount.clone(), self.source.clone(), self.date.clone()]
    }
}

impl HasAmount for Income {
    fn amount(&self) -> &str {
        &self.amount
    }
}

/// The form data for recording income.
#[derive(Debug, Deserialize)]
pub struct IncomeForm {
    /// The amount as entered.
    pub amount: String,
    /// The source as entered.
    pub source: String,
    /// The date the income was received, today if left empty.
    #[serde(default)]
    pub date: Option<String>,
}

impl IncomeForm {
    /// Convert the form into an [Income], using `today` if no date was given.
    pub fn into_income(self, today: Date) -> Income {
        Income {
            amount: self.amount,
            source: self.source,
            date: self.date.unwrap_or_else(|| today.to_string()),
        }
    }
}
