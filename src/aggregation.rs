//! Totals and per-category sums over expense and income records.
//!
//! Every function here is a pure function over the full collection it is
//! given. Nothing is cached, callers recompute on every request.

use std::{collections::HashMap, str::FromStr};

use rust_decimal::Decimal;

use crate::{Error, expense::Expense, income::Income};

/// A record with an amount of money stored as text.
pub trait HasAmount {
    /// The amount exactly as it was stored.
    fn amount(&self) -> &str;
}

/// The summed amount for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// The category name exactly as stored.
    pub category: String,
    /// The sum of the amounts of every expense in the category.
    pub total: Decimal,
}

/// Totals shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The sum of all expenses.
    pub total_spent: Decimal,
    /// The sum of all income.
    pub total_earned: Decimal,
    /// Income minus expenses.
    pub balance: Decimal,
}

impl Summary {
    /// Add up `expenses` and `incomes`.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if any amount is not a number and
    /// [Error::AmountOverflow] if a total does not fit in a [Decimal].
    pub fn compute(expenses: &[Expense], incomes: &[Income]) -> Result<Self, Error> {
        let total_spent = total_amount(expenses)?;
        let total_earned = total_amount(incomes)?;

        Ok(Self {
            total_spent,
            total_earned,
            balance: balance(total_earned, total_spent)?,
        })
    }
}

/// Parse a stored amount.
///
/// Leading and trailing whitespace is ignored and scientific notation such
/// as "1e3" is accepted.
///
/// Amounts are limited to the range of [Decimal], roughly ±7.9e28 with at
/// most 28 decimal places. Larger values such as "1e30" are rejected.
///
/// # Errors
/// Returns [Error::InvalidAmount] holding the original text if it is not a
/// number or is out of range.
pub fn parse_amount(text: &str) -> Result<Decimal, Error> {
    let trimmed = text.trim();

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::InvalidAmount(text.to_owned()))
}

/// Sum the amounts of `records`.
///
/// # Errors
/// A single malformed amount fails the whole sum with [Error::InvalidAmount].
/// Returns [Error::AmountOverflow] if the sum does not fit in a [Decimal].
pub fn total_amount<R: HasAmount>(records: &[R]) -> Result<Decimal, Error> {
    records.iter().try_fold(Decimal::ZERO, |total, record| {
        let amount = parse_amount(record.amount())?;

        total.checked_add(amount).ok_or(Error::AmountOverflow)
    })
}

/// Sum expense amounts per category.
///
/// Categories are returned in the order they first appear in `expenses`.
///
/// # Errors
/// A single malformed amount fails the whole grouping with [Error::InvalidAmount].
/// Returns [Error::AmountOverflow] if a category total does not fit in a [Decimal].
pub fn group_by_category(expenses: &[Expense]) -> Result<Vec<CategoryTotal>, Error> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        let amount = parse_amount(&expense.amount)?;

        let position = *positions
            .entry(expense.category.as_str())
            .or_insert_with(|| {
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: Decimal::ZERO,
                });
                totals.len() - 1
            });

        let total = &mut totals[position].total;
        *total = total.checked_add(amount).ok_or(Error::AmountOverflow)?;
    }

    Ok(totals)
}

/// How much is left over: `total_earned - total_spent`.
///
/// # Errors
/// Returns [Error::AmountOverflow] if the difference does not fit in a [Decimal].
pub fn balance(total_earned: Decimal, total_spent: Decimal) -> Result<Decimal, Error> {
    total_earned
        .checked_sub(total_spent)
        .ok_or(Error::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        Error,
        aggregation::{
            CategoryTotal, Summary, balance, group_by_category, parse_amount, total_amount,
        },
        expense::Expense,
        income::Income,
    };

    fn expense(amount: &str, category: &str) -> Expense {
        Expense {
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: "2024-01-01".to_owned(),
            notes: String::new(),
        }
    }

    fn income(amount: &str) -> Income {
        Income {
            amount: amount.to_owned(),
            source: "Salary".to_owned(),
            date: "2024-01-01".to_owned(),
        }
    }

    #[test]
    fn parses_plain_and_scientific_amounts() {
        assert_eq!(parse_amount("10.00"), Ok(dec!(10.00)));
        assert_eq!(parse_amount(" 5.5 "), Ok(dec!(5.5)));
        assert_eq!(parse_amount("-3"), Ok(dec!(-3)));
        assert_eq!(parse_amount("1e3"), Ok(dec!(1000)));
    }

    #[test]
    fn rejects_malformed_amount() {
        assert_eq!(
            parse_amount("ten"),
            Err(Error::InvalidAmount("ten".to_owned()))
        );
        assert_eq!(parse_amount(""), Err(Error::InvalidAmount(String::new())));
    }

    #[test]
    fn total_sums_literal_amounts() {
        let expenses = vec![expense("10.00", "Food"), expense("5.50", "Transport")];

        assert_eq!(total_amount(&expenses), Ok(dec!(15.50)));
    }

    #[test]
    fn total_of_nothing_is_zero() {
        let expenses: Vec<Expense> = Vec::new();

        assert_eq!(total_amount(&expenses), Ok(dec!(0)));
    }

    #[test]
    fn total_fails_on_any_malformed_amount() {
        let expenses = vec![expense("10.00", "Food"), expense("abc", "Food")];

        assert_eq!(
            total_amount(&expenses),
            Err(Error::InvalidAmount("abc".to_owned()))
        );
    }

    #[test]
    fn groups_by_category_in_first_seen_order() {
        let expenses = vec![
            expense("10", "Food"),
            expense("5", "Transport"),
            expense("3", "Food"),
        ];

        let got = group_by_category(&expenses).unwrap();

        assert_eq!(
            got,
            vec![
                CategoryTotal {
                    category: "Food".to_owned(),
                    total: dec!(13),
                },
                CategoryTotal {
                    category: "Transport".to_owned(),
                    total: dec!(5),
                },
            ]
        );
    }

    #[test]
    fn group_by_category_fails_on_malformed_amount() {
        let expenses = vec![expense("10", "Food"), expense("", "Transport")];

        assert!(group_by_category(&expenses).is_err());
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        assert_eq!(balance(dec!(100.00), dec!(15.50)), Ok(dec!(84.50)));
    }

    #[test]
    fn rejects_amount_outside_decimal_range() {
        assert_eq!(
            parse_amount("1e30"),
            Err(Error::InvalidAmount("1e30".to_owned()))
        );
    }

    #[test]
    fn total_near_decimal_max_is_an_error() {
        let expenses = vec![
            expense("79228162514264337593543950335", "Food"),
            expense("1", "Food"),
        ];

        assert_eq!(total_amount(&expenses), Err(Error::AmountOverflow));
    }

    #[test]
    fn group_total_near_decimal_max_is_an_error() {
        let expenses = vec![
            expense("79228162514264337593543950335", "Food"),
            expense("79228162514264337593543950335", "Food"),
        ];

        assert_eq!(group_by_category(&expenses), Err(Error::AmountOverflow));
    }

    #[test]
    fn balance_below_decimal_min_is_an_error() {
        assert_eq!(
            balance(-Decimal::MAX, dec!(1)),
            Err(Error::AmountOverflow)
        );
    }

    #[test]
    fn summary_totals_both_collections() {
        let expenses = vec![expense("10.00", "Food"), expense("5.50", "Transport")];
        let incomes = vec![income("60"), income("40.00")];

        let summary = Summary::compute(&expenses, &incomes).unwrap();

        assert_eq!(summary.total_spent, dec!(15.50));
        assert_eq!(summary.total_earned, dec!(100.00));
        assert_eq!(summary.balance, dec!(84.50));
    }
}
