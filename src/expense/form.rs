//! The form shared by the pages for adding and editing an expense.

use maud::{Markup, html};

use crate::html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE};

/// The values to pre-fill the expense form with.
pub struct ExpenseFormDefaults<'a> {
    pub amount: &'a str,
    pub category: &'a str,
    pub date: &'a str,
    pub notes: &'a str,
}

/// An expense form that posts to `action`.
pub fn expense_form(
    title: &str,
    action: &str,
    submit_text: &str,
    defaults: &ExpenseFormDefaults<'_>,
) -> Markup {
    html! {
        form
            method="post"
            action=(action)
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { (title) }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                // w-full needed to ensure input takes the full width when prefilled with a value
                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        required
                        autofocus
                        value=(defaults.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                input
                    name="category"
                    id="category"
                    type="text"
                    placeholder="Food"
                    required
                    value=(defaults.category)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(defaults.date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="notes"
                    class=(FORM_LABEL_STYLE)
                {
                    "Notes"
                }

                input
                    name="notes"
                    id="notes"
                    type="text"
                    placeholder="Notes"
                    value=(defaults.notes)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                (submit_text)
            }
        }
    }
}
