//! Defines the route handler for the income page, which shows the form for
//! recording income above every income recorded so far.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, dollar_input_styles,
    },
    income::Income,
    navigation::NavBar,
    store::RecordStore,
    timezone::local_today,
};

/// The state needed for the income page.
#[derive(Debug, Clone)]
pub struct IncomePageState {
    /// The store holding the income records.
    pub incomes: RecordStore<Income>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for IncomePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            incomes: state.incomes.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn income_form(today: Date) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::INCOME)
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "Add Income" }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

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
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="source" class=(FORM_LABEL_STYLE) { "Source" }

                input
                    name="source"
                    id="source"
                    type="text"
                    placeholder="Salary"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(today)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                "Add Income"
            }
        }
    }
}

fn income_table(incomes: &[Income]) -> Markup {
    html! {
        @if incomes.is_empty() {
            p class="mt-8" { "No income recorded yet." }
        } @else {
            div class="overflow-x-auto rounded-lg shadow w-full max-w-screen-lg mt-8"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Source" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        }
                    }

                    tbody
                    {
                        @for income in incomes {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (income.amount) }
                                td class=(TABLE_CELL_STYLE) { (income.source) }
                                td class=(TABLE_CELL_STYLE) { (income.date) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn income_view(today: Date, incomes: &[Income]) -> Markup {
    let nav_bar = NavBar::new(endpoints::INCOME).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            (income_form(today))
        }

        div class="flex flex-col items-center px-6 pb-8 mx-auto text-gray-900 dark:text-white"
        {
            (income_table(incomes))
        }
    };

    base("Income", &[dollar_input_styles()], &content)
}

/// Renders the income form, with the date set to today, and the recorded income.
pub async fn get_income_page(State(state): State<IncomePageState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let incomes = state
        .incomes
        .records()
        .inspect_err(|error| tracing::error!("could not read income: {error}"))?;

    Ok(income_view(today, &incomes).into_response())
}
