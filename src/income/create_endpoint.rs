//! Defines the endpoint for recording income.

use axum::{
    extract::{FromRef, State},
    response::Redirect,
};
use axum_extra::extract::Form;

use crate::{
    AppState, Error, endpoints,
    income::{Income, IncomeForm},
    store::RecordStore,
    timezone::local_today,
};

/// The state needed to record income.
#[derive(Debug, Clone)]
pub struct CreateIncomeState {
    /// The store holding the income records.
    pub incomes: RecordStore<Income>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateIncomeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            incomes: state.incomes.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for recording income, redirects back to the income page.
pub async fn create_income_endpoint(
    State(state): State<CreateIncomeState>,
    Form(form): Form<IncomeForm>,
) -> Result<Redirect, Error> {
    let today = local_today(&state.local_timezone)?;
    let income = form.into_income(today);

    state
        .incomes
        .append(&income)
        .inspect_err(|error| tracing::error!("could not add income: {error}"))?;

    tracing::debug!("Added income {income:?}");

    Ok(Redirect::to(endpoints::INCOME))
}
