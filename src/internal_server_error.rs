//! Defines the page and route handler to display for an internal server error.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The text shown on the 500 page.
pub struct InternalServerError<'a> {
    /// What went wrong, in one line.
    pub description: &'a str,
    /// What the user can do about it.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl InternalServerError<'_> {
    fn into_html(self) -> Html<String> {
        Html(error_view("Internal Server Error", "500", self.description, self.fix).into_string())
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

/// Route handler for the generic internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        internal_server_error::get_internal_server_error_page,
        test_utils::{assert_valid_html, parse_html_document},
    };

    #[tokio::test]
    async fn renders_default_description() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let heading = document
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("No heading found");
        assert_eq!(heading.text().collect::<String>().trim(), "500");
    }
}
