use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text of each cell of each row in the table body.
pub(crate) fn table_rows(html: &Html) -> Vec<Vec<String>> {
    let row_selector = Selector::parse("tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    html.select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_owned())
                .collect()
        })
        .collect()
}
