use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_form_action(form: &ElementRef<'_>, endpoint: &str) {
    let method = form.value().attr("method").unwrap_or_default();
    let action = form.value().attr("action").unwrap_or_default();

    assert_eq!(
        method, "post",
        "want form with attribute method=\"post\", got {method:?}"
    );
    assert_eq!(
        action, endpoint,
        "want form with attribute action=\"{endpoint}\", got {action:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_type = input.value().attr("type").unwrap_or_default();
            let input_required = input.value().attr("required");

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );

            assert!(
                input_required.is_some(),
                "want input with name {name} to have the required attribute but got none"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_type = input.value().attr("type").unwrap_or_default();
            let input_value = input.value().attr("value").unwrap_or_default();

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );
            assert_eq!(
                input_value, value,
                "want input with value \"{value}\", got {input_value:?}"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
}
