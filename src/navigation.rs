//! This file defines the navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
        lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
        dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        let aria_current = self.is_current.then_some("page");

        html!( a href=(self.url) class=(style) aria-current=[aria_current] { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let pages = [
            (endpoints::ROOT, "Home"),
            (endpoints::DASHBOARD_VIEW, "Dashboard"),
            (endpoints::EXPENSES_VIEW, "Expenses"),
            (endpoints::ADD_EXPENSE, "Add Expense"),
            (endpoints::INCOME, "Income"),
            (endpoints::REPORT_VIEW, "Report"),
        ];

        let links = pages
            .into_iter()
            .map(|(url, title)| Link {
                url,
                title,
                is_current: active_endpoint == url,
            })
            .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a href=(endpoints::ROOT) class="flex items-center space-x-3"
                    {
                        span
                            class="self-center text-2xl font-semibold
                                whitespace-nowrap dark:text-white"
                        {
                            "Pennywise"
                        }
                    }

                    ul
                        class="font-medium flex flex-col p-4 lg:p-0 mt-4
                            lg:flex-row lg:space-x-8 lg:mt-0"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{endpoints, navigation::NavBar};

    #[test]
    fn marks_only_active_link_as_current() {
        let html = NavBar::new(endpoints::REPORT_VIEW).into_html().into_string();
        let document = Html::parse_fragment(&html);

        let current = document
            .select(&Selector::parse("a[aria-current=page]").unwrap())
            .collect::<Vec<_>>();

        assert_eq!(current.len(), 1, "want 1 active link, got {}", current.len());
        assert_eq!(current[0].value().attr("href"), Some(endpoints::REPORT_VIEW));
    }
}
