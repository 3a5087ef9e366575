//! Chart generation and rendering for the dashboard.
//!
//! Charts are built as ECharts options with `charming` and drawn in the
//! browser by the ECharts script served from the static directory.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Color, JsFunction, Label, Orient, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::prelude::ToPrimitive;

use crate::{aggregation::CategoryTotal, html::HeadElement};

/// The path to the ECharts library, relative to the server root.
pub(super) const ECHARTS_SCRIPT: &str = "/static/echarts.6.0.0.min.js";

const PIE_COLOURS: [&str; 4] = ["#10B981", "#34D399", "#059669", "#6EE7B7"];

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Each chart gets an ECharts instance that follows the system colour scheme
/// and resizes with the window.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_text(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Stop text embedded in an inline script from closing the script element.
///
/// `<\/` means the same as `</` inside a JavaScript string.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/")
}

/// A pie chart with one slice per category, labelled with its share of total spending.
pub(super) fn spending_breakdown_chart(category_totals: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, String)> = category_totals
        .iter()
        .map(|total| {
            (
                total.total.to_f64().unwrap_or_default(),
                total.category.clone(),
            )
        })
        .collect();

    Chart::new()
        .title(Title::new().text("Spending Breakdown").left("center"))
        .color(PIE_COLOURS.iter().map(|&colour| Color::from(colour)).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().orient(Orient::Vertical).left("left"))
        .series(
            Pie::new()
                .name("Spending")
                .radius("60%")
                .label(Label::new().formatter("{b}: {d}%"))
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
