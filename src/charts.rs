//! ECharts configurations for the overview series.
//!
//! The charts are plain data: [charming::Chart] values whose `to_string()` is
//! the ECharts option JSON a presentation layer hands to `chart.setOption`.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Bar, Line},
};
use serde::Serialize;

use crate::series::{CategoricalSeries, TimeSeries};

/// A chart with the HTML element ID it should be mounted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl OverviewChart {
    pub fn new(id: &'static str, chart: &Chart) -> Self {
        Self {
            id,
            options: chart.to_string(),
        }
    }
}

/// A bar chart with one bar per category, values shown as currency.
pub fn category_bar_chart(title: &str, series: &CategoricalSeries) -> Chart {
    Chart::new()
        .title(Title::new().text(title))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.categories.clone()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name(title).data(series.values.clone()))
}

/// A bar chart with one bar per category, values shown as plain counts.
pub fn category_count_chart(title: &str, series: &CategoricalSeries) -> Chart {
    Chart::new()
        .title(Title::new().text(title))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.categories.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Bar::new().name(title).data(series.values.clone()))
}

/// A line chart over ISO date labels, values shown as currency.
pub fn time_series_line_chart(title: &str, series: &TimeSeries) -> Chart {
    Chart::new()
        .title(Title::new().text(title))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(series.labels()))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name(title).data(series.values.clone()))
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

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{OverviewChart, category_bar_chart, category_count_chart, time_series_line_chart};
    use crate::series::{CategoricalSeries, TimeSeries};

    fn series() -> CategoricalSeries {
        CategoricalSeries {
            categories: vec!["Build".to_owned(), "Design".to_owned()],
            values: vec![125.0, 50.0],
        }
    }

    #[test]
    fn bar_chart_options_contain_categories_and_values() {
        let options = category_bar_chart("Budget by type", &series()).to_string();

        assert!(options.contains("Budget by type"));
        assert!(options.contains("\"Build\""));
        assert!(options.contains("\"Design\""));
        assert!(options.contains("125"));
    }

    #[test]
    fn count_chart_options_contain_categories() {
        let options = category_count_chart("Projects by status", &series()).to_string();

        assert!(options.contains("Projects by status"));
        assert!(options.contains("\"Build\""));
    }

    #[test]
    fn line_chart_uses_iso_date_labels() {
        let series = TimeSeries {
            dates: vec![date!(2024 - 03 - 01), date!(2024 - 03 - 09)],
            values: vec![30.0, 50.0],
        };

        let options = time_series_line_chart("Sales over time", &series).to_string();

        assert!(options.contains("2024-03-01"));
        assert!(options.contains("2024-03-09"));
    }

    #[test]
    fn overview_chart_keeps_the_option_json() {
        let chart = category_bar_chart("Budget by type", &series());

        let overview_chart = OverviewChart::new("budget-by-type", &chart);

        assert_eq!(overview_chart.id, "budget-by-type");
        assert_eq!(overview_chart.options, chart.to_string());
    }
}
