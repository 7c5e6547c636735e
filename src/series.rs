//! Shared reductions and chart-ready series shapes.
//!
//! Provides the building blocks every aggregator uses: sums that read missing
//! amounts as zero, first-occurrence extremum selection, guarded averages,
//! categorical series, day-level time series and the detail maps that back
//! chart tooltips.

use std::collections::BTreeMap;

use serde::{Serialize, ser::SerializeMap};
use time::Date;

use crate::currency::format_currency;

/// Sums `amount_of` over `records`, reading missing amounts as zero.
pub fn sum_by<R>(records: &[R], amount_of: impl Fn(&R) -> Option<f64>) -> f64 {
    records
        .iter()
        .map(|record| amount_of(record).unwrap_or(0.0))
        .sum()
}

/// The record with the strictly greatest amount, missing amounts read as zero.
///
/// Ties resolve to the first record in input order. Returns `None` for an
/// empty slice.
pub fn highest_by<R>(records: &[R], amount_of: impl Fn(&R) -> Option<f64>) -> Option<&R> {
    extremum_by(records, amount_of, |candidate, best| candidate > best)
}

/// The record with the strictly least amount, missing amounts read as zero.
///
/// Ties resolve to the first record in input order. Returns `None` for an
/// empty slice.
pub fn lowest_by<R>(records: &[R], amount_of: impl Fn(&R) -> Option<f64>) -> Option<&R> {
    extremum_by(records, amount_of, |candidate, best| candidate < best)
}

fn extremum_by<R>(
    records: &[R],
    amount_of: impl Fn(&R) -> Option<f64>,
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<&R> {
    let mut records = records.iter();
    let first = records.next()?;
    let mut best = (first, amount_of(first).unwrap_or(0.0));

    for record in records {
        let amount = amount_of(record).unwrap_or(0.0);

        if replaces(amount, best.1) {
            best = (record, amount);
        }
    }

    Some(best.0)
}

/// The mean of `amount_of` over `records`, or `None` for an empty slice.
pub fn average_by<R>(records: &[R], amount_of: impl Fn(&R) -> Option<f64>) -> Option<f64> {
    if records.is_empty() {
        return None;
    }

    Some(sum_by(records, amount_of) / records.len() as f64)
}

/// Parallel category labels and values, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoricalSeries {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl CategoricalSeries {
    /// Adds `amount` to `category`, appending the category if it is new.
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.position(category) {
            Some(index) => self.values[index] += amount,
            None => {
                self.categories.push(category.to_owned());
                self.values.push(amount);
            }
        }
    }

    /// The value for `category`, if the category is present.
    pub fn value_of(&self, category: &str) -> Option<f64> {
        self.position(category).map(|index| self.values[index])
    }

    /// Iterates over `(category, value)` pairs in series order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|label| label == category)
    }
}

/// Sums `amount_of` per category, missing amounts read as zero.
pub fn sum_by_category<R>(
    records: &[R],
    category_of: impl Fn(&R) -> &str,
    amount_of: impl Fn(&R) -> Option<f64>,
) -> CategoricalSeries {
    let mut series = CategoricalSeries::default();

    for record in records {
        series.add(category_of(record), amount_of(record).unwrap_or(0.0));
    }

    series
}

/// Counts records per category.
pub fn count_by_category<R>(records: &[R], category_of: impl Fn(&R) -> &str) -> CategoricalSeries {
    let mut series = CategoricalSeries::default();

    for record in records {
        series.add(category_of(record), 1.0);
    }

    series
}

/// Human-readable line items grouped by category, for chart tooltips.
///
/// Serializes as a JSON object whose keys keep the insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailMap {
    entries: Vec<(String, Vec<String>)>,
}

impl DetailMap {
    /// Appends `line` to the lines of `category`, adding the category if it is new.
    pub fn push(&mut self, category: &str, line: String) {
        match self.entries.iter_mut().find(|(label, _)| label == category) {
            Some((_, lines)) => lines.push(line),
            None => self.entries.push((category.to_owned(), vec![line])),
        }
    }

    /// The lines recorded for `category`.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(label, _)| label == category)
            .map(|(_, lines)| lines.as_slice())
    }

    /// The categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for DetailMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, lines) in &self.entries {
            map.serialize_entry(category, lines)?;
        }
        map.end()
    }
}

/// Builds a summed categorical series together with its tooltip details.
///
/// Each record contributes one `"<label>: <amount>"` line to its category, so
/// the detail map always has exactly the series' categories, in the same order.
pub fn sum_with_details<R>(
    records: &[R],
    category_of: impl Fn(&R) -> &str,
    amount_of: impl Fn(&R) -> Option<f64>,
    label_of: impl Fn(&R) -> String,
) -> (CategoricalSeries, DetailMap) {
    let mut series = CategoricalSeries::default();
    let mut details = DetailMap::default();

    for record in records {
        let category = category_of(record);
        let amount = amount_of(record).unwrap_or(0.0);

        series.add(category, amount);
        details.push(
            category,
            format!("{}: {}", label_of(record), format_currency(amount)),
        );
    }

    (series, details)
}

/// Amounts bucketed by calendar day, in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    pub dates: Vec<Date>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// ISO 8601 date labels, e.g. "2024-03-15".
    pub fn labels(&self) -> Vec<String> {
        self.dates.iter().map(Date::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Sums `amount_of` per day. Records without a date are left out.
pub fn sum_by_day<R>(
    records: &[R],
    date_of: impl Fn(&R) -> Option<Date>,
    amount_of: impl Fn(&R) -> Option<f64>,
) -> TimeSeries {
    let mut totals: BTreeMap<Date, f64> = BTreeMap::new();

    for record in records {
        if let Some(date) = date_of(record) {
            *totals.entry(date).or_insert(0.0) += amount_of(record).unwrap_or(0.0);
        }
    }

    let (dates, values) = totals.into_iter().unzip();

    TimeSeries { dates, values }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use super::{
        average_by, count_by_category, highest_by, lowest_by, sum_by, sum_by_category,
        sum_by_day, sum_with_details,
    };
    use crate::currency::format_currency;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        kind: &'static str,
        amount: Option<f64>,
        date: Option<Date>,
    }

    fn item(name: &'static str, kind: &'static str, amount: Option<f64>) -> Item {
        Item {
            name,
            kind,
            amount,
            date: None,
        }
    }

    #[test]
    fn sum_reads_missing_amounts_as_zero() {
        let items = vec![
            item("a", "x", Some(1.5)),
            item("b", "x", None),
            item("c", "y", Some(2.5)),
        ];

        assert_eq!(sum_by(&items, |i| i.amount), 4.0);
        assert_eq!(sum_by(&items[..0], |i| i.amount), 0.0);
    }

    #[test]
    fn adding_a_record_without_an_amount_leaves_the_sum_unchanged() {
        let mut items = vec![item("a", "x", Some(10.0)), item("b", "x", Some(5.0))];
        let before = sum_by(&items, |i| i.amount);

        items.push(item("c", "x", None));

        assert_eq!(sum_by(&items, |i| i.amount), before);
    }

    #[test]
    fn extremums_are_none_for_empty_input() {
        let items: Vec<Item> = Vec::new();

        assert_eq!(highest_by(&items, |i| i.amount), None);
        assert_eq!(lowest_by(&items, |i| i.amount), None);
        assert_eq!(average_by(&items, |i| i.amount), None);
    }

    #[test]
    fn extremums_keep_the_first_record_on_ties() {
        let items = vec![
            item("first-low", "x", Some(1.0)),
            item("first-high", "x", Some(9.0)),
            item("second-high", "x", Some(9.0)),
            item("second-low", "x", Some(1.0)),
        ];

        assert_eq!(highest_by(&items, |i| i.amount).unwrap().name, "first-high");
        assert_eq!(lowest_by(&items, |i| i.amount).unwrap().name, "first-low");
    }

    #[test]
    fn extremums_bound_every_record() {
        let items = vec![
            item("a", "x", Some(3.0)),
            item("b", "x", Some(-2.0)),
            item("c", "x", None),
            item("d", "x", Some(7.5)),
        ];
        let highest = highest_by(&items, |i| i.amount).unwrap();
        let lowest = lowest_by(&items, |i| i.amount).unwrap();

        for item in &items {
            let amount = item.amount.unwrap_or(0.0);
            assert!(highest.amount.unwrap_or(0.0) >= amount);
            assert!(lowest.amount.unwrap_or(0.0) <= amount);
        }
        assert_eq!(highest.name, "d");
        assert_eq!(lowest.name, "b");
    }

    #[test]
    fn average_is_sum_over_count() {
        let items = vec![
            item("a", "x", Some(1.0)),
            item("b", "x", None),
            item("c", "x", Some(5.0)),
        ];

        assert_eq!(average_by(&items, |i| i.amount), Some(2.0));
    }

    #[test]
    fn categorical_series_keep_insertion_order() {
        let items = vec![
            item("a", "Zulu", Some(1.0)),
            item("b", "Alpha", Some(2.0)),
            item("c", "Zulu", Some(3.0)),
            item("d", "Mike", None),
        ];

        let sums = sum_by_category(&items, |i| i.kind, |i| i.amount);
        let counts = count_by_category(&items, |i| i.kind);

        assert_eq!(sums.categories, vec!["Zulu", "Alpha", "Mike"]);
        assert_eq!(sums.values, vec![4.0, 2.0, 0.0]);
        assert_eq!(counts.categories, sums.categories);
        assert_eq!(counts.values, vec![2.0, 1.0, 1.0]);
        assert_eq!(sums.value_of("Alpha"), Some(2.0));
        assert_eq!(sums.value_of("Bravo"), None);
    }

    #[test]
    fn details_share_the_series_categories() {
        let items = vec![
            item("Roof", "Build", Some(1200.0)),
            item("Audit", "Consulting", Some(300.0)),
            item("Wall", "Build", None),
        ];

        let (series, details) =
            sum_with_details(&items, |i| i.kind, |i| i.amount, |i| i.name.to_owned());

        assert_eq!(
            details.categories().collect::<Vec<_>>(),
            series.categories.iter().map(String::as_str).collect::<Vec<_>>()
        );
        assert_eq!(
            details.get("Build").unwrap(),
            &[
                format!("Roof: {}", format_currency(1200.0)),
                format!("Wall: {}", format_currency(0.0)),
            ]
        );
    }

    #[test]
    fn detail_map_serializes_as_an_ordered_object() {
        let items = vec![item("b", "Second", Some(1.0)), item("a", "First", Some(2.0))];
        let (_, details) =
            sum_with_details(&items, |i| i.kind, |i| i.amount, |i| i.name.to_owned());

        let json = serde_json::to_string(&details).unwrap();

        assert!(json.find("Second").unwrap() < json.find("First").unwrap());
    }

    #[test]
    fn time_series_buckets_by_day_in_ascending_order() {
        let items = vec![
            Item {
                date: Some(date!(2024 - 03 - 20)),
                ..item("a", "x", Some(5.0))
            },
            Item {
                date: Some(date!(2024 - 03 - 02)),
                ..item("b", "x", Some(1.0))
            },
            Item {
                date: Some(date!(2024 - 03 - 20)),
                ..item("c", "x", None)
            },
            Item {
                date: Some(date!(2024 - 03 - 02)),
                ..item("d", "x", Some(2.0))
            },
            item("undated", "x", Some(100.0)),
        ];

        let series = sum_by_day(&items, |i| i.date, |i| i.amount);

        assert_eq!(series.labels(), vec!["2024-03-02", "2024-03-20"]);
        assert_eq!(series.values, vec![3.0, 5.0]);
    }
}
