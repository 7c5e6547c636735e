//! Currency formatting for detail-map line items.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Formats `number` as a dollar amount with thousands separators and two decimals.
///
/// Negative amounts are rendered with a leading minus, e.g. "-$12.30".
/// Amounts are rounded to the cent first, so fractions of a cent never show.
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| currency_formatter("$"));
    let negative_fmt = NEGATIVE_FMT.get_or_init(|| currency_formatter("-$"));

    let number = (number * 100.0).round() / 100.0;

    let formatted = if number < 0.0 {
        negative_fmt
            .as_ref()
            .map(|fmt| fmt.fmt_string(number.abs()))
    } else if number > 0.0 {
        positive_fmt.as_ref().map(|fmt| fmt.fmt_string(number))
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    };

    // numfmt switches to scientific notation for very small and very large numbers.
    match formatted {
        Some(formatted) if !formatted.contains(['e', 'E']) => pad_cents(formatted),
        _ => plain_currency(number),
    }
}

fn currency_formatter(prefix: &str) -> Option<Formatter> {
    Formatter::currency(prefix)
        .ok()
        .map(|fmt| fmt.precision(Precision::Decimals(2)))
}

// numfmt omits trailing zeros, so "12.30" is rendered as "12.3" and "12.00" as "12".
fn pad_cents(formatted: String) -> String {
    match formatted.rfind('.') {
        Some(dot) if formatted.len() - dot == 2 => format!("{formatted}0"),
        Some(_) => formatted,
        None => format!("{formatted}.00"),
    }
}

fn plain_currency(number: f64) -> String {
    if number < 0.0 {
        format!("-${:.2}", number.abs())
    } else {
        format!("${number:.2}")
    }
}
