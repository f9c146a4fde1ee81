//! Locale-aware display formatting.
//!
//! Every function here is total: malformed input degrades to the configured
//! placeholder or to the raw string, never to an error. Values are expected
//! to pass through exactly once; re-formatting already-formatted text is not
//! supported.

use crate::config::{FormatOptions, NBSP};
use crate::record::Figure;
use tracing::debug;

/// Parses a numeric token that may carry plain or non-breaking spaces and a
/// decimal comma. Returns `None` for anything else; callers decide how to
/// degrade.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Formats a monetary amount: rounded to whole units, thousands grouped with
/// the configured separator, unit suffix joined with a non-breaking space.
/// Strings may already carry separators or the unit symbol; unparsable
/// strings come back verbatim.
pub fn format_amount(value: Option<&Figure>, options: &FormatOptions) -> String {
    match value {
        None => options.placeholder.clone(),
        Some(Figure::Number(n)) => amount_text(*n, options),
        Some(Figure::Text(s)) => {
            if s.trim() == options.placeholder {
                return options.placeholder.clone();
            }
            match parse_numeric(&s.replace(&options.currency_unit, "")) {
                Some(n) => amount_text(n, options),
                None => {
                    debug!(value = %s, "amount not parsable, emitting raw value");
                    s.clone()
                }
            }
        }
    }
}

/// Formats a percentage with two decimals and the configured decimal
/// separator, `%` joined with a non-breaking space. Accepts numbers or
/// strings carrying `%`, spaces or a decimal comma.
pub fn format_percentage(value: Option<&Figure>, options: &FormatOptions) -> String {
    match value {
        None => options.placeholder.clone(),
        Some(Figure::Number(n)) => format!("{}{NBSP}%", decimal_text(*n, options)),
        Some(Figure::Text(s)) => {
            if s.trim() == options.placeholder {
                return options.placeholder.clone();
            }
            match parse_numeric(&s.replace('%', "")) {
                Some(n) => format!("{}{NBSP}%", decimal_text(n, options)),
                None => {
                    debug!(value = %s, "percentage not parsable, emitting raw value");
                    s.clone()
                }
            }
        }
    }
}

/// Renders a value as-is for cells that show the author's own notation
/// (the DSCR column). Numbers get two decimals under the configured
/// convention; strings pass through untouched.
pub fn format_raw(value: Option<&Figure>, options: &FormatOptions) -> String {
    match value {
        None => options.placeholder.clone(),
        Some(Figure::Text(s)) => s.clone(),
        Some(Figure::Number(n)) => decimal_text(*n, options),
    }
}

/// Removes inline `<...>` markup spans from free text. Lone `<` without a
/// closing bracket is kept literally. `None` maps to the empty string.
pub fn strip_markup(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        let (head, tail) = rest.split_at(start);
        out.push_str(head);
        match tail[1..].find('>') {
            Some(end) if end > 0 => {
                rest = &tail[end + 2..];
            }
            _ => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn amount_text(value: f64, options: &FormatOptions) -> String {
    let grouped = group_thousands(value, options.grouping_separator);
    if options.currency_unit.is_empty() {
        grouped
    } else {
        format!("{grouped}{NBSP}{}", options.currency_unit)
    }
}

fn decimal_text(value: f64, options: &FormatOptions) -> String {
    format!("{value:.2}").replace('.', &options.decimal_separator.to_string())
}

fn group_thousands(value: f64, separator: char) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn amount_groups_thousands_with_nbsp() {
        let value = Figure::Number(105_507.0);
        assert_eq!(
            format_amount(Some(&value), &options()),
            "105\u{00A0}507\u{00A0}€"
        );
    }

    #[test]
    fn amount_parses_decorated_strings() {
        let value = Figure::Text("1 234,56 €".to_string());
        assert_eq!(
            format_amount(Some(&value), &options()),
            "1\u{00A0}235\u{00A0}€"
        );
    }

    #[test]
    fn amount_handles_negative_values() {
        let value = Figure::Number(-1_234_567.0);
        assert_eq!(
            format_amount(Some(&value), &options()),
            "-1\u{00A0}234\u{00A0}567\u{00A0}€"
        );
    }

    #[test]
    fn amount_is_total_over_degenerate_inputs() {
        let placeholder = Figure::Text("-".to_string());
        let garbage = Figure::Text("n/a".to_string());
        assert_eq!(format_amount(None, &options()), "-");
        assert_eq!(format_amount(Some(&placeholder), &options()), "-");
        assert_eq!(format_amount(Some(&garbage), &options()), "n/a");
    }

    #[test]
    fn percentage_uses_decimal_comma() {
        let value = Figure::Number(23.7);
        assert_eq!(format_percentage(Some(&value), &options()), "23,70\u{00A0}%");
    }

    #[test]
    fn percentage_strips_symbol_and_comma_before_parsing() {
        let value = Figure::Text("33,4 %".to_string());
        assert_eq!(format_percentage(Some(&value), &options()), "33,40\u{00A0}%");
    }

    #[test]
    fn percentage_falls_back_to_raw_string() {
        let value = Figure::Text("environ un tiers".to_string());
        assert_eq!(
            format_percentage(Some(&value), &options()),
            "environ un tiers"
        );
    }

    #[test]
    fn raw_value_passes_strings_through() {
        let text = Figure::Text("1.51".to_string());
        let number = Figure::Number(1.5);
        assert_eq!(format_raw(Some(&text), &options()), "1.51");
        assert_eq!(format_raw(Some(&number), &options()), "1,50");
        assert_eq!(format_raw(None, &options()), "-");
    }

    #[test]
    fn strip_markup_removes_tags_only() {
        assert_eq!(strip_markup(Some("<b>Gras</b> et <i>italique</i>")), "Gras et italique");
        assert_eq!(strip_markup(Some("2 < 3 mais pas une balise")), "2 < 3 mais pas une balise");
        assert_eq!(strip_markup(Some("<>")), "<>");
        assert_eq!(strip_markup(None), "");
    }

    #[test]
    fn parse_numeric_accepts_french_notation() {
        assert_eq!(parse_numeric("1\u{00A0}234,5"), Some(1234.5));
        assert_eq!(parse_numeric("1.51"), Some(1.51));
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("   "), None);
    }
}
