//! One builder per report section.
//!
//! Each builder is a pure function from the record to an ordered block list;
//! builders never communicate with each other and the assembler owns both the
//! section order and the page-break policy.

pub(crate) mod appendix;
pub(crate) mod cover;
pub(crate) mod financial;
pub(crate) mod identity;
pub(crate) mod project;
pub(crate) mod recommendation;
pub(crate) mod sector;
pub(crate) mod summary;

use crate::config::FormatOptions;
use crate::format::{format_amount, format_percentage};
use crate::record::Figure;

pub(crate) const ZERO: Figure = Figure::Number(0.0);

/// Absent amounts display as zero, per the record's documented defaults.
pub(crate) fn amount_or_zero(value: Option<&Figure>, options: &FormatOptions) -> String {
    format_amount(Some(value.unwrap_or(&ZERO)), options)
}

pub(crate) fn percent_or_zero(value: Option<&Figure>, options: &FormatOptions) -> String {
    format_percentage(Some(value.unwrap_or(&ZERO)), options)
}

/// Absent free-text scalars display as the placeholder dash.
pub(crate) fn text_or_placeholder(value: Option<&str>, options: &FormatOptions) -> String {
    match value {
        Some(text) => text.to_string(),
        None => options.placeholder.clone(),
    }
}
