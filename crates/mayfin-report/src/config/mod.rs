/// Explicit numeric-display configuration threaded into every formatter call.
///
/// The convention travels as a value rather than process-wide locale state, so
/// two builds with different conventions can coexist in one process and the
/// host locale never leaks into output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Separator inserted between the integer and fractional parts.
    pub decimal_separator: char,
    /// Separator inserted between thousands groups.
    pub grouping_separator: char,
    /// Unit appended to monetary amounts.
    pub currency_unit: String,
    /// Literal emitted for absent or placeholder values.
    pub placeholder: String,
}

/// Non-breaking space, used both for grouping and before unit suffixes so
/// renderers never wrap inside a number.
pub const NBSP: char = '\u{00A0}';

impl Default for FormatOptions {
    fn default() -> Self {
        Self::french_euro()
    }
}

impl FormatOptions {
    /// The single convention the reports ship with: French digit grouping
    /// with non-breaking spaces, decimal comma, euro unit.
    pub fn french_euro() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: NBSP,
            currency_unit: "€".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_french_euro_convention() {
        let options = FormatOptions::default();
        assert_eq!(options.decimal_separator, ',');
        assert_eq!(options.grouping_separator, NBSP);
        assert_eq!(options.currency_unit, "€");
        assert_eq!(options.placeholder, "-");
    }
}
