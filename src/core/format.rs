//! Pattern-driven number and date formatting.
//!
//! Patterns are configuration strings, never hard-coded. The grammars are
//! documented subsets of the `DecimalFormat` and `DateTimeFormatter`
//! pattern languages; anything outside the subset is rejected at parse
//! time so a bad configuration fails before any document is composed.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Error returned when a format pattern fails to parse.
#[derive(Debug, Clone)]
pub struct PatternError {
    /// The offending pattern string.
    pub pattern: String,
    /// Why the pattern was rejected.
    pub reason: String,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern '{}': {}", self.pattern, self.reason)
    }
}

impl std::error::Error for PatternError {}

/// Rendered separator characters for [`DecimalPattern`].
///
/// The pattern grammar always writes `,` for grouping and `.` for the
/// decimal point; these symbols decide what actually appears in the
/// output. Defaults are German (`34,47` with `1.234` grouping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalSymbols {
    pub decimal: char,
    pub grouping: char,
}

impl Default for DecimalSymbols {
    fn default() -> Self {
        Self {
            decimal: ',',
            grouping: '.',
        }
    }
}

/// A parsed numeric pattern, `DecimalFormat` subset.
///
/// Grammar: optional literal prefix, a numeric core of `0` (forced digit)
/// and `#` (optional digit) placeholders with `,` as grouping marker and
/// `.` as decimal marker, optional literal suffix. The fraction width is
/// the number of placeholders after `.`; all fraction digits are always
/// rendered. `#,##0.00 €` formats `34.47` as `34,47 €` under the default
/// symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalPattern {
    prefix: String,
    suffix: String,
    min_int_digits: usize,
    frac_digits: usize,
    group_size: Option<usize>,
}

const CORE_CHARS: [char; 4] = ['0', '#', ',', '.'];

impl DecimalPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let err = |reason: &str| PatternError {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let first = pattern
            .find(|c| CORE_CHARS.contains(&c))
            .ok_or_else(|| err("no digit placeholders"))?;
        let last = pattern.rfind(|c| CORE_CHARS.contains(&c)).unwrap_or(first);
        let prefix = &pattern[..first];
        let core = &pattern[first..=last];
        let suffix = &pattern[last + 1..];

        if core.chars().any(|c| !CORE_CHARS.contains(&c)) {
            return Err(err("literal characters inside the numeric core"));
        }

        let mut parts = core.split('.');
        let int_part = parts.next().unwrap_or_default();
        let frac_part = parts.next();
        if parts.next().is_some() {
            return Err(err("more than one decimal marker"));
        }

        let placeholders = |s: &str| s.chars().filter(|c| *c == '0' || *c == '#').count();
        if placeholders(int_part) == 0 {
            return Err(err("no integer digit placeholders"));
        }

        let frac_digits = match frac_part {
            Some(f) if f.contains(',') => {
                return Err(err("grouping marker in the fraction part"));
            }
            Some(f) if placeholders(f) == 0 => {
                return Err(err("decimal marker without fraction placeholders"));
            }
            Some(f) => placeholders(f),
            None => 0,
        };

        let group_size = match int_part.rfind(',') {
            Some(pos) => {
                let size = placeholders(&int_part[pos + 1..]);
                if size == 0 {
                    return Err(err("grouping marker without trailing placeholders"));
                }
                Some(size)
            }
            None => None,
        };

        let min_int_digits = int_part.chars().filter(|c| *c == '0').count().max(1);

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            min_int_digits,
            frac_digits,
            group_size,
        })
    }

    /// Format an amount. Rounds to the fraction width with commercial
    /// (midpoint away from zero) rounding; the input is not mutated.
    pub fn format(&self, amount: Decimal, symbols: &DecimalSymbols) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.frac_digits as u32, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let fixed = format!("{:.*}", self.frac_digits, rounded.abs());
        let (int_digits, frac_digits) = match fixed.split_once('.') {
            Some((i, f)) => (i.to_string(), Some(f.to_string())),
            None => (fixed, None),
        };

        let mut int_digits = int_digits;
        while int_digits.len() < self.min_int_digits {
            int_digits.insert(0, '0');
        }
        let grouped = match self.group_size {
            Some(size) => group_digits(&int_digits, size, symbols.grouping),
            None => int_digits,
        };

        let mut out = String::with_capacity(self.prefix.len() + grouped.len() + 8);
        out.push_str(&self.prefix);
        if negative {
            out.push('-');
        }
        out.push_str(&grouped);
        if let Some(frac) = frac_digits {
            out.push(symbols.decimal);
            out.push_str(&frac);
        }
        out.push_str(&self.suffix);
        out
    }
}

fn group_digits(digits: &str, size: usize, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / size);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// A parsed date pattern, `DateTimeFormatter` subset.
///
/// Supported token runs: `yyyy`, `yy`, `MM`, `M`, `dd`, `d`. Any other
/// pattern letter is rejected; non-letter characters are literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    items: Vec<DateItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DateItem {
    Year4,
    Year2,
    Month2,
    Month1,
    Day2,
    Day1,
    Literal(char),
}

impl DatePattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut items = Vec::new();
        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c.is_ascii_alphabetic() {
                let run = chars[i..].iter().take_while(|&&x| x == c).count();
                let item = match (c, run) {
                    ('y', 4) => DateItem::Year4,
                    ('y', 2) => DateItem::Year2,
                    ('M', 2) => DateItem::Month2,
                    ('M', 1) => DateItem::Month1,
                    ('d', 2) => DateItem::Day2,
                    ('d', 1) => DateItem::Day1,
                    _ => {
                        return Err(PatternError {
                            pattern: pattern.to_string(),
                            reason: format!("unsupported token '{}'", c.to_string().repeat(run)),
                        });
                    }
                };
                items.push(item);
                i += run;
            } else {
                items.push(DateItem::Literal(c));
                i += 1;
            }
        }
        if items.is_empty() {
            return Err(PatternError {
                pattern: pattern.to_string(),
                reason: "empty pattern".to_string(),
            });
        }
        Ok(Self {
            pattern: pattern.to_string(),
            items,
        })
    }

    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::with_capacity(self.pattern.len() + 4);
        for item in &self.items {
            match item {
                DateItem::Year4 => out.push_str(&format!("{:04}", date.year())),
                DateItem::Year2 => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
                DateItem::Month2 => out.push_str(&format!("{:02}", date.month())),
                DateItem::Month1 => out.push_str(&date.month().to_string()),
                DateItem::Day2 => out.push_str(&format!("{:02}", date.day())),
                DateItem::Day1 => out.push_str(&date.day().to_string()),
                DateItem::Literal(c) => out.push(*c),
            }
        }
        out
    }

    /// The literal (non-token) characters of the pattern, for
    /// filesystem-safety checks on the compact pattern.
    pub fn literals(&self) -> impl Iterator<Item = char> + '_ {
        self.items.iter().filter_map(|item| match item {
            DateItem::Literal(c) => Some(*c),
            _ => None,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn currency_pattern_german_defaults() {
        let pattern = DecimalPattern::parse("#,##0.00 €").unwrap();
        let symbols = DecimalSymbols::default();
        assert_eq!(pattern.format(dec!(34.47), &symbols), "34,47 €");
        assert_eq!(pattern.format(dec!(0), &symbols), "0,00 €");
        assert_eq!(pattern.format(dec!(1234.5), &symbols), "1.234,50 €");
        assert_eq!(pattern.format(dec!(1234567.891), &symbols), "1.234.567,89 €");
    }

    #[test]
    fn currency_pattern_rounds_commercially() {
        let pattern = DecimalPattern::parse("0.00").unwrap();
        let symbols = DecimalSymbols::default();
        assert_eq!(pattern.format(dec!(2.345), &symbols), "2,35");
        assert_eq!(pattern.format(dec!(2.344), &symbols), "2,34");
    }

    #[test]
    fn negative_amounts_take_a_leading_minus() {
        let pattern = DecimalPattern::parse("#,##0.00 €").unwrap();
        let symbols = DecimalSymbols::default();
        assert_eq!(pattern.format(dec!(-34.47), &symbols), "-34,47 €");
    }

    #[test]
    fn quantity_pattern_plain_integer() {
        let pattern = DecimalPattern::parse("0").unwrap();
        let symbols = DecimalSymbols::default();
        assert_eq!(pattern.format(dec!(3), &symbols), "3");
        assert_eq!(pattern.format(dec!(0), &symbols), "0");
    }

    #[test]
    fn quantity_pattern_with_suffix() {
        let pattern = DecimalPattern::parse("0 Stk").unwrap();
        assert_eq!(pattern.format(dec!(7), &DecimalSymbols::default()), "7 Stk");
    }

    #[test]
    fn custom_symbols() {
        let pattern = DecimalPattern::parse("#,##0.00").unwrap();
        let english = DecimalSymbols {
            decimal: '.',
            grouping: ',',
        };
        assert_eq!(pattern.format(dec!(1234.5), &english), "1,234.50");
    }

    #[test]
    fn rejected_decimal_patterns() {
        assert!(DecimalPattern::parse("").is_err());
        assert!(DecimalPattern::parse("EUR").is_err());
        assert!(DecimalPattern::parse("0.00.00").is_err());
        assert!(DecimalPattern::parse("0,.00").is_err());
        assert!(DecimalPattern::parse("0.").is_err());
        assert!(DecimalPattern::parse("0x0.00").is_err());
    }

    #[test]
    fn compact_date_pattern() {
        let pattern = DatePattern::parse("yyyyMMdd").unwrap();
        assert_eq!(pattern.format(date(2024, 3, 2)), "20240302");
    }

    #[test]
    fn readable_date_pattern() {
        let pattern = DatePattern::parse("dd.MM.yyyy").unwrap();
        assert_eq!(pattern.format(date(2024, 3, 2)), "02.03.2024");
    }

    #[test]
    fn single_digit_tokens() {
        let pattern = DatePattern::parse("d.M.yy").unwrap();
        assert_eq!(pattern.format(date(2024, 3, 2)), "2.3.24");
    }

    #[test]
    fn rejected_date_patterns() {
        assert!(DatePattern::parse("").is_err());
        assert!(DatePattern::parse("yyy").is_err());
        assert!(DatePattern::parse("yyyy-MM-dd HH:mm").is_err());
        assert!(DatePattern::parse("QQ").is_err());
    }

    #[test]
    fn literals_are_exposed() {
        let pattern = DatePattern::parse("dd.MM.yyyy").unwrap();
        assert_eq!(pattern.literals().collect::<Vec<_>>(), vec!['.', '.']);
    }
}
