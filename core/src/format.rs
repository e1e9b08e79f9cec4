// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::num::FpCategory;

/// Decimal-style number formatting: a bounded number of fractional
/// digits, trailing zeros trimmed, thousands grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub max_fraction_digits: usize,
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            max_fraction_digits: 6,
            decimal_separator: '.',
            grouping_separator: Some(','),
        }
    }
}

impl NumberFormat {
    pub fn new(max_fraction_digits: usize) -> NumberFormat {
        NumberFormat {
            max_fraction_digits,
            ..NumberFormat::default()
        }
    }

    /// Swaps in a different decimal separator. A comma takes over the
    /// grouping role of the default format, so grouping switches to a
    /// period.
    pub fn with_decimal_separator(mut self, separator: char) -> NumberFormat {
        if self.grouping_separator == Some(separator) {
            self.grouping_separator = Some(if separator == '.' { ',' } else { '.' });
        }
        self.decimal_separator = separator;
        self
    }

    pub fn format(&self, value: f64) -> String {
        match value.classify() {
            FpCategory::Nan => return "NaN".to_owned(),
            FpCategory::Infinite if value.is_sign_positive() => return "+∞".to_owned(),
            FpCategory::Infinite => return "-∞".to_owned(),
            _ => (),
        }

        let fixed = format!("{:.*}", self.max_fraction_digits, value);
        let (negative, digits) = match fixed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, &fixed[..]),
        };
        let (int_part, frac_part) = match digits.find('.') {
            Some(pos) => (&digits[..pos], digits[pos + 1..].trim_end_matches('0')),
            None => (digits, ""),
        };

        let mut result = String::with_capacity(fixed.len() + int_part.len() / 3);
        if negative {
            result.push('-');
        }
        result.push_str(&self.group(int_part));
        if !frac_part.is_empty() {
            result.push(self.decimal_separator);
            result.push_str(frac_part);
        }
        result
    }

    fn group(&self, int_part: &str) -> String {
        let separator = match self.grouping_separator {
            Some(separator) => separator,
            None => return int_part.to_owned(),
        };

        let mut reversed = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                reversed.push(separator);
            }
            reversed.push(c);
        }
        reversed.chars().rev().collect()
    }

    /// Reads back text typed on the keypad or produced by `format`.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let cleaned: String = text
            .chars()
            .filter(|&c| Some(c) != self.grouping_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        if cleaned.is_empty() || !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        cleaned.parse().ok()
    }
}
