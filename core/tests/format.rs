// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use keycalc_core::NumberFormat;
use similar_asserts::assert_eq;

fn test(format: &NumberFormat, value: f64, output: &str) {
    assert_eq!(format.format(value), output);
}

#[test]
fn test_integers() {
    let format = NumberFormat::default();
    test(&format, 0.0, "0");
    test(&format, 7.0, "7");
    test(&format, 999.0, "999");
    test(&format, 1000.0, "1,000");
    test(&format, 1234567.0, "1,234,567");
    test(&format, -42000.0, "-42,000");
}

#[test]
fn test_fraction_digits() {
    let format = NumberFormat::new(6);
    test(&format, 0.5, "0.5");
    test(&format, 3.14159265358979, "3.141593");
    test(&format, 1.0 / 3.0, "0.333333");
    test(&format, 0.0000001, "0");
    test(&format, 2.9999999, "3");
    test(&format, 1234.25, "1,234.25");

    let format = NumberFormat::new(0);
    test(&format, 2.4, "2");
    test(&format, 1234.6, "1,235");
}

#[test]
fn test_non_finite() {
    let format = NumberFormat::default();
    test(&format, f64::NAN, "NaN");
    test(&format, f64::INFINITY, "+∞");
    test(&format, f64::NEG_INFINITY, "-∞");
}

#[test]
fn test_separators() {
    let format = NumberFormat::new(6).with_decimal_separator(',');
    assert_eq!(format.grouping_separator, Some('.'));
    test(&format, 1234567.125, "1.234.567,125");

    let format = NumberFormat {
        grouping_separator: None,
        ..NumberFormat::new(2)
    };
    test(&format, 1234567.126, "1234567.13");
}

#[test]
fn test_parse() {
    let format = NumberFormat::default();
    assert_eq!(format.parse("12.5"), Some(12.5));
    assert_eq!(format.parse("1,234.5"), Some(1234.5));
    assert_eq!(format.parse("0."), Some(0.0));
    assert_eq!(format.parse("-3"), Some(-3.0));
    assert_eq!(format.parse(""), None);
    assert_eq!(format.parse("."), None);
    assert_eq!(format.parse("inf"), None);
    assert_eq!(format.parse("1.2.3"), None);

    let format = NumberFormat::default().with_decimal_separator(',');
    assert_eq!(format.parse("0,25"), Some(0.25));
    assert_eq!(format.parse("1.234,5"), Some(1234.5));
}

#[test]
fn test_format_parse_agree() {
    let format = NumberFormat::new(6).with_decimal_separator(',');
    for value in [0.0, 1.5, -2.25, 1234567.0, 0.000125] {
        assert_eq!(format.parse(&format.format(value)), Some(value));
    }
}
