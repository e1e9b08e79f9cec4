// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use keycalc_core::{
    is_valid_decimal_separator, parse_keys, Brain, Key, KeyError, Keypad, NumberFormat,
};
use similar_asserts::assert_eq;

fn keypad() -> Keypad {
    Keypad::with_brain(Brain::with_seed(NumberFormat::new(6), 7), Some(7))
}

fn press(keypad: &mut Keypad, line: &str) {
    let keys = parse_keys(line, '.').unwrap();
    keypad.press_all(&keys);
}

fn test(line: &str, display: &str, history: &str) {
    let mut keypad = keypad();
    press(&mut keypad, line);
    assert_eq!(keypad.display(), display);
    assert_eq!(keypad.history(), history);
}

#[test]
fn test_parse_keys() {
    assert_eq!(
        parse_keys("12.5 × sqrt C ⌫", '.'),
        Ok(vec![
            Key::Digit('1'),
            Key::Digit('2'),
            Key::DecimalPoint,
            Key::Digit('5'),
            Key::Operation("×".to_owned()),
            Key::Operation("√".to_owned()),
            Key::Clear,
            Key::Backspace,
        ])
    );
    assert_eq!(
        parse_keys("1,5 *", ','),
        Ok(vec![
            Key::Digit('1'),
            Key::DecimalPoint,
            Key::Digit('5'),
            Key::Operation("×".to_owned()),
        ])
    );
    assert_eq!(parse_keys("   ", '.'), Ok(vec![]));
}

#[test]
fn test_parse_unknown_key() {
    assert_eq!(
        parse_keys("2 sine", '.'),
        Err(KeyError::Unknown {
            key: "sine".to_owned(),
            suggestion: Some("sin"),
        })
    );
    let err = parse_keys("%%%%%%%%", '.').unwrap_err();
    assert_eq!(err.to_string(), "No such key %%%%%%%%");
    let err = parse_keys("tanhh", '.').unwrap_err();
    assert_eq!(err.to_string(), "No such key tanhh, did you mean tanh?");
}

#[test]
fn test_initial_state() {
    let keypad = keypad();
    assert_eq!(keypad.display(), "0");
    assert_eq!(keypad.history(), " ");
    assert!(!keypad.is_typing());
}

#[test]
fn test_typing() {
    let mut keypad = keypad();
    press(&mut keypad, "1 2");
    assert_eq!(keypad.display(), "12");
    assert!(keypad.is_typing());
    assert_eq!(keypad.history(), " ");
    assert_eq!(keypad.brain().result(), 0.0);
}

#[test]
fn test_addition() {
    test("3 + 4 =", "7", "3 + 4 =");
}

#[test]
fn test_partial() {
    // the pending description already ends in a space
    test("3 +", "3", "3 +  …");
    test("3 + 4", "4", "3 +  …");
    test("2 + 3 ×", "5", "(2 + 3) ×  …");
}

#[test]
fn test_left_to_right() {
    test("2 + 3 × 4 =", "20", "(2 + 3) × 4 =");
}

#[test]
fn test_decimal_point() {
    test(".5", "0.5", " ");
    test("1.2.5", "1.25", " ");
    test("1.5 + .25 =", "1.75", "1.5 + 0.25 =");
}

#[test]
fn test_decimal_point_after_result() {
    // a fresh entry after a result starts over at "0."
    test("3 + 4 = .5", "0.5", "3 + 4 =");
}

#[test]
fn test_backspace() {
    test("123 ⌫", "12", " ");
    test("1 ⌫", "0", " ");
    test("1 ⌫ ⌫ 5", "5", " ");
    test("1.5 ⌫ ⌫ .2", "1.2", " ");
}

#[test]
fn test_backspace_ignored_on_result() {
    test("3 + 4 = ⌫", "7", "3 + 4 =");
}

#[test]
fn test_backspace_to_empty_stops_typing() {
    let mut keypad = keypad();
    press(&mut keypad, "7 ⌫");
    assert!(!keypad.is_typing());
    press(&mut keypad, "√");
    // nothing was committed, so the root applies to the fresh zero
    assert_eq!(keypad.display(), "0");
    assert_eq!(keypad.history(), "√(0) =");
}

#[test]
fn test_clear() {
    let mut keypad = keypad();
    press(&mut keypad, "3 + 4");
    press(&mut keypad, "C");
    assert_eq!(keypad.display(), "0");
    assert_eq!(keypad.history(), " ");
    assert!(!keypad.brain().is_partial_result());
    assert_eq!(keypad.brain().description(), "0");

    press(&mut keypad, "5 =");
    assert_eq!(keypad.display(), "5");
    assert_eq!(keypad.history(), "5 =");
}

#[test]
fn test_clear_restarts_seeded_rand() {
    let mut keypad = keypad();
    press(&mut keypad, "rand");
    let first = keypad.display().to_owned();
    press(&mut keypad, "C rand");
    assert_eq!(keypad.display(), first);
    assert_eq!(keypad.history(), "rand() =");
}

#[test]
fn test_constants_and_unary() {
    test("π", "3.141593", "π =");
    test("5 x!", "120", "(5)! =");
    test("2 neg", "-2", "-(2) =");
    test("2 √ ±", "-1.414214", "-(√(2)) =");
}

#[test]
fn test_non_finite_display() {
    test("1 ÷ 0 =", "+∞", "1 ÷ 0 =");
    test("1 ± √", "NaN", "√(-(1)) =");
}

#[test]
fn test_grouping_in_display() {
    test("1000 × 1000 =", "1,000,000", "1,000 × 1,000 =");
}

#[test]
fn test_operand_after_result_keeps_grouped_display() {
    // the displayed result is only re-read when the user types
    test("999 + 1 = + 1 =", "1,001", "999 + 1 + 1 =");
}

#[test]
fn test_comma_separator() {
    let mut keypad = Keypad::new(6, ',');
    let keys = parse_keys("1234,5 + 0,25 =", ',').unwrap();
    keypad.press_all(&keys);
    assert_eq!(keypad.display(), "1.234,75");
    assert_eq!(keypad.history(), "1.234,5 + 0,25 =");
}

#[test]
fn test_decimal_separators() {
    assert!(is_valid_decimal_separator('.'));
    assert!(is_valid_decimal_separator(','));
    assert!(is_valid_decimal_separator('\''));
    for c in ['5', ' ', '\t', '-', '+', 'x', '!', '*', '/', '^', 'e', 'π', '√', '=', 'C', '⌫'] {
        assert!(!is_valid_decimal_separator(c), "{:?} accepted", c);
    }
}
