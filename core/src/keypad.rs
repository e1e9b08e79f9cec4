// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The display side of the calculator: turns key presses into brain
//! calls and keeps the two lines a calculator shows, the number being
//! typed or computed and the history of how it came about.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::debug;

use crate::brain::Brain;
use crate::format::NumberFormat;
use crate::operation::canonical_symbol;
use crate::search::suggest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    DecimalPoint,
    /// A registry symbol, already resolved from any alias.
    Operation(String),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    Unknown {
        key: String,
        suggestion: Option<&'static str>,
    },
}

impl Display for KeyError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match *self {
            KeyError::Unknown {
                ref key,
                suggestion: Some(suggestion),
            } => write!(fmt, "No such key {}, did you mean {}?", key, suggestion),
            KeyError::Unknown {
                ref key,
                suggestion: None,
            } => write!(fmt, "No such key {}", key),
        }
    }
}

impl Error for KeyError {}

fn parse_key(token: &str) -> Result<Key, KeyError> {
    match token {
        "C" | "AC" | "clear" => Ok(Key::Clear),
        "⌫" | "back" | "bs" => Ok(Key::Backspace),
        _ => match canonical_symbol(token) {
            Some(symbol) => Ok(Key::Operation(symbol.to_owned())),
            None => Err(KeyError::Unknown {
                key: token.to_owned(),
                suggestion: suggest(token),
            }),
        },
    }
}

/// Whether `c` can separate the fractional digits of typed numbers. It
/// must not be a digit, whitespace or a key name of its own.
pub fn is_valid_decimal_separator(c: char) -> bool {
    let mut buf = [0; 4];
    !c.is_ascii_digit() && !c.is_whitespace() && parse_key(c.encode_utf8(&mut buf)).is_err()
}

/// Splits a line into key presses. Numbers may be written out in one
/// token (`12.5`), which expands to one press per character.
pub fn parse_keys(line: &str, decimal_separator: char) -> Result<Vec<Key>, KeyError> {
    let mut keys = vec![];
    for token in line.split_whitespace() {
        let is_number = token
            .chars()
            .all(|c| c.is_ascii_digit() || c == decimal_separator);
        if is_number {
            keys.extend(token.chars().map(|c| {
                if c == decimal_separator {
                    Key::DecimalPoint
                } else {
                    Key::Digit(c)
                }
            }));
        } else {
            keys.push(parse_key(token)?);
        }
    }
    Ok(keys)
}

pub struct Keypad {
    brain: Brain,
    seed: Option<u64>,
    display: String,
    history: String,
    typing: bool,
    typing_fraction: bool,
}

impl Keypad {
    pub fn new(decimal_digits: usize, decimal_separator: char) -> Keypad {
        let format = NumberFormat::new(decimal_digits).with_decimal_separator(decimal_separator);
        Keypad::with_brain(Brain::with_format(format), None)
    }

    /// Wraps an existing brain. With a seed, every brain created by
    /// `Key::Clear` restarts the same random sequence.
    pub fn with_brain(brain: Brain, seed: Option<u64>) -> Keypad {
        Keypad {
            brain,
            seed,
            display: "0".to_owned(),
            history: " ".to_owned(),
            typing: false,
            typing_fraction: false,
        }
    }

    pub fn press(&mut self, key: &Key) {
        match *key {
            Key::Digit(digit) => self.touch_digit(digit),
            Key::DecimalPoint => self.touch_decimal_point(),
            Key::Operation(ref symbol) => self.perform_operation(symbol),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
        }
    }

    pub fn press_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a Key>) {
        for key in keys {
            self.press(key);
        }
    }

    fn touch_digit(&mut self, digit: char) {
        if self.typing {
            self.display.push(digit);
        } else {
            self.display.clear();
            self.display.push(digit);
            self.typing = true;
        }
    }

    fn touch_decimal_point(&mut self) {
        if self.typing_fraction {
            return;
        }
        let separator = self.brain.format().decimal_separator;
        if !self.typing {
            self.display = "0".to_owned();
            self.typing = true;
        }
        self.display.push(separator);
        self.typing_fraction = true;
    }

    fn stop_typing(&mut self) {
        self.typing = false;
        self.typing_fraction = false;
    }

    fn perform_operation(&mut self, symbol: &str) {
        if self.typing {
            match self.brain.format().parse(&self.display) {
                Some(value) => self.brain.set_operand(value),
                None => debug!(entry = %self.display, "entry is not a number"),
            }
            self.stop_typing();
        }
        self.brain.perform_operation(symbol);
        self.show_result();
    }

    fn show_result(&mut self) {
        self.display = self.brain.format().format(self.brain.result());
        let suffix = if self.brain.is_partial_result() {
            " …"
        } else {
            " ="
        };
        self.history = format!("{}{}", self.brain.description(), suffix);
    }

    fn backspace(&mut self) {
        if !self.typing {
            return;
        }
        if let Some(removed) = self.display.pop() {
            if removed == self.brain.format().decimal_separator {
                self.typing_fraction = false;
            }
        }
        if self.display.is_empty() {
            self.display = "0".to_owned();
            self.stop_typing();
        }
    }

    fn clear(&mut self) {
        let format = self.brain.format().clone();
        self.brain = match self.seed {
            Some(seed) => Brain::with_seed(format, seed),
            None => Brain::with_format(format),
        };
        self.display = "0".to_owned();
        self.history = " ".to_owned();
        self.stop_typing();
    }

    /// The number being typed, or the formatted result.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The description of the running calculation, ending in ` …` while
    /// an operator waits for its operand and ` =` otherwise. A single
    /// space before anything has been computed.
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }
}
