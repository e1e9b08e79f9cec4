// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use keycalc_core::{KeyError, Keypad};
use nu_ansi_term::{AnsiString, AnsiStrings};

use crate::config::Config;

/// Formatting hint attached to each piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtToken {
    /// The number on the display.
    Display,
    /// A finished history line.
    History,
    /// A history line still waiting for an operand.
    Pending,
    Error,
    UserInput,
}

/// The history line (when there is one) above the display line.
pub fn to_ansi(config: &Config, keypad: &Keypad) -> Vec<AnsiString<'static>> {
    let theme = config.get_theme();
    let mut strings = vec![];

    let history = keypad.history();
    if !history.trim().is_empty() {
        let token = if keypad.brain().is_partial_result() {
            FmtToken::Pending
        } else {
            FmtToken::History
        };
        strings.push(theme.get_style(token).paint(history.to_owned()));
        strings.push("\n".into());
    }
    strings.push(
        theme
            .get_style(FmtToken::Display)
            .paint(keypad.display().to_owned()),
    );
    strings
}

pub fn to_ansi_string(config: &Config, keypad: &Keypad) -> String {
    let strings = to_ansi(config, keypad);
    format!("{}", AnsiStrings(&strings))
}

pub fn error_to_ansi_string(config: &Config, err: &KeyError) -> String {
    let style = config.get_theme().get_style(FmtToken::Error);
    format!("{}", style.paint(err.to_string()))
}

pub fn input_to_ansi_string(config: &Config, line: &str) -> String {
    let style = config.get_theme().get_style(FmtToken::UserInput);
    format!("{}", style.paint(line))
}
