// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rustyline::{
    completion::{extract_word, Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Helper,
};
use rustyline::{Context as LineContext, Result};

use keycalc_core::operation::canonical_symbol;
use keycalc_core::search::{key_names, search};

use crate::{config::Config, fmt::input_to_ansi_string};

pub struct KeycalcHelper {
    config: Config,
}

impl KeycalcHelper {
    pub fn new(config: Config) -> KeycalcHelper {
        KeycalcHelper { config }
    }
}

/// Key names starting with `word`, best matches first. Aliases show the
/// symbol they stand for.
pub fn completions(config: &Config, word: &str) -> Vec<Pair> {
    if word.is_empty() {
        return vec![];
    }
    search(key_names(), word, key_names().count())
        .into_iter()
        .filter(|name| name.starts_with(word))
        .take(10)
        .map(|name| {
            let display = match canonical_symbol(name) {
                Some(symbol) if symbol != name => format!("{} ({})", name, symbol),
                _ => name.to_owned(),
            };
            Pair {
                display: input_to_ansi_string(config, &display),
                replacement: name.to_owned(),
            }
        })
        .collect()
}

impl Completer for KeycalcHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &LineContext) -> Result<(usize, Vec<Pair>)> {
        let (res_pos, word) = extract_word(line, pos, None, &[b' ']);
        Ok((res_pos, completions(&self.config, word)))
    }
}

impl Helper for KeycalcHelper {}

impl Validator for KeycalcHelper {}

impl Highlighter for KeycalcHelper {}

impl Hinter for KeycalcHelper {
    type Hint = String;
}
