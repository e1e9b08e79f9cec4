// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::Config;
use crate::fmt::{error_to_ansi_string, to_ansi_string};
use crate::KeycalcHelper;
use eyre::{Result, WrapErr};
use keycalc_core::{parse_keys, Keypad};
use rustyline::{config::Configurer, error::ReadlineError, CompletionType, Editor};
use std::io::{BufRead, ErrorKind};
use tracing::debug;

/// Presses every key on `line`. A line with an unknown key presses
/// nothing and yields the error text instead of the keypad state.
pub fn run_line(keypad: &mut Keypad, config: &Config, line: &str) -> Result<String, String> {
    match parse_keys(line, config.keycalc.decimal_separator) {
        Ok(keys) => {
            debug!(?keys, "pressing");
            keypad.press_all(&keys);
            Ok(to_ansi_string(config, keypad))
        }
        Err(err) => Err(error_to_ansi_string(config, &err)),
    }
}

/// Runs every line of `f` against one session. Returns `Ok(false)` when
/// some line had an unknown key.
pub fn noninteractive<T: BufRead>(mut f: T, config: &Config, show_prompt: bool) -> Result<bool> {
    use std::io::{stdout, Write};

    let mut keypad = crate::config::load(config);
    let mut all_ok = true;
    let mut line = String::new();
    loop {
        if show_prompt {
            print!("{}", config.keycalc.prompt);
        }
        stdout().flush()?;
        line.clear();
        // a final line without a newline still counts, only Ok(0) is EOF
        if f.read_line(&mut line).wrap_err("Failed to read keys")? == 0 {
            return Ok(all_ok);
        }
        match run_line(&mut keypad, config, &line) {
            Ok(v) => println!("{}", v),
            Err(e) => {
                println!("{}", e);
                all_ok = false;
            }
        };
    }
}

pub const HELP_TEXT: &str = "Type keys separated by spaces, e.g. `12.5 × 3 =` or `2 sqrt`.
Operations: π e ± √ x² x³ x⁻¹ sin cos tan sinh cosh tanh ln log eˣ 10ˣ x! × ÷ + - xʸ = rand
ASCII spellings: pi neg sqrt sq cube inv exp pow10 ! * x / ^
`C` clears everything, `⌫` (or `back`) deletes the last typed digit.
Press Tab to complete key names. To quit, type `quit` or press Ctrl+D.";

pub fn interactive(config: Config) -> Result<()> {
    let mut keypad = crate::config::load(&config);
    let mut rl = Editor::<KeycalcHelper>::new();
    rl.set_helper(Some(KeycalcHelper::new(config.clone())));
    rl.set_completion_type(CompletionType::List);

    let hpath = dirs::data_local_dir().map(|mut path| {
        path.push("keycalc");
        path.push("history.txt");
        path
    });
    if let Some(ref path) = hpath {
        match rl.load_history(path) {
            // Ignore file not found errors.
            Err(ReadlineError::Io(ref err)) if err.kind() == ErrorKind::NotFound => (),
            Err(err) => eprintln!("Loading history failed: {}", err),
            Ok(()) => (),
        };
    }

    let save_history = |rl: &mut Editor<KeycalcHelper>| {
        if let Some(ref path) = hpath {
            if let Some(parent) = path.parent() {
                // ignore error - if this fails, the next line will as well.
                let _ = std::fs::create_dir_all(parent);
            }
            rl.save_history(path).unwrap_or_else(|e| {
                eprintln!("Saving history failed: {}", e);
            });
        }
    };

    loop {
        let readline = rl.readline(&config.keycalc.prompt);
        match readline {
            Ok(ref line) if line.trim() == "help" => {
                println!("{}", HELP_TEXT);
            }
            Ok(ref line) if matches!(line.trim(), "quit" | ":q" | "exit") => {
                save_history(&mut rl);
                break;
            }
            Ok(line) => {
                rl.add_history_entry(&line);
                match run_line(&mut keypad, &config, &line) {
                    Ok(v) => println!("{}", v),
                    Err(e) => println!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                save_history(&mut rl);
                break;
            }
            Err(err) => {
                println!("{:?}", eyre::eyre!(err).wrap_err("Readline"));
                break;
            }
        }
    }

    Ok(())
}
