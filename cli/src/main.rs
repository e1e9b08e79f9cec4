// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{stdin, BufReader};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use keycalc::{config, repl};

fn init_logging() {
    let filter = EnvFilter::try_from_env("KEYCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let matches = Command::new("Keycalc")
        .version(keycalc_core::version())
        .author("Keycalc Contributors")
        .about("Keypad calculator")
        .arg(
            Arg::new("KEYS")
                .help("Press keys, one argument per line of keys. If no arguments are provided, an interactive session will start.")
                .num_args(..)
                .required(false),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Reads lines of keys from a file, or stdin for `-`"),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Prints a path to the config file, then exits")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("config")
                .short('c')
                .num_args(1)
                .long("config").action(ArgAction::Set).help("Set path to config.toml")
        )
        .get_matches();

    color_eyre::install()?;
    init_logging();

    if matches.get_flag("config-path") {
        println!("{}", config::config_path("config.toml")?.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = config::read_config(matches.get_one::<String>("config").map(|s| &**s))?;

    if let Some(filename) = matches.get_one::<String>("file") {
        let all_ok = match &filename[..] {
            "-" => {
                let stdin_handle = stdin();
                repl::noninteractive(stdin_handle.lock(), &config, false)?
            }
            _ => {
                let file = File::open(&filename)
                    .wrap_err(format!("Failed to open input file `{}`", filename))?;
                repl::noninteractive(BufReader::new(file), &config, false)?
            }
        };
        Ok(if all_ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    } else if let Some(lines) = matches.get_many::<String>("KEYS") {
        let mut keypad = config::load(&config);
        let mut exit_code = ExitCode::SUCCESS;
        for line in lines {
            println!("> {}", line);
            match repl::run_line(&mut keypad, &config, line) {
                Ok(v) => println!("{}", v),
                Err(e) => {
                    println!("{}", e);
                    exit_code = ExitCode::FAILURE;
                }
            }
        }
        Ok(exit_code)
    } else {
        repl::interactive(config).map(|_| ExitCode::SUCCESS)
    }
}
