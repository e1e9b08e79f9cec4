// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::fmt::FmtToken;
use crate::style_ser;
use color_eyre::Result;
use eyre::{eyre, WrapErr};
use keycalc_core::{is_valid_decimal_separator, Brain, Keypad, NumberFormat};
use nu_ansi_term::{Color, Style};
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::PathBuf;

pub fn config_path(name: &str) -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    path.push("keycalc");
    path.push(name);
    Ok(path)
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub keycalc: Keycalc,
    pub colors: Colors,
    pub themes: HashMap<String, Theme>,
    #[serde(skip)]
    default_theme: Theme,
    #[serde(skip)]
    disabled_theme: Theme,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Keycalc {
    /// Which prompt to render when run interactively.
    pub prompt: String,
    /// Fractional digits shown for operands and results.
    pub decimal_digits: usize,
    /// Character typed and shown between the integer and fractional part.
    pub decimal_separator: char,
    /// Fixes the sequence produced by `rand`.
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Whether support for colored output should be enabled.
    pub enabled: Option<bool>,
    /// The name of the current theme.
    pub theme: String,
}

#[derive(Serialize, Deserialize, Default, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    #[serde(with = "style_ser")]
    display: Style,
    #[serde(with = "style_ser")]
    history: Style,
    #[serde(with = "style_ser")]
    pending: Style,
    #[serde(with = "style_ser")]
    error: Style,
    #[serde(with = "style_ser")]
    user_input: Style,
}

impl Theme {
    pub fn get_style(&self, token: FmtToken) -> Style {
        match token {
            FmtToken::Display => self.display,
            FmtToken::History => self.history,
            FmtToken::Pending => self.pending,
            FmtToken::Error => self.error,
            FmtToken::UserInput => self.user_input,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keycalc: Default::default(),
            colors: Default::default(),
            themes: Default::default(),
            default_theme: Theme {
                display: Style::new().bold(),
                history: Style::new().dimmed(),
                pending: Style::new().fg(Color::Cyan).dimmed(),
                error: Style::new().fg(Color::Red),
                user_input: Style::new().bold(),
            },
            disabled_theme: Theme::default(),
        }
    }
}

impl Default for Keycalc {
    fn default() -> Self {
        Keycalc {
            prompt: "> ".to_owned(),
            decimal_digits: 6,
            decimal_separator: '.',
            seed: None,
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            enabled: None,
            theme: "default".to_owned(),
        }
    }
}

impl Config {
    pub fn get_theme(&self) -> &Theme {
        let default_enable_colors = env::var("NO_COLOR") == Err(env::VarError::NotPresent);
        let colors_enabled = self.colors.enabled.unwrap_or(default_enable_colors);

        if colors_enabled {
            let name = &self.colors.theme;
            let theme = self.themes.get(name);
            theme.unwrap_or(&self.default_theme)
        } else {
            &self.disabled_theme
        }
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.keycalc.decimal_digits)
            .with_decimal_separator(self.keycalc.decimal_separator)
    }
}

pub fn read_config(override_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = override_path {
        PathBuf::from(path)
    } else {
        config_path("config.toml")?
    };
    let config: Config = match read_to_string(path) {
        // Hard fail if the file has invalid TOML.
        Ok(result) => toml::from_str(&result).wrap_err("While parsing config.toml")?,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(override_path) = override_path {
                // Hard fail if user-provided config path doesn't exist
                return Err(eyre!(err).wrap_err(format!(
                    "Failed to read provided config file `{}`",
                    override_path
                )));
            }
            // Use default config if it doesn't exist.
            Config::default()
        }
        // Hard fail for other IO errors (e.g. permissions).
        Err(err) => return Err(eyre!(err).wrap_err("Failed to read config.toml")),
    };

    let separator = config.keycalc.decimal_separator;
    if !is_valid_decimal_separator(separator) {
        return Err(eyre!(
            "decimal_separator must not be a digit, whitespace or key name, got {:?}",
            separator
        ));
    }
    Ok(config)
}

/// Creates the keypad a session starts with.
pub fn load(config: &Config) -> Keypad {
    let format = config.number_format();
    let brain = match config.keycalc.seed {
        Some(seed) => Brain::with_seed(format, seed),
        None => Brain::with_format(format),
    };
    Keypad::with_brain(brain, config.keycalc.seed)
}
