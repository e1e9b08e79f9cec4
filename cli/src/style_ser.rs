// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde adapter for terminal styles written as space separated words,
//! e.g. `"bold cyan"` or `"dimmed on #202020"`.

use std::{borrow::Cow, fmt};

use nu_ansi_term::{Color, Style};
use serde::{
    de::{Error, Unexpected, Visitor},
    Deserializer, Serializer,
};

struct StringVisitor;

impl<'de> Visitor<'de> for StringVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a style string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(v.to_owned())
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(v)
    }
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("purple", Color::Purple),
    ("cyan", Color::Cyan),
    ("white", Color::White),
    ("dark_gray", Color::DarkGray),
    ("light_red", Color::LightRed),
    ("light_green", Color::LightGreen),
    ("light_yellow", Color::LightYellow),
    ("light_blue", Color::LightBlue),
    ("light_purple", Color::LightPurple),
    ("magenta", Color::Magenta),
    ("light_magenta", Color::LightMagenta),
    ("light_cyan", Color::LightCyan),
    ("light_gray", Color::LightGray),
];

pub fn parse_color(input: &str) -> Option<Color> {
    if let Some((_, color)) = NAMED_COLORS.iter().find(|(name, _)| *name == input) {
        return Some(*color);
    }
    if let Ok(value) = input.parse::<u8>() {
        return Some(Color::Fixed(value));
    }
    if let Some(input) = input
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts = input
            .split(',')
            .map(|num| num.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        return match parts[..] {
            [r, g, b] => Some(Color::Rgb(r, g, b)),
            _ => None,
        };
    }
    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        let r = (value >> 16) as u8;
        let g = (value >> 8) as u8;
        let b = value as u8;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

pub fn deserialize<'de, D>(des: D) -> Result<Style, D::Error>
where
    D: Deserializer<'de>,
{
    let string = des.deserialize_str(StringVisitor)?;
    let mut style = Style::new();
    let mut next_color_is_bg = false;
    for word in string.split_whitespace() {
        match word {
            "bold" => style = style.bold(),
            "italic" => style = style.italic(),
            "dimmed" | "dim" => style = style.dimmed(),
            "underline" | "under" => style = style.underline(),
            "blink" => style = style.blink(),
            "reverse" => style = style.reverse(),
            "strikethrough" | "strike" => style = style.strikethrough(),
            "hidden" | "none" => style = style.hidden(),
            "on" => next_color_is_bg = true,
            "plain" | "default" => (),
            _ => {
                if let Some(color) = parse_color(word) {
                    if next_color_is_bg {
                        style = style.on(color);
                    } else {
                        style = style.fg(color);
                    }
                } else {
                    return Err(D::Error::invalid_value(
                        Unexpected::Str(word),
                        &"valid color token",
                    ));
                }
            }
        }
    }
    Ok(style)
}

fn color_to_string(color: Color) -> Cow<'static, str> {
    if let Some((name, _)) = NAMED_COLORS.iter().find(|(_, named)| *named == color) {
        return (*name).into();
    }
    match color {
        Color::Fixed(i) => format!("{}", i).into(),
        Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b).into(),
        _ => "default".into(),
    }
}

pub fn serialize<S>(style: &Style, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let flags = [
        (style.is_bold, "bold"),
        (style.is_italic, "italic"),
        (style.is_dimmed, "dimmed"),
        (style.is_hidden, "hidden"),
        (style.is_blink, "blink"),
        (style.is_reverse, "reverse"),
        (style.is_strikethrough, "strikethrough"),
        (style.is_underline, "underline"),
    ];
    let mut result: Vec<Cow<'static, str>> = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| Cow::Borrowed(*name))
        .collect();
    if let Some(fg) = style.foreground {
        result.push(color_to_string(fg));
    }
    if let Some(bg) = style.background {
        result.push("on".into());
        result.push(color_to_string(bg));
    }
    if result.is_empty() {
        result.push("plain".into());
    }
    ser.serialize_str(&result.join(" "))
}
