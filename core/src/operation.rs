// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fixed table of keys the brain understands.

use rand::{Rng, RngCore};
use std::f64::consts::{E, PI};
use std::fmt;

/// Binding strength of a binary operator. Only used to decide when the
/// description of a left operand needs parentheses, never to reorder
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(pub u8);

impl Precedence {
    pub const ADDITIVE: Precedence = Precedence(0);
    pub const MULTIPLICATIVE: Precedence = Precedence(1);
    pub const POWER: Precedence = Precedence(2);
    /// No binary operator is pending, so nothing ever needs wrapping.
    pub const NONE: Precedence = Precedence(u8::MAX);
}

impl Default for Precedence {
    fn default() -> Self {
        Precedence::NONE
    }
}

#[derive(Clone, Copy)]
pub enum Operation {
    Constant(f64),
    Nullary {
        function: fn(&mut dyn RngCore) -> f64,
        description: &'static str,
    },
    Unary {
        function: fn(f64) -> f64,
        describe: fn(&str) -> String,
    },
    Binary {
        function: fn(f64, f64) -> f64,
        describe: fn(&str, &str) -> String,
        precedence: Precedence,
    },
    Equals,
}

impl fmt::Debug for Operation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::Constant(value) => write!(fmt, "Constant({})", value),
            Operation::Nullary { description, .. } => write!(fmt, "Nullary({})", description),
            Operation::Unary { describe, .. } => write!(fmt, "Unary({})", describe("x")),
            Operation::Binary {
                describe,
                precedence,
                ..
            } => write!(fmt, "Binary({}, {})", describe("a", "b"), precedence.0),
            Operation::Equals => write!(fmt, "Equals"),
        }
    }
}

/// Every symbol `lookup` knows, in the order a keypad would lay them out.
pub const SYMBOLS: &[&str] = &[
    "π", "e", "±", "√", "x²", "x³", "x⁻¹", "sin", "cos", "tan", "sinh", "cosh", "tanh", "ln",
    "log", "eˣ", "10ˣ", "x!", "×", "÷", "+", "-", "xʸ", "=", "rand",
];

/// ASCII spellings for symbols that are awkward to type.
pub const ALIASES: &[(&str, &str)] = &[
    ("pi", "π"),
    ("neg", "±"),
    ("sqrt", "√"),
    ("sq", "x²"),
    ("cube", "x³"),
    ("inv", "x⁻¹"),
    ("exp", "eˣ"),
    ("pow10", "10ˣ"),
    ("!", "x!"),
    ("*", "×"),
    ("x", "×"),
    ("/", "÷"),
    ("^", "xʸ"),
];

/// Resolves either a registry symbol or one of its aliases to the
/// registry symbol.
pub fn canonical_symbol(name: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .copied()
        .find(|symbol| *symbol == name)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == name)
                .map(|(_, symbol)| *symbol)
        })
}

/// `x * (x - 1) * ...` over every factor above one. Negative
/// inputs give 1 and fractional ones a shifted product, never an error.
pub fn factorial(value: f64) -> f64 {
    if value <= 1.0 {
        1.0
    } else {
        value * factorial(value - 1.0)
    }
}

fn random(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

macro_rules! unary {
    ($function:expr, $prefix:literal, $suffix:literal) => {
        Operation::Unary {
            function: $function,
            describe: |operand| format!(concat!($prefix, "{}", $suffix), operand),
        }
    };
}

macro_rules! binary {
    ($function:expr, $infix:literal, $precedence:expr) => {
        Operation::Binary {
            function: $function,
            describe: |left, right| format!(concat!("{}", $infix, "{}"), left, right),
            precedence: $precedence,
        }
    };
}

pub fn lookup(symbol: &str) -> Option<Operation> {
    let operation = match symbol {
        "π" => Operation::Constant(PI),
        "e" => Operation::Constant(E),
        "±" => unary!(|x| -x, "-(", ")"),
        "√" => unary!(f64::sqrt, "√(", ")"),
        "x²" => unary!(|x| x.powf(2.0), "(", ")²"),
        "x³" => unary!(|x| x.powf(3.0), "(", ")³"),
        "x⁻¹" => unary!(|x| 1.0 / x, "(", ")⁻¹"),
        "sin" => unary!(f64::sin, "sin(", ")"),
        "cos" => unary!(f64::cos, "cos(", ")"),
        "tan" => unary!(f64::tan, "tan(", ")"),
        "sinh" => unary!(f64::sinh, "sinh(", ")"),
        "cosh" => unary!(f64::cosh, "cosh(", ")"),
        "tanh" => unary!(f64::tanh, "tanh(", ")"),
        "ln" => unary!(f64::ln, "ln(", ")"),
        "log" => unary!(f64::log10, "log(", ")"),
        "eˣ" => unary!(f64::exp, "e^(", ")"),
        "10ˣ" => unary!(|x| 10f64.powf(x), "10^(", ")"),
        "x!" => unary!(factorial, "(", ")!"),
        "×" => binary!(|a, b| a * b, " × ", Precedence::MULTIPLICATIVE),
        "÷" => binary!(|a, b| a / b, " ÷ ", Precedence::MULTIPLICATIVE),
        "+" => binary!(|a, b| a + b, " + ", Precedence::ADDITIVE),
        "-" => binary!(|a, b| a - b, " - ", Precedence::ADDITIVE),
        "xʸ" => binary!(f64::powf, " ^ ", Precedence::POWER),
        "=" => Operation::Equals,
        "rand" => Operation::Nullary {
            function: random,
            description: "rand()",
        },
        _ => return None,
    };
    Some(operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_is_registered() {
        for symbol in SYMBOLS {
            assert!(lookup(symbol).is_some(), "missing {}", symbol);
        }
        assert!(lookup("mod").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn aliases_point_at_symbols() {
        for (alias, symbol) in ALIASES {
            assert!(SYMBOLS.contains(symbol), "{} -> {}", alias, symbol);
            assert_eq!(canonical_symbol(alias), Some(*symbol));
        }
        assert_eq!(canonical_symbol("√"), Some("√"));
        assert_eq!(canonical_symbol("nope"), None);
    }

    #[test]
    fn factorial_base_case() {
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(-3.0), 1.0);
        // 2.5 * 1.5, then 0.5 hits the base case
        assert_eq!(factorial(2.5), 3.75);
        assert_eq!(factorial(171.0), f64::INFINITY);
    }

    #[test]
    fn description_templates() {
        match lookup("x⁻¹") {
            Some(Operation::Unary { describe, .. }) => assert_eq!(describe("4"), "(4)⁻¹"),
            other => panic!("unexpected {:?}", other),
        }
        match lookup("xʸ") {
            Some(Operation::Binary {
                describe,
                precedence,
                ..
            }) => {
                assert_eq!(describe("2", "3"), "2 ^ 3");
                assert_eq!(precedence, Precedence::POWER);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
