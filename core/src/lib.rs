// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! keycalc is a button-driven calculator. `keycalc_core` holds the
//! arithmetic and the keypad logic; the frontends only read key presses
//! and print what the keypad shows.
//!
//! The heart of it is the [Brain], which keeps a single running value,
//! applies operations to it as keys are pressed, and maintains a
//! description of how the value was derived.
//!
//! ## Example
//!
//! ```rust
//! let mut brain = keycalc_core::Brain::new(6);
//! brain.set_operand(3.0);
//! brain.perform_operation("+");
//! assert!(brain.is_partial_result());
//! assert_eq!(brain.description(), "3 + ");
//! brain.set_operand(4.0);
//! brain.perform_operation("=");
//! assert_eq!(brain.result(), 7.0);
//! assert_eq!(brain.description(), "3 + 4");
//! ```
//!
//! Operators are applied strictly in the order they are pressed, the way
//! a pocket calculator does it. Operator precedence only shows up in the
//! description, as parentheses:
//!
//! ```rust
//! let mut brain = keycalc_core::Brain::new(6);
//! for (operand, symbol) in [(2.0, "+"), (3.0, "×"), (4.0, "=")] {
//!     brain.set_operand(operand);
//!     brain.perform_operation(symbol);
//! }
//! assert_eq!(brain.result(), 20.0);
//! assert_eq!(brain.description(), "(2 + 3) × 4");
//! ```
//!
//! ## Keypad
//!
//! [Keypad] adds number entry on top: digits accumulate into the display
//! until an operation key commits them as an operand.
//!
//! ```rust
//! use keycalc_core::{parse_keys, Keypad};
//!
//! let mut keypad = Keypad::new(6, '.');
//! let keys = parse_keys("12.5 × 2 =", '.').unwrap();
//! keypad.press_all(&keys);
//! assert_eq!(keypad.display(), "25");
//! assert_eq!(keypad.history(), "12.5 × 2 =");
//! ```

pub mod brain;
pub mod format;
pub mod keypad;
pub mod operation;
pub mod search;

pub use crate::brain::Brain;
pub use crate::format::NumberFormat;
pub use crate::keypad::{is_valid_decimal_separator, parse_keys, Key, KeyError, Keypad};
pub use crate::operation::{Operation, Precedence};

/// Version shown by `keycalc --version`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
