// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::format::NumberFormat;
use crate::operation::{self, Operation, Precedence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

/// A binary operator waiting for its second operand.
#[derive(Clone)]
struct PendingBinaryOperation {
    function: fn(f64, f64) -> f64,
    first_operand: f64,
    describe: fn(&str, &str) -> String,
    first_description: String,
}

/// The evaluator. Holds one running value, the text describing how it
/// was derived, and at most one pending binary operation.
///
/// Evaluation is strictly left to right: `2 + 3 × 4 =` gives 20. The
/// precedence of operators only decides where the description gets
/// parentheses, here `(2 + 3) × 4`.
pub struct Brain {
    accumulator: f64,
    description_accumulator: String,
    current_precedence: Precedence,
    pending: Option<PendingBinaryOperation>,
    format: NumberFormat,
    rng: StdRng,
}

impl Brain {
    /// A fresh brain whose operand descriptions show at most
    /// `decimal_digits` fractional digits.
    pub fn new(decimal_digits: usize) -> Brain {
        Brain::with_format(NumberFormat::new(decimal_digits))
    }

    pub fn with_format(format: NumberFormat) -> Brain {
        Brain::with_rng(format, StdRng::from_entropy())
    }

    /// Same as `with_format`, but `rand` produces a reproducible sequence.
    pub fn with_seed(format: NumberFormat, seed: u64) -> Brain {
        Brain::with_rng(format, StdRng::seed_from_u64(seed))
    }

    fn with_rng(format: NumberFormat, rng: StdRng) -> Brain {
        Brain {
            accumulator: 0.0,
            description_accumulator: "0".to_owned(),
            current_precedence: Precedence::NONE,
            pending: None,
            format,
            rng,
        }
    }

    pub fn set_operand(&mut self, operand: f64) {
        self.accumulator = operand;
        self.description_accumulator = self.format.format(operand);
        self.sync_precedence();
    }

    /// Applies the operation registered under `symbol`. Symbols outside
    /// the registry leave the brain untouched.
    pub fn perform_operation(&mut self, symbol: &str) {
        let operation = match operation::lookup(symbol) {
            Some(operation) => operation,
            None => {
                debug!(symbol, "ignoring unknown operation");
                return;
            }
        };
        trace!(symbol, ?operation, accumulator = self.accumulator, "perform");

        match operation {
            Operation::Constant(value) => {
                self.accumulator = value;
                self.description_accumulator = symbol.to_owned();
                self.sync_precedence();
            }
            Operation::Nullary {
                function,
                description,
            } => {
                self.accumulator = function(&mut self.rng);
                self.description_accumulator = description.to_owned();
                self.sync_precedence();
            }
            Operation::Unary { function, describe } => {
                self.accumulator = function(self.accumulator);
                self.description_accumulator = describe(&self.description_accumulator);
                self.sync_precedence();
            }
            Operation::Binary {
                function,
                describe,
                precedence,
            } => {
                self.execute_pending_binary_operation();
                if self.current_precedence < precedence {
                    self.description_accumulator = format!("({})", self.description_accumulator);
                }
                self.current_precedence = precedence;
                self.pending = Some(PendingBinaryOperation {
                    function,
                    first_operand: self.accumulator,
                    describe,
                    first_description: self.description_accumulator.clone(),
                });
            }
            Operation::Equals => self.execute_pending_binary_operation(),
        }
    }

    /// The combined description is part of the pending operation, so the
    /// precedence of the resolved operator stays in place. A following
    /// tighter operator wraps the whole expression in parentheses.
    fn execute_pending_binary_operation(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.accumulator = (pending.function)(pending.first_operand, self.accumulator);
            self.description_accumulator =
                (pending.describe)(&pending.first_description, &self.description_accumulator);
            trace!(
                result = self.accumulator,
                description = %self.description_accumulator,
                "resolved pending operation"
            );
        }
    }

    /// Runs after every description write made outside a pending
    /// operation: with nothing pending, no later operator needs to wrap
    /// the description.
    fn sync_precedence(&mut self) {
        if self.pending.is_none() {
            self.current_precedence = Precedence::NONE;
        }
    }

    pub fn description(&self) -> String {
        match self.pending {
            None => self.description_accumulator.clone(),
            Some(ref pending) => {
                let second = if pending.first_description != self.description_accumulator {
                    &self.description_accumulator[..]
                } else {
                    ""
                };
                (pending.describe)(&pending.first_description, second)
            }
        }
    }

    pub fn is_partial_result(&self) -> bool {
        self.pending.is_some()
    }

    pub fn result(&self) -> f64 {
        self.accumulator
    }

    pub fn decimal_digits(&self) -> usize {
        self.format.max_fraction_digits
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }
}
