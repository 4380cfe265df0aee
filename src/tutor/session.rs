//! Tutoring session: turns one student request into feedback.
//!
//! A [`Tutor`] borrows a fact store and is cheap to create per request.
//! It performs no I/O; the front-end decides how [`Feedback`] is shown.

use serde::Serialize;
use tracing::debug;

use crate::entity::{Operation, OperationId, OperationKind};
use crate::error::ValidationError;
use crate::storage::FactStore;
use crate::tutor::hint::{hint_for, DIVIDE_BY_ZERO, WRONG_OPERATION};
use crate::tutor::rule::explain_rule;

/// Shown when either operand is not a number.
pub const INVALID_NUMBERS_MESSAGE: &str = "Please enter valid numbers in Number 1 and Number 2.";

/// Shown when the operator symbol is not recognized.
pub const WRONG_OPERATION_MESSAGE: &str = "Operation must be one of: +  -  *  /";

/// Used when the dataset has no WrongOperation hint.
pub const WRONG_OPERATION_FALLBACK: &str = "Choose the correct operator.";

/// Used when the dataset has no DivideByZero hint.
pub const DIVIDE_BY_ZERO_FALLBACK: &str = "Division by zero is undefined.";

/// The operation whose WrongOperation hint is reused for unrecognized
/// symbols. The hint is shared by every operation in the built-in
/// dataset, so the choice only matters for custom datasets.
pub const WRONG_OPERATION_CONTEXT: OperationKind = OperationKind::Addition;

/// Two operands and an operator symbol, as entered by a student.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorRequest {
    /// First operand.
    pub a: f64,
    /// Second operand.
    pub b: f64,
    /// Operator symbol.
    pub symbol: String,
}

impl TutorRequest {
    /// Creates a request. The symbol is trimmed.
    #[must_use]
    pub fn new(a: f64, b: f64, symbol: impl AsRef<str>) -> Self {
        Self {
            a,
            b,
            symbol: symbol.as_ref().trim().to_string(),
        }
    }

    /// Parses raw text fields. Surrounding whitespace is ignored.
    pub fn parse(n1: &str, n2: &str, op: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_number("Number 1", n1)?, parse_number("Number 2", n2)?, op))
    }
}

fn parse_number(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidNumber {
        field,
        input: input.to_string(),
    };
    let text = strip_digit_separators(input.trim()).ok_or_else(invalid)?;
    text.parse::<f64>().map_err(|_| invalid())
}

/// Removes `_` separators. Each one must sit between two ASCII digits
/// (`1_000`), otherwise the input is rejected.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let digit_at = |i: Option<usize>| i.and_then(|i| bytes.get(i)).is_some_and(u8::is_ascii_digit);
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '_' {
            if !(digit_at(i.checked_sub(1)) && digit_at(Some(i + 1))) {
                return None;
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Displays a number the way students see it (`7.0`, `2.5`, `1e+16`,
/// `1e-05`, `nan`).
#[must_use]
pub fn display_number(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{x:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Outcome of one tutoring request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Feedback {
    /// An operand could not be parsed.
    InvalidInput {
        /// Message for the student.
        message: String,
    },

    /// The operator symbol is not one of `+ - * /`.
    WrongOperation {
        /// The symbol as entered, trimmed.
        symbol: String,
        /// Message for the student.
        message: String,
        /// WrongOperation hint.
        hint: String,
    },

    /// Division by zero was blocked before computing.
    DivideByZero {
        /// Dividend.
        a: f64,
        /// The zero divisor.
        b: f64,
        /// DivideByZero hint.
        hint: String,
        /// Division rule explanation.
        rule: String,
    },

    /// The computed answer with the rule that applies.
    Answer {
        /// First operand.
        a: f64,
        /// Second operand.
        b: f64,
        /// Operation applied.
        operation: OperationKind,
        /// Its symbol.
        symbol: char,
        /// Computed result.
        result: f64,
        /// Rule explanation.
        rule: String,
    },
}

impl Feedback {
    /// Short heading for the feedback.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Input error",
            Self::WrongOperation { .. } => "Wrong Operation",
            Self::DivideByZero { .. } => "Divide by Zero",
            Self::Answer { .. } => "Answer",
        }
    }

    /// Returns true if no answer was computed.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        !matches!(self, Self::Answer { .. })
    }

    /// Full display text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::InvalidInput { message } => message.clone(),
            Self::WrongOperation { message, hint, .. } => format!("{message}\n\nHint:\n{hint}"),
            Self::DivideByZero { hint, rule, .. } => format!("Error: {hint}\n\nRule:\n{rule}"),
            Self::Answer {
                a,
                b,
                symbol,
                result,
                rule,
                ..
            } => {
                let (a, b, result) = (display_number(*a), display_number(*b), display_number(*result));
                format!(
                    "Input:\n  Number 1 = {a}\n  Number 2 = {b}\n  Operation = {symbol}\n\n\
                     Answer:\n  {a} {symbol} {b} = {result}\n\n\
                     --- Rule from Ontology ---\n{rule}\n"
                )
            }
        }
    }
}

/// Per-request tutoring front door over a shared fact store.
#[derive(Debug)]
pub struct Tutor<'s, S: FactStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: FactStore + ?Sized> Clone for Tutor<'s, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S: FactStore + ?Sized> Copy for Tutor<'s, S> {}

impl<'s, S: FactStore + ?Sized> Tutor<'s, S> {
    /// Creates a tutor over `store`.
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// See [`explain_rule`].
    #[must_use]
    pub fn explain_rule(&self, op: OperationId) -> String {
        explain_rule(self.store, op)
    }

    /// See [`hint_for`].
    #[must_use]
    pub fn hint_for(&self, op: OperationId, error_name: &str) -> &'s str {
        hint_for(self.store, op, error_name)
    }

    /// Tutors raw text input, reporting unparsable numbers as feedback.
    #[must_use]
    pub fn tutor_raw(&self, n1: &str, n2: &str, op: &str) -> Feedback {
        match TutorRequest::parse(n1, n2, op) {
            Ok(request) => self.tutor(&request),
            Err(err) => {
                debug!(%err, "rejected operands");
                Feedback::InvalidInput {
                    message: INVALID_NUMBERS_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Tutors one request.
    ///
    /// Unrecognized operators and zero divisors are blocked before any
    /// arithmetic happens.
    #[must_use]
    pub fn tutor(&self, request: &TutorRequest) -> Feedback {
        let symbol = request.symbol.trim();
        let op = match self.store.operation_by_symbol(symbol) {
            Ok(op) => op,
            Err(miss) => {
                debug!(%miss, "operator lookup failed");
                return self.wrong_operation(symbol);
            }
        };
        let Some(kind) = self.store.operation(op).map(Operation::kind) else {
            return self.wrong_operation(symbol);
        };

        if kind == OperationKind::Division && request.b == 0.0 {
            let hint = non_empty_or(self.hint_for(op, DIVIDE_BY_ZERO), DIVIDE_BY_ZERO_FALLBACK);
            return Feedback::DivideByZero {
                a: request.a,
                b: request.b,
                hint,
                rule: self.explain_rule(op),
            };
        }

        Feedback::Answer {
            a: request.a,
            b: request.b,
            operation: kind,
            symbol: kind.symbol(),
            result: kind.apply(request.a, request.b),
            rule: self.explain_rule(op),
        }
    }

    fn wrong_operation(&self, symbol: &str) -> Feedback {
        let hint = self
            .store
            .operation_of_kind(WRONG_OPERATION_CONTEXT)
            .map_or("", |op| self.hint_for(op, WRONG_OPERATION));
        Feedback::WrongOperation {
            symbol: symbol.to_string(),
            message: WRONG_OPERATION_MESSAGE.to_string(),
            hint: non_empty_or(hint, WRONG_OPERATION_FALLBACK),
        }
    }
}

fn non_empty_or(text: &str, fallback: &str) -> String {
    let chosen = if text.is_empty() { fallback } else { text };
    chosen.to_string()
}
