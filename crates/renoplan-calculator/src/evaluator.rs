//! Two-pass evaluation of authored calculation formulas.
//!
//! A formula is an ordered token sequence; evaluation honours standard
//! arithmetic precedence by folding `*`/`/` in a first pass and the
//! remaining `+`/`-` in a second, left-to-right pass. Resolution failures
//! and zero divisors abort the evaluation of the line with a descriptive
//! error; malformed token sequences (dangling operators, doubled values)
//! are tolerated and simply contribute nothing.

use crate::resolver::{self, Resolved};
use crate::types::{BinaryOp, CalcError, CalcStep, CalcToken};
use renoplan_types::CalculationContext;

/// Outcome of evaluating one formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The evaluated value; `0` when an error occurred.
    pub value: f64,
    /// Audit trail, one entry per variable token in token order. Empty when
    /// an error occurred.
    pub steps: Vec<CalcStep>,
    /// The failure, if evaluation aborted.
    pub error: Option<CalcError>,
}

/// Intermediate token after the multiplicative fold.
enum Reduced {
    Value(f64),
    Op(BinaryOp),
}

/// Evaluate a formula against a context.
///
/// An empty token list evaluates to `0`; a single variable token evaluates
/// to its resolved value.
pub fn evaluate(tokens: &[CalcToken], context: &CalculationContext) -> Evaluation {
    match value_of(tokens, context) {
        Ok(value) => Evaluation { value, steps: build_steps(tokens, context), error: None },
        Err(error) => Evaluation { value: 0.0, steps: Vec::new(), error: Some(error) },
    }
}

/// Evaluate without collecting steps; used for full formulas and for the
/// per-step prefix totals.
fn value_of(tokens: &[CalcToken], context: &CalculationContext) -> Result<f64, CalcError> {
    Ok(fold_additive(&fold_multiplicative(tokens, context)?))
}

/// First pass: resolve variables and immediately fold `*`/`/` wherever the
/// operator is flanked by a resolvable value on both sides. `+`/`-` tokens
/// pass through unfolded, as does any operator missing an operand.
fn fold_multiplicative(
    tokens: &[CalcToken],
    context: &CalculationContext,
) -> Result<Vec<Reduced>, CalcError> {
    let mut reduced = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        match &tokens[index] {
            CalcToken::Variable(name) => {
                reduced.push(Reduced::Value(resolve_required(name, context)?));
                index += 1;
            }
            CalcToken::Operator(op @ (BinaryOp::Multiply | BinaryOp::Divide)) => {
                let left = match reduced.last() {
                    Some(Reduced::Value(value)) => Some(*value),
                    _ => None,
                };
                let right = match tokens.get(index + 1) {
                    Some(CalcToken::Variable(name)) => Some(name),
                    _ => None,
                };
                match (left, right) {
                    (Some(lhs), Some(name)) => {
                        let rhs = resolve_required(name, context)?;
                        if *op == BinaryOp::Divide && rhs == 0.0 {
                            return Err(CalcError::DivisionByZero { divisor: name.clone() });
                        }
                        reduced.pop();
                        reduced.push(Reduced::Value(op.apply(lhs, rhs)));
                        index += 2;
                    }
                    // malformed: keep the operator, the final fold ignores it
                    _ => {
                        reduced.push(Reduced::Op(*op));
                        index += 1;
                    }
                }
            }
            CalcToken::Operator(op) => {
                reduced.push(Reduced::Op(*op));
                index += 1;
            }
        }
    }

    Ok(reduced)
}

/// Second pass: left-to-right fold of the remaining `+`/`-` operators.
///
/// Leftovers of a malformed formula have no effect here: a `*`/`/` that
/// could not fold is skipped, and a value with no joining operator is
/// dropped. An empty list folds to `0`.
fn fold_additive(reduced: &[Reduced]) -> f64 {
    let mut total: Option<f64> = None;
    let mut pending: Option<BinaryOp> = None;

    for item in reduced {
        match item {
            Reduced::Op(op @ (BinaryOp::Add | BinaryOp::Subtract)) => pending = Some(*op),
            Reduced::Op(_) => {}
            Reduced::Value(value) => match (total, pending.take()) {
                (None, _) => total = Some(*value),
                (Some(current), Some(op)) => total = Some(op.apply(current, *value)),
                (Some(_), None) => {}
            },
        }
    }

    total.unwrap_or(0.0)
}

fn resolve_required(name: &str, context: &CalculationContext) -> Result<f64, CalcError> {
    match resolver::resolve(name, context) {
        Some(Resolved::Value(value)) => Ok(value),
        Some(Resolved::NonNumeric(type_name)) => Err(CalcError::NonNumericVariable {
            name: name.to_string(),
            type_name: type_name.to_string(),
        }),
        None => Err(CalcError::MissingVariable { name: name.to_string() }),
    }
}

/// Build the audit trail for a formula that evaluated successfully.
///
/// Each variable token yields one step; the running total is the
/// precedence-correct value of the token prefix up to and including that
/// token. Formulas are a handful of tokens, so re-evaluating each prefix is
/// cheap.
fn build_steps(tokens: &[CalcToken], context: &CalculationContext) -> Vec<CalcStep> {
    let mut steps = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let CalcToken::Variable(name) = token else {
            continue;
        };
        let Some(Resolved::Value(value)) = resolver::resolve(name, context) else {
            continue;
        };
        let operation = match index.checked_sub(1).and_then(|i| tokens.get(i)) {
            Some(CalcToken::Operator(op)) => Some(*op),
            _ => None,
        };
        let running_total = value_of(&tokens[..=index], context).unwrap_or(value);
        steps.push(CalcStep { variable: name.clone(), value, operation, running_total });
    }

    steps
}
