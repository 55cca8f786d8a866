//! Arithmetic expression evaluation.
//!
//! The grammar is `number (operator number)*` where `operator` is one of
//! `+ - * /` and `number` is a nonnegative run of digits. There are no
//! parentheses and no unary minus. Evaluation uses `f64` arithmetic with
//! the usual precedence (`*` and `/` before `+` and `-`, left-to-right
//! within a tier), so division can yield fractional values; callers that
//! need exact-integer results go through [`evaluate_integral`].

/// Errors produced while evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EvalError {
    /// The expression is structurally invalid: empty, a leading or
    /// trailing operator, two adjacent operators, or a character outside
    /// the numeric/operator alphabet.
    #[display("malformed expression")]
    MalformedExpression,
    /// A division by zero occurred. This is reported explicitly rather
    /// than propagating an infinite value.
    #[display("division by zero")]
    DivisionByZero,
    /// The expression evaluates, but not to a finite whole number.
    #[display("result is not a whole number")]
    NonIntegralResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

/// Splits an expression into alternating numbers and operators.
///
/// Returns one more number than operators; any violation of the
/// `number (operator number)*` shape is a [`EvalError::MalformedExpression`].
fn tokenize(expr: &str) -> Result<(Vec<f64>, Vec<Op>), EvalError> {
    let mut numbers = Vec::new();
    let mut ops = Vec::new();
    let mut current: Option<f64> = None;
    for ch in expr.chars() {
        match ch {
            '0'..='9' => {
                let digit = f64::from(ch as u8 - b'0');
                current = Some(current.map_or(digit, |n| n * 10.0 + digit));
            }
            '+' | '-' | '*' | '/' => {
                // `current` is absent on a leading operator or right
                // after another operator
                let number = current.take().ok_or(EvalError::MalformedExpression)?;
                numbers.push(number);
                ops.push(match ch {
                    '+' => Op::Add,
                    '-' => Op::Sub,
                    '*' => Op::Mul,
                    _ => Op::Div,
                });
            }
            _ => return Err(EvalError::MalformedExpression),
        }
    }
    // absent on an empty expression or a trailing operator
    let last = current.ok_or(EvalError::MalformedExpression)?;
    numbers.push(last);
    Ok((numbers, ops))
}

/// Evaluates an expression to a real number.
///
/// # Errors
///
/// Returns [`EvalError::MalformedExpression`] if the expression does not
/// match the grammar, or [`EvalError::DivisionByZero`] on division by a
/// zero-valued operand.
///
/// # Examples
///
/// ```
/// use equatle_core::eval::{self, EvalError};
///
/// assert_eq!(eval::evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(eval::evaluate("1/2"), Ok(0.5));
/// assert_eq!(eval::evaluate("42"), Ok(42.0));
/// assert_eq!(eval::evaluate("3/0"), Err(EvalError::DivisionByZero));
/// assert_eq!(eval::evaluate("1++2"), Err(EvalError::MalformedExpression));
/// ```
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let (numbers, ops) = tokenize(expr)?;

    // Fold left-to-right, accumulating the current multiplicative term and
    // flushing it into the total at each additive operator.
    let mut total = 0.0;
    let mut pending_sign = 1.0;
    let mut term = numbers[0];
    for (op, &number) in ops.iter().zip(&numbers[1..]) {
        match op {
            Op::Mul => term *= number,
            Op::Div => {
                if number == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                term /= number;
            }
            Op::Add => {
                total += pending_sign * term;
                pending_sign = 1.0;
                term = number;
            }
            Op::Sub => {
                total += pending_sign * term;
                pending_sign = -1.0;
                term = number;
            }
        }
    }
    Ok(total + pending_sign * term)
}

/// Evaluates an expression and requires a finite whole-number result.
///
/// Division makes fractional results possible even when every operand is
/// an integer, so the integrality check compares `value.round()` against
/// `value` instead of assuming exactness.
///
/// # Errors
///
/// Returns the underlying [`evaluate`] error, or
/// [`EvalError::NonIntegralResult`] when the value is not a finite integer.
///
/// # Examples
///
/// ```
/// use equatle_core::eval::{self, EvalError};
///
/// assert_eq!(eval::evaluate_integral("8/4"), Ok(2));
/// assert_eq!(eval::evaluate_integral("9/3-3"), Ok(0));
/// assert_eq!(eval::evaluate_integral("1/2"), Err(EvalError::NonIntegralResult));
/// ```
#[expect(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn evaluate_integral(expr: &str) -> Result<i64, EvalError> {
    let value = evaluate(expr)?;
    if !value.is_finite() || value.round() != value {
        return Err(EvalError::NonIntegralResult);
    }
    Ok(value as i64)
}
