//! A loosely typed element for building sequences that mix numbers and strings.

use alloc::string::String;
use core::{cmp::Ordering, fmt};

/// A number or a string.
///
/// Integers and floats compare numerically with each other, exactly even past `2^53`. Strings only compare with strings;
/// a number and a string are incomparable, as is `NaN` with anything.
#[derive(Debug, Clone)]
pub enum Value {
    /// A whole number
    Int(i64),

    /// A floating-point number, possibly `NaN` or infinite
    Float(f64),

    /// A string, ordered lexicographically by bytes
    Str(String),
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Int(x), Int(y)) => Some(x.cmp(y)),
            (Int(x), Float(y)) => cmp_int_float(*x, *y),
            (Float(x), Int(y)) => cmp_int_float(*y, *x).map(Ordering::reverse),
            (Float(x), Float(y)) => x.partial_cmp(y),
            (Str(x), Str(y)) => Some(x.cmp(y)),
            _ => None,
        }
    }
}

/// Compare `x` with `y` exactly. `x as f64` would round above 2^53.
fn cmp_int_float(x: i64, y: f64) -> Option<Ordering> {
    if !y.is_finite() {
        return (x as f64).partial_cmp(&y);
    }

    // Saturates outside the `i128` range, which still orders correctly against any `i64`
    let whole = (y as i128) as f64;
    match i128::from(x).cmp(&(whole as i128)) {
        Ordering::Equal => 0f64.partial_cmp(&(y - whole)),
        ord => Some(ord),
    }
}

// Equality follows the ordering so that `Int(1) == Float(1.0)`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(x) => write!(f, "{x}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(x) => write!(f, "{x:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Int(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Value::Str(x.into())
    }
}

impl From<String> for Value {
    fn from(x: String) -> Self {
        Value::Str(x)
    }
}
