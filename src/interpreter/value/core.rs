use std::rc::Rc;

use crate::util::num::i64_to_f64;

/// Represents a runtime value in the interpreter.
///
/// Expressions yield integers, reals or booleans; loops yield sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    /// Produced by division, which never truncates.
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.).
    Bool(bool),
    /// The ordered per-iteration results of a loop.
    Sequence(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Sequence(Rc::new(v))
    }
}

impl Value {
    /// Coerces the value to a condition result.
    ///
    /// Zero and `false` are false; every other number and `true` are true.
    /// Conditions are always expressions, so only library callers ever test a
    /// sequence; it is true when it is not empty.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(-2).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::from(Vec::<Value>::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Bool(b) => *b,
            Self::Sequence(s) => !s.is_empty(),
        }
    }

    /// Converts the value to an `i64` for integer arithmetic.
    ///
    /// Booleans count as `0` and `1`. Reals and sequences yield `None`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Real(_) | Self::Sequence(_) => None,
        }
    }

    /// Converts the value to an `f64`, or returns `None` for a sequence.
    ///
    /// Booleans count as `0.0` and `1.0`. Integers beyond `2^53` are rounded.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), Some(10.0));
    /// assert_eq!(Value::Bool(true).as_real(), Some(1.0));
    /// assert_eq!(Value::Integer(10_000_000_000_000_000).as_real(), Some(1e16));
    /// assert_eq!(Value::from(vec![Value::Integer(1)]).as_real(), None);
    /// ```
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Bool(b) => Some(f64::from(u8::from(*b))),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the elements of a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(s) => Some(s.as_slice()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Debug formatting keeps the fractional part, so `10 / 2` shows as `5.0`.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Sequence(s) => {
                write!(f, "[")?;

                for (index, value) in s.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
