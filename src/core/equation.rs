//! Equation representation and validation
//!
//! An Equation is a fixed-length arithmetic identity such as "1+2=3-0". Both
//! sides are evaluated with exact rational arithmetic (`*` and `/` before `+`
//! and `-`, left to right within a tier, no parentheses) and must be equal.

use rustc_hash::FxHashMap;
use std::fmt;

/// Length of every valid equation string
pub const EQUATION_LENGTH: usize = 7;

/// A validated 7-character equation
///
/// Stores the text as bytes alongside the original string. Construction via
/// [`Equation::new`] guarantees the grammar and the arithmetic identity hold,
/// so downstream code never re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    text: String,
    chars: [u8; EQUATION_LENGTH],
}

/// Error type for invalid equations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationError {
    InvalidLength(usize),
    InvalidCharacter(char),
    EqualsCount(usize),
    MalformedSide,
    DivisionByZero,
    SidesUnequal,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Equation must be exactly {EQUATION_LENGTH} characters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Equation contains invalid character '{ch}'")
            }
            Self::EqualsCount(count) => {
                write!(f, "Equation must contain exactly one '=', got {count}")
            }
            Self::MalformedSide => write!(f, "Equation side is empty or misplaces an operator"),
            Self::DivisionByZero => write!(f, "Equation divides by zero"),
            Self::SidesUnequal => write!(f, "Equation sides do not evaluate to the same value"),
        }
    }
}

impl std::error::Error for EquationError {}

impl Equation {
    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `EquationError` if:
    /// - Length is not exactly 7
    /// - Any character is outside `0-9 + - * / =`
    /// - The count of `=` is not exactly one
    /// - Either side is empty, starts/ends with an operator, or has two
    ///   adjacent operators
    /// - Any division divides by zero
    /// - The two sides are not exactly equal
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    ///
    /// let equation = Equation::new("1+2=3-0").unwrap();
    /// assert_eq!(equation.text(), "1+2=3-0");
    ///
    /// assert!(Equation::new("1+2=3-1").is_err()); // 3 != 2
    /// assert!(Equation::new("1/0=0*9").is_err()); // division by zero
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        // Validate length (all valid characters are single bytes)
        if text.len() != EQUATION_LENGTH {
            return Err(EquationError::InvalidLength(text.len()));
        }

        // Validate alphabet
        if let Some(ch) = text
            .chars()
            .find(|c| !matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '='))
        {
            return Err(EquationError::InvalidCharacter(ch));
        }

        // Exactly one '='
        let equals_count = text.bytes().filter(|&b| b == b'=').count();
        if equals_count != 1 {
            return Err(EquationError::EqualsCount(equals_count));
        }

        // Both sides must evaluate to the same exact rational value
        let (left, right) = text.split_once('=').expect("'=' count already validated");
        let left_value = evaluate_side(left.as_bytes())?;
        let right_value = evaluate_side(right.as_bytes())?;

        if !left_value.equals(right_value) {
            return Err(EquationError::SidesUnequal);
        }

        let chars: [u8; EQUATION_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; EQUATION_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= 7
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each character in the equation
    ///
    /// Used for feedback scoring with duplicate characters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Check whether a candidate string is a valid equation
///
/// Shorthand for `Equation::new(candidate).is_ok()`. Pure, no side effects.
///
/// # Examples
/// ```
/// use numberle::core::validate;
///
/// assert!(validate("1+2=3-0"));
/// assert!(!validate("1/0+5=="));
/// ```
#[must_use]
pub fn validate(candidate: &str) -> bool {
    Equation::new(candidate).is_ok()
}

/// Exact rational value with a non-zero denominator
///
/// Kept unreduced; comparison cross-multiplies in i128, so no rounding and no
/// overflow for values expressible in 7 characters.
#[derive(Debug, Clone, Copy)]
struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    const fn from_int(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    const fn negate(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    const fn multiply(self, other: Self) -> Self {
        Self {
            num: self.num * other.num,
            den: self.den * other.den,
        }
    }

    const fn divide(self, other: Self) -> Result<Self, EquationError> {
        if other.num == 0 {
            return Err(EquationError::DivisionByZero);
        }
        Ok(Self {
            num: self.num * other.den,
            den: self.den * other.num,
        })
    }

    fn add(self, other: Self) -> Self {
        Self {
            num: self.num * other.den + other.num * self.den,
            den: self.den * other.den,
        }
    }

    fn equals(self, other: Self) -> bool {
        i128::from(self.num) * i128::from(other.den) == i128::from(other.num) * i128::from(self.den)
    }
}

const fn is_operator(byte: u8) -> bool {
    matches!(byte, b'+' | b'-' | b'*' | b'/')
}

/// Evaluate one side of an equation
///
/// Rejects empty sides, leading/trailing operators, and adjacent operators.
/// `*` and `/` apply immediately to the running term; `+` and `-` start a new
/// term, which yields standard precedence with left-to-right associativity.
fn evaluate_side(side: &[u8]) -> Result<Rational, EquationError> {
    if side.is_empty() || is_operator(side[0]) || is_operator(side[side.len() - 1]) {
        return Err(EquationError::MalformedSide);
    }

    let mut terms: Vec<Rational> = Vec::new();
    let mut current = Rational::from_int(0);
    let mut pending_op = b'+';
    let mut number: Option<i64> = None;

    for &byte in side {
        if byte.is_ascii_digit() {
            let digit = i64::from(byte - b'0');
            number = Some(number.unwrap_or(0) * 10 + digit);
            continue;
        }

        // Operator: the preceding token must be a number
        let Some(value) = number.take() else {
            return Err(EquationError::MalformedSide);
        };
        current = apply(current, pending_op, Rational::from_int(value), &mut terms)?;
        pending_op = byte;
    }

    // Trailing-operator case already rejected above
    let value = number.ok_or(EquationError::MalformedSide)?;
    current = apply(current, pending_op, Rational::from_int(value), &mut terms)?;

    terms.push(current);
    Ok(terms
        .into_iter()
        .fold(Rational::from_int(0), Rational::add))
}

/// Fold the next number into the running term, or start a new term on `+`/`-`
fn apply(
    current: Rational,
    op: u8,
    value: Rational,
    terms: &mut Vec<Rational>,
) -> Result<Rational, EquationError> {
    match op {
        b'*' => Ok(current.multiply(value)),
        b'/' => current.divide(value),
        b'+' => {
            terms.push(current);
            Ok(value)
        }
        _ => {
            // Subtraction becomes an additive term with the sign folded in,
            // so a following '*' or '/' keeps binding tighter: a-b*c = a+((-b)*c)
            terms.push(current);
            Ok(value.negate())
        }
    }
}
