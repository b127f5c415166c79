//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.10 + 0.20 = 0.30000000000000004  ❌ WRONG!                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    2999 + 545 = 3544  → displayed as 35.44                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! // Create from pence (preferred)
//! let price = Money::from_cents(2999); // 29.99
//!
//! // Parse what a user typed into the price field
//! let typed: Money = "29.99".parse().unwrap();
//! assert_eq!(typed, price);
//!
//! let total = price + Money::from_cents(545);
//! assert_eq!(total.to_string(), "35.44");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: book prices are not checked for sign, so a negative
///   value must still be representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Stock.price ──────────────┐
///                           ├──► Invoice.calculate_total() ──► Invoice total
/// Shipping.calc_ship_cost() ┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_cents(2999); // Represents 29.99
    /// assert_eq!(price.cents(), 2999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (pounds and pence).
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(3, 95).cents(), 395);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Largest magnitude, in pence, that parsing will produce.
///
/// Half of `i64::MAX`, so a parsed price plus any delivery cost still fits.
pub const MAX_PARSED_CENTS: i64 = i64::MAX / 2;

/// Exponents are clamped to this; anything larger overflows or rounds to
/// zero regardless.
const EXPONENT_LIMIT: i64 = 1_000;

/// Why a price string could not be turned into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("no digits")]
    Empty,

    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),

    #[error("misplaced '_' or missing exponent digits")]
    Malformed,

    #[error("amount is too large")]
    Overflow,
}

/// Parses the number forms a price field accepts: optional sign, digits
/// with optional `_` separators, optional `.` and fraction, optional
/// `e`/`E` exponent. The digit after the pence rounds half up; anything
/// past it is ignored. `inf` and `nan` are not numbers here.
///
/// ```rust
/// use bookstore_core::money::Money;
///
/// assert_eq!("29.99".parse::<Money>().unwrap().cents(), 2999);
/// assert_eq!("30".parse::<Money>().unwrap().cents(), 3000);
/// assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
/// assert_eq!("29.995".parse::<Money>().unwrap().cents(), 3000);
/// assert_eq!("2.5E2".parse::<Money>().unwrap().cents(), 25000);
/// assert_eq!("1_000".parse::<Money>().unwrap().cents(), 100000);
/// assert!("twenty".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = split_sign(s.trim());

        let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
            None => (unsigned, None),
        };

        let (major, minor) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let major = digit_group(major)?;
        let minor = digit_group(minor)?;
        if major.is_empty() && minor.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let exponent = match exponent {
            Some(text) => parse_exponent(text)?,
            None => 0,
        };

        let digits: Vec<u8> = major.bytes().chain(minor.bytes()).map(|b| b - b'0').collect();
        // Where the decimal point lands once the value is expressed in pence
        let point = major.len() as i64 + exponent + 2;

        let cents = shift_to_cents(&digits, point)?;
        if cents > MAX_PARSED_CENTS {
            return Err(ParseMoneyError::Overflow);
        }

        Ok(Money(if negative { -cents } else { cents }))
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

/// Digits of one group with `_` separators removed. A separator must sit
/// between two digits.
fn digit_group(part: &str) -> Result<String, ParseMoneyError> {
    let bytes = part.as_bytes();
    let mut digits = String::with_capacity(part.len());

    for (i, c) in part.char_indices() {
        match c {
            '0'..='9' => digits.push(c),
            '_' => {
                let before = i > 0 && bytes[i - 1].is_ascii_digit();
                let after = bytes.get(i + 1).map_or(false, u8::is_ascii_digit);
                if !(before && after) {
                    return Err(ParseMoneyError::Malformed);
                }
            }
            other => return Err(ParseMoneyError::InvalidCharacter(other)),
        }
    }

    Ok(digits)
}

fn parse_exponent(text: &str) -> Result<i64, ParseMoneyError> {
    let (negative, unsigned) = split_sign(text);
    let digits = digit_group(unsigned)?;
    if digits.is_empty() {
        return Err(ParseMoneyError::Malformed);
    }

    let significant = digits.trim_start_matches('0');
    let magnitude = if significant.is_empty() {
        0
    } else if significant.len() > 6 {
        EXPONENT_LIMIT
    } else {
        significant
            .parse::<i64>()
            .map_err(|_| ParseMoneyError::Malformed)?
            .min(EXPONENT_LIMIT)
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Reads `digits` as whole pence up to `point`, rounding on the digit at
/// `point`.
fn shift_to_cents(digits: &[u8], point: i64) -> Result<i64, ParseMoneyError> {
    if digits.iter().all(|&d| d == 0) {
        return Ok(0);
    }

    let whole = usize::try_from(point).unwrap_or(0);
    let mut cents: i64 = 0;
    for i in 0..whole {
        let digit = i64::from(digits.get(i).copied().unwrap_or(0));
        cents = cents
            .checked_mul(10)
            .and_then(|c| c.checked_add(digit))
            .ok_or(ParseMoneyError::Overflow)?;
    }

    let round_digit = if point < 0 {
        0
    } else {
        digits.get(whole).copied().unwrap_or(0)
    };
    cents
        .checked_add(i64::from(round_digit >= 5))
        .ok_or(ParseMoneyError::Overflow)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount with two decimals and no currency symbol.
/// The front end decides which symbol goes in front.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
