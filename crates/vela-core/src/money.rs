//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In JavaScript/floating point:                                  │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  OUR SOLUTION: Integer Cents                                    │
//! │    $999.99 is stored as 99999; 3 × 99999 = 299997 exactly       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vela_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let line = price * 3;                       // $32.97
//! let total = line + Money::from_cents(500);  // $37.97
//!
//! // Parse user input without going through f64
//! assert_eq!(Money::parse("12.99"), Some(Money::from_cents(1299)));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a net amount can go negative when a discount
///   exceeds the subtotal, and we record that rather than hide it
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde transparent-ish**: serializes as the raw cent count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vela_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns this value floored at zero.
    ///
    /// Used for *display* totals: the on-screen total never shows a
    /// negative number even when a discount exceeds the subtotal. The
    /// committed net amount is NOT clamped; see
    /// [`checkout::process_transaction`](crate::checkout::process_transaction).
    ///
    /// ## Example
    /// ```rust
    /// use vela_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-250).clamp_non_negative().cents(), 0);
    /// assert_eq!(Money::from_cents(250).clamp_non_negative().cents(), 250);
    /// ```
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Parses a decimal string ("12", "12.5", "12.99") into Money.
    ///
    /// ## Rules
    /// - Integer string math throughout, the input never touches `f64`
    /// - At most two fraction digits; "1.999" is rejected rather than
    ///   silently rounded
    /// - A single fraction digit means tens of cents: "1.5" → 150
    /// - A leading `-` is accepted; whether negative values are allowed
    ///   is the caller's decision
    /// - Surrounding whitespace is ignored
    ///
    /// Returns `None` when the input is not a decimal number.
    pub fn parse(input: &str) -> Option<Money> {
        let input = input.trim();
        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return None;
        }

        let dollars: i64 = if major.is_empty() {
            0 // ".99" is accepted
        } else if major.chars().all(|c| c.is_ascii_digit()) {
            major.parse().ok()?
        } else {
            return None;
        };

        let cents: i64 = match minor.len() {
            0 => 0,
            1 | 2 if minor.chars().all(|c| c.is_ascii_digit()) => {
                let parsed: i64 = minor.parse().ok()?;
                if minor.len() == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            }
            _ => return None,
        };

        let total = dollars.checked_mul(100)?.checked_add(cents)?;
        Some(Money(if negative { -total } else { total }))
    }

    /// Lenient parse used for discount input fields.
    ///
    /// Unparseable input and negative values both collapse to zero,
    /// which keeps the recorded discount non-negative.
    ///
    /// ## Example
    /// ```rust
    /// use vela_core::money::Money;
    ///
    /// assert_eq!(Money::parse_or_zero("50"), Money::from_cents(5000));
    /// assert_eq!(Money::parse_or_zero(""), Money::zero());
    /// assert_eq!(Money::parse_or_zero("abc"), Money::zero());
    /// assert_eq!(Money::parse_or_zero("-5"), Money::zero());
    /// ```
    pub fn parse_or_zero(input: &str) -> Money {
        match Money::parse(input) {
            Some(value) if !value.is_negative() => value,
            _ => Money::zero(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and receipts. A localized UI should format from
/// the raw cent count instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity (for line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
