//! Precision contexts for decimal arithmetic
//!
//! A [`MathContext`] caps the number of significant digits kept by an
//! arithmetic result and names the rounding rule used to get there. Every
//! operation in [`crate::ops`] takes an `Option<&MathContext>`; `None` selects
//! exact arithmetic, where sums and products keep every digit.

use std::fmt;
use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::{Error, Result};

const fn digits(n: u64) -> NonZeroU64 {
    match NonZeroU64::new(n) {
        Some(n) => n,
        None => panic!("precision must be nonzero"),
    }
}

const DECIMAL32_DIGITS: NonZeroU64 = digits(7);
const DECIMAL64_DIGITS: NonZeroU64 = digits(16);
const DECIMAL128_DIGITS: NonZeroU64 = digits(34);

/// Rounding rule applied when a result has more digits than the context allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// To nearest, ties away from zero
    HalfUp,
    /// To nearest, ties towards zero
    HalfDown,
    /// To nearest, ties to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Refuse to discard any nonzero digit
    ///
    /// Rounding a value that does not fit the precision exactly fails with
    /// [`Error::Arithmetic`].
    Unnecessary,
}

impl Rounding {
    fn mode(self) -> Option<RoundingMode> {
        match self {
            Rounding::Up => Some(RoundingMode::Up),
            Rounding::Down => Some(RoundingMode::Down),
            Rounding::Ceiling => Some(RoundingMode::Ceiling),
            Rounding::Floor => Some(RoundingMode::Floor),
            Rounding::HalfUp => Some(RoundingMode::HalfUp),
            Rounding::HalfDown => Some(RoundingMode::HalfDown),
            Rounding::HalfEven => Some(RoundingMode::HalfEven),
            Rounding::Unnecessary => None,
        }
    }

    /// Returns the rounding name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Rounding::Up => "UP",
            Rounding::Down => "DOWN",
            Rounding::Ceiling => "CEILING",
            Rounding::Floor => "FLOOR",
            Rounding::HalfUp => "HALF_UP",
            Rounding::HalfDown => "HALF_DOWN",
            Rounding::HalfEven => "HALF_EVEN",
            Rounding::Unnecessary => "UNNECESSARY",
        }
    }
}

/// Significant-digit precision plus a rounding rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: NonZeroU64,
    rounding: Rounding,
}

impl MathContext {
    /// Create a context keeping `precision` significant digits
    pub fn new(precision: NonZeroU64, rounding: Rounding) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    /// Create a context from a plain digit count
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `precision` is zero. Exact
    /// arithmetic is expressed by passing no context at all.
    pub fn with_digits(precision: u64, rounding: Rounding) -> Result<Self> {
        let precision = NonZeroU64::new(precision).ok_or_else(|| {
            Error::invalid_argument("precision", "must be at least one digit")
        })?;
        Ok(Self::new(precision, rounding))
    }

    /// IEEE 754 decimal32: 7 digits, half-even
    pub fn decimal32() -> Self {
        Self::new(DECIMAL32_DIGITS, Rounding::HalfEven)
    }

    /// IEEE 754 decimal64: 16 digits, half-even
    pub fn decimal64() -> Self {
        Self::new(DECIMAL64_DIGITS, Rounding::HalfEven)
    }

    /// IEEE 754 decimal128: 34 digits, half-even
    pub fn decimal128() -> Self {
        Self::new(DECIMAL128_DIGITS, Rounding::HalfEven)
    }

    /// Returns the number of significant digits kept
    #[inline]
    pub fn precision(&self) -> NonZeroU64 {
        self.precision
    }

    /// Returns the rounding rule
    #[inline]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Same rounding rule with `extra` more digits of precision
    pub(crate) fn widened(&self, extra: u64) -> Self {
        Self {
            precision: self.precision.saturating_add(extra),
            rounding: self.rounding,
        }
    }

    /// Round `value` to this context's precision
    ///
    /// Values that already fit are returned unchanged, keeping their scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] under [`Rounding::Unnecessary`] when
    /// nonzero digits would be discarded.
    pub fn round(&self, value: &BigDecimal) -> Result<BigDecimal> {
        if value.digits() <= self.precision.get() {
            return Ok(value.clone());
        }
        match self.rounding.mode() {
            Some(mode) => Ok(value.with_precision_round(self.precision, mode)),
            None => {
                let rounded = value.with_precision_round(self.precision, RoundingMode::HalfEven);
                if rounded == *value {
                    Ok(rounded)
                } else {
                    Err(Error::arithmetic(format!(
                        "rounding necessary: {value} does not fit in {} digits",
                        self.precision
                    )))
                }
            }
        }
    }
}

impl fmt::Display for MathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "precision={} rounding={}",
            self.precision,
            self.rounding.name()
        )
    }
}
