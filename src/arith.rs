//! Precision-aware decimal primitives
//!
//! Every matrix algorithm funnels its arithmetic through these functions so
//! that a single `Option<&MathContext>` governs the whole computation. With
//! `None` the result is exact; with a context it is rounded to the context's
//! precision after each primitive, like `BigDecimal` arithmetic under a
//! `MathContext` in other decimal libraries.

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use crate::context::MathContext;
use crate::error::Result;

/// Guard digits carried while raising to a power under a context
const POW_GUARD_DIGITS: u64 = 10;

#[inline]
fn finish(value: BigDecimal, ctx: Option<&MathContext>) -> Result<BigDecimal> {
    match ctx {
        Some(ctx) => ctx.round(&value),
        None => Ok(value),
    }
}

/// `left + right`
pub fn add(left: &BigDecimal, right: &BigDecimal, ctx: Option<&MathContext>) -> Result<BigDecimal> {
    finish(left + right, ctx)
}

/// `left - right`
pub fn subtract(
    left: &BigDecimal,
    right: &BigDecimal,
    ctx: Option<&MathContext>,
) -> Result<BigDecimal> {
    finish(left - right, ctx)
}

/// `left * right`
pub fn multiply(
    left: &BigDecimal,
    right: &BigDecimal,
    ctx: Option<&MathContext>,
) -> Result<BigDecimal> {
    finish(left * right, ctx)
}

/// `base ^ exponent` for a non-negative integer exponent
///
/// Without a context the power is exact. With a context the intermediate
/// squarings carry extra guard digits and only the final result is rounded to
/// the requested precision. `0 ^ 0` is one.
pub fn pow(base: &BigDecimal, exponent: u64, ctx: Option<&MathContext>) -> Result<BigDecimal> {
    if exponent == 0 {
        return Ok(BigDecimal::one());
    }
    if base.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let working = ctx.map(|ctx| ctx.widened(POW_GUARD_DIGITS));
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    let mut remaining = exponent;
    loop {
        if remaining & 1 == 1 {
            result = multiply(&result, &square, working.as_ref())?;
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        square = multiply(&square, &square, working.as_ref())?;
    }
    finish(result, ctx)
}

/// Round `value` under `ctx` and strip trailing fractional zeros
pub fn round_canonical(value: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal> {
    Ok(ctx.round(value)?.normalized())
}
