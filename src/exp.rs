//!
//! Base-2 logarithm and exponential
//!
//! Both split the argument into an integer exponent and a fraction in
//! `[0, 1)` and evaluate a degree 3 minimax polynomial on the fraction.
//! The coefficients gain one fractional bit per Horner step, so each step
//! is annotated with its format.
//!

use crate::maths::*;
use crate::mulhi::*;

/// Computes `log2(x)` for `x` in `[0, 1]` in Q16, result in `[-16, 0]` in Q11.
///
/// `x == 0` returns `-16.0`.
///
/// |error| < 2.5 ULP
#[inline(always)]
pub fn log2(x: u16) -> i16 {
    if x == 0 {
        trace!("log2 of zero, saturating");
        return i16::MIN;
    }

    // split into e and x - 1.0
    let (e, x) = x.norm();
    let x = (x & 0x7fff) as i16; // Q15

    // log2(1 + x) for x in [0, 1)
    let f = 10435; // Q16
    let f = mulhi(f, x) - 19074; // Q15
    let f = mulhi(f, x) + 23312; // Q14
    let f = mulhi(f, x); // Q13

    (!i16::from(e) << 11) + ((f + 2) >> 2)
}

/// Computes `2^x` for `x` in `[-16, 0]` in Q11, result in `[0, 1]` in Q16.
///
/// `x >= 0` returns `0xffff`.
///
/// |error| < 5.9 ULP
#[inline(always)]
pub fn exp2(x: i16) -> u16 {
    if x >= 0 {
        trace!("exp2 of {}, saturating", x);
        return 0xffff;
    }

    // split into e and x
    let e = !(x >> 11) as u8; // [0, 15]
    let x = ((x << 4) & 0x7fff) as u16; // Q15

    // 2^x for x in [0, 1)
    let f = 20774; // Q18
    let f = umulhi(f, x) + 29474; // Q17
    let f = umulhi(f, x) + 45606; // Q16
    let f = umulhi(f, x) + 32768; // Q15

    f >> e
}
