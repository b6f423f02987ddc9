//!
//! Sine, cosine and two-argument arctangent
//!
//! Angles are in units of pi, so a full turn is the whole Q15 range and
//! wraps around for free.
//!

use crate::mulhi::*;
use crate::recip::udivhi;

/// Computes `(sin(pi * x), cos(pi * x))` in Q15, for `x` in Q15 read either
/// as signed `[-1, 1]` or unsigned `[0, 2]`.
///
/// |error| < 2.3 ULP
#[inline(always)]
pub fn sincospi(x: i16) -> (i16, i16) {
    // quadrant [0, 3] in the 2 MSBs
    let q = (x as u16).wrapping_add(0x2000) & 0xc000;

    // x in [-0.25, 0.25], renormalized to Q15
    let x = x << 2;
    // saturate to avoid x * x overflow
    let x = if x == i16::MIN { x + 1 } else { x };

    let xx = mulhi(x, x) << 1; // Q15

    // odd polynomial
    let s = 322; // Q17
    let s = mulhi(s, xx) - 5291; // Q16
    let s = mulhi(s, xx) + 25736; // Q15
    let s = mulhi(s, x); // Q14
    let s = (s << 1) + 1; // Q15

    // even polynomial
    let c = 2039; // Q17
    let c = mulhi(c, xx) - 20209; // Q16
    let c = mulhi(c, xx) + 32767; // Q15

    let (s, c) = if q & 0x8000 != 0 { (-s, -c) } else { (s, c) };

    if q & 0x4000 != 0 {
        (c, -s)
    } else {
        (s, c)
    }
}

/// Computes `atan2(y, x) / pi`, result in Q15.
///
/// The origin returns `0.25`.
///
/// |error| < 3.75 ULP
#[inline(always)]
pub fn atan2pi(y: i16, x: i16) -> i16 {
    if (y | x) == 0 {
        trace!("atan2pi at the origin");
        return 0x2000;
    }

    // reduce to the first octant
    let ay = y.unsigned_abs();
    let ax = x.unsigned_abs();
    let r = (udivhi(ay.min(ax), ay.max(ax)) >> 1) as i16; // Q15

    // atan(r) / pi
    let s = 22915; // Q19
    let s = mulhi(s, r) - 28217; // Q18
    let s = mulhi(s, r) - 696; // Q17
    let s = mulhi(s, r) + 20922; // Q16
    let s = mulhi(s, r); // Q15

    // unfold the octant
    let s = if ay > ax { 0x4000 - s } else { s };
    let s = if x < 0 { i16::MIN.wrapping_sub(s) } else { s };

    if y < 0 {
        s.wrapping_neg()
    } else {
        s
    }
}
