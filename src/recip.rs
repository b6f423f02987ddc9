//!
//! Reciprocal, reciprocal square root and division
//!
//! All three start from a table estimate of the normalized input; division
//! refines it with one Newton-Raphson step before using it.
//!

use crate::maths::*;
use crate::mulhi::*;
use crate::tables::*;

/// Computes `1/x` for `x` in Q0, result in Q16.
///
/// `x == 0` returns `0xffff`.
///
/// |error| <= 1.0 ULP
#[inline(always)]
pub fn recip(x: u16) -> u16 {
    if x == 0 {
        trace!("recip of zero, saturating");
        return 0xffff;
    }

    let (e, x) = x.norm();

    // r = 0x7fffffff / x, where x = 8 MSBs
    let r = RECIP_TAB[usize::from((x >> 8) - 128)];

    r >> (15 - e)
}

/// Computes `1/sqrt(x)` for `x` in Q0, result in Q16.
///
/// `x <= 1` returns `0xffff`.
///
/// |error| <= 3.0 ULP
#[inline(always)]
pub fn rsqrt(x: u16) -> u16 {
    if x <= 1 {
        trace!("rsqrt of {}, saturating", x);
        return 0xffff;
    }

    let (mut e, mut x) = x.norm();
    // the table only covers even exponents
    if e & 1 != 0 {
        x >>= 1;
    }
    e &= 0xfe;

    let t = u16::from(RSQRT_TAB[usize::from((x >> 9) - 32)]); // Q8

    // one Newton-Raphson step, r * (1.5 - 0.5 * x * r^2)
    let s = t * t;
    let r = 0xc000 - umulhi(x, s); // Q16
    let r = ((u32::from(r) * u32::from(t << 1)) >> 8) as u16;

    r >> (7 - (e >> 1))
}

/// Computes `(n << 16) / d`, result in Q16.
///
/// `n >= d` returns `0xffff`, which covers both the overflow and the
/// division by zero.
///
/// error in [-8.0, 0] ULP, the result never rounds up.
#[inline(always)]
pub fn udivhi(n: u16, d: u16) -> u16 {
    if n >= d {
        trace!("udivhi {} / {} overflows, saturating", n, d);
        return 0xffff;
    }

    let (e, d) = d.norm();
    let n = n << e;

    let r = RECIP_TAB[usize::from((d >> 8) - 128)];

    // one Newton-Raphson step, r * (2 - d * r)
    let d = !umulhi(d, r);
    let d = umulhi(d, r) << 1;

    umulhi(d, n) << 1
}
