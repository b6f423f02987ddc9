//!
//! Fixed-point approximations for cores without a floating point unit
//!
//! Every routine takes and returns raw 16-bit words, the fixed-point format
//! of each argument and result is part of its documentation. Out of domain
//! inputs return a documented saturated value instead of failing.
//!
//! | Function       | Input             | Output        | Special case         |
//! |----------------|-------------------|---------------|----------------------|
//! | [`recip`]      | unsigned Q0       | unsigned Q16  | `x = 0 -> 0xffff`    |
//! | [`rsqrt`]      | unsigned Q0       | unsigned Q16  | `x <= 1 -> 0xffff`   |
//! | [`udivhi`]     | unsigned Q0, Q0   | unsigned Q16  | `n >= d -> 0xffff`   |
//! | [`log2`]       | unsigned Q16      | signed Q11    | `x = 0 -> -16.0`     |
//! | [`exp2`]       | signed Q11        | unsigned Q16  | `x >= 0 -> 0xffff`   |
//! | [`sincospi`]   | Q15, units of pi  | signed Q15 x2 |                      |
//! | [`atan2pi`]    | signed Q0, Q0     | signed Q15    | `(0, 0) -> 0.25`     |
//!

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(
    all(target_arch = "avr", feature = "avr-asm"),
    feature(asm_experimental_arch)
)]

#[macro_use]
extern crate log;

mod error;
mod exp;
mod maths;
mod mulhi;
mod recip;
mod tables;
mod trig;

#[cfg(feature = "std")]
pub mod format;

#[cfg(test)]
mod sweep;

pub use crate::error::*;
pub use crate::exp::*;
pub use crate::maths::*;
pub use crate::mulhi::*;
pub use crate::recip::*;
pub use crate::tables::*;
pub use crate::trig::*;

#[cfg(feature = "std")]
pub use crate::format::{Format, Q11, Q15, UQ0, UQ16};
