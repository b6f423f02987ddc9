//!
//! Multiply-high
//!
//! The upper 16 bits of a 16x16 product, i.e. a fixed-point multiply where
//! both operands and the result share the same format (Q15 signed, Q16
//! unsigned). Every other routine in the crate is built on it.
//!

/// A multiply-high implementation.
///
/// The implementation in use is picked at build time through [`Native`],
/// calls are always statically dispatched.
pub trait Multiplier {
    fn mulhi(a: i16, b: i16) -> i16;
    fn umulhi(a: u16, b: u16) -> u16;
}

/// Reference implementation: a full 32-bit product, shifted.
#[derive(Debug, Clone, Copy)]
pub struct Portable;

impl Multiplier for Portable {
    #[inline(always)]
    fn mulhi(a: i16, b: i16) -> i16 {
        ((i32::from(a) * i32::from(b)) >> 16) as i16
    }

    #[inline(always)]
    fn umulhi(a: u16, b: u16) -> u16 {
        ((u32::from(a) * u32::from(b)) >> 16) as u16
    }
}

/// Four 8x8 partial products, for cores that only have a byte multiplier.
///
/// The low byte of `lo * lo` never carries into the result, so only its
/// high byte is accumulated with the two cross products.
#[derive(Debug, Clone, Copy)]
pub struct PartialProducts;

impl Multiplier for PartialProducts {
    #[inline(always)]
    fn mulhi(a: i16, b: i16) -> i16 {
        let (al, ah) = (a as u8, (a >> 8) as i8);
        let (bl, bh) = (b as u8, (b >> 8) as i8);

        let ll = u16::from(al) * u16::from(bl);
        let hh = i16::from(ah) * i16::from(bh);
        // signed x unsigned, fits in [-32640, 32385]
        let hl = i16::from(bh) * i16::from(al);
        let lh = i16::from(ah) * i16::from(bl);

        let mid = i32::from(ll >> 8) + i32::from(hl) + i32::from(lh);

        (i32::from(hh) + (mid >> 8)) as i16
    }

    #[inline(always)]
    fn umulhi(a: u16, b: u16) -> u16 {
        let (al, ah) = (a & 0xff, a >> 8);
        let (bl, bh) = (b & 0xff, b >> 8);

        let ll = al * bl;
        let hh = ah * bh;
        let hl = bh * al;
        let lh = ah * bl;

        let mid = u32::from(ll >> 8) + u32::from(hl) + u32::from(lh);

        (u32::from(hh) + (mid >> 8)) as u16
    }
}

/// The partial products as an AVR `MUL`/`MULS`/`MULSU` sequence.
///
/// The operands live in `r16`-`r19`, the only registers `MULSU` accepts.
/// A scratch register accumulates the byte below the result so the carries
/// of both cross products reach it, and `r1` is cleared again on the way out.
#[cfg(all(target_arch = "avr", feature = "avr-asm"))]
#[derive(Debug, Clone, Copy)]
pub struct AvrMul;

#[cfg(all(target_arch = "avr", feature = "avr-asm"))]
impl Multiplier for AvrMul {
    #[inline(always)]
    fn mulhi(a: i16, b: i16) -> i16 {
        let [al, ah] = a.to_le_bytes();
        let [bl, bh] = b.to_le_bytes();
        let (lo, hi): (u8, u8);

        unsafe {
            core::arch::asm!(
                "clr {zero}",
                "mul r16, r18",
                "mov {t}, r1",
                "muls r17, r19",
                "mov {lo}, r0",
                "mov {hi}, r1",
                "mulsu r19, r16",
                "sbc {hi}, {zero}",
                "add {t}, r0",
                "adc {lo}, r1",
                "adc {hi}, {zero}",
                "mulsu r17, r18",
                "sbc {hi}, {zero}",
                "add {t}, r0",
                "adc {lo}, r1",
                "adc {hi}, {zero}",
                "clr r1",
                in("r16") al,
                in("r17") ah,
                in("r18") bl,
                in("r19") bh,
                lo = out(reg) lo,
                hi = out(reg) hi,
                t = out(reg) _,
                zero = out(reg) _,
                options(pure, nomem, nostack),
            );
        }

        i16::from_le_bytes([lo, hi])
    }

    #[inline(always)]
    fn umulhi(a: u16, b: u16) -> u16 {
        let [al, ah] = a.to_le_bytes();
        let [bl, bh] = b.to_le_bytes();
        let (lo, hi): (u8, u8);

        unsafe {
            core::arch::asm!(
                "clr {zero}",
                "mul r16, r18",
                "mov {t}, r1",
                "mul r17, r19",
                "mov {lo}, r0",
                "mov {hi}, r1",
                "mul r19, r16",
                "add {t}, r0",
                "adc {lo}, r1",
                "adc {hi}, {zero}",
                "mul r17, r18",
                "add {t}, r0",
                "adc {lo}, r1",
                "adc {hi}, {zero}",
                "clr r1",
                in("r16") al,
                in("r17") ah,
                in("r18") bl,
                in("r19") bh,
                lo = out(reg) lo,
                hi = out(reg) hi,
                t = out(reg) _,
                zero = out(reg) _,
                options(pure, nomem, nostack),
            );
        }

        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(not(any(feature = "partial-products", target_arch = "avr")))]
pub type Native = Portable;

#[cfg(all(
    any(feature = "partial-products", target_arch = "avr"),
    not(all(target_arch = "avr", feature = "avr-asm"))
))]
pub type Native = PartialProducts;

#[cfg(all(target_arch = "avr", feature = "avr-asm"))]
pub type Native = AvrMul;

/// Signed Q15 multiply, `(a * b) >> 16`.
#[inline(always)]
pub fn mulhi(a: i16, b: i16) -> i16 {
    Native::mulhi(a, b)
}

/// Unsigned Q16 multiply, `(a * b) >> 16`.
#[inline(always)]
pub fn umulhi(a: u16, b: u16) -> u16 {
    Native::umulhi(a, b)
}
