/// Normalization: shift left until the most significant bit is set.
pub trait Norm: Sized {
    /// Returns the shift count and the shifted value.
    ///
    /// Zero is not normalizable: it comes back as `(15, 0)` and callers
    /// rely on that exponent when they later undo the shift.
    fn norm(self) -> (u8, Self);
}

impl Norm for u16 {
    #[cfg(not(feature = "native-clz"))]
    #[inline(always)]
    fn norm(self) -> (u8, Self) {
        let mut x = self;
        let mut e = 0;

        if x < 0x0100 {
            e += 8;
            x <<= 8;
        }
        if x < 0x1000 {
            e += 4;
            x <<= 4;
        }
        if x < 0x4000 {
            e += 2;
            x <<= 2;
        }
        if x < 0x8000 {
            e += 1;
            x <<= 1;
        }

        (e, x)
    }

    #[cfg(feature = "native-clz")]
    #[inline(always)]
    fn norm(self) -> (u8, Self) {
        // the low bit keeps zero at 15 instead of 16
        let e = (self | 1).leading_zeros();

        (e as u8, self << e)
    }
}

#[inline(always)]
pub fn norm(x: u16) -> (u8, u16) {
    x.norm()
}

#[cfg(test)]
mod test {
    use super::*;
    use interpolate_name::interpolate_test;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero() {
        assert_eq!(norm(0), (15, 0));
    }

    #[interpolate_test(one, 1, 15, 0x8000)]
    #[interpolate_test(byte, 0x00ff, 8, 0xff00)]
    #[interpolate_test(nibble, 0x0123, 7, 0x9180)]
    #[interpolate_test(top, 0x8000, 0, 0x8000)]
    #[interpolate_test(max, 0xffff, 0, 0xffff)]
    #[interpolate_test(half, 0x4000, 1, 0x8000)]
    fn fixed(x: u16, e: u8, m: u16) {
        assert_eq!(norm(x), (e, m));
    }

    #[test]
    fn exhaustive() {
        for x in 1..=0xffffu16 {
            let (e, m) = norm(x);

            assert!(e <= 15);
            assert!(m & 0x8000 != 0, "{:#06x} normalized to {:#06x}", x, m);
            assert_eq!(m, x << e);
            assert_eq!(u32::from(e), x.leading_zeros());
        }
    }
}
