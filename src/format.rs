//!
//! Fixed-point format descriptors
//!
//! Host-side helpers to move between real numbers and the raw 16-bit words
//! the approximations consume and produce.
//!

use crate::error::*;

/// A 16-bit fixed-point format: `raw / 2^frac`, two's complement if signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    frac: u8,
    signed: bool,
}

/// Unsigned integers, the input of `recip`, `rsqrt` and `udivhi`.
pub const UQ0: Format = Format::unsigned(0);
/// Unsigned fractions in `[0, 1)`.
pub const UQ16: Format = Format::unsigned(16);
/// Signed `[-16, 16)`, the `log2` output and `exp2` input.
pub const Q11: Format = Format::signed(11);
/// Signed `[-1, 1)`, angles in units of pi and sine/cosine values.
pub const Q15: Format = Format::signed(15);

impl Format {
    /// Panics if `frac` is wider than the 16-bit word.
    pub const fn signed(frac: u8) -> Self {
        assert!(frac <= 16, "at most 16 fractional bits");
        Format { frac, signed: true }
    }

    /// Panics if `frac` is wider than the 16-bit word.
    pub const fn unsigned(frac: u8) -> Self {
        assert!(frac <= 16, "at most 16 fractional bits");
        Format {
            frac,
            signed: false,
        }
    }

    pub fn frac(&self) -> u8 {
        self.frac
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    fn scale(&self) -> f64 {
        2f64.powi(i32::from(self.frac))
    }

    fn raw_range(&self) -> (i32, i32) {
        if self.signed {
            (i32::from(i16::MIN), i32::from(i16::MAX))
        } else {
            (0, i32::from(u16::MAX))
        }
    }

    /// Smallest representable value.
    pub fn min(&self) -> f64 {
        f64::from(self.raw_range().0) / self.scale()
    }

    /// Largest representable value.
    pub fn max(&self) -> f64 {
        f64::from(self.raw_range().1) / self.scale()
    }

    pub fn to_f64(&self, raw: u16) -> f64 {
        let v = if self.signed {
            f64::from(raw as i16)
        } else {
            f64::from(raw)
        };

        v / self.scale()
    }

    /// Rounds `v` to the nearest representable value.
    pub fn from_f64(&self, v: f64) -> Result<u16> {
        if !v.is_finite() {
            debug!("cannot convert {} to {:?}", v, self);
            return Err(Error::NotFinite(v));
        }

        let raw = (v * self.scale()).round();
        let (lo, hi) = self.raw_range();
        if raw < f64::from(lo) || raw > f64::from(hi) {
            debug!("{} does not fit {:?}", v, self);
            return Err(Error::OutOfRange {
                value: v,
                min: self.min(),
                max: self.max(),
            });
        }

        Ok(raw as i32 as u16)
    }

    /// Signed error of `raw` against `exact`, in units of the last place.
    pub fn ulp_error(&self, raw: u16, exact: f64) -> f64 {
        (self.to_f64(raw) - exact) * self.scale()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::exp::*;
    use crate::recip::*;
    use crate::trig::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ranges() {
        assert_eq!((UQ0.min(), UQ0.max()), (0.0, 65535.0));
        assert_eq!((Q11.min(), Q11.max()), (-16.0, 32767.0 / 2048.0));
        assert_eq!(Q15.min(), -1.0);
        assert_eq!(UQ16.max(), 65535.0 / 65536.0);
    }

    #[test]
    fn widest() {
        let f = Format::signed(16);

        assert_eq!((f.frac(), f.is_signed()), (16, true));
        assert_eq!(f.to_f64(0xc000), -0.25);
        assert_eq!(Format::unsigned(16), UQ16);
    }

    #[test]
    #[should_panic(expected = "at most 16 fractional bits")]
    fn too_wide() {
        Format::signed(32);
    }

    #[test]
    fn conversions() {
        assert_eq!(Q15.from_f64(0.5), Ok(0x4000));
        assert_eq!(Q15.from_f64(-1.0), Ok(0x8000));
        assert_eq!(Q11.from_f64(-0.5), Ok(0xfc00));
        assert_eq!(UQ16.from_f64(0.25), Ok(0x4000));
        assert_eq!(UQ0.from_f64(1234.4), Ok(1234));
        assert_eq!(Q15.to_f64(0xc000), -0.5);
        assert_eq!(UQ16.to_f64(0xc000), 0.75);
    }

    #[test]
    fn rejects() {
        assert_eq!(Q15.from_f64(1.0), Err(Error::OutOfRange {
            value: 1.0,
            min: -1.0,
            max: Q15.max(),
        }));
        assert!(UQ16.from_f64(-0.1).is_err());
        assert!(Q11.from_f64(-16.001).is_err());

        match UQ0.from_f64(std::f64::NAN) {
            Err(Error::NotFinite(v)) => assert!(v.is_nan()),
            other => panic!("unexpected {:?}", other),
        }
        assert!(Q15.from_f64(std::f64::INFINITY).is_err());
    }

    #[test]
    fn messages() {
        let err = Error::OutOfRange {
            value: 1.0,
            min: -1.0,
            max: 0.5,
        };

        assert_eq!(err.to_string(), "1 is outside [-1, 0.5]");
        assert_eq!(
            Error::NotFinite(std::f64::INFINITY).to_string(),
            "inf is not a finite number"
        );

        let err: Box<dyn std::error::Error> = Box::new(UQ16.from_f64(2.0).unwrap_err());
        assert_eq!(err.to_string(), format!("2 is outside [0, {}]", UQ16.max()));
    }

    #[test]
    fn through_the_approximations() {
        let x = UQ0.from_f64(3.0).unwrap();
        assert!(UQ16.ulp_error(recip(x), 1.0 / 3.0).abs() <= 1.0);

        let x = UQ16.from_f64(0.5).unwrap();
        assert_eq!(Q11.to_f64(log2(x) as u16), -1.0);

        let x = Q11.from_f64(-2.0).unwrap() as i16;
        assert_eq!(UQ16.to_f64(exp2(x)), 0.25);

        let x = Q15.from_f64(1.0 / 6.0).unwrap() as i16;
        let (s, _) = sincospi(x);
        assert!(Q15.ulp_error(s as u16, 0.5).abs() < 2.3 + 0.5);

        let r = atan2pi(0, -1);
        assert_eq!(Q15.to_f64(r as u16), -1.0);
    }
}
