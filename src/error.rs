/// Errors from converting real numbers into a fixed-point format.
///
/// The approximation routines never fail, they saturate.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{0} is not a finite number")]
    NotFinite(f64),
    #[error("{value} is outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

pub type Result<T> = core::result::Result<T, Error>;
