use core::fmt;

/// Returned by [`Opt::or_throw`](crate::Opt::or_throw) when there is no value
/// to hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AbsentValueError;

impl fmt::Display for AbsentValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value was absent")
    }
}

impl core::error::Error for AbsentValueError {}

#[cfg(feature = "std")]
impl From<AbsentValueError> for std::io::Error {
    fn from(err: AbsentValueError) -> Self {
        std::io::Error::new(std::io::ErrorKind::NotFound, err)
    }
}
