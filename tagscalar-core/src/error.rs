//! Error types.

use thiserror::Error;

/// Returned by [`Scalar::try_cast`](crate::Scalar::try_cast) when the value cannot be represented exactly in the
/// target representation.
///
/// ```rust
/// use tagscalar_core::{Scalar, Tag};
///
/// enum Px {}
/// impl Tag for Px {
///     const NAME: &'static str = "px";
/// }
///
/// let err = Scalar::<Px, i32>::new(300).try_cast::<u8>().unwrap_err();
/// assert_eq!(err.tag(), "px");
/// assert_eq!(err.from_type(), "i32");
/// assert_eq!(err.to_type(), "u8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{tag}` value is not exactly representable as `{to_type}` (from `{from_type}`)")]
pub struct CastError {
    tag: &'static str,
    from_type: &'static str,
    to_type: &'static str,
}

impl CastError {
    pub(crate) const fn new(tag: &'static str, from_type: &'static str, to_type: &'static str) -> Self {
        Self {
            tag,
            from_type,
            to_type,
        }
    }

    /// Name of the tag of the value that failed to convert.
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Name of the source representation type.
    pub const fn from_type(&self) -> &'static str {
        self.from_type
    }

    /// Name of the requested representation type.
    pub const fn to_type(&self) -> &'static str {
        self.to_type
    }
}
