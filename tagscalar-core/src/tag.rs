//! Tag marker trait.

/// Trait implemented by every **tag** type.
///
/// A tag names the semantic kind of a scalar (an angle in degrees, an angle in radians, a pixel count, …). It only
/// exists at the type level: [`Scalar<G, T>`](crate::Scalar) stores no trace of it at runtime.
///
/// Tags are usually modelled as uninhabited enums:
///
/// ```rust
/// use tagscalar_core::Tag;
///
/// pub enum Deg {}
/// impl Tag for Deg {
///     const NAME: &'static str = "deg";
/// }
/// ```
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `NAME` is informational (debug output, error messages, tagged serialization). Two tags with the same `NAME` are
///   still distinct types and never interoperate.
pub trait Tag: 'static {
    /// Human readable name of the unit kind, e.g. `"deg"`.
    const NAME: &'static str;
}
