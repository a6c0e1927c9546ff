//! Macros for implementing primitive-side operators.

/// Implements, for each primitive representation `P`:
///
/// - `P * Scalar<G, P>` (scaling with the number on the left), and
/// - `From<Scalar<G, P>> for P` (explicit extraction, e.g. `f64::from(angle)`).
///
/// These cannot be blanket impls over `T: Numeric` because of the orphan rules, so they are spelled out per type.
macro_rules! impl_primitive_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<G: $crate::Tag> ::core::ops::Mul<$crate::Scalar<G, $t>> for $t {
                type Output = $crate::Scalar<G, $t>;

                #[inline]
                fn mul(self, rhs: $crate::Scalar<G, $t>) -> Self::Output {
                    rhs * self
                }
            }

            impl<G: $crate::Tag> ::core::convert::From<$crate::Scalar<G, $t>> for $t {
                #[inline]
                fn from(scalar: $crate::Scalar<G, $t>) -> Self {
                    scalar.value()
                }
            }
        )*
    };
}
