//! Scalar type and its implementations.

use crate::error::CastError;
use crate::numeric::{CastFrom, Numeric};
use crate::tag::Tag;
use core::any::type_name;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A raw numeric value tagged with a compile-time unit kind.
///
/// `Scalar<G, T>` wraps one value of representation `T` (default `f64`) together with phantom type information about
/// its tag `G`. Two scalars with different tags are different types: they cannot be added, compared or converted
/// into each other, even when `T` is the same.
///
/// Crossing the boundary between tagged and untagged values is always explicit: [`Scalar::new`] wraps,
/// [`Scalar::value`] (or `T::from(scalar)`) unwraps. Changing only the precision keeps the tag:
/// [`Scalar::cast`] / [`Scalar::from_repr`], or the checked [`Scalar::try_cast`].
///
/// # Examples
///
/// ```rust
/// use tagscalar_core::{Scalar, Tag};
///
/// pub enum Deg {}
/// impl Tag for Deg {
///     const NAME: &'static str = "deg";
/// }
///
/// let a = Scalar::<Deg>::new(90.0);
/// let b = Scalar::<Deg>::new(45.0);
///
/// assert_eq!(a + b, Scalar::new(135.0));
/// assert_eq!(2.0 * b, a);
/// assert_eq!(a / b, 2.0); // same-tag ratio is a plain number
/// ```
///
/// # Comparison
///
/// `==` goes through [`Numeric::equals`], so floating-point scalars compare equal within a small tolerance.
/// `<` and `>` compare the raw values directly. `<=` and `>=` are evaluated as `!(a > b)` and `!(a < b)`: for
/// NaN-bearing representations this makes `NaN <= x` and `NaN >= x` both `true`, unlike `f64` itself.
#[repr(transparent)]
pub struct Scalar<G: Tag, T: Numeric = f64>(T, PhantomData<fn() -> G>);

impl<G: Tag, T: Numeric> Scalar<G, T> {
    /// Wraps a raw value.
    ///
    /// ```rust
    /// # use tagscalar_core::{Scalar, Tag};
    /// # enum Px {}
    /// # impl Tag for Px { const NAME: &'static str = "px"; }
    /// let width = Scalar::<Px, u32>::new(640);
    /// assert_eq!(width.value(), 640);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// Builds a scalar with the same tag from another representation, with `as` cast semantics.
    ///
    /// ```rust
    /// # use tagscalar_core::{Scalar, Tag};
    /// # enum Deg {}
    /// # impl Tag for Deg { const NAME: &'static str = "deg"; }
    /// let precise = Scalar::<Deg, f64>::new(30.0);
    /// let compact = Scalar::<Deg, f32>::from_repr(precise);
    /// assert_eq!(compact.value(), 30.0_f32);
    /// ```
    #[inline]
    pub fn from_repr<U: Numeric>(other: Scalar<G, U>) -> Self
    where
        T: CastFrom<U>,
    {
        Self::new(T::cast_from(other.value()))
    }

    /// Converts to another representation of the same tag, with `as` cast semantics.
    #[inline]
    pub fn cast<U>(self) -> Scalar<G, U>
    where
        U: Numeric + CastFrom<T>,
    {
        Scalar::from_repr(self)
    }

    /// Builds a scalar with the same tag from another representation, failing unless the conversion is exact.
    pub fn try_from_repr<U: Numeric>(other: Scalar<G, U>) -> Result<Self, CastError>
    where
        T: CastFrom<U>,
    {
        T::checked_cast_from(other.value())
            .map(Self::new)
            .ok_or_else(|| CastError::new(G::NAME, type_name::<U>(), type_name::<T>()))
    }

    /// Converts to another representation of the same tag, failing unless the conversion is exact.
    ///
    /// ```rust
    /// # use tagscalar_core::{Scalar, Tag};
    /// # enum Px {}
    /// # impl Tag for Px { const NAME: &'static str = "px"; }
    /// let small = Scalar::<Px, i32>::new(200);
    /// assert_eq!(small.try_cast::<u8>().map(|s| s.value()), Ok(200));
    ///
    /// let large = Scalar::<Px, i32>::new(300);
    /// assert!(large.try_cast::<u8>().is_err());
    /// ```
    #[inline]
    pub fn try_cast<U>(self) -> Result<Scalar<G, U>, CastError>
    where
        U: Numeric + CastFrom<T>,
    {
        Scalar::try_from_repr(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-type plumbing (no bounds on the tag beyond `Tag`)
// ─────────────────────────────────────────────────────────────────────────────

impl<G: Tag, T: Numeric> Clone for Scalar<G, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Tag, T: Numeric> Copy for Scalar<G, T> {}

impl<G: Tag, T: Numeric> Default for Scalar<G, T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<G: Tag, T: Numeric> fmt::Debug for Scalar<G, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(G::NAME).field(&self.0).finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<G: Tag, T: Numeric> PartialEq for Scalar<G, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        T::equals(self.0, other.0)
    }
}

impl<G: Tag, T: Numeric> PartialOrd for Scalar<G, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    // Negated strict comparisons, not `partial_cmp`: differs from `T` only for unordered values.
    #[inline]
    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<G: Tag, T: Numeric + Neg<Output = T>> Neg for Scalar<G, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<G: Tag, T: Numeric> Add for Scalar<G, T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<G: Tag, T: Numeric> AddAssign for Scalar<G, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<G: Tag, T: Numeric> Sub for Scalar<G, T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<G: Tag, T: Numeric> SubAssign for Scalar<G, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<G: Tag, T: Numeric> Mul<T> for Scalar<G, T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<G: Tag, T: Numeric> MulAssign<T> for Scalar<G, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs;
    }
}

impl<G: Tag, T: Numeric> Div<T> for Scalar<G, T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<G: Tag, T: Numeric> DivAssign<T> for Scalar<G, T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs;
    }
}

/// Ratio of two values of the same tag: the tag cancels out.
impl<G: Tag, T: Numeric> Div for Scalar<G, T> {
    type Output = T;
    #[inline]
    fn div(self, rhs: Self) -> T {
        self.0 / rhs.0
    }
}

impl_primitive_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<G: Tag, T: Numeric + Serialize> Serialize for Scalar<G, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, G: Tag, T: Numeric + Deserialize<'de>> Deserialize<'de> for Scalar<G, T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Scalar::new)
    }
}

/// Serde helper module for serializing scalars together with their tag name.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit kind visible in serialized data. Plain
/// `Scalar` fields serialize as the bare value.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use tagscalar_core::{Scalar, Tag};
///
/// pub enum Deg {}
/// impl Tag for Deg {
///     const NAME: &'static str = "deg";
/// }
///
/// #[derive(Serialize, Deserialize)]
/// struct Heading {
///     #[serde(with = "tagscalar_core::serde_with_tag")]
///     bearing: Scalar<Deg>, // {"value": 90.0, "tag": "deg"}
///
///     drift: Scalar<Deg>, // 1.5
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_tag {
    use super::*;
    use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Scalar<G, T>` as a struct with `value` and `tag` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "tag": "deg"}
    /// ```
    pub fn serialize<G, T, S>(scalar: &Scalar<G, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        G: Tag,
        T: Numeric + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Scalar", 2)?;
        state.serialize_field("value", &scalar.value())?;
        state.serialize_field("tag", G::NAME)?;
        state.end()
    }

    /// Deserializes a `Scalar<G, T>` from a struct with a `value` field and an optional `tag` field.
    ///
    /// A `tag` that does not match `G::NAME` is rejected.
    pub fn deserialize<'de, G, T, D>(deserializer: D) -> Result<Scalar<G, T>, D::Error>
    where
        G: Tag,
        T: Numeric + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Tag,
        }

        // Checks the tag name in place, so no owned string is needed.
        struct ExpectTag<G>(PhantomData<fn() -> G>);

        impl<'de, G: Tag> DeserializeSeed<'de> for ExpectTag<G> {
            type Value = ();

            fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(self)
            }
        }

        impl<'de, G: Tag> Visitor<'de> for ExpectTag<G> {
            type Value = ();

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "the tag name `{}`", G::NAME)
            }

            fn visit_str<E>(self, v: &str) -> Result<(), E>
            where
                E: de::Error,
            {
                if v == G::NAME {
                    Ok(())
                } else {
                    Err(E::custom(format_args!(
                        "tag mismatch: expected '{}', found '{}'",
                        G::NAME,
                        v
                    )))
                }
            }
        }

        struct ScalarVisitor<G, T>(PhantomData<fn() -> (G, T)>);

        impl<'de, G, T> Visitor<'de> for ScalarVisitor<G, T>
        where
            G: Tag,
            T: Numeric + Deserialize<'de>,
        {
            type Value = Scalar<G, T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Scalar with value and tag fields")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Scalar<G, T>, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let value: T = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                // The tag element is optional, as in the map form.
                seq.next_element_seed(ExpectTag::<G>(PhantomData))?;
                Ok(Scalar::new(value))
            }

            fn visit_map<V>(self, mut map: V) -> Result<Scalar<G, T>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut seen_tag = false;

                while let Some(key) = map.next_key::<Field>()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Tag => {
                            if seen_tag {
                                return Err(de::Error::duplicate_field("tag"));
                            }
                            map.next_value_seed(ExpectTag::<G>(PhantomData))?;
                            seen_tag = true;
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                Ok(Scalar::new(value))
            }
        }

        deserializer.deserialize_struct("Scalar", &["value", "tag"], ScalarVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test tags
    // ─────────────────────────────────────────────────────────────────────────────

    pub enum Deg {}
    impl Tag for Deg {
        const NAME: &'static str = "deg";
    }

    pub enum Px {}
    impl Tag for Px {
        const NAME: &'static str = "px";
    }

    // Not `Sync`: the scalar must stay `Send + Sync` regardless.
    #[allow(dead_code)]
    pub struct CellTag(core::cell::Cell<u8>);
    impl Tag for CellTag {
        const NAME: &'static str = "cell";
    }

    type Degrees = Scalar<Deg, f64>;
    type Pixels = Scalar<Px, i32>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and extraction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_and_value() {
        assert_eq!(Degrees::new(42.5).value(), 42.5);
        assert_eq!(Pixels::new(-3).value(), -3);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Degrees::default().value(), 0.0);
        assert_eq!(Pixels::default().value(), 0);
        assert_eq!(Scalar::<Px, u8>::default().value(), 0);
        assert_eq!(Scalar::<Deg, f32>::default().value(), 0.0);
    }

    #[test]
    fn default_representation_is_f64() {
        let d: Scalar<Deg> = Scalar::new(1.5);
        let raw: f64 = d.value();
        assert_eq!(raw, 1.5);
    }

    #[test]
    fn explicit_extraction_through_from() {
        assert_eq!(f64::from(Degrees::new(12.0)), 12.0);
        assert_eq!(i32::from(Pixels::new(7)), 7);
        let raw: u16 = Scalar::<Px, u16>::new(9).into();
        assert_eq!(raw, 9);
    }

    #[test]
    fn const_construction() {
        const RIGHT: Degrees = Degrees::new(90.0);
        assert_eq!(RIGHT.value(), 90.0);
    }

    #[test]
    fn zero_cost_layout() {
        assert_eq!(core::mem::size_of::<Degrees>(), core::mem::size_of::<f64>());
        assert_eq!(core::mem::size_of::<Scalar<Px, u8>>(), 1);
        assert_eq!(core::mem::align_of::<Pixels>(), core::mem::align_of::<i32>());
    }

    #[test]
    fn send_sync_independent_of_tag() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Scalar<CellTag, f64>>();
        assert_send_sync::<Degrees>();
    }

    #[test]
    fn debug_uses_tag_name() {
        assert_eq!(format!("{:?}", Degrees::new(90.0)), "deg(90.0)");
        assert_eq!(format!("{:?}", Pixels::new(-4)), "px(-4)");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Representation conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_repr_and_cast() {
        let narrow = Scalar::<Deg, f32>::from_repr(Degrees::new(0.25));
        assert_eq!(narrow.value(), 0.25_f32);

        let wide: Degrees = Scalar::<Deg, f32>::new(1.5).cast();
        assert_eq!(wide.value(), 1.5);

        let truncated = Degrees::new(2.9).cast::<i32>();
        assert_eq!(truncated.value(), 2);
    }

    #[test]
    fn cast_keeps_tolerant_equality() {
        let narrow = Degrees::new(0.1).cast::<f32>();
        assert_abs_diff_eq!(f64::from(narrow.value()), 0.1, epsilon = 1e-7);
        assert_eq!(narrow, Scalar::<Deg, f32>::new(0.1));
    }

    #[test]
    fn try_cast_accepts_exact_values() {
        assert_eq!(Degrees::new(0.5).try_cast::<f32>(), Ok(Scalar::new(0.5_f32)));
        assert_eq!(Scalar::<Px, i64>::new(42).try_cast::<u8>(), Ok(Scalar::new(42_u8)));
        assert_eq!(Pixels::new(-8).try_cast::<f32>(), Ok(Scalar::new(-8.0_f32)));
    }

    #[test]
    fn try_cast_rejects_lossy_values() {
        let err = Pixels::new(300).try_cast::<u8>().unwrap_err();
        assert_eq!(err.tag(), "px");
        assert_eq!(err.from_type(), "i32");
        assert_eq!(err.to_type(), "u8");

        assert!(Pixels::new(-1).try_cast::<u32>().is_err());
        assert!(Degrees::new(1.5).try_cast::<i32>().is_err());
        assert!(Degrees::new(f64::NAN).try_cast::<i32>().is_err());
        assert!(Degrees::new(0.1).try_cast::<f32>().is_err());
    }

    #[test]
    fn try_cast_keeps_nan_between_floats() {
        let nan = Degrees::new(f64::NAN).try_cast::<f32>().unwrap();
        assert!(nan.value().is_nan());
    }

    #[test]
    fn try_from_repr_matches_try_cast() {
        let source = Scalar::<Px, u64>::new(65_535);
        assert_eq!(Scalar::<Px, u16>::try_from_repr(source), source.try_cast::<u16>());
        assert!(Scalar::<Px, i16>::try_from_repr(source).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn float_equality_is_tolerant() {
        assert_eq!(Degrees::new(1.0), Degrees::new(1.0 + 1e-13));
        assert_ne!(Degrees::new(1.0), Degrees::new(1.1));
        assert_eq!(Scalar::<Deg, f32>::new(1.0), Scalar::new(1.0 + 1e-7));
    }

    #[test]
    fn integer_equality_is_exact() {
        assert_eq!(Pixels::new(3), Pixels::new(3));
        assert_ne!(Pixels::new(3), Pixels::new(4));
    }

    #[test]
    fn nan_is_never_equal() {
        let nan = Degrees::new(f64::NAN);
        assert!(nan != nan);
        assert!(!(nan == nan));
    }

    #[test]
    fn strict_ordering() {
        assert!(!(Pixels::new(5) < Pixels::new(3)));
        assert!(Pixels::new(3) < Pixels::new(5));
        assert!(Pixels::new(5) > Pixels::new(3));
        assert!(!(Pixels::new(3) > Pixels::new(3)));
    }

    #[test]
    fn non_strict_ordering() {
        assert!(Pixels::new(3) <= Pixels::new(3));
        assert!(Pixels::new(3) >= Pixels::new(3));
        assert!(Pixels::new(2) <= Pixels::new(3));
        assert!(!(Pixels::new(4) <= Pixels::new(3)));
        assert!(!(Degrees::new(1.0) >= Degrees::new(2.0)));
    }

    #[test]
    fn ordering_ignores_tolerance() {
        let a = Degrees::new(1.0);
        let b = Degrees::new(1.0 + 1e-13);
        assert!(a == b);
        assert!(a < b);
    }

    #[test]
    fn non_strict_ordering_with_nan_is_negated_strict() {
        let nan = Degrees::new(f64::NAN);
        let one = Degrees::new(1.0);
        assert!(nan <= one);
        assert!(nan >= one);
        assert!(one <= nan);
        assert!(!(nan < one));
        assert!(!(nan > one));
        assert_eq!(nan.partial_cmp(&one), None);
    }

    #[test]
    fn partial_cmp_delegates() {
        assert_eq!(Pixels::new(1).partial_cmp(&Pixels::new(2)), Some(Ordering::Less));
        assert_eq!(Pixels::new(2).partial_cmp(&Pixels::new(2)), Some(Ordering::Equal));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_neg() {
        assert_eq!((-Degrees::new(5.0)).value(), -5.0);
        assert_eq!((-(-Pixels::new(5))).value(), 5);
    }

    #[test]
    fn operator_add_sub() {
        assert_eq!(Degrees::new(90.0) + Degrees::new(90.0), Degrees::new(180.0));
        assert_eq!((Pixels::new(10) - Pixels::new(3)).value(), 7);
    }

    #[test]
    fn operator_add_sub_assign() {
        let mut d = Degrees::new(5.0);
        d += Degrees::new(3.0);
        assert_eq!(d.value(), 8.0);
        d -= Degrees::new(10.0);
        assert_eq!(d.value(), -2.0);
    }

    #[test]
    fn operator_mul_div_by_number() {
        let d = Degrees::new(15.0);
        assert_eq!((d * 3.0).value(), 45.0);
        assert_eq!((3.0 * d).value(), 45.0);
        assert_eq!((d / 3.0).value(), 5.0);
        assert_eq!((4 * Pixels::new(2)).value(), 8);
        assert_eq!((Pixels::new(9) / 2).value(), 4);
    }

    #[test]
    fn operator_mul_div_assign() {
        let mut p = Pixels::new(6);
        p *= 2;
        assert_eq!(p.value(), 12);
        p /= 4;
        assert_eq!(p.value(), 3);

        let mut d = Scalar::<Deg, f32>::new(1.0);
        d *= 0.5;
        assert_eq!(d.value(), 0.5);
    }

    #[test]
    fn operator_ratio_is_raw() {
        let ratio: f64 = Degrees::new(90.0) / Degrees::new(45.0);
        assert_eq!(ratio, 2.0);
        let ratio: i32 = Pixels::new(7) / Pixels::new(2);
        assert_eq!(ratio, 3);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Representation-inherited edge cases
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn float_division_by_zero() {
        assert!((Degrees::new(1.0) / 0.0).value().is_infinite());
        assert!((Degrees::new(0.0) / Degrees::new(0.0)).is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let zero = core::hint::black_box(0);
        let _ = Pixels::new(1) / zero;
    }

    #[test]
    fn unsigned_representation() {
        let a = Scalar::<Px, u32>::new(10);
        let b = Scalar::<Px, u32>::new(4);
        assert_eq!((a - b).value(), 6);
        assert_eq!(a / b, 2);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_wrap_unwrap_roundtrip(v in any::<i64>()) {
            prop_assert_eq!(Scalar::<Px, i64>::new(v).value(), v);
        }

        #[test]
        fn prop_add_then_sub_is_identity(a in -1e3..1e3f64, b in -1e3..1e3f64) {
            let (qa, qb) = (Degrees::new(a), Degrees::new(b));
            prop_assert_eq!(qa + qb - qb, qa);
        }

        #[test]
        fn prop_ratio_then_scale_is_identity(a in -1e3..1e3f64, b in 1e-3..1e3f64) {
            let (qa, qb) = (Degrees::new(a), Degrees::new(b));
            prop_assert_eq!(qb * (qa / qb), qa);
        }

        #[test]
        fn prop_double_negation(v in any::<i32>().prop_filter("negatable", |v| *v != i32::MIN)) {
            let p = Pixels::new(v);
            prop_assert_eq!(-(-p), p);
        }

        #[test]
        fn prop_scalar_multiplication_commutes(a in -1e6..1e6f64, k in -1e6..1e6f64) {
            let q = Degrees::new(a);
            prop_assert_eq!(q * k, k * q);
        }

        #[test]
        fn prop_le_is_not_gt(a in any::<i16>(), b in any::<i16>()) {
            let (qa, qb) = (Scalar::<Px, i16>::new(a), Scalar::<Px, i16>::new(b));
            prop_assert_eq!(qa <= qb, a <= b);
            prop_assert_eq!(qa >= qb, a >= b);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_scalar() {
            let json = serde_json::to_string(&Degrees::new(42.5)).unwrap();
            assert_eq!(json, "42.5");
            let json = serde_json::to_string(&Pixels::new(-3)).unwrap();
            assert_eq!(json, "-3");
        }

        #[test]
        fn deserialize_scalar() {
            let d: Degrees = serde_json::from_str("42.5").unwrap();
            assert_eq!(d.value(), 42.5);
            let p: Scalar<Px, u8> = serde_json::from_str("200").unwrap();
            assert_eq!(p.value(), 200);
            assert!(serde_json::from_str::<Scalar<Px, u8>>("300").is_err());
        }

        // ─────────────────────────────────────────────────────────────────────────
        // serde_with_tag module tests
        // ─────────────────────────────────────────────────────────────────────────

        #[derive(Serialize, Deserialize, Debug)]
        struct Heading {
            #[serde(with = "crate::serde_with_tag")]
            bearing: Degrees,
        }

        #[test]
        fn serde_with_tag_serialize() {
            let data = Heading {
                bearing: Degrees::new(42.5),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert_eq!(json, r#"{"bearing":{"value":42.5,"tag":"deg"}}"#);
        }

        #[test]
        fn serde_with_tag_roundtrip() {
            let original = Heading {
                bearing: Degrees::new(123.456),
            };
            let json = serde_json::to_string(&original).unwrap();
            let restored: Heading = serde_json::from_str(&json).unwrap();
            assert_eq!(restored.bearing, original.bearing);
        }

        #[test]
        fn serde_with_tag_deserialize_without_tag() {
            let json = r#"{"bearing":{"value":42.5}}"#;
            let data: Heading = serde_json::from_str(json).unwrap();
            assert_eq!(data.bearing.value(), 42.5);
        }

        #[test]
        fn serde_with_tag_deserialize_wrong_tag() {
            let json = r#"{"bearing":{"value":42.5,"tag":"rad"}}"#;
            let err = serde_json::from_str::<Heading>(json).unwrap_err().to_string();
            assert!(err.contains("tag mismatch"));
        }

        #[test]
        fn serde_with_tag_deserialize_missing_value() {
            let json = r#"{"bearing":{"tag":"deg"}}"#;
            let err = serde_json::from_str::<Heading>(json).unwrap_err().to_string();
            assert!(err.contains("missing field `value`"));
        }

        #[test]
        fn serde_with_tag_deserialize_duplicate_value() {
            let json = r#"{"bearing":{"value":1.0,"value":2.0}}"#;
            let err = serde_json::from_str::<Heading>(json).unwrap_err().to_string();
            assert!(err.contains("duplicate field `value`"));
        }

        #[test]
        fn serde_with_tag_deserialize_duplicate_tag() {
            let json = r#"{"bearing":{"value":1.0,"tag":"deg","tag":"deg"}}"#;
            let err = serde_json::from_str::<Heading>(json).unwrap_err().to_string();
            assert!(err.contains("duplicate field `tag`"));
        }

        #[test]
        fn serde_with_tag_deserialize_sequence_form() {
            let data: Heading = serde_json::from_str(r#"{"bearing":[42.5,"deg"]}"#).unwrap();
            assert_eq!(data.bearing.value(), 42.5);

            let data: Heading = serde_json::from_str(r#"{"bearing":[7.0]}"#).unwrap();
            assert_eq!(data.bearing.value(), 7.0);

            let err = serde_json::from_str::<Heading>(r#"{"bearing":[42.5,"rad"]}"#)
                .unwrap_err()
                .to_string();
            assert!(err.contains("tag mismatch"));
        }

        #[test]
        fn serde_with_tag_deserialize_invalid_format() {
            assert!(serde_json::from_str::<Heading>(r#"{"bearing":"not_an_object"}"#).is_err());
            assert!(serde_json::from_str::<Heading>(r#"{"bearing":[]}"#).is_err());
            assert!(serde_json::from_str::<Heading>(r#"{"bearing":{"value":1.0,"tag":7}}"#).is_err());
        }
    }
}
