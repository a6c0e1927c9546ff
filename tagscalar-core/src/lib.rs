//! Core type system for compile-time tagged scalar values.
//!
//! `tagscalar-core` provides a minimal, zero-cost model for keeping apart numbers that share a representation but not
//! a meaning:
//!
//! - A *tag* is a zero-sized marker type implementing [`Tag`] (degrees, radians, pixels, …).
//! - A value carrying a tag is a [`Scalar<G, T>`], backed by one raw value of type `T` (default `f64`).
//! - How raw values are compared and converted is delegated to the [`Numeric`] and [`CastFrom`] capabilities.
//!
//! Most users should depend on `tagscalar` (the facade crate, which also exports `#[derive(Tag)]`) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of unit kinds: a degree value can't be added to, compared with, or passed as a radian
//!   value, nor used where a bare number is expected.
//! - Zero runtime overhead: `Scalar<G, T>` is `#[repr(transparent)]` over `T`.
//! - Representation-aware equality: exact for integers, tolerant for floating point.
//!
//! # What this crate does not try to solve
//!
//! - Conversion between different tags (degrees to radians). Tags are opaque; conversions belong to the code that
//!   defines them.
//! - Dimensional analysis beyond a single tag.
//! - Parsing, pretty-printing or range validation.
//!
//! # Quick start
//!
//! ```rust
//! use tagscalar_core::{Scalar, Tag};
//!
//! pub enum Deg {}
//! impl Tag for Deg {
//!     const NAME: &'static str = "deg";
//! }
//!
//! let half_turn = Scalar::<Deg>::new(90.0) + Scalar::new(90.0);
//! assert_eq!(half_turn, Scalar::new(180.0));
//! assert_eq!(half_turn / Scalar::new(45.0), 4.0);
//!
//! // Same tag, different precision.
//! let compact: Scalar<Deg, f32> = half_turn.cast();
//! assert_eq!(compact.value(), 180.0_f32);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `tagscalar-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! tagscalar-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, the floating-point absolute value used by tolerant equality comes from `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Scalar<G, T>`; serialization is the raw value only, or value plus tag name
//!   through [`serde_with_tag`].
//!
//! # Panics and errors
//!
//! Arithmetic and comparisons never return `Result`. They behave exactly like the representation: integer division
//! by zero panics, overflow follows the build profile, NaN and infinities propagate per IEEE-754. The only fallible
//! operation is [`Scalar::try_cast`], which returns a [`CastError`].

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod error;
mod numeric;
mod scalar;
mod tag;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::CastError;
pub use numeric::{CastFrom, Numeric};
pub use scalar::Scalar;
pub use tag::Tag;

#[cfg(feature = "serde")]
pub use scalar::serde_with_tag;
