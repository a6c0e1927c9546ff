//! Zero-cost scalar values tagged with a compile-time unit kind.
//!
//! `tagscalar` is the user-facing crate in this workspace. It re-exports the full API from `tagscalar-core` plus the
//! `#[derive(Tag)]` macro from `tagscalar-derive`.
//!
//! The core idea is: a value is a `Scalar<G, T>`, where `G` is a zero-sized type naming what the number *means*
//! (degrees, radians, pixels, …) and `T` is how it is stored. Tags exist only at compile time, so a `Scalar<G, f64>`
//! costs exactly one `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing values of different kinds that happen to share a numeric type (you can't add degrees to
//!   radians, or pass a bare `f64` where degrees are expected).
//! - Makes every crossing between tagged and untagged values explicit (`Scalar::new`, `Scalar::value`).
//! - Keeps equality usable for floating point through a per-representation tolerance.
//!
//! # What this crate does not try to solve
//!
//! - Conversion between tags: there is no built-in degrees-to-radians. Write it where the tags are defined.
//! - Dimensional analysis (`m/s`, `m^2`, …).
//! - String parsing and formatting, or range validation.
//!
//! # Quick start
//!
//! ```rust
//! use tagscalar::{Scalar, Tag};
//!
//! #[derive(Tag)]
//! #[tag(name = "deg")]
//! pub enum Deg {}
//!
//! pub type Degrees = Scalar<Deg, f64>;
//!
//! let a = Degrees::new(90.0);
//! let b = Degrees::new(90.0);
//! assert_eq!(a + b, Degrees::new(180.0));
//! assert_eq!(a / Degrees::new(45.0), 2.0);
//! assert_eq!(Degrees::new(1.0), Degrees::new(1.0 + 1e-13));
//! assert_ne!(Degrees::new(1.0), Degrees::new(1.1));
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Values with different tags cannot be combined:
//!
//! ```compile_fail
//! use tagscalar::{Scalar, Tag};
//!
//! #[derive(Tag)]
//! enum Deg {}
//! #[derive(Tag)]
//! enum Rad {}
//!
//! let d = Scalar::<Deg>::new(1.0);
//! let r = Scalar::<Rad>::new(1.0);
//! let _ = d + r; // cannot add different tags
//! ```
//!
//! ...nor compared:
//!
//! ```compile_fail
//! use tagscalar::{Scalar, Tag};
//!
//! #[derive(Tag)]
//! enum Deg {}
//! #[derive(Tag)]
//! enum Rad {}
//!
//! let _ = Scalar::<Deg>::new(1.0) == Scalar::<Rad>::new(1.0);
//! ```
//!
//! ...nor converted into each other, even through a representation change:
//!
//! ```compile_fail
//! use tagscalar::{Scalar, Tag};
//!
//! #[derive(Tag)]
//! enum Deg {}
//! #[derive(Tag)]
//! enum Rad {}
//!
//! let r: Scalar<Rad, f32> = Scalar::<Deg, f64>::new(1.0).cast();
//! ```
//!
//! A bare number is not a tagged value:
//!
//! ```compile_fail
//! use tagscalar::{Scalar, Tag};
//!
//! #[derive(Tag)]
//! enum Deg {}
//!
//! fn turn(by: Scalar<Deg>) {}
//! turn(90.0);
//! ```
//!
//! ...and a tagged value is not a bare number:
//!
//! ```compile_fail
//! use tagscalar::{Scalar, Tag};
//!
//! #[derive(Tag)]
//! enum Deg {}
//!
//! let raw: f64 = Scalar::<Deg>::new(90.0);
//! ```
//!
//! Two tagged values do not multiply; only a plain number scales a tagged value:
//!
//! ```compile_fail
//! use tagscalar::{Scalar, Tag};
//!
//! #[derive(Tag)]
//! enum Deg {}
//!
//! let _ = Scalar::<Deg>::new(2.0) * Scalar::<Deg>::new(3.0);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `tagscalar-core`.
//! - `serde`: enables `serde` support for `Scalar<G, T>` and the `serde_with_tag` helper module.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! tagscalar = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Arithmetic follows the representation (integer division by zero panics, floats propagate NaN and infinities). The
//! only error type is [`CastError`], returned by [`Scalar::try_cast`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use tagscalar_core::*;

/// Derive macro implementing [`Tag`](trait@Tag) for a marker type.
///
/// Accepts an optional `#[tag(name = "...")]` attribute; the name defaults to the type's identifier.
pub use tagscalar_derive::Tag;
