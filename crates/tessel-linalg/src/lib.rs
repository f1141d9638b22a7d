//! Fixed-size vectors, matrices and quaternions with element-wise comparisons.
//!
//! # Overview
//!
//! This library provides small linear algebra types whose shape is fixed at compile time:
//!
//! - [`Vector<T, N, Q>`][Vector], an `N`-element column vector.
//! - [`Matrix<T, R, C, Q>`][Matrix], a column-major matrix with `R` rows and `C` columns.
//! - [`Quat<T, Q>`][Quat], a quaternion.
//!
//! `T` is the element type, which can be any primitive integer or floating-point type. `Q` is the
//! storage [`Qualifier`], which controls the memory layout of the value. It defaults to
//! [`Packed`], which stores the elements without any padding. [`Aligned`] raises the alignment of
//! the value to 16 bytes instead.
//!
//! # Comparisons
//!
//! The [`relational`] module provides element-wise comparisons that work uniformly on scalars,
//! vectors, matrices and quaternions. Each returns a value of the same shape holding one `bool`
//! per element:
//!
//! ```
//! use tessel_linalg::*;
//!
//! let measured = vec3(0.1 + 0.2, 1.0, -4.0);
//! let expected = vec3(0.3, 1.0, 4.0);
//!
//! assert_eq!(equal(&measured, &expected), vec3(false, true, false));
//! assert_eq!(epsilon_equal(&measured, &expected, 1e-9), vec3(true, true, false));
//! assert!(any(&less_than(&measured, &expected)));
//! ```
//!
//! For assertions on whole values, the [`approx`] module provides the [`assert_approx_eq!`] and
//! [`assert_approx_ne!`] macros.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No SIMD-specific code paths. The storage qualifier only affects layout, never results.
//! - Put at least some effort into designing an ergonomic API that adheres to the
//!   [Rust API Guidelines].
//!
//! # Features
//!
//! - `bytemuck` (enabled by default): implements [`bytemuck::Zeroable`] for all containers and
//!   [`bytemuck::Pod`] for [`Packed`] containers.
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/

pub mod approx;
pub mod error;
mod matrix;
pub mod qualifier;
mod quat;
pub mod relational;
pub mod scalar;
mod vector;

pub use matrix::*;
pub use qualifier::{Aligned, Packed, Qualifier};
pub use quat::Quat;
pub use relational::*;
pub use scalar::{EpsilonEq, One, UlpsEq, Zero};
pub use vector::*;
