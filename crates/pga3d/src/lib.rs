#![cfg_attr(not(feature = "std"), no_std)]

//! pga3d is a small kernel for doing geometry in 3D projective geometric algebra.
//!
//! It provides [points](re3::Point), [lines](re3::Line) and [planes](re3::Plane)
//! along with the incidence operations that relate them:
//! [join](ops::Join), [meet](ops::Meet) and [dual](ops::Dual).
//! Rigid transformations (rotations, translations and screw motions)
//! are expressed as [motors](motor::Motor).
//!
//! pga3d uses [homogeneous coordinates](https://en.wikipedia.org/wiki/Homogeneous_coordinates) to express ideal/infinite points,
//! ideal/infinite lines, etc. and to provide for exception-free meet & join operations.
//! Joining coincident points or meeting parallel planes
//! is not an error: the result simply has zero weight.
//!
//! ```
//! use pga3d::re3::*;
//! use pga3d::ops::*;
//!
//! // The plane through three points
//! let f = Point::finite([1., 0., 0.]) ^ Point::finite([0., 1., 0.]) ^ Point::finite([0., 0., 1.]);
//!
//! // The line through a point, perpendicular to that plane
//! let p = Point::finite([1., 1., 1.]);
//! let l = !f ^ p;
//! assert_eq!(l, p.superset_orthogonal_to(f));
//!
//! // Parallel planes meet at a line with no direction
//! assert_eq!((f & f * 2.).v, pga3d::vector::Vector3::zero());
//! ```
//!
//! pga3d is generic over the [scalar] datatype and is primarily used with `f32`.
//! Incidence operations require only [scalar addition and multiplication](scalar::Ring),
//! so they also work over integers, where every identity holds exactly.
//!
//! pga3d does not use SIMD intrinsics.
//! pga3d is dependency-free and `no_std`-compatible;
//! motors and norms need the `std` feature for `sin`, `cos` and `sqrt` on floats.
//!
//! Lower-level functions named after their [geometric algebra expressions](algebraic_ops) are available if needed.

pub mod algebraic_ops;
pub mod motor;
pub mod ops;
pub mod re3;
pub mod scalar;
pub mod vector;

mod test;
