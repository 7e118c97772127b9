//! Rigid Euclidean 3D geometry
//!
//! This module contains the primitives for doing geometry in 3D Euclidean space:
//! [points](Point), [lines](Line) and [planes](Plane).
//! Rigid transformations of these live in the [motor](crate::motor) module.
//!
//! A fourth projective dimension is added, resulting in homogeneous coordinates.
//! Points at infinity, lines at infinity and the plane at infinity
//! are ordinary values of these types,
//! so joining coincident points or meeting parallel planes
//! produces a zero-weight result rather than a special case.
//!
//! ```text
//! +-------------+-----------------------+-----------------+
//! |    Type     |        Values         | Grade/Antigrade |
//! +-------------+-----------------------+-----------------+
//! |   Point     |    e1, e2, e3, e4     |       1/3       |
//! |   Line      | e41, e42, e43 (v)     |       2/2       |
//! |             | e23, e31, e12 (m)     |                 |
//! |   Plane     | e234, e314, e124,     |       3/1       |
//! |             | e321                  |                 |
//! +-------------+-----------------------+-----------------+
//! ```

use crate::algebraic_ops::*;
use crate::ops::*;
use crate::scalar::*;
use crate::vector::{impl_linear_ops, Vector3, Vector4};

/// e.g. a point in space or an ideal (infinite) point
///
/// ## As geometry
/// Geometrically, a `Point` can be either:
/// * A point in space, e.g. `Point {x, y, z, w: 1}`, which represents a location.
///   See [`Point::finite([x, y, z])`](Point::finite) or [`Point::origin()`](crate::ops::Origin).
/// * An ideal point, or point at infinity, e.g. `Point {x, y, z, w: 0}`, which represents a direction.
///   See [`Point::ideal([x, y, z])`](Point::ideal).
///
/// `w` is the homogeneous weight:
/// `Point {x: 2, y: 4, z: 6, w: 2}` is the same location as `Point {x: 1, y: 2, z: 3, w: 1}`.
///
/// ## Example Operations
/// * Two points [join](crate::ops::Join) into a [line](Line) containing both.
/// * Three points [join](crate::ops::Join) into a [plane](Plane).
/// * A point can be [projected](crate::ops::Projection) onto a line or a plane.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// e.g. a line in space or an ideal (infinite) line
///
/// A line is stored as its direction `v = (e41, e42, e43)`
/// and its moment `m = (e23, e31, e12)`.
/// For the line through unitized points p and q,
/// `v = q - p` and `m = p × q`.
///
/// Only lines whose direction and moment are orthogonal (`v · m = 0`)
/// represent actual lines in space. Lines built by joining two points always are;
/// lines built from raw coordinates need not be,
/// and then represent more general elements of the algebra.
///
/// ## Example Operations
/// * A line and a [point](Point) [join](crate::ops::Join) into a [plane](Plane)
/// * A line and a [plane](Plane) [meet](crate::ops::Meet) at a [point](Point).
/// * A unitized line is the axis of a [motor](crate::motor::Motor).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Line<T> {
    pub v: Vector3<T>,
    pub m: Vector3<T>,
}

/// e.g. a plane in space or an ideal (infinite) plane
///
/// `(x, y, z) = (e234, e314, e124)` is the plane's normal (scaled by its weight)
/// and `w = e321` is its signed offset from the origin:
/// the plane contains the points p where `x p.x + y p.y + z p.z + w p.w = 0`.
///
/// ## Example Operations
/// * Two planes [meet](crate::ops::Meet) at a [line](Line)
/// * A plane and a [line](Line) [meet](crate::ops::Meet) at a [point](Point).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Plane<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_linear_ops!(Point { x, y, z, w });
impl_linear_ops!(Line { v, m });
impl_linear_ops!(Plane { x, y, z, w });

impl<T: Ring> Point<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Point<T> {
        Point { x, y, z, w }
    }

    /// A unitized point at the given location
    pub fn finite([x, y, z]: [T; 3]) -> Point<T> {
        Point::new(x, y, z, T::one())
    }

    /// A point at infinity in the given direction
    pub fn ideal([x, y, z]: [T; 3]) -> Point<T> {
        Point::new(x, y, z, T::zero())
    }

    pub fn zero() -> Point<T> {
        Point::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// The spatial coordinates `(x, y, z)`, not divided by the weight
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn e1(self) -> T {
        self.x
    }
    pub fn e2(self) -> T {
        self.y
    }
    pub fn e3(self) -> T {
        self.z
    }
    pub fn e4(self) -> T {
        self.w
    }
}

impl<T: Ring> Line<T> {
    pub fn new(v: Vector3<T>, m: Vector3<T>) -> Line<T> {
        Line { v, m }
    }

    pub fn zero() -> Line<T> {
        Line::new(Vector3::zero(), Vector3::zero())
    }

    /// The point at infinity in the direction of travel of the line
    pub fn direction(self) -> Point<T> {
        self.v.extend(T::zero()).into()
    }

    pub fn e41(self) -> T {
        self.v.x
    }
    pub fn e42(self) -> T {
        self.v.y
    }
    pub fn e43(self) -> T {
        self.v.z
    }
    pub fn e23(self) -> T {
        self.m.x
    }
    pub fn e31(self) -> T {
        self.m.y
    }
    pub fn e12(self) -> T {
        self.m.z
    }
}

impl<T: Ring> Plane<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Plane<T> {
        Plane { x, y, z, w }
    }

    pub fn zero() -> Plane<T> {
        Plane::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// The normal direction `(x, y, z)`, scaled by the plane's weight
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn e234(self) -> T {
        self.x
    }
    pub fn e314(self) -> T {
        self.y
    }
    pub fn e124(self) -> T {
        self.z
    }
    pub fn e321(self) -> T {
        self.w
    }
}

impl<T> From<Vector4<T>> for Point<T> {
    fn from(Vector4 { x, y, z, w }: Vector4<T>) -> Point<T> {
        Point { x, y, z, w }
    }
}

impl<T> From<Vector4<T>> for Plane<T> {
    fn from(Vector4 { x, y, z, w }: Vector4<T>) -> Plane<T> {
        Plane { x, y, z, w }
    }
}

impl<T: Ring> Origin for Point<T> {
    fn origin() -> Point<T> {
        Point::finite([T::zero(), T::zero(), T::zero()])
    }
}

// Join

/// Line containing points p and q.
/// Zero if p and q are coincident.
impl<T: Ring> Wedge<Point<T>> for Point<T> {
    type Output = Line<T>;
    fn wedge(self, q: Point<T>) -> Line<T> {
        let p = self;
        Line {
            v: Vector3 {
                x: q.x * p.w - p.x * q.w,
                y: q.y * p.w - p.y * q.w,
                z: q.z * p.w - p.z * q.w,
            },
            m: Vector3 {
                x: p.y * q.z - p.z * q.y,
                y: p.z * q.x - p.x * q.z,
                z: p.x * q.y - p.y * q.x,
            },
        }
    }
}

/// Plane containing line l and point p.
/// The normal is zero if p lies on l.
impl<T: Ring> Wedge<Point<T>> for Line<T> {
    type Output = Plane<T>;
    fn wedge(self, p: Point<T>) -> Plane<T> {
        let Line { v, m } = self;
        Plane {
            x: v.y * p.z - v.z * p.y + m.x * p.w,
            y: v.z * p.x - v.x * p.z + m.y * p.w,
            z: v.x * p.y - v.y * p.x + m.z * p.w,
            w: -(m.x * p.x + m.y * p.y + m.z * p.z),
        }
    }
}

// A vector and a bivector commute under the wedge product
impl<T: Ring> Wedge<Line<T>> for Point<T> {
    type Output = Plane<T>;
    fn wedge(self, l: Line<T>) -> Plane<T> {
        l.wedge(self)
    }
}

// Meet

/// Line where planes f and g intersect.
/// The direction is zero if f and g are parallel.
impl<T: Ring> AntiWedge<Plane<T>> for Plane<T> {
    type Output = Line<T>;
    fn anti_wedge(self, g: Plane<T>) -> Line<T> {
        let f = self;
        Line {
            v: Vector3 {
                x: f.z * g.y - f.y * g.z,
                y: f.x * g.z - f.z * g.x,
                z: f.y * g.x - f.x * g.y,
            },
            m: Vector3 {
                x: f.x * g.w - g.x * f.w,
                y: f.y * g.w - g.y * f.w,
                z: f.z * g.w - g.z * f.w,
            },
        }
    }
}

/// Point where line l intersects plane f.
/// The weight is zero if l and f are parallel.
impl<T: Ring> AntiWedge<Plane<T>> for Line<T> {
    type Output = Point<T>;
    fn anti_wedge(self, f: Plane<T>) -> Point<T> {
        let Line { v, m } = self;
        Point {
            x: m.y * f.z - m.z * f.y + v.x * f.w,
            y: m.z * f.x - m.x * f.z + v.y * f.w,
            z: m.x * f.y - m.y * f.x + v.z * f.w,
            w: -(v.x * f.x + v.y * f.y + v.z * f.z),
        }
    }
}

// An antivector and an anti-bivector commute under the anti-wedge product
impl<T: Ring> AntiWedge<Line<T>> for Plane<T> {
    type Output = Point<T>;
    fn anti_wedge(self, l: Line<T>) -> Point<T> {
        l.anti_wedge(self)
    }
}

// Operator sugar: `^` joins, `&` meets, `!` takes the dual

impl<T: Ring> core::ops::BitXor<Point<T>> for Point<T> {
    type Output = Line<T>;
    fn bitxor(self, r: Point<T>) -> Line<T> {
        self.wedge(r)
    }
}

impl<T: Ring> core::ops::BitXor<Point<T>> for Line<T> {
    type Output = Plane<T>;
    fn bitxor(self, r: Point<T>) -> Plane<T> {
        self.wedge(r)
    }
}

impl<T: Ring> core::ops::BitXor<Line<T>> for Point<T> {
    type Output = Plane<T>;
    fn bitxor(self, r: Line<T>) -> Plane<T> {
        self.wedge(r)
    }
}

impl<T: Ring> core::ops::BitAnd<Plane<T>> for Plane<T> {
    type Output = Line<T>;
    fn bitand(self, r: Plane<T>) -> Line<T> {
        self.anti_wedge(r)
    }
}

impl<T: Ring> core::ops::BitAnd<Plane<T>> for Line<T> {
    type Output = Point<T>;
    fn bitand(self, r: Plane<T>) -> Point<T> {
        self.anti_wedge(r)
    }
}

impl<T: Ring> core::ops::BitAnd<Line<T>> for Plane<T> {
    type Output = Point<T>;
    fn bitand(self, r: Line<T>) -> Point<T> {
        self.anti_wedge(r)
    }
}

impl<T: Ring> core::ops::Not for Point<T> {
    type Output = Plane<T>;
    fn not(self) -> Plane<T> {
        self.dual()
    }
}

impl<T: Ring> core::ops::Not for Line<T> {
    type Output = Line<T>;
    fn not(self) -> Line<T> {
        self.dual()
    }
}

impl<T: Ring> core::ops::Not for Plane<T> {
    type Output = Point<T>;
    fn not(self) -> Point<T> {
        self.dual()
    }
}

// Dual

impl<T: Ring> Dual for Point<T> {
    type Output = Plane<T>;
    fn dual(self) -> Plane<T> {
        Plane {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: -self.w,
        }
    }
}

impl<T: Ring> Dual for Line<T> {
    type Output = Line<T>;
    fn dual(self) -> Line<T> {
        Line {
            v: Vector3::zero(),
            m: -self.v,
        }
    }
}

impl<T: Ring> Dual for Plane<T> {
    type Output = Point<T>;
    fn dual(self) -> Point<T> {
        Point {
            x: self.x,
            y: self.y,
            z: self.z,
            w: T::zero(),
        }
    }
}

// Complements

impl<T: Ring> LeftComplement for Point<T> {
    type Output = Plane<T>;
    fn left_complement(self) -> Plane<T> {
        Plane {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl<T: Ring> LeftComplement for Line<T> {
    type Output = Line<T>;
    fn left_complement(self) -> Line<T> {
        Line {
            v: -self.m,
            m: -self.v,
        }
    }
}

impl<T: Ring> LeftComplement for Plane<T> {
    type Output = Point<T>;
    fn left_complement(self) -> Point<T> {
        Point {
            x: self.x,
            y: self.y,
            z: self.z,
            w: self.w,
        }
    }
}

impl<T: Ring> RightComplement for Point<T> {
    type Output = Plane<T>;
    fn right_complement(self) -> Plane<T> {
        Plane {
            x: self.x,
            y: self.y,
            z: self.z,
            w: self.w,
        }
    }
}

// Bivectors have the same left and right complement in four dimensions
impl<T: Ring> RightComplement for Line<T> {
    type Output = Line<T>;
    fn right_complement(self) -> Line<T> {
        self.left_complement()
    }
}

impl<T: Ring> RightComplement for Plane<T> {
    type Output = Point<T>;
    fn right_complement(self) -> Point<T> {
        Point {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

// Bulk and weight

impl<T: Ring> Bulk for Point<T> {
    type Output = Point<T>;
    fn bulk(self) -> Point<T> {
        Point {
            w: T::zero(),
            ..self
        }
    }
}

impl<T: Ring> Weight for Point<T> {
    type Output = Point<T>;
    fn weight(self) -> Point<T> {
        Point {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: self.w,
        }
    }
}

impl<T: Ring> Bulk for Line<T> {
    type Output = Line<T>;
    fn bulk(self) -> Line<T> {
        Line {
            v: Vector3::zero(),
            m: self.m,
        }
    }
}

impl<T: Ring> Weight for Line<T> {
    type Output = Line<T>;
    fn weight(self) -> Line<T> {
        Line {
            v: self.v,
            m: Vector3::zero(),
        }
    }
}

impl<T: Ring> Bulk for Plane<T> {
    type Output = Plane<T>;
    fn bulk(self) -> Plane<T> {
        Plane {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: self.w,
        }
    }
}

impl<T: Ring> Weight for Plane<T> {
    type Output = Plane<T>;
    fn weight(self) -> Plane<T> {
        Plane {
            w: T::zero(),
            ..self
        }
    }
}

// Normals

impl<T: Ring> Normal for Plane<T> {
    type Output = Point<T>;
    fn normal(self) -> Point<T> {
        self.dual()
    }
}

// Orthogonal supersets

/// The line through a point, perpendicular to a plane
impl<T: Ring> SupersetOrthogonalTo<Plane<T>> for Point<T> {
    type Output = Line<T>;
    fn superset_orthogonal_to(self, f: Plane<T>) -> Line<T> {
        f.dual().join(self)
    }
}

/// The plane through a point, perpendicular to a line
impl<T: Ring> SupersetOrthogonalTo<Line<T>> for Point<T> {
    type Output = Plane<T>;
    fn superset_orthogonal_to(self, l: Line<T>) -> Plane<T> {
        l.dual().join(self)
    }
}

/// The plane containing a line, perpendicular to a plane
impl<T: Ring> SupersetOrthogonalTo<Plane<T>> for Line<T> {
    type Output = Plane<T>;
    fn superset_orthogonal_to(self, f: Plane<T>) -> Plane<T> {
        self.join(f.dual())
    }
}

// Norms

impl<T: Ring> BulkNormSquared for Point<T> {
    type Output = T;
    fn bulk_norm_squared(self) -> T {
        self.xyz().norm_squared()
    }
}

impl<T: Ring> WeightNormSquared for Point<T> {
    type Output = T;
    fn weight_norm_squared(self) -> T {
        self.w * self.w
    }
}

impl<T: Sqrt> BulkNorm for Point<T> {
    type Output = T;
    fn bulk_norm(self) -> T {
        self.xyz().norm()
    }
}

// The weight norm of a point is its signed weight
impl<T: Ring> WeightNorm for Point<T> {
    type Output = T;
    fn weight_norm(self) -> T {
        self.w
    }
}

impl<T: Ring> BulkNormSquared for Line<T> {
    type Output = T;
    fn bulk_norm_squared(self) -> T {
        self.m.norm_squared()
    }
}

impl<T: Ring> WeightNormSquared for Line<T> {
    type Output = T;
    fn weight_norm_squared(self) -> T {
        self.v.norm_squared()
    }
}

impl<T: Sqrt> BulkNorm for Line<T> {
    type Output = T;
    fn bulk_norm(self) -> T {
        self.m.norm()
    }
}

impl<T: Sqrt> WeightNorm for Line<T> {
    type Output = T;
    fn weight_norm(self) -> T {
        self.v.norm()
    }
}

impl<T: Ring> BulkNormSquared for Plane<T> {
    type Output = T;
    fn bulk_norm_squared(self) -> T {
        self.w * self.w
    }
}

impl<T: Ring> WeightNormSquared for Plane<T> {
    type Output = T;
    fn weight_norm_squared(self) -> T {
        self.xyz().norm_squared()
    }
}

// The bulk norm of a plane is its signed offset
impl<T: Ring> BulkNorm for Plane<T> {
    type Output = T;
    fn bulk_norm(self) -> T {
        self.w
    }
}

impl<T: Sqrt> WeightNorm for Plane<T> {
    type Output = T;
    fn weight_norm(self) -> T {
        self.xyz().norm()
    }
}

impl<T: Recip> Unitized for Point<T> {
    type Output = Point<T>;
    fn unitized(self) -> Point<T> {
        self * self.w.recip()
    }
}

impl<T: Sqrt + Recip> Unitized for Line<T> {
    type Output = Line<T>;
    fn unitized(self) -> Line<T> {
        self * self.weight_norm().recip()
    }
}

impl<T: Sqrt + Recip> Unitized for Plane<T> {
    type Output = Plane<T>;
    fn unitized(self) -> Plane<T> {
        self * self.weight_norm().recip()
    }
}
