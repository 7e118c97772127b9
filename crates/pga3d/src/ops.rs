//! Geometric operations

use crate::algebraic_ops::{AntiWedge, Wedge};

/// The square of the bulk norm of an element
///
/// See [BulkNorm] for more details.
///
/// This trait avoids the square root which is necessary to calculate [BulkNorm]
/// and is therefore always available,
/// even on scalar types that do not implement [Sqrt](crate::scalar::Sqrt).
pub trait BulkNormSquared {
    type Output;
    fn bulk_norm_squared(self) -> Self::Output;
}

/// The square of the weight norm of an element
///
/// See [WeightNorm] for more details.
///
/// This trait avoids the square root which is sometimes necessary to calculate [WeightNorm]
/// and is therefore always available,
/// even on scalar types that do not implement [Sqrt](crate::scalar::Sqrt).
pub trait WeightNormSquared {
    type Output;
    fn weight_norm_squared(self) -> Self::Output;
}

/// The bulk norm of an element
///
/// In the case of ideal points, the bulk norm gives their "length":
///
/// ```
/// use pga3d::re3::*;
/// use pga3d::ops::*;
///
/// let p = Point::ideal([3., 4., 0.]);
/// assert_eq!(p.bulk_norm(), 5.);
/// assert_eq!((p * 2.).bulk_norm(), 10.);
/// ```
///
/// For a finite element, the bulk norm over the weight norm is its distance from the origin.
pub trait BulkNorm {
    type Output;
    fn bulk_norm(self) -> Self::Output;
}

/// The weight norm of an element
///
/// Thanks to homogeneous coordinates,
/// all elements can be multiplied by a non-zero scalar
/// without changing the geometry they represent.
/// This extra projective factor can be retrieved with `.weight_norm()`.
///
/// ```
/// use pga3d::re3::*;
/// use pga3d::ops::*;
///
/// // The weight norm of the line joining two unitized points
/// // is the distance between them
/// let l = Point::finite([10., 10., 10.]).join(Point::finite([13., 14., 10.]));
/// assert_eq!(l.weight_norm(), 5.);
/// ```
///
/// Ideal elements have a weight norm of zero.
/// Many functions expect their inputs to have a weight norm of one,
/// i.e. to be [unitized](Unitized).
pub trait WeightNorm {
    type Output;
    fn weight_norm(self) -> Self::Output;
}

/// The higher-dimensional geometry containing its two operands, similar to a union.
///
/// Two points join into a line, and a line and a point join into a plane.
///
/// The order of the operands does not affect the location of the resultant geometry,
/// but may affect the sign of its directionality,
/// according to the winding order in which it was built.
///
/// ```
/// use pga3d::re3::*;
/// use pga3d::ops::*;
///
/// // Join two points into a line
/// // The direction of the line goes from p1 to p2,
/// // towards +X in this case
/// let p1 = Point::finite([0., 0., 0.]);
/// let p2 = Point::finite([10., 0., 0.]);
/// let l = p1.join(p2);
/// assert_eq!(l.direction(), Point::ideal([10., 0., 0.]));
///
/// // Join a line and a point into a plane
/// // This produces the +XY plane
/// let p3 = Point::finite([0., 1., 0.]);
/// let f = l.join(p3);
/// assert_eq!(f, Plane::new(0., 0., 10., 0.));
/// ```
///
/// `Join` is exception-free.
/// Joining coincident geometry results in an all-zero element.
///
/// ```
/// use pga3d::re3::*;
/// use pga3d::ops::*;
///
/// let p = Point::new(4., 5., 6., 1.);
/// assert_eq!(p.join(p), Line::zero());
/// ```
pub trait Join<T> {
    type Output;
    fn join(self, r: T) -> Self::Output;
}

impl<A: Wedge<B>, B> Join<B> for A {
    type Output = A::Output;
    fn join(self, r: B) -> A::Output {
        self.wedge(r)
    }
}

/// The lower-dimensional geometry shared between its two operands, i.e. intersection.
///
/// Two planes meet at a line, and a line and a plane meet at a point.
///
/// ```
/// use pga3d::re3::*;
/// use pga3d::ops::*;
///
/// // Join three points to get the XY plane
/// let xy = Point::finite([0., 0., 0.])
///     .join(Point::finite([1., 0., 0.]))
///     .join(Point::finite([0., 1., 0.]));
///
/// // Join two points to get a line travelling in the -Z direction
/// let l = Point::finite([3., 4., 10.]).join(Point::finite([3., 4., 9.]));
///
/// // Meet the plane and the line at a point
/// assert_eq!(xy.meet(l), Point::finite([3., 4., 0.]));
/// ```
///
/// `Meet` is exception-free.
/// Meeting parallel geometry results in an element with zero weight.
pub trait Meet<T> {
    type Output;
    fn meet(self, r: T) -> Self::Output;
}

impl<A: AntiWedge<B>, B> Meet<B> for A {
    type Output = A::Output;
    fn meet(self, r: B) -> A::Output {
        self.anti_wedge(r)
    }
}

/// The complement of an element's weight
///
/// This exchanges a grade-k element for a grade 4−k element at infinity
/// and is how orthogonality is expressed in projective geometric algebra:
/// * A point becomes the plane at infinity, scaled by the point's weight
/// * A line becomes the line at infinity wrapping around its direction
/// * A plane becomes the point at infinity in its normal direction
///
/// ```
/// use pga3d::re3::*;
/// use pga3d::ops::*;
///
/// let f = Plane::new(0., 0., 2., 7.);
/// assert_eq!(f.dual(), Point::ideal([0., 0., 2.]));
/// ```
///
/// Since the result is always made of bulk components,
/// taking the dual twice yields zero.
/// For an invertible complement, see [LeftComplement](crate::algebraic_ops::LeftComplement).
pub trait Dual {
    type Output;
    fn dual(self) -> Self::Output;
}

/// Get the ideal element orthogonal to the given element.
///
/// Given a plane, get the ideal point in the direction of its normal.
/// (For the direction of a line, see [Line::direction](crate::re3::Line::direction).)
pub trait Normal {
    type Output;
    fn normal(self) -> Self::Output;
}

/// Retrieve the higher-dimensional geometry that contains A and is orthogonal to B.
///
/// * Find the line containing the given point A and orthogonal to the given plane B
/// * Find the plane containing the given point A and orthogonal to the given line B
/// * Find the plane containing the given line A and orthogonal to the given plane B
///
/// This operation is an intermediate step in computing the [Projection].
/// [Intersecting](Meet) B with the result produces the projection of A onto B.
pub trait SupersetOrthogonalTo<T> {
    type Output;
    fn superset_orthogonal_to(self, r: T) -> Self::Output;
}

/// Project a lower-dimensional element A orthogonally onto a higher-dimensional element B.
///
/// * Project a point orthogonally onto a plane
/// * Project a point orthogonally onto a line
/// * Project a line orthogonally onto a plane
///
/// ```
/// use pga3d::re3::*;
/// use pga3d::ops::*;
///
/// let xy = Plane::new(0., 0., 1., 0.);
/// let p = Point::finite([1., -1., 1.]);
/// assert_eq!(p.projection(xy), Point::finite([1., -1., 0.]));
/// ```
///
/// The result carries the weight of A scaled by the squared weight norm of B.
pub trait Projection<T> {
    type Output;
    fn projection(self, r: T) -> Self::Output;
}

impl<A, B> Projection<B> for A
where
    A: SupersetOrthogonalTo<B>,
    A::Output: Meet<B>,
    B: Copy,
{
    type Output = <A::Output as Meet<B>>::Output;
    fn projection(self, r: B) -> Self::Output {
        self.superset_orthogonal_to(r).meet(r)
    }
}

/// Transform element A by motor B
///
/// Element A can itself be a motor.
/// In that case, this operation reinterprets transformation A
/// from being intrinsic to B to being extrinsic.
pub trait Transform<T> {
    type Output;
    fn transform(self, r: T) -> Self::Output;
}

/// Apply, to element A, the inverse of the transformation described by motor B
///
/// If you need to invert the motor before it is applied,
/// e.g. in a chain of composed transforms,
/// consider using [InverseTransformation] instead.
pub trait TransformInverse<T> {
    type Output;
    fn transform_inverse(self, r: T) -> Self::Output;
}

/// Compose motors A and B into a new motor whose motion is the result of applying A then B (extrinsically)
///
/// Note that motors are composed left-to-right.
/// This is the opposite convention of quaternions or matrices, which compose right-to-left.
pub trait Compose<T> {
    type Output;
    fn compose(self, r: T) -> Self::Output;
}

/// The motor whose transformation is the inverse of the given one
///
/// If you only need to invert the motor when it gets applied,
/// consider using [TransformInverse] instead.
pub trait InverseTransformation {
    type Output;
    fn inverse_transformation(self) -> Self::Output;
}

/// Homogeneously scale an element so that its [weight norm](WeightNorm) is 1.
///
/// All non-ideal elements can be unitized without changing the geometry they represent,
/// and many functions expect their inputs to be unitized.
///
/// For points, this has the effect of dividing by the projective coordinate.
pub trait Unitized {
    type Output;
    fn unitized(self) -> Self::Output;
}

/// Constructor for a motor that performs no motion
pub trait IdentityMotor {
    /// Construct a motor that performs no motion
    fn identity_motor() -> Self;
}

/// Constructor for a unitized point at the origin
pub trait Origin {
    /// Construct a unitized point at the origin
    fn origin() -> Self;
}
