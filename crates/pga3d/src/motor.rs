//! Rigid motions of 3D geometry
//!
//! A [Motor] holds any proper isometry of 3D space:
//! a rotation about some axis combined with a translation along it (a screw motion.)
//! Pure rotations and pure translations are special cases.
//!
//! Motors act on [points](Point), [lines](Line), [planes](Plane), and other motors
//! through the sandwich product `Q ⟇ X ⟇ Q̰`, see [Transform].

use crate::algebraic_ops::*;
use crate::ops::*;
use crate::re3::{Line, Plane, Point};
use crate::scalar::*;
use crate::vector::{impl_linear_ops, Vector3, Vector4};

/// e.g. a rotation, translation, or screw motion
///
/// `Motor` holds the sum of a scalar, a [bivector](Line) and the antiscalar 𝟙.
/// Its coordinates are grouped into two halves:
/// * `r = (e41, e42, e43, e1234)`, the rotational part
/// * `u = (e23, e31, e12, scalar)`, the translational part
///
/// Motors are usually built with [Motor::new] from a unitized axis line
/// or with [IdentityMotor::identity_motor].
///
/// A motor composed with its [inverse transformation](crate::ops::InverseTransformation)
/// is the identity motor.
///
/// ## Example Operations
/// * [Composing](crate::ops::Compose) motors A and B results in a third motor whose motion is equivalent to A followed by B
/// * A motor can be made to move the opposite direction using [InverseTransformation](crate::ops::InverseTransformation)
/// * Any point, line, or plane can be [transformed](crate::ops::Transform) by a motor
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Motor<T> {
    pub r: Vector4<T>,
    pub u: Vector4<T>,
}

impl_linear_ops!(Motor { r, u });

impl<T: Trig> Motor<T> {
    /// Screw motion about the given axis
    ///
    /// Applying the motor rotates by `2 phi` about the axis (right-handed)
    /// and translates by `2 d` along it,
    /// provided that the axis is unitized and describes a real line (`v · m = 0`).
    /// Like quaternions, the motor is built from half of the motion it performs.
    ///
    /// ```
    /// use pga3d::re3::*;
    /// use pga3d::motor::*;
    /// use pga3d::ops::*;
    ///
    /// let z_axis = Point::origin().join(Point::finite([0., 0., 1.]));
    /// let m = Motor::new(z_axis, 0., 0.);
    /// assert_eq!(m, Motor::identity_motor());
    /// ```
    pub fn new(axis: Line<T>, phi: T, d: T) -> Motor<T> {
        let Line { v, m } = axis;
        let (sin, cos) = (phi.sin(), phi.cos());

        Motor {
            r: Vector4 {
                x: v.x * sin,
                y: v.y * sin,
                z: v.z * sin,
                w: cos,
            },
            u: Vector4 {
                x: d * v.x * cos + m.x * sin,
                y: d * v.y * cos + m.y * sin,
                z: d * v.z * cos + m.z * sin,
                w: -d * sin,
            },
        }
    }
}

impl<T: Ring> Motor<T> {
    pub fn from_parts(r: Vector4<T>, u: Vector4<T>) -> Motor<T> {
        Motor { r, u }
    }

    pub fn e41(self) -> T {
        self.r.x
    }
    pub fn e42(self) -> T {
        self.r.y
    }
    pub fn e43(self) -> T {
        self.r.z
    }
    pub fn e1234(self) -> T {
        self.r.w
    }
    pub fn e23(self) -> T {
        self.u.x
    }
    pub fn e31(self) -> T {
        self.u.y
    }
    pub fn e12(self) -> T {
        self.u.z
    }
    pub fn scalar(self) -> T {
        self.u.w
    }

    /// Rotates a direction (or the spatial part of any element) by the rotational part of the motor.
    ///
    /// The result is scaled by the squared weight norm of the motor.
    fn rotate(self, a: Vector3<T>) -> Vector3<T> {
        let Vector4 { x, y, z, w } = self.r;
        let two = T::from_integer(2);

        Vector3 {
            x: a.x * (w * w + x * x - y * y - z * z)
                + a.y * two * (x * y - w * z)
                + a.z * two * (w * y + x * z),
            y: a.x * two * (w * z + x * y)
                + a.y * (w * w - x * x + y * y - z * z)
                + a.z * two * (y * z - w * x),
            z: a.x * two * (x * z - w * y)
                + a.y * two * (w * x + y * z)
                + a.z * (w * w - x * x - y * y + z * z),
        }
    }

    /// The displacement of a unit-weight point
    fn translation(self) -> Vector3<T> {
        let r = self.r;
        let u = self.u;
        let two = T::from_integer(2);

        Vector3 {
            x: two * (r.w * u.x - r.x * u.w + r.y * u.z - r.z * u.y),
            y: two * (r.w * u.y - r.x * u.z - r.y * u.w + r.z * u.x),
            z: two * (r.w * u.z + r.x * u.y - r.y * u.x - r.z * u.w),
        }
    }
}

impl<T: Ring> IdentityMotor for Motor<T> {
    fn identity_motor() -> Motor<T> {
        Motor {
            r: Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
            u: Vector4::zero(),
        }
    }
}

impl<T: Ring> AntiReverse for Motor<T> {
    fn anti_reverse(self) -> Motor<T> {
        Motor {
            r: (-self.r.xyz()).extend(self.r.w),
            u: (-self.u.xyz()).extend(self.u.w),
        }
    }
}

impl<T: Ring> AntiWedgeDot<Motor<T>> for Motor<T> {
    type Output = Motor<T>;
    fn anti_wedge_dot(self, o: Motor<T>) -> Motor<T> {
        let (sr, su) = (self.r, self.u);
        let (or, ou) = (o.r, o.u);

        Motor {
            r: Vector4 {
                x: or.w * sr.x + or.x * sr.w - or.y * sr.z + or.z * sr.y,
                y: or.w * sr.y + or.x * sr.z + or.y * sr.w - or.z * sr.x,
                z: or.w * sr.z - or.x * sr.y + or.y * sr.x + or.z * sr.w,
                w: or.w * sr.w - or.x * sr.x - or.y * sr.y - or.z * sr.z,
            },
            u: Vector4 {
                x: or.w * su.x + or.x * su.w - or.y * su.z + or.z * su.y
                    + ou.w * sr.x
                    + ou.x * sr.w
                    - ou.y * sr.z
                    + ou.z * sr.y,
                y: or.w * su.y + or.x * su.z + or.y * su.w - or.z * su.x
                    + ou.w * sr.y
                    + ou.x * sr.z
                    + ou.y * sr.w
                    - ou.z * sr.x,
                z: or.w * su.z - or.x * su.y + or.y * su.x + or.z * su.w
                    + ou.w * sr.z
                    - ou.x * sr.y
                    + ou.y * sr.x
                    + ou.z * sr.w,
                w: or.w * su.w - or.x * su.x - or.y * su.y - or.z * su.z
                    + ou.w * sr.w
                    - ou.x * sr.x
                    - ou.y * sr.y
                    - ou.z * sr.z,
            },
        }
    }
}

impl<T: Ring> Compose<Motor<T>> for Motor<T> {
    type Output = Motor<T>;
    fn compose(self, r: Motor<T>) -> Motor<T> {
        r.anti_wedge_dot(self)
    }
}

impl<T: Ring> InverseTransformation for Motor<T> {
    type Output = Motor<T>;
    fn inverse_transformation(self) -> Motor<T> {
        self.anti_reverse()
    }
}

impl<T: Ring> WeightNormSquared for Motor<T> {
    type Output = T;
    fn weight_norm_squared(self) -> T {
        self.r.dot(self.r)
    }
}

impl<T: Sqrt> WeightNorm for Motor<T> {
    type Output = T;
    fn weight_norm(self) -> T {
        self.weight_norm_squared().sqrt()
    }
}

impl<T: Sqrt + Recip> Unitized for Motor<T> {
    type Output = Motor<T>;
    fn unitized(self) -> Motor<T> {
        self * self.weight_norm().recip()
    }
}

// Sandwich products Q ⟇ X ⟇ Q̰, expanded per grade

impl<T: Ring> Transform<Motor<T>> for Point<T> {
    type Output = Point<T>;
    fn transform(self, q: Motor<T>) -> Point<T> {
        let xyz = q.rotate(self.xyz()) + q.translation() * self.w;
        xyz.extend(self.w * q.weight_norm_squared()).into()
    }
}

impl<T: Ring> Transform<Motor<T>> for Line<T> {
    type Output = Line<T>;
    fn transform(self, q: Motor<T>) -> Line<T> {
        let Line { v, m } = self;
        let r = q.r;
        let u = q.u;
        let two = T::from_integer(2);

        // Moment picked up by moving the line off its original position
        let shift = Vector3 {
            x: two
                * (v.x * (r.w * u.w + r.x * u.x - r.y * u.y - r.z * u.z)
                    + v.y * (r.x * u.y + r.y * u.x - r.w * u.z - r.z * u.w)
                    + v.z * (r.w * u.y + r.x * u.z + r.y * u.w + r.z * u.x)),
            y: two
                * (v.x * (r.w * u.z + r.x * u.y + r.y * u.x + r.z * u.w)
                    + v.y * (r.w * u.w - r.x * u.x + r.y * u.y - r.z * u.z)
                    + v.z * (r.y * u.z + r.z * u.y - r.w * u.x - r.x * u.w)),
            z: two
                * (v.x * (r.x * u.z + r.z * u.x - r.w * u.y - r.y * u.w)
                    + v.y * (r.w * u.x + r.x * u.w + r.y * u.z + r.z * u.y)
                    + v.z * (r.w * u.w - r.x * u.x - r.y * u.y + r.z * u.z)),
        };

        Line {
            v: q.rotate(v),
            m: q.rotate(m) + shift,
        }
    }
}

impl<T: Ring> Transform<Motor<T>> for Plane<T> {
    type Output = Plane<T>;
    fn transform(self, q: Motor<T>) -> Plane<T> {
        let r = q.r;
        let u = q.u;
        let two = T::from_integer(2);

        let offset = Vector3 {
            x: two * (r.x * u.w - r.w * u.x + r.y * u.z - r.z * u.y),
            y: two * (r.y * u.w - r.w * u.y - r.x * u.z + r.z * u.x),
            z: two * (r.z * u.w - r.w * u.z + r.x * u.y - r.y * u.x),
        };

        q.rotate(self.xyz())
            .extend(self.w * q.weight_norm_squared() + self.xyz().dot(offset))
            .into()
    }
}

impl<T: Ring> Transform<Motor<T>> for Motor<T> {
    type Output = Motor<T>;
    fn transform(self, q: Motor<T>) -> Motor<T> {
        q.anti_wedge_dot(self).anti_wedge_dot(q.anti_reverse())
    }
}

impl<T: Ring, A: Transform<Motor<T>>> TransformInverse<Motor<T>> for A {
    type Output = A::Output;
    fn transform_inverse(self, q: Motor<T>) -> A::Output {
        self.transform(q.anti_reverse())
    }
}
