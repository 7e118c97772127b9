//! Plain 3D and 4D coordinate vectors
//!
//! These carry no projective meaning of their own.
//! They are the building blocks that the [lines](crate::re3::Line) and [motors](crate::motor::Motor)
//! of the [re3](crate::re3) module group their coordinates into,
//! e.g. the direction and moment halves of a line.
//!
//! If you want points and planes, you probably want the [re3](crate::re3) module instead.

use crate::scalar::*;

/// Implements `+`, `-`, unary `-` and scalar `*` component-wise over the named fields.
///
/// Every field must itself support those operations with scalar `T`.
macro_rules! impl_linear_ops {
    ($type:ident { $($field:ident),+ $(,)? }) => {
        impl<T: $crate::scalar::Ring> core::ops::Add<$type<T>> for $type<T> {
            type Output = $type<T>;
            fn add(self, r: $type<T>) -> $type<T> {
                $type {
                    $($field: self.$field + r.$field),+
                }
            }
        }

        impl<T: $crate::scalar::Ring> core::ops::Sub<$type<T>> for $type<T> {
            type Output = $type<T>;
            fn sub(self, r: $type<T>) -> $type<T> {
                $type {
                    $($field: self.$field - r.$field),+
                }
            }
        }

        impl<T: $crate::scalar::Ring> core::ops::Neg for $type<T> {
            type Output = $type<T>;
            fn neg(self) -> $type<T> {
                $type {
                    $($field: -self.$field),+
                }
            }
        }

        impl<T: $crate::scalar::Ring> core::ops::Mul<T> for $type<T> {
            type Output = $type<T>;
            fn mul(self, r: T) -> $type<T> {
                $type {
                    $($field: self.$field * r),+
                }
            }
        }
    };
}

pub(crate) use impl_linear_ops;

/// A vector with three components
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A vector with four components
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_linear_ops!(Vector3 { x, y, z });
impl_linear_ops!(Vector4 { x, y, z, w });

impl<T: Ring> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Vector3<T> {
        Vector3 { x, y, z }
    }

    pub fn zero() -> Vector3<T> {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    pub fn dot(self, r: Vector3<T>) -> T {
        self.x * r.x + self.y * r.y + self.z * r.z
    }

    /// The right-handed cross product
    pub fn cross(self, r: Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.y * r.z - self.z * r.y,
            y: self.z * r.x - self.x * r.z,
            z: self.x * r.y - self.y * r.x,
        }
    }

    pub fn norm_squared(self) -> T {
        self.dot(self)
    }

    /// Append a fourth component
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }
}

impl<T: Sqrt> Vector3<T> {
    pub fn norm(self) -> T {
        self.norm_squared().sqrt()
    }
}

impl<T: Ring> Vector4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Vector4<T> {
        Vector4 { x, y, z, w }
    }

    pub fn zero() -> Vector4<T> {
        Vector4::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// The first three components
    pub fn xyz(self) -> Vector3<T> {
        Vector3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    pub fn dot(self, r: Vector4<T>) -> T {
        self.x * r.x + self.y * r.y + self.z * r.z + self.w * r.w
    }
}

impl<T: Ring> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Vector3<T> {
        Vector3 { x, y, z }
    }
}

impl<T: Ring> From<[T; 4]> for Vector4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Vector4<T> {
        Vector4 { x, y, z, w }
    }
}
