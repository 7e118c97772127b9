//! Low-level geometric algebra operations
//!
//! There are a few conflicting conventions for geometric algebra notation.
//! This library uses the formulation put forth by
//! [Dr. Eric Lengyel](https://projectivegeometricalgebra.org/):
//! basis vectors e1, e2, e3 square to 1, the projective basis vector e4 squares to 0,
//! and the antiscalar is 𝟙 = e1 ∧ e2 ∧ e3 ∧ e4.
//!
//! Consider using the aliases in the [ops](crate::ops) module when available,
//! for code that reflects the geometric interpretation.
//! (e.g. when intersecting two planes, prefer `f.meet(g)` over `f.anti_wedge(g)`)

/// The bulk operator A●
///
/// Keeps the components that do not involve the projective basis vector e4
/// and zeroes the rest.
///
/// see <https://rigidgeometricalgebra.org/wiki/index.php?title=Bulk_and_weight>
pub trait Bulk {
    type Output;
    fn bulk(self) -> Self::Output;
}

/// The weight operator A○
///
/// Keeps the components that involve the projective basis vector e4
/// and zeroes the rest.
///
/// see <https://rigidgeometricalgebra.org/wiki/index.php?title=Bulk_and_weight>
pub trait Weight {
    type Output;
    fn weight(self) -> Self::Output;
}

/// The right complement operator A̅, defined by A ∧ A̅ = 𝟙 on basis elements
///
/// See <https://rigidgeometricalgebra.org/wiki/index.php?title=Complements>
pub trait RightComplement {
    type Output;
    fn right_complement(self) -> Self::Output;
}

/// The left complement operator A̲, defined by A̲ ∧ A = 𝟙 on basis elements
///
/// This is the inverse of the [right complement](RightComplement).
/// Applying it twice negates points and planes and leaves lines unchanged.
///
/// See <https://rigidgeometricalgebra.org/wiki/index.php?title=Complements>
pub trait LeftComplement {
    type Output;
    fn left_complement(self) -> Self::Output;
}

/// The anti-reverse operator A̰
///
/// see <https://rigidgeometricalgebra.org/wiki/index.php?title=Reverses>
pub trait AntiReverse {
    fn anti_reverse(self) -> Self;
}

/// The wedge product from exterior algebra, A ∧ B
///
/// See <https://rigidgeometricalgebra.org/wiki/index.php?title=Exterior_products>
pub trait Wedge<T> {
    type Output;
    fn wedge(self, r: T) -> Self::Output;
}

/// The anti-wedge product (vee) from exterior algebra, A ∨ B
///
/// See <https://rigidgeometricalgebra.org/wiki/index.php?title=Exterior_products>
pub trait AntiWedge<T> {
    type Output;
    fn anti_wedge(self, r: T) -> Self::Output;
}

/// The geometric anti-product A ⟇ B
///
/// See <https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products>
pub trait AntiWedgeDot<T> {
    type Output;
    fn anti_wedge_dot(self, r: T) -> Self::Output;
}
