#![cfg(all(test, feature = "std"))]

use crate::algebraic_ops::*;
use crate::motor::Motor;
use crate::ops::*;
use crate::re3::{Line, Plane, Point};
use crate::vector::{Vector3, Vector4};

macro_rules! assert_close {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    (*left_val).is_close(*right_val),
                    "{:?} !~= {:?}",
                    left_val,
                    right_val
                );
            }
        }
    };
}

trait IsClose {
    fn is_close(self, rhs: Self) -> bool;
}

impl IsClose for f32 {
    fn is_close(self, rhs: f32) -> bool {
        (self - rhs).abs() < 1e-4 * (1. + self.abs().max(rhs.abs()))
    }
}

impl IsClose for Vector3<f32> {
    fn is_close(self, rhs: Self) -> bool {
        self.x.is_close(rhs.x) && self.y.is_close(rhs.y) && self.z.is_close(rhs.z)
    }
}

impl IsClose for Vector4<f32> {
    fn is_close(self, rhs: Self) -> bool {
        self.xyz().is_close(rhs.xyz()) && self.w.is_close(rhs.w)
    }
}

impl IsClose for Point<f32> {
    fn is_close(self, rhs: Self) -> bool {
        self.xyz().is_close(rhs.xyz()) && self.w.is_close(rhs.w)
    }
}

impl IsClose for Line<f32> {
    fn is_close(self, rhs: Self) -> bool {
        self.v.is_close(rhs.v) && self.m.is_close(rhs.m)
    }
}

impl IsClose for Plane<f32> {
    fn is_close(self, rhs: Self) -> bool {
        self.xyz().is_close(rhs.xyz()) && self.w.is_close(rhs.w)
    }
}

impl IsClose for Motor<f32> {
    fn is_close(self, rhs: Self) -> bool {
        self.r.is_close(rhs.r) && self.u.is_close(rhs.u)
    }
}

fn xy_plane() -> Plane<f32> {
    Point::finite([1., 0., 0.])
        .join(Point::finite([0., 1., 0.]))
        .join(Point::finite([0., 0., 0.]))
}

fn z_axis() -> Line<f32> {
    Point::origin().join(Point::finite([0., 0., 1.]))
}

fn skew_axis() -> Line<f32> {
    Point::finite([1., 2., 3.]).join(Point::finite([-2., 0.5, 4.]))
}

// A handful of integer elements in general position
fn sample_points() -> [Point<i32>; 3] {
    [
        Point::new(2, 3, 7, 1),
        Point::new(-4, 1, 0, 2),
        Point::new(5, -6, 3, 0),
    ]
}

fn sample_planes() -> [Plane<i32>; 2] {
    [Plane::new(1, 2, -3, 4), Plane::new(-5, 0, 2, 7)]
}

fn sample_line() -> Line<i32> {
    Line::new(Vector3::new(3, -1, 2), Vector3::new(4, 0, -6))
}

#[test]
fn test_join_two_points() {
    let l = Point::<f32>::new(2., 3., 7., 1.).join(Point::new(2., 1., 0., 1.));
    assert_eq!(
        l,
        Line::new(Vector3::new(0., -2., -7.), Vector3::new(-7., 14., -4.))
    );
    assert_eq!(l.e41(), 0.);
    assert_eq!(l.e42(), -2.);
    assert_eq!(l.e43(), -7.);
    assert_eq!(l.e23(), -7.);
    assert_eq!(l.e31(), 14.);
    assert_eq!(l.e12(), -4.);
}

#[test]
fn test_join_swapping_points_flips_line() {
    let [p, q, _] = sample_points();
    assert_eq!(p.join(q), -q.join(p));
}

#[test]
fn test_plane_from_three_points() {
    // Clockwise when seen from +Z
    let f = Point::<f32>::new(0., 0., 0., 1.)
        .join(Point::new(0., 1., 0., 1.))
        .join(Point::new(1., 1., 0., 1.));
    assert_eq!(f, Plane::new(0., 0., -1., 0.));
    assert_eq!(f.normal(), Point::ideal([0., 0., -1.]));
}

#[test]
fn test_join_is_associative() {
    let [p, q, r] = sample_points();
    assert_eq!(p.join(q).join(r), p.join(q.join(r)));
    assert_eq!(p ^ q ^ r, p ^ (q ^ r));
}

#[test]
fn test_join_point_on_line_has_no_normal() {
    let p = Point::new(1, 2, 3, 1);
    let q = Point::new(4, 0, -1, 1);
    let on_line = p * 3 + q * 2;
    let f = p.join(q).join(on_line);
    assert_eq!(f.xyz(), Vector3::zero());
}

#[test]
fn test_join_of_points_is_a_real_line() {
    let [p, q, r] = sample_points();
    for (a, b) in [(p, q), (q, r), (r, p)] {
        let l = a.join(b);
        assert_eq!(l.v.dot(l.m), 0);
    }

    let motor = Motor::new(skew_axis().unitized(), 0.7, 0.3);
    let l = Point::<f32>::new(0.5, -1.5, 2., 1.)
        .join(Point::new(3., 1., -1., 1.))
        .unitized()
        .transform(motor);
    assert_close!(l.v.dot(l.m), 0.);
}

#[test]
fn test_degenerate_join() {
    let [p, q, r] = sample_points();
    for a in [p, q, r] {
        assert_eq!(a.join(a), Line::zero());
        // Coincident up to scale
        assert_eq!(a.join(a * 3), Line::zero());
    }
    let p = Point::<f32>::new(0.1, 0.7, -3.3, 1.);
    assert_eq!(p ^ p, Line::zero());
}

#[test]
fn test_degenerate_meet() {
    for f in sample_planes() {
        assert_eq!(f.meet(f), Line::zero());
    }
    let f = Plane::<f32>::new(0.3, -1.9, 2.2, 0.7);
    assert_eq!(f & f, Line::zero());
}

#[test]
fn test_meet_parallel_planes_has_no_direction() {
    let f = Plane::new(1, 2, 3, 4);
    let g = Plane::new(2, 4, 6, -1);
    let l = f.meet(g);
    assert_eq!(l.v, Vector3::zero());
    assert_ne!(l.m, Vector3::zero());
}

#[test]
fn test_meet_line_parallel_to_plane_has_no_weight() {
    let f = xy_plane();
    let l = Point::finite([0., 0., 5.]).join(Point::finite([3., 4., 5.]));
    assert_eq!(f.meet(l).w, 0.);
}

#[test]
fn test_meet_is_commutative_for_line_and_plane() {
    let l = sample_line();
    for f in sample_planes() {
        assert_eq!(l.meet(f), f.meet(l));
        assert_eq!(l & f, f & l);
    }
}

#[test]
fn test_meet_line_and_plane() {
    let l = Point::<f32>::finite([3., 4., 10.]).join(Point::finite([3., 4., 9.]));
    assert_eq!(l.meet(xy_plane()), Point::finite([3., 4., 0.]));
}

#[test]
fn test_dual() {
    let p = Point::new(3, -2, 5, 4);
    assert_eq!(p.dual(), Plane::new(0, 0, 0, -4));

    let l = sample_line();
    assert_eq!(l.dual(), Line::new(Vector3::zero(), Vector3::new(-3, 1, -2)));

    let f = Plane::new(1, 2, -3, 4);
    assert_eq!(f.dual(), Point::new(1, 2, -3, 0));

    assert_eq!(!p, p.dual());
    assert_eq!(!l, l.dual());
    assert_eq!(!f, f.dual());
}

#[test]
fn test_dual_is_complement_of_weight() {
    let [p, q, r] = sample_points();
    for a in [p, q, r] {
        assert_eq!(a.dual(), a.weight().left_complement());
    }
    let l = sample_line();
    assert_eq!(l.dual(), l.weight().left_complement());
    for f in sample_planes() {
        assert_eq!(f.dual(), f.weight().left_complement());
    }
}

#[test]
fn test_dual_twice_is_zero() {
    let [p, _, _] = sample_points();
    assert_eq!(p.dual().dual(), Point::zero());
    assert_eq!(sample_line().dual().dual(), Line::zero());
    let [f, _] = sample_planes();
    assert_eq!(f.dual().dual(), Plane::zero());
}

#[test]
fn test_double_complement() {
    let [p, _, _] = sample_points();
    let l = sample_line();
    let [f, _] = sample_planes();

    assert_eq!(p.left_complement().left_complement(), -p);
    assert_eq!(l.left_complement().left_complement(), l);
    assert_eq!(f.left_complement().left_complement(), -f);

    assert_eq!(p.left_complement().right_complement(), p);
    assert_eq!(l.left_complement().right_complement(), l);
    assert_eq!(f.left_complement().right_complement(), f);
    assert_eq!(p.right_complement().left_complement(), p);
    assert_eq!(f.right_complement().left_complement(), f);
}

#[test]
fn test_bulk_and_weight_partition() {
    let [p, _, _] = sample_points();
    let l = sample_line();
    let [f, _] = sample_planes();
    assert_eq!(p.bulk() + p.weight(), p);
    assert_eq!(l.bulk() + l.weight(), l);
    assert_eq!(f.bulk() + f.weight(), f);
}

#[test]
fn test_join_meet_duality() {
    let [p, q, r] = sample_points();
    let l = sample_line();
    let [f, g] = sample_planes();

    // meet(C(A), C(B)) = C(join(A, B))
    for (a, b) in [(p, q), (q, r), (r, p)] {
        assert_eq!(
            a.left_complement().meet(b.left_complement()),
            a.join(b).left_complement()
        );
        assert_eq!(
            a.right_complement().meet(b.right_complement()),
            a.join(b).right_complement()
        );
    }
    for a in [p, q, r] {
        assert_eq!(
            l.left_complement().meet(a.left_complement()),
            l.join(a).left_complement()
        );
        assert_eq!(
            l.right_complement().meet(a.right_complement()),
            l.join(a).right_complement()
        );
    }

    // join(C(A), C(B)) = C(meet(A, B))
    assert_eq!(
        f.left_complement().join(g.left_complement()),
        f.meet(g).left_complement()
    );
    assert_eq!(
        f.right_complement().join(g.right_complement()),
        f.meet(g).right_complement()
    );
    for a in [f, g] {
        assert_eq!(
            l.left_complement().join(a.left_complement()),
            l.meet(a).left_complement()
        );
    }
}

#[test]
fn test_join_meet_duality_f32() {
    let p = Point::<f32>::new(0.5, -1.25, 3., 1.);
    let q = Point::new(2., 0.75, -0.5, 1.);
    assert_eq!(
        p.left_complement().meet(q.left_complement()),
        p.join(q).left_complement()
    );
}

// Perpendicular line through a point
#[test]
fn test_perpendicular_line_to_plane() {
    let f = Point::<f32>::new(1., 0., 0., 1.)
        .join(Point::new(0., 1., 0., 1.))
        .join(Point::new(0., 0., 1., 1.));
    let p = Point::new(1., 1., 1., 1.);

    let n = f.xyz();
    let expected = Line::new(-n * p.w, n.cross(p.xyz()));

    assert_eq!(f.dual().join(p), expected);
    assert_eq!(p.superset_orthogonal_to(f), expected);
}

#[test]
fn test_perpendicular_plane_to_line() {
    let l = Point::<f32>::new(1., 0., 0., 1.).join(Point::new(0., 1., 1., 1.));
    let p = Point::new(1., 1., 1., 1.);

    let expected: Plane<f32> = (-l.v * p.w).extend(l.v.dot(p.xyz())).into();

    assert_eq!(l.dual().join(p), expected);
    assert_eq!(p.superset_orthogonal_to(l), expected);
}

#[test]
fn test_perpendicular_plane_through_line() {
    let f = xy_plane();
    let l = Point::<f32>::new(1., 0., 0., 1.).join(Point::new(0., 0., 1., 1.));

    let expected: Plane<f32> = l.v.cross(f.xyz()).extend(-l.m.dot(f.xyz())).into();

    assert_eq!(l.join(f.dual()), expected);
    assert_eq!(l.superset_orthogonal_to(f), expected);
    // The XZ plane
    assert_eq!(expected, Plane::new(0., 1., 0., 0.));
}

#[test]
fn test_project_point_onto_plane() {
    let f = xy_plane();
    let p = Point::<f32>::new(1., -1., 1., 1.);

    let n = f.xyz();
    let f_dot_p = n.dot(p.xyz()) + f.w * p.w;
    let expected: Point<f32> = (p.xyz() * n.norm_squared() - n * f_dot_p)
        .extend(p.w * n.norm_squared())
        .into();

    assert_eq!(f.dual().join(p).meet(f), expected);
    assert_eq!(p.projection(f), expected);
    assert_eq!(expected, Point::finite([1., -1., 0.]));
}

#[test]
fn test_project_point_onto_line() {
    let l = Point::<f32>::new(1., 0., 0., 1.).join(Point::new(0., 1., 0., 1.));
    let p = Point::new(1., 1., 1., 1.);

    let expected: Point<f32> = (l.v * l.v.dot(p.xyz()) + l.v.cross(l.m) * p.w)
        .extend(p.w * l.v.norm_squared())
        .into();

    assert_eq!(l.dual().join(p).meet(l), expected);
    assert_eq!(p.projection(l), expected);
    assert_eq!(expected.unitized(), Point::finite([0.5, 0.5, 0.]));
}

#[test]
fn test_project_line_onto_plane() {
    let l = sample_line();
    for f in sample_planes() {
        let n = f.xyz();
        let expected = Line::new(
            l.v * n.norm_squared() - n * n.dot(l.v),
            n * n.dot(l.m) + l.v.cross(n) * f.w,
        );
        assert_eq!(l.projection(f), expected);
    }
}

#[test]
fn test_projection_lies_in_target() {
    let [p, q, _] = sample_points();
    let [f, _] = sample_planes();

    // A point lies in a plane when their join vanishes
    let on_plane = p.projection(f);
    assert_eq!(f.xyz().dot(on_plane.xyz()) + f.w * on_plane.w, 0);

    let l = p.join(q);
    let r = Point::new(-1, 4, 2, 3);
    assert_eq!(l.join(r.projection(l)).xyz(), Vector3::zero());
}

#[test]
fn test_norms() {
    let l = Point::<f32>::finite([10., 10., 10.]).join(Point::finite([13., 14., 10.]));
    assert_eq!(l.weight_norm(), 5.);
    assert_eq!(l.weight_norm_squared(), 25.);

    let p = Point::<f32>::ideal([3., 4., 0.]);
    assert_eq!(p.bulk_norm(), 5.);
    assert_eq!(p.weight_norm(), 0.);

    // Signed distance of a unitized plane from the origin
    let f = Plane::<f32>::new(0., 3., 4., -10.);
    assert_eq!(f.weight_norm(), 5.);
    assert_close!(f.unitized().bulk_norm(), -2.);
}

#[test]
fn test_unitized() {
    assert_eq!(
        Point::<f32>::new(2., 4., 6., 2.).unitized(),
        Point::finite([1., 2., 3.])
    );
    assert_close!(
        Line::<f32>::new(Vector3::new(0., 3., 4.), Vector3::new(5., 0., 0.)).unitized(),
        Line::new(Vector3::new(0., 0.6, 0.8), Vector3::new(1., 0., 0.))
    );
    assert_close!(
        Plane::<f32>::new(0., 0., -2., 6.).unitized(),
        Plane::new(0., 0., -1., 3.)
    );
}

#[test]
fn test_unitized_ideal_point_is_not_finite() {
    let p = Point::<f32>::ideal([1., 2., 3.]).unitized();
    assert!(!p.x.is_finite());
}

#[test]
fn test_accessors() {
    let p = Point::new(1, 2, 3, 4);
    assert_eq!([p.e1(), p.e2(), p.e3(), p.e4()], [1, 2, 3, 4]);
    let f = Plane::new(5, 6, 7, 8);
    assert_eq!([f.e234(), f.e314(), f.e124(), f.e321()], [5, 6, 7, 8]);
    assert_eq!(sample_line().direction(), Point::ideal([3, -1, 2]));
}

#[test]
fn test_motor_identity() {
    let identity = Motor::identity_motor();
    assert_eq!(identity.r, Vector4::new(0., 0., 0., 1.));
    assert_eq!(identity.u, Vector4::new(0., 0., 0., 0.));

    assert_eq!(Motor::new(z_axis(), 0., 0.), identity);

    let skew = skew_axis();
    assert_eq!(Motor::new(skew, 0., 0.), identity);
    assert_eq!(Motor::new(skew.unitized(), 0., 0.), identity);
}

#[test]
fn test_translation_motor_from_parts() {
    // Translates by twice the moment part
    let motor = Motor::from_parts(Vector4::new(0, 0, 0, 1), Vector4::new(0, 0, 2, 0));
    assert_eq!(Point::new(1, 2, 3, 1).transform(motor), Point::new(1, 2, 7, 1));
    assert_eq!(
        Point::new(1, 2, 3, 1).transform_inverse(motor),
        Point::new(1, 2, -1, 1)
    );
}

#[test]
fn test_motor_layout() {
    let axis = Point::<f32>::finite([1., 0., 0.]).join(Point::finite([1., 0., 1.]));
    let phi = 0.3_f32;
    let d = 2.;
    let m = Motor::new(axis, phi, d);
    assert_eq!(m.e41(), 0.);
    assert_eq!(m.e42(), 0.);
    assert_eq!(m.e43(), phi.sin());
    assert_eq!(m.e1234(), phi.cos());
    assert_eq!(m.e23(), 0.);
    assert_eq!(m.e31(), -phi.sin());
    assert_eq!(m.e12(), d * phi.cos());
    assert_eq!(m.scalar(), -d * phi.sin());
}

#[test]
fn test_identity_motor_leaves_geometry_alone() {
    let identity = Motor::<f32>::identity_motor();
    let p = Point::new(0.5, -1.5, 2., 1.);
    let l = p.join(Point::finite([3., 1., -1.]));
    let f = l.join(Point::finite([1., 1., 1.]));
    assert_eq!(p.transform(identity), p);
    assert_eq!(l.transform(identity), l);
    assert_eq!(f.transform(identity), f);
}

#[test]
fn test_3d_rotation() {
    let p = Point::finite([1., 0., 0.]);
    let motor = Motor::new(z_axis(), 0.125 * core::f32::consts::TAU, 0.);
    assert_close!(p.transform(motor), Point::finite([0., 1., 0.]));
}

#[test]
fn test_3d_translation() {
    let p = Point::finite([10., 10., 10.]);
    let motor = Motor::new(z_axis(), 0., 2.5);
    assert_eq!(p.transform(motor), Point::finite([10., 10., 15.]));
}

#[test]
fn test_3d_rotation_about_offset_axis() {
    let axis = Point::finite([1., 0., 0.]).join(Point::finite([1., 0., 1.]));
    let motor = Motor::new(axis, 0.25 * core::f32::consts::TAU, 0.);
    assert_close!(Point::origin().transform(motor), Point::finite([2., 0., 0.]));
}

#[test]
fn test_3d_screw() {
    let p = Point::finite([1., 0., 0.]);
    let motor = Motor::new(z_axis(), 0.125 * core::f32::consts::TAU, 1.5);
    assert_close!(p.transform(motor), Point::finite([0., 1., 3.]));
}

#[test]
fn test_motor_preserves_incidence() {
    let axis = skew_axis().unitized();
    let motor = Motor::new(axis, 0.7, 0.3);

    let p = Point::new(0.5, -1.5, 2., 1.);
    let q = Point::new(3., 1., -1., 1.);
    let r = Point::new(1., 1., 1., 1.);
    let (tp, tq, tr) = (p.transform(motor), q.transform(motor), r.transform(motor));

    assert_close!(p.join(q).transform(motor), tp.join(tq));
    assert_close!(p.join(q).join(r).transform(motor), tp.join(tq).join(tr));
}

#[test]
fn test_motor_is_unitized_for_unitized_axis() {
    let axis = skew_axis().unitized();
    let motor = Motor::new(axis, 0.7, 0.3);
    assert_close!(motor.weight_norm(), 1.);
    assert_close!(
        motor.compose(motor.inverse_transformation()),
        Motor::identity_motor()
    );
}

#[test]
fn test_compose_motors() {
    let axis = skew_axis().unitized();
    let a = Motor::new(axis, 0.7, 0.3);
    let b = Motor::new(z_axis(), -0.4, 1.1);
    let p = Point::new(0.5, -1.5, 2., 1.);

    assert_close!(p.transform(a.compose(b)), p.transform(a).transform(b));
    assert_close!(
        p.transform(a.compose(b)),
        Point::new(0.143035, -0.752821, 8.336250, 1.)
    );
}

#[test]
fn test_compose_translation_then_rotation() {
    let p = Point::finite([10., 10., 0.]);

    let translate_up_5 = Motor::new(Point::origin().join(Point::finite([0., 1., 0.])), 0., 2.5);
    let rotate_90 = Motor::new(z_axis(), 0.125 * core::f32::consts::TAU, 0.);

    let up_then_rotate = translate_up_5.compose(rotate_90);
    assert_close!(p.transform(up_then_rotate), Point::finite([-15., 10., 0.]));

    let rotate_then_up = rotate_90.compose(translate_up_5);
    assert_close!(p.transform(rotate_then_up), Point::finite([-10., 15., 0.]));
}

#[test]
fn test_transform_inverse() {
    let axis = skew_axis().unitized();
    let motor = Motor::new(axis, 0.7, 0.3);
    let p = Point::new(0.5, -1.5, 2., 1.);
    let f = Plane::new(0., 0., 1., -2.);

    assert_close!(p.transform(motor).transform_inverse(motor), p);
    assert_close!(f.transform(motor).transform_inverse(motor), f);
}

#[test]
fn test_transform_motor_changes_frame() {
    let axis = skew_axis().unitized();
    let a = Motor::new(axis, 0.7, 0.3);
    let b = Motor::new(z_axis(), -0.4, 1.1);
    let p = Point::new(0.5, -1.5, 2., 1.);

    assert_eq!(a.transform(Motor::identity_motor()), a);
    assert_close!(
        p.transform(a.transform(b)),
        p.transform_inverse(b).transform(a).transform(b)
    );
}

#[test]
fn test_operators_match_named_methods() {
    let [p, q, r] = sample_points();
    let [f, g] = sample_planes();
    let l = sample_line();
    assert_eq!(p ^ q, p.join(q));
    assert_eq!(l ^ r, l.join(r));
    assert_eq!(r ^ l, r.join(l));
    assert_eq!(f & g, f.meet(g));
    assert_eq!(l & f, l.meet(f));
}
