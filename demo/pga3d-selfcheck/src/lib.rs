//! Self-checks for the pga3d kernel
//!
//! Each check builds a small configuration in single precision,
//! computes the same geometry two different ways,
//! and compares the results exactly.

use log::{debug, info, warn};
use pga3d::algebraic_ops::LeftComplement;
use pga3d::motor::Motor;
use pga3d::ops::*;
use pga3d::re3::{Line, Plane, Point};
use pga3d::vector::Vector4;

pub struct Check {
    pub name: &'static str,
    pub run: fn() -> bool,
}

pub const CHECKS: &[Check] = &[
    Check {
        name: "perpendicular line to a plane through a point",
        run: perpendicular_line_to_plane,
    },
    Check {
        name: "perpendicular plane to a line through a point",
        run: perpendicular_plane_to_line,
    },
    Check {
        name: "plane through a line perpendicular to a plane",
        run: perpendicular_plane_through_line,
    },
    Check {
        name: "projection of a point onto a plane",
        run: project_point_onto_plane,
    },
    Check {
        name: "projection of a point onto a line",
        run: project_point_onto_line,
    },
    Check {
        name: "line from two points",
        run: line_from_points,
    },
    Check {
        name: "plane from three points",
        run: plane_from_points,
    },
    Check {
        name: "degenerate join and meet",
        run: degenerate_join_and_meet,
    },
    Check {
        name: "join-meet duality",
        run: join_meet_duality,
    },
    Check {
        name: "motor identity",
        run: motor_identity,
    },
];

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Run the given checks in order, logging the outcome of each one
pub fn run_checks(checks: &[Check]) -> Summary {
    let mut summary = Summary::default();
    for check in checks {
        summary.executed += 1;
        if (check.run)() {
            info!("{}: passed", check.name);
            summary.passed += 1;
        } else {
            warn!("{}: FAILED", check.name);
            summary.failed += 1;
        }
    }
    summary
}

fn report<T: PartialEq + core::fmt::Debug>(computed: T, expected: T) -> bool {
    debug!("  computed {:?}", computed);
    debug!("  expected {:?}", expected);
    computed == expected
}

fn xy_plane() -> Plane<f32> {
    Point::new(1., 0., 0., 1.)
        .join(Point::new(0., 1., 0., 1.))
        .join(Point::new(0., 0., 0., 1.))
}

fn perpendicular_line_to_plane() -> bool {
    let f = Point::<f32>::new(1., 0., 0., 1.)
        ^ Point::new(0., 1., 0., 1.)
        ^ Point::new(0., 0., 1., 1.);
    let p = Point::new(1., 1., 1., 1.);

    let n = f.xyz();
    let direct = Line::new(-n * p.w, n.cross(p.xyz()));

    report(f.dual().join(p), direct)
}

fn perpendicular_plane_to_line() -> bool {
    let l = Point::new(1., 0., 0., 1.) ^ Point::new(0., 1., 1., 1.);
    let p = Point::new(1., 1., 1., 1.);

    let direct: Plane<f32> = (-l.v * p.w).extend(l.v.dot(p.xyz())).into();

    report(l.dual().join(p), direct)
}

fn perpendicular_plane_through_line() -> bool {
    let f = xy_plane();
    let l = Point::new(1., 0., 0., 1.) ^ Point::new(0., 0., 1., 1.);

    let n = f.xyz();
    let direct: Plane<f32> = l.v.cross(n).extend(-l.m.dot(n)).into();

    report(l.join(f.dual()), direct)
}

fn project_point_onto_plane() -> bool {
    let f = xy_plane();
    let p = Point::new(1., -1., 1., 1.);

    let n = f.xyz();
    let f_dot_p = n.dot(p.xyz()) + f.w * p.w;
    let direct: Point<f32> = (p.xyz() * n.norm_squared() - n * f_dot_p)
        .extend(p.w * n.norm_squared())
        .into();

    report(f.dual().join(p).meet(f), direct)
}

fn project_point_onto_line() -> bool {
    let l = Point::new(1., 0., 0., 1.) ^ Point::new(0., 1., 0., 1.);
    let p = Point::new(1., 1., 1., 1.);

    let direct: Point<f32> = (l.v * l.v.dot(p.xyz()) + l.v.cross(l.m) * p.w)
        .extend(p.w * l.v.norm_squared())
        .into();

    report(l.dual().join(p).meet(l), direct)
}

fn line_from_points() -> bool {
    let l = Point::<f32>::new(2., 3., 7., 1.) ^ Point::new(2., 1., 0., 1.);

    let expected = Line {
        v: [0., -2., -7.].into(),
        m: [-7., 14., -4.].into(),
    };

    report(l, expected)
}

fn plane_from_points() -> bool {
    let f = Point::<f32>::new(0., 0., 0., 1.)
        ^ Point::new(0., 1., 0., 1.)
        ^ Point::new(1., 1., 0., 1.);

    report(f, Plane::new(0., 0., -1., 0.)) && report(f.normal(), Point::ideal([0., 0., -1.]))
}

fn degenerate_join_and_meet() -> bool {
    let p = Point::<f32>::new(0.1, 0.7, -3.3, 1.);
    let f = Plane::<f32>::new(0.3, -1.9, 2.2, 0.7);

    report(p ^ p, Line::zero()) && report(f & f, Line::zero())
}

fn join_meet_duality() -> bool {
    let p = Point::<f32>::new(0.5, -1.25, 3., 1.);
    let q = Point::new(2., 0.75, -0.5, 1.);
    let r = Point::new(-1., 4., 0.25, 2.);

    let l = p ^ q;
    let f = l ^ r;
    let g = Plane::new(1., -2., 0.5, 3.);

    report(
        p.left_complement() & q.left_complement(),
        (p ^ q).left_complement(),
    ) && report(
        l.left_complement() & r.left_complement(),
        (l ^ r).left_complement(),
    ) && report(
        f.left_complement() ^ g.left_complement(),
        (f & g).left_complement(),
    )
}

fn motor_identity() -> bool {
    let axis = Point::<f32>::new(1., 2., 3., 1.) ^ Point::new(-2., 0.5, 4., 1.);
    let motor = Motor::new(axis, 0., 0.);

    report(motor.r, Vector4::new(0., 0., 0., 1.))
        && report(motor.u, Vector4::new(0., 0., 0., 0.))
        && report(motor, Motor::identity_motor())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        for check in CHECKS {
            assert!((check.run)(), "check failed: {}", check.name);
        }
    }

    #[test]
    fn test_summary_counts_failures() {
        let checks = [
            Check {
                name: "passing",
                run: || true,
            },
            Check {
                name: "failing",
                run: || false,
            },
        ];
        assert_eq!(
            run_checks(&checks),
            Summary {
                executed: 2,
                passed: 1,
                failed: 1,
            }
        );
    }
}
