use approx::assert_relative_eq;
use core::f64::consts::PI;
use footprint2d::math::{Point3, Pose, Size, Vector};
use footprint2d::shape::{footprint_polygon, Footprint, FootprintParams};

#[test]
fn margins_inflate_half_extents_by_half_the_margin() {
    let mut rng = oorandom::Rand64::new(17);

    for _ in 0..200 {
        let size = Size::new(rng.rand_float() * 10.0, rng.rand_float() * 3.0, 1.0);
        let (lm, wm) = (rng.rand_float(), rng.rand_float());
        let pose = Pose::from_parts_rpy(
            Point3::origin(),
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            0.0,
        );
        let rpy = pose.rpy();

        let bare = Footprint::new(size, FootprintParams::default()).half_extents(&rpy);
        let inflated = Footprint::new(size, FootprintParams::default().with_margins(lm, wm))
            .half_extents(&rpy);

        assert_relative_eq!(inflated - bare, Vector::new(lm / 2.0, wm / 2.0), epsilon = 1.0e-12);
    }
}

#[test]
fn margins_move_each_corner_outward() {
    let pose = Pose::translation(-1.0, 4.0, 0.0);
    let size = Size::new(4.0, 2.0, 1.0);
    let bare = footprint_polygon(&pose, &size, &FootprintParams::default());
    let inflated = footprint_polygon(
        &pose,
        &size,
        &FootprintParams::default().with_margins(1.0, 0.5),
    );

    let expected_shifts = [
        Vector::new(0.5, 0.25),
        Vector::new(-0.5, 0.25),
        Vector::new(-0.5, -0.25),
        Vector::new(0.5, -0.25),
        Vector::new(0.5, 0.25),
    ];

    for ((a, b), shift) in bare
        .vertices()
        .iter()
        .zip(inflated.vertices())
        .zip(expected_shifts.iter())
    {
        assert_relative_eq!(b - a, *shift, epsilon = 1.0e-12);
    }
}

#[test]
fn center_offset_translates_along_the_heading() {
    let size = Size::new(4.8, 1.9, 1.5);
    let offset = 1.35;

    for i in 0..36 {
        let yaw = -PI + i as f64 * PI / 18.0;
        let pose = Pose::from_parts_rpy(Point3::new(3.0, -7.0, 0.0), 0.0, 0.0, yaw);

        let centered = footprint_polygon(&pose, &size, &FootprintParams::default());
        let shifted = footprint_polygon(
            &pose,
            &size,
            &FootprintParams::default().with_center_offset(offset),
        );
        let expected = Vector::new(offset * yaw.cos(), offset * yaw.sin());

        for (a, b) in centered.vertices().iter().zip(shifted.vertices()) {
            assert_relative_eq!(b - a, expected, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn zero_yaw_center_offset_is_a_pure_x_shift() {
    let pose = Pose::translation(2.0, 2.0, 0.0);
    let size = Size::new(4.0, 2.0, 1.0);
    let centered = footprint_polygon(&pose, &size, &FootprintParams::default());
    let shifted = footprint_polygon(
        &pose,
        &size,
        &FootprintParams::default().with_center_offset(-0.5),
    );

    for (a, b) in centered.vertices().iter().zip(shifted.vertices()) {
        assert_eq!(b - a, Vector::new(-0.5, 0.0));
    }
}
