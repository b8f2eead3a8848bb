use approx::assert_relative_eq;
use core::f64::consts::PI;
use footprint2d::math::{Point, Point3, Pose, Size};
use footprint2d::shape::{footprint_polygon, Footprint, FootprintParams};

fn random_pose(rng: &mut oorandom::Rand64) -> Pose {
    let position = Point3::new(
        rng.rand_float() * 100.0 - 50.0,
        rng.rand_float() * 100.0 - 50.0,
        rng.rand_float() * 10.0,
    );
    let roll = rng.rand_float() - 0.5;
    let pitch = rng.rand_float() - 0.5;
    let yaw = (rng.rand_float() * 2.0 - 1.0) * PI;
    Pose::from_parts_rpy(position, roll, pitch, yaw)
}

#[test]
fn footprint_vertex_order_is_pinned() {
    let pose = Pose::translation(10.0, 5.0, 0.0);
    let poly = footprint_polygon(&pose, &Size::new(4.0, 2.0, 1.0), &FootprintParams::default());

    assert_eq!(
        poly.into_vertices(),
        vec![
            Point::new(12.0, 6.0),
            Point::new(8.0, 6.0),
            Point::new(8.0, 4.0),
            Point::new(12.0, 4.0),
            Point::new(12.0, 6.0),
        ]
    );
}

#[test]
fn footprint_is_closed_and_counter_clockwise() {
    let mut rng = oorandom::Rand64::new(3);

    for _ in 0..200 {
        let pose = random_pose(&mut rng);
        let footprint = Footprint::new(Size::new(4.5, 1.8, 1.6), FootprintParams::default());
        let poly = footprint.polygon(&pose);
        let he = footprint.half_extents(&pose.rpy());

        assert_eq!(poly.len(), 5);
        assert_eq!(poly.vertices()[0], poly.vertices()[4]);
        assert_relative_eq!(poly.signed_area(), 4.0 * he.x * he.y, epsilon = 1.0e-9);
    }
}

#[test]
fn footprint_is_centered_on_the_pose() {
    let mut rng = oorandom::Rand64::new(11);

    for _ in 0..200 {
        let pose = random_pose(&mut rng);
        let poly = footprint_polygon(&pose, &Size::new(3.0, 2.0, 1.0), &FootprintParams::default());
        let centroid = poly.centroid().unwrap();

        assert_relative_eq!(centroid, pose.position.xy(), epsilon = 1.0e-9);
    }
}

#[test]
fn half_turn_reflects_vertices_through_the_pose() {
    let mut rng = oorandom::Rand64::new(5);
    let size = Size::new(4.0, 2.0, 1.0);
    let params = FootprintParams::default()
        .with_center_offset(0.7)
        .with_margins(0.4, 0.2);

    for _ in 0..200 {
        let pose = random_pose(&mut rng);
        let rpy = pose.rpy();
        let turned = Pose::from_parts_rpy(pose.position, rpy.roll, rpy.pitch, rpy.yaw + PI);

        let poly = footprint_polygon(&pose, &size, &params);
        let turned_poly = footprint_polygon(&turned, &size, &params);
        let center = pose.position.xy();

        for (a, b) in poly.vertices().iter().zip(turned_poly.vertices()) {
            let reflected = center + (center - a);
            assert_relative_eq!(*b, reflected, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn height_and_altitude_are_ignored() {
    let pose = Pose::from_parts_rpy(Point3::new(1.0, 2.0, 0.0), 0.1, 0.2, 0.3);
    let high = Pose::from_parts_rpy(Point3::new(1.0, 2.0, 50.0), 0.1, 0.2, 0.3);
    let params = FootprintParams::default();

    assert_eq!(
        footprint_polygon(&pose, &Size::new(4.0, 2.0, 1.0), &params),
        footprint_polygon(&high, &Size::new(4.0, 2.0, 30.0), &params)
    );
}
