use footprint2d::math::{Point3, Pose, Size};
use footprint2d::query::planar_distance;
use footprint2d::shape::{footprint_polygon, FootprintParams};

fn main() {
    // A 4.5m x 1.8m vehicle whose reference point is its rear axle, 1.4m behind
    // the geometric center, heading north-east on a slightly tilted road.
    let pose = Pose::from_parts_rpy(Point3::new(12.0, 3.0, 0.4), 0.02, -0.05, 0.785);
    let size = Size::new(4.5, 1.8, 1.6);
    let params = FootprintParams::default()
        .with_center_offset(1.4)
        .with_margins(1.0, 0.4);

    let poly = footprint_polygon(&pose, &size, &params);

    println!("Footprint of the vehicle at {:?}:", pose.position);
    for pt in poly.vertices() {
        println!("  ({:.3}, {:.3})", pt.x, pt.y);
    }
    println!("Area: {:.3}", poly.signed_area());

    let obstacle = Point3::new(15.0, 6.5, 0.0);
    println!(
        "Distance to obstacle: {:.3}",
        planar_distance(&pose.position, &obstacle)
    );
}
