/*!
footprint2d
========

**footprint2d** builds the oriented 2D footprint of an object from its 3D
pose and physical size, and provides the small planar helpers (roll/pitch/yaw
extraction, point projection, centroids, planar distances) a motion planner
needs around it.

The polygons produced here are meant to be handed to a downstream
polygon-intersection routine. Their vertex order and rotation convention are
fixed, see [`shape::footprint_polygon`].

```
use footprint2d::math::{Point, Pose, Size};
use footprint2d::shape::{footprint_polygon, FootprintParams};

let pose = Pose::translation(10.0, 5.0, 0.0);
let size = Size::new(4.0, 2.0, 1.5);
let poly = footprint_polygon(&pose, &size, &FootprintParams::default());

assert_eq!(
    poly.vertices(),
    &[
        Point::new(12.0, 6.0),
        Point::new(8.0, 6.0),
        Point::new(8.0, 4.0),
        Point::new(12.0, 4.0),
        Point::new(12.0, 6.0),
    ]
);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![doc(html_root_url = "http://docs.rs/footprint2d/0.1.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
