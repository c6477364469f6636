//! Cross-module tests: reference scenarios and invariant sweeps.


use crate::geometry::Size;

const EPSILON: f32 = 0.01;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Image sizes covering wide, tall, small, square and exactly-fitting cases.
const IMAGES: [(f32, f32); 8] = [
    (2000.0, 1000.0),
    (1000.0, 2000.0),
    (300.0, 200.0),
    (500.0, 500.0),
    (4096.0, 4096.0),
    (640.0, 480.0),
    (499.0, 1500.0),
    (1.0, 1.0),
];

/// Container sizes the image sizes are combined with.
const CONTAINERS: [(f32, f32); 4] = [
    (500.0, 500.0),
    (800.0, 600.0),
    (320.0, 640.0),
    (1920.0, 1080.0),
];

fn geometry_pairs() -> impl Iterator<Item = (Size, Size)> {
    IMAGES.iter().flat_map(|&image| {
        CONTAINERS
            .iter()
            .map(move |&container| (Size::from(image), Size::from(container)))
    })
}
