use crate::Coordinate;
use proptest::prelude::Strategy;


///極付近を除いたランダムな座標
///極では経度が意味を持たないため、方位角などの比較から外す
pub fn arb_temperate() -> impl Strategy<Value = Coordinate> {
    (-80.0f64..=80.0, -179.0f64..179.0)
        .prop_map(|(lat, lng)| Coordinate::new(lat, lng).unwrap())
}

///球面上で三角形として十分な広がりを持つ3点
pub fn arb_triangle() -> impl Strategy<Value = [Coordinate; 3]> {
    (arb_temperate(), arb_temperate(), arb_temperate())
        .prop_map(|(a, b, c)| [a, b, c])
        .prop_filter("points must not be nearly collinear", |t| {
            crate::geodesic::area::spherical_excess(t).unwrap() > 1e-6
        })
}
