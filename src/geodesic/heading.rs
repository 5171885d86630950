use crate::{
    Coordinate,
    geometry::helpers::{to_degrees, to_radians},
};

/// `from` から `to` へ向かう初期方位角を返す。
///
/// 北から時計回りの度で、範囲は `-180.0..180.0`。ただし真南はちょうど `180.0` を返す。
///
/// ```
/// # use kasane_geodesy::{Coordinate, heading};
/// let origin = Coordinate::new(0.0, 0.0).unwrap();
/// assert_eq!(heading(&origin, &Coordinate::new(0.0, 90.0).unwrap()), 90.0);
/// assert_eq!(heading(&origin, &Coordinate::new(90.0, 0.0).unwrap()), 0.0);
/// ```
pub fn heading(from: &Coordinate, to: &Coordinate) -> f64 {
    let (from, to) = (from.normalized(), to.normalized());
    let from_lat = to_radians(from.as_latitude());
    let to_lat = to_radians(to.as_latitude());
    let delta_lng = to_radians(to.as_longitude()) - to_radians(from.as_longitude());

    let angle = to_degrees(f64::atan2(
        delta_lng.sin() * to_lat.cos(),
        from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * delta_lng.cos(),
    ));

    wrap_heading(angle)
}

/// 角度を `-180.0..180.0` に折り返す。`180.0` だけはそのまま返す。
pub(crate) fn wrap_heading(angle: f64) -> f64 {
    if angle == 180.0 {
        angle
    } else {
        floor_mod(floor_mod(angle + 180.0, 360.0) + 360.0, 360.0) - 180.0
    }
}

fn floor_mod(a: f64, b: f64) -> f64 {
    a - (a / b).floor() * b
}
