use crate::{
    Coordinate,
    error::Error,
    geodesic::distance::angular_distance,
    geometry::{
        constants::INTERPOLATION_EPSILON,
        helpers::{to_degrees, to_radians},
    },
};

/// `from` から `to` への大円上で、割合 `fraction` の位置にある点を返す。
///
/// 球面線形補間を用いる。2点の角距離の正弦が `1e-6` 未満の場合は `from` をそのまま返す。
///
/// ```
/// # use kasane_geodesy::{Coordinate, interpolate};
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 90.0).unwrap();
/// let mid = interpolate(&a, &b, 0.5).unwrap();
/// assert!(mid.as_latitude().abs() < 1e-9);
/// assert!((mid.as_longitude() - 45.0).abs() < 1e-9);
/// ```
///
/// # エラー
/// `fraction` が有限でない場合は [`Error::InvalidCoordinate`] を返す。
pub fn interpolate(from: &Coordinate, to: &Coordinate, fraction: f64) -> Result<Coordinate, Error> {
    let (from, to) = (from.normalized(), to.normalized());
    let from_lat = to_radians(from.as_latitude());
    let from_lng = to_radians(from.as_longitude());
    let to_lat = to_radians(to.as_latitude());
    let to_lng = to_radians(to.as_longitude());

    let angle = angular_distance(&from, &to);
    let sin_angle = angle.sin();

    if sin_angle < INTERPOLATION_EPSILON {
        log::trace!("interpolate: {} and {} are too close to separate", from, to);
        return Ok(from);
    }

    let a = ((1.0 - fraction) * angle).sin() / sin_angle;
    let b = (fraction * angle).sin() / sin_angle;

    let x = a * from_lat.cos() * from_lng.cos() + b * to_lat.cos() * to_lng.cos();
    let y = a * from_lat.cos() * from_lng.sin() + b * to_lat.cos() * to_lng.sin();
    let z = a * from_lat.sin() + b * to_lat.sin();

    Coordinate::new(
        to_degrees(f64::atan2(z, (x * x + y * y).sqrt())),
        to_degrees(f64::atan2(y, x)),
    )
}
