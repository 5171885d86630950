use crate::{
    Coordinate,
    error::Error,
    geometry::{
        constants::EARTH_RADIUS,
        helpers::{to_degrees, to_radians},
    },
};

/// `from` から方位角 `heading`（度）の方向へ `distance`（メートル）進んだ点を返す。
///
/// ```
/// # use kasane_geodesy::{Coordinate, offset};
/// let origin = Coordinate::new(0.0, 0.0).unwrap();
/// let east = offset(&origin, 1_000_000.0, 90.0).unwrap();
/// assert!(east.as_latitude().abs() < 1e-9);
/// assert!(east.as_longitude() > 0.0);
/// ```
pub fn offset(from: &Coordinate, distance: f64, heading: f64) -> Result<Coordinate, Error> {
    offset_with_radius(from, distance, heading, EARTH_RADIUS)
}

/// 半径 `radius` の球上で、`from` から `heading` の方向へ `distance` 進んだ点を返す。
///
/// 結果は正規化された [`Coordinate`] になる。
///
/// # エラー
/// `distance` や `heading` が有限でないなど、結果が数値にならない場合は
/// [`Error::InvalidCoordinate`] を返す。
pub fn offset_with_radius(
    from: &Coordinate,
    distance: f64,
    heading: f64,
    radius: f64,
) -> Result<Coordinate, Error> {
    let from = from.normalized();
    let angular = distance / radius;
    let heading = to_radians(heading);
    let from_lat = to_radians(from.as_latitude());

    let (sin_dist, cos_dist) = angular.sin_cos();
    let (sin_lat, cos_lat) = from_lat.sin_cos();

    // 丸め誤差で asin の定義域を外れないようにする
    let sc = (cos_dist * sin_lat + sin_dist * cos_lat * heading.cos()).clamp(-1.0, 1.0);

    let lng = to_radians(from.as_longitude())
        + f64::atan2(sin_dist * cos_lat * heading.sin(), cos_dist - sin_lat * sc);

    Coordinate::new(to_degrees(sc.asin()), to_degrees(lng))
}
