use crate::{
    Coordinate,
    geometry::{constants::EARTH_RADIUS, helpers::to_radians},
};

/// 2点間の大円距離を返す（地球半径、メートル）。
///
/// ```
/// # use kasane_geodesy::{Coordinate, distance};
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 90.0).unwrap();
/// assert!((distance(&a, &b) - 10_018_754.17).abs() < 0.01);
/// ```
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    distance_with_radius(from, to, EARTH_RADIUS)
}

/// 半径 `radius` の球上で2点間の大円距離を返す。
///
/// ハーヴァサイン公式を用いる。`radius` に 1 を与えると角距離（ラジアン）になる。
pub fn distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (from, to) = (from.normalized(), to.normalized());
    let from_lat = to_radians(from.as_latitude());
    let from_lng = to_radians(from.as_longitude());
    let to_lat = to_radians(to.as_latitude());
    let to_lng = to_radians(to.as_longitude());

    let hav_lat = ((from_lat - to_lat) / 2.0).sin().powi(2);
    let hav_lng = ((from_lng - to_lng) / 2.0).sin().powi(2);

    // 対蹠点付近で丸め誤差により 1 を超えることがある
    let h = (hav_lat + from_lat.cos() * to_lat.cos() * hav_lng).min(1.0);

    2.0 * h.sqrt().asin() * radius
}

/// 2点間の角距離（ラジアン）
pub(crate) fn angular_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    distance_with_radius(from, to, 1.0)
}

/// 経路の長さを返す（地球半径、メートル）。
pub fn length(path: &[Coordinate]) -> f64 {
    length_with_radius(path, EARTH_RADIUS)
}

/// 連続する2点間の大円距離の合計を返す。点が1つ以下なら 0。
pub fn length_with_radius(path: &[Coordinate], radius: f64) -> f64 {
    path.windows(2)
        .map(|pair| distance_with_radius(&pair[0], &pair[1], radius))
        .sum()
}
