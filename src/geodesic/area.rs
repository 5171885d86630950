use crate::{
    Coordinate,
    error::Error,
    geodesic::distance::angular_distance,
    geometry::{constants::EARTH_RADIUS, helpers::vec3::Vec3},
};

/// 閉じた経路の頂点の並び順。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 球の外側から見て反時計回り（符号付き面積が正）
    CounterClockwise,
    /// 球の外側から見て時計回り（符号付き面積が負）
    Clockwise,
    /// 面積が 0（点が3つ未満、またはすべて大円上に並ぶ）
    Degenerate,
}

/// 閉じた経路の面積を返す（地球半径、平方メートル）。
///
/// 最初と最後の点を重ねて与える必要はない。
pub fn area(path: &[Coordinate]) -> f64 {
    area_with_radius(path, EARTH_RADIUS)
}

/// 半径 `radius` の球上で閉じた経路の面積を返す。点が3つ未満なら 0。
///
/// 頂点0を共有する三角形に分割し、各三角形の球過剰を符号なしで合計する。
///
/// ```
/// # use kasane_geodesy::{Coordinate, area_with_radius};
/// let octant = [
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 90.0).unwrap(),
///     Coordinate::new(90.0, 0.0).unwrap(),
/// ];
/// let a = area_with_radius(&octant, 1.0);
/// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn area_with_radius(path: &[Coordinate], radius: f64) -> f64 {
    fan(path).map(triangle_excess).sum::<f64>() * radius.powi(2)
}

/// 閉じた経路の符号付き面積を返す（地球半径、平方メートル）。
pub fn signed_area(path: &[Coordinate]) -> f64 {
    signed_area_with_radius(path, EARTH_RADIUS)
}

/// 半径 `radius` の球上で閉じた経路の符号付き面積を返す。点が3つ未満なら 0。
///
/// 球の外側から見て反時計回りなら正、時計回りなら負になる。
pub fn signed_area_with_radius(path: &[Coordinate], radius: f64) -> f64 {
    fan(path)
        .map(|triangle| triangle_excess(triangle) * orientation_sign(triangle))
        .sum::<f64>()
        * radius.powi(2)
}

/// 閉じた経路の頂点の並び順を返す。
pub fn orientation(path: &[Coordinate]) -> Orientation {
    let signed = signed_area_with_radius(path, 1.0);
    if signed > 0.0 {
        Orientation::CounterClockwise
    } else if signed < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

/// 球面三角形の球過剰（単位球上の面積）を返す。
///
/// # エラー
/// 点がちょうど3つでなければ [`Error::InvalidArgument`] を返す。
pub fn spherical_excess(triangle: &[Coordinate]) -> Result<f64, Error> {
    Ok(triangle_excess(as_triangle(triangle)?))
}

/// 頂点の並び順で符号を付けた球過剰を返す。
///
/// # エラー
/// 点がちょうど3つでなければ [`Error::InvalidArgument`] を返す。
pub fn signed_spherical_excess(triangle: &[Coordinate]) -> Result<f64, Error> {
    let triangle = as_triangle(triangle)?;
    Ok(triangle_excess(triangle) * orientation_sign(triangle))
}

fn as_triangle(points: &[Coordinate]) -> Result<[Coordinate; 3], Error> {
    <[Coordinate; 3]>::try_from(points)
        .map(|triangle| triangle.map(|p| p.normalized()))
        .map_err(|_| Error::InvalidArgument {
            expected: 3,
            actual: points.len(),
        })
}

/// 頂点0を共有する三角形 `(v0, vi, vi+1)` を列挙する
fn fan(path: &[Coordinate]) -> impl Iterator<Item = [Coordinate; 3]> + '_ {
    (1..path.len().saturating_sub(1))
        .map(move |i| [path[0], path[i], path[i + 1]].map(|p| p.normalized()))
}

/// L'Huilier の定理による球過剰
fn triangle_excess(triangle: [Coordinate; 3]) -> f64 {
    let sides = [
        angular_distance(&triangle[0], &triangle[1]),
        angular_distance(&triangle[1], &triangle[2]),
        angular_distance(&triangle[2], &triangle[0]),
    ];
    let s = sides.iter().sum::<f64>() / 2.0;

    let product = sides
        .iter()
        .fold((s / 2.0).tan(), |acc, side| acc * ((s - side) / 2.0).tan());

    4.0 * product.abs().sqrt().atan()
}

/// 外側から見て反時計回りなら 1、それ以外は -1
fn orientation_sign(triangle: [Coordinate; 3]) -> f64 {
    let [a, b, c] = triangle.map(|p| Vec3::from_coord(&p));
    if a.triple(b, c) > 0.0 { 1.0 } else { -1.0 }
}
