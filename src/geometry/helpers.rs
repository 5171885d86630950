/// 単位球上の3次元ベクトル。
pub mod vec3;

/// 度をラジアンに変換する。
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// ラジアンを度に変換する。
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
