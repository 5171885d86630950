//! 球面上の測地線（大円）に関する計算。
//!
//! 本モジュールでは角度を度で受け取り、距離と面積は半径と同じ単位で返します。
//! 半径を指定しない関数は [`EARTH_RADIUS`](crate::EARTH_RADIUS) を用いるため、
//! メートルおよび平方メートルになります。

/// 球面三角形の球過剰と閉じた経路の面積。
pub mod area;

/// 2点間の大円距離と経路長。
pub mod distance;

/// 2点間の方位角。
pub mod heading;

/// 大円上の補間。
pub mod interpolate;

/// 始点・距離・方位角からの到達点。
pub mod offset;

#[cfg(test)]
mod tests;
