/// 赤道における地球の半径（メートル）。
///
/// 半径を明示しない関数はすべてこの値を用いるため、距離はメートル、面積は平方メートルになる。
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// 補間で2点が同一とみなす角距離の正弦の閾値（ラジアン）
pub const INTERPOLATION_EPSILON: f64 = 1e-6;

/// 固定小数点表記で指定できる最大の桁数
pub const MAX_URL_PRECISION: u8 = 100;
