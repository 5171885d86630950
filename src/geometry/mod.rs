//! 地理空間座標を扱うための型やロジック。
//!
//! 角度は特に明記しない限り度（°）単位で扱います。

/// 地球半径など、計算で使用される定数。
pub mod constants;

/// 緯度・経度で定義される `Coordinate` 型。
pub mod coordinate;

/// 点として解釈できる様々な入力から `Coordinate` への変換。
pub mod convert;

/// 固定小数点表記への整形。
pub mod format;

pub mod helpers;
