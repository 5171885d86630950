use serde::{Deserialize, Serialize};
use thiserror::Error;

/// このライブラリで発生し得るすべてのエラー。
///
/// いずれも呼び出し側の入力が不正であることを表し、再試行で回復するものではない。
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Error {
    /// 緯度または経度が有限の数値として解釈できない。
    #[error("Latitude '{latitude}' or longitude '{longitude}' is not a finite number")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// 点として解釈できる形状のいずれにも当てはまらない入力。
    #[error("Value '{value}' does not match any supported point shape")]
    Conversion { value: String },

    /// 点の個数が要求と一致しない。
    #[error("Expected exactly {expected} points, got {actual}")]
    InvalidArgument { expected: usize, actual: usize },

    #[error("Precision '{precision}' is out of range (valid: 0..=100)")]
    PrecisionOutOfRange { precision: u8 },
}
