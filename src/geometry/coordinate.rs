use std::fmt;

#[cfg(any(test))]
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geometry::{constants::MAX_URL_PRECISION, format::to_fixed},
};
#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(any(test, feature = "random"))]
use std::ops::RangeInclusive;

/// 座標を構築するときに値を正規化するかどうか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// 緯度を `-90.0..=90.0` に丸め込み、経度を `-180.0..180.0` に折り返す。
    /// ただし経度がちょうど `180.0` の場合はそのまま保持する。
    #[default]
    Wrap,
    /// 与えられた値をそのまま保持する。
    Raw,
}

/// 緯度・経度（度）の組をそのまま保持する構造体。
///
/// JSON 表現 `{"lat": .., "lng": ..}` に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngLiteral {
    pub lat: f64,
    pub lng: f64,
}

/// 球面上の一点を緯度・経度（度）で表す値型。
///
/// 構築後は変更できない。等価判定は [`f64::EPSILON`] を許容誤差とする。
///
/// ```
/// # use kasane_geodesy::Coordinate;
/// let c = Coordinate::new(35.681236, 139.767125).unwrap();
/// assert_eq!(c.as_latitude(), 35.681236);
/// assert_eq!(c.as_longitude(), 139.767125);
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(into = "LatLngLiteral", try_from = "LatLngLiteral")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinate")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .finish()
    }
}

impl fmt::Display for Coordinate {
    /// `(lat, lng)` の形式で表示する。
    ///
    /// ```
    /// # use kasane_geodesy::Coordinate;
    /// let c = Coordinate::new(1.5, -20.0).unwrap();
    /// assert_eq!(c.to_string(), "(1.5, -20)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Coordinate {
    /// 緯度・経度から正規化した [`Coordinate`] を生成する。
    ///
    /// 緯度は `-90.0..=90.0` に丸め込まれ、経度は `-180.0..180.0` に折り返される。
    /// 経度がちょうど `180.0` の場合は `-180.0` にはならず `180.0` のまま保持される。
    ///
    /// # エラー
    /// どちらかが有限の数値でない場合は [`Error::InvalidCoordinate`] を返す。
    ///
    /// ```
    /// # use kasane_geodesy::Coordinate;
    /// let c = Coordinate::new(100.0, 190.0).unwrap();
    /// assert_eq!(c.as_latitude(), 90.0);
    /// assert_eq!(c.as_longitude(), -170.0);
    ///
    /// let edge = Coordinate::new(0.0, 180.0).unwrap();
    /// assert_eq!(edge.as_longitude(), 180.0);
    ///
    /// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        Self::with_normalization(latitude, longitude, Normalization::Wrap)
    }

    /// 正規化を行わずに [`Coordinate`] を生成する。
    ///
    /// 値は検証のみ行い、そのまま保持される。
    ///
    /// ```
    /// # use kasane_geodesy::Coordinate;
    /// let c = Coordinate::new_raw(100.0, 190.0).unwrap();
    /// assert_eq!(c.as_latitude(), 100.0);
    /// assert_eq!(c.as_longitude(), 190.0);
    /// ```
    pub fn new_raw(latitude: f64, longitude: f64) -> Result<Self, Error> {
        Self::with_normalization(latitude, longitude, Normalization::Raw)
    }

    /// 指定した [`Normalization`] に従って [`Coordinate`] を生成する。
    pub fn with_normalization(
        latitude: f64,
        longitude: f64,
        normalization: Normalization,
    ) -> Result<Self, Error> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        match normalization {
            Normalization::Wrap => Ok(Self {
                latitude: latitude.clamp(-90.0, 90.0),
                longitude: wrap_longitude(longitude),
            }),
            Normalization::Raw => Ok(Self {
                latitude,
                longitude,
            }),
        }
    }

    /// 文字列の緯度・経度を浮動小数点数として解釈し、正規化した [`Coordinate`] を生成する。
    ///
    /// ```
    /// # use kasane_geodesy::Coordinate;
    /// let c = Coordinate::parse(" 35.5", "139.25").unwrap();
    /// assert_eq!(c.as_latitude(), 35.5);
    ///
    /// assert!(Coordinate::parse("north", "139.25").is_err());
    /// ```
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, Error> {
        Self::new(parse_float(latitude), parse_float(longitude))
    }

    /// 緯度（度）を返す。
    pub fn as_latitude(&self) -> f64 {
        self.latitude
    }

    /// 経度（度）を返す。
    pub fn as_longitude(&self) -> f64 {
        self.longitude
    }

    /// 経度の別名。
    pub fn as_long(&self) -> f64 {
        self.longitude
    }

    /// 直交座標として見た場合の X 成分（経度）を返す。
    pub fn as_x(&self) -> f64 {
        self.longitude
    }

    /// 直交座標として見た場合の Y 成分（緯度）を返す。
    pub fn as_y(&self) -> f64 {
        self.latitude
    }

    /// `[経度, 緯度]` の順の配列を返す。
    ///
    /// GeoJSON などと同じく経度が先になる。
    ///
    /// ```
    /// # use kasane_geodesy::Coordinate;
    /// let c = Coordinate::new(10.0, 20.0).unwrap();
    /// assert_eq!(c.to_array(), [20.0, 10.0]);
    /// ```
    pub fn to_array(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// `(経度, 緯度)` の順のタプルを返す。
    pub fn to_tuple(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// `{lat, lng}` の形の [`LatLngLiteral`] に変換する。
    pub fn to_literal(&self) -> LatLngLiteral {
        LatLngLiteral {
            lat: self.latitude,
            lng: self.longitude,
        }
    }

    /// 正規化した座標を返す。
    ///
    /// 正規化なしで構築された座標も、計算の前には必ずこれを通す。
    pub(crate) fn normalized(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude.clamp(-90.0, 90.0),
            longitude: wrap_longitude(self.longitude),
        }
    }

    /// 緯度・経度の差がともに [`f64::EPSILON`] 未満であれば `true` を返す。
    pub fn equals(&self, other: &Coordinate) -> bool {
        (self.latitude - other.latitude).abs() < f64::EPSILON
            && (self.longitude - other.longitude).abs() < f64::EPSILON
    }

    /// `lat,lng` の形式の文字列を返す。
    ///
    /// 各値は `precision` 桁の固定小数点表記で、四捨五入（0 から遠い方への丸め）を行う。
    ///
    /// # エラー
    /// `precision` が 100 を超える場合は [`Error::PrecisionOutOfRange`] を返す。
    ///
    /// ```
    /// # use kasane_geodesy::Coordinate;
    /// let c = Coordinate::new(35.6812362, -139.7671248).unwrap();
    /// assert_eq!(c.to_url_value(6).unwrap(), "35.681236,-139.767125");
    /// assert_eq!(c.to_url_value(2).unwrap(), "35.68,-139.77");
    /// ```
    pub fn to_url_value(&self, precision: u8) -> Result<String, Error> {
        if precision > MAX_URL_PRECISION {
            return Err(Error::PrecisionOutOfRange { precision });
        }
        let precision = precision as usize;
        Ok(format!(
            "{},{}",
            to_fixed(self.latitude, precision),
            to_fixed(self.longitude, precision)
        ))
    }

    /// 小数点以下6桁の `lat,lng` 形式の文字列を返す。
    pub fn to_url_value_default(&self) -> String {
        format!(
            "{},{}",
            to_fixed(self.latitude, 6),
            to_fixed(self.longitude, 6)
        )
    }

    /// 全球の範囲からランダムに [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        Self::random_within_using(rng, -90.0..=90.0, -180.0..=180.0)
    }

    /// 指定された緯度・経度の範囲内でランダムな [`Coordinate`] を生成します。
    ///
    /// 範囲は正規化の対象となる値域に切り詰められる。境界が NaN の場合は値域の端を用いる。
    #[cfg(any(test, feature = "random"))]
    pub fn random_within_using<R: Rng>(
        rng: &mut R,
        latitude: RangeInclusive<f64>,
        longitude: RangeInclusive<f64>,
    ) -> Self {
        // NaN の境界は値域の端として扱う（f64::max / min は NaN を無視する）
        let lat_start = latitude.start().max(-90.0).min(90.0);
        let lat_end = latitude.end().min(90.0).max(lat_start);
        let lng_start = longitude.start().max(-180.0).min(180.0);
        let lng_end = longitude.end().min(180.0).max(lng_start);

        Self {
            latitude: rng.random_range(lat_start..=lat_end),
            longitude: wrap_longitude(rng.random_range(lng_start..=lng_end)),
        }
    }

    #[cfg(any(test))]
    pub fn arb() -> impl Strategy<Value = Self> {
        (-90.0f64..=90.0, -180.0f64..180.0).prop_map(|(lat, lng)| Coordinate {
            latitude: lat,
            longitude: lng,
        })
    }
}

impl From<Coordinate> for LatLngLiteral {
    fn from(value: Coordinate) -> Self {
        value.to_literal()
    }
}

impl TryFrom<LatLngLiteral> for Coordinate {
    type Error = Error;

    fn try_from(value: LatLngLiteral) -> Result<Self, Self::Error> {
        Coordinate::new(value.lat, value.lng)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        value.to_array()
    }
}

/// 経度を `-180.0..180.0` に折り返す。`180.0` だけは例外としてそのまま返す。
///
/// 範囲内の値は剰余演算を通すと丸め誤差が乗るため、そのまま返す。
pub(crate) fn wrap_longitude(longitude: f64) -> f64 {
    if longitude == 180.0 || (-180.0..180.0).contains(&longitude) {
        longitude
    } else {
        ((longitude + 180.0) % 360.0 + 360.0) % 360.0 - 180.0
    }
}

/// 前後の空白を除いて浮動小数点数として解釈する。解釈できなければ NaN。
pub(crate) fn parse_float(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::ProptestConfig;
    use proptest::proptest;

    #[test]
    fn clamps_latitude() {
        assert_eq!(Coordinate::new(-91.0, 0.0).unwrap().as_latitude(), -90.0);
        assert_eq!(Coordinate::new(90.5, 0.0).unwrap().as_latitude(), 90.0);
    }

    #[test]
    fn wraps_longitude() {
        assert_eq!(Coordinate::new(0.0, 180.0).unwrap().as_longitude(), 180.0);
        assert_eq!(Coordinate::new(0.0, -180.0).unwrap().as_longitude(), -180.0);
        assert_eq!(Coordinate::new(0.0, 540.0).unwrap().as_longitude(), -180.0);
        assert_eq!(Coordinate::new(0.0, 360.0).unwrap().as_longitude(), 0.0);
        assert_eq!(Coordinate::new(0.0, -190.0).unwrap().as_longitude(), 170.0);
        assert_eq!(Coordinate::new(0.0, 721.0).unwrap().as_longitude(), 1.0);
        assert_eq!(Coordinate::new(0.0, 139.77).unwrap().as_longitude(), 139.77);
    }

    #[test]
    fn raw_keeps_values() {
        let c = Coordinate::new_raw(-120.0, 400.0).unwrap();
        assert_eq!(c.as_latitude(), -120.0);
        assert_eq!(c.as_longitude(), 400.0);
    }

    #[test]
    fn rejects_non_finite() {
        for (lat, lng) in [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                Coordinate::new(lat, lng),
                Err(Error::InvalidCoordinate { .. })
            ));
            assert!(matches!(
                Coordinate::new_raw(lat, lng),
                Err(Error::InvalidCoordinate { .. })
            ));
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Coordinate::parse("", "1"),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert_eq!(Coordinate::parse("1e1", "-2.5").unwrap().as_latitude(), 10.0);
    }

    #[test]
    fn aliases() {
        let c = Coordinate::new(12.0, 34.0).unwrap();
        assert_eq!(c.as_x(), 34.0);
        assert_eq!(c.as_y(), 12.0);
        assert_eq!(c.as_long(), 34.0);
        assert_eq!(c.to_tuple(), (34.0, 12.0));
        let array: [f64; 2] = c.into();
        assert_eq!(array, [34.0, 12.0]);
    }

    #[test]
    fn equality_uses_epsilon() {
        let a = Coordinate::new(10.0, 20.0).unwrap();
        let b = Coordinate::new_raw(10.0 + f64::EPSILON / 4.0, 20.0).unwrap();
        let c = Coordinate::new(10.001, 20.0).unwrap();
        assert!(a.equals(&b));
        assert_eq!(a, b);
        assert!(!a.equals(&c));
        assert_ne!(a, c);
    }

    #[test]
    fn json_shape() {
        let c = Coordinate::new(1.5, 2.5).unwrap();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 1.5, "lng": 2.5}));

        let back: Coordinate = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn json_is_normalized_on_read() {
        let c: Coordinate = serde_json::from_str(r#"{"lat": 95.0, "lng": 200.0}"#).unwrap();
        assert_eq!(c.as_latitude(), 90.0);
        assert_eq!(c.as_longitude(), -160.0);
    }

    #[test]
    fn url_value_rounds_half_away_from_zero() {
        let c = Coordinate::new(0.5, -0.5).unwrap();
        assert_eq!(c.to_url_value(0).unwrap(), "1,-1");

        let c = Coordinate::new(1.25, -2.375).unwrap();
        assert_eq!(c.to_url_value(1).unwrap(), "1.3,-2.4");
        assert_eq!(c.to_url_value(2).unwrap(), "1.25,-2.38");
    }

    #[test]
    fn url_value_default_precision() {
        let c = Coordinate::new(1.0, 2.0).unwrap();
        assert_eq!(c.to_url_value_default(), "1.000000,2.000000");
        assert_eq!(c.to_url_value(6).unwrap(), c.to_url_value_default());
    }

    #[test]
    fn url_value_of_huge_raw_values() {
        let c = Coordinate::new_raw(1e21, -2.5e22).unwrap();
        assert_eq!(c.to_url_value(6).unwrap(), "1e+21,-2.5e+22");
    }

    #[test]
    fn url_value_rejects_large_precision() {
        let c = Coordinate::new(1.0, 2.0).unwrap();
        assert!(c.to_url_value(100).is_ok());
        assert_eq!(
            c.to_url_value(101),
            Err(Error::PrecisionOutOfRange { precision: 101 })
        );
    }

    #[test]
    fn display() {
        let c = Coordinate::new(-33.5, 151.0).unwrap();
        assert_eq!(format!("{}", c), "(-33.5, 151)");
    }

    #[test]
    fn normalized_clamps_raw_values() {
        let raw = Coordinate::new_raw(100.0, 190.0).unwrap();
        let n = raw.normalized();
        assert_eq!(n.as_latitude(), 90.0);
        assert_eq!(n.as_longitude(), -170.0);
        assert_eq!(n, Coordinate::new(100.0, 190.0).unwrap());

        let c = Coordinate::new(12.5, 180.0).unwrap();
        assert_eq!(c.normalized().to_tuple(), (180.0, 12.5));
    }

    #[test]
    fn random_within_nan_bounds_uses_full_range() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let c = Coordinate::random_within_using(
                &mut rng,
                f64::NAN..=f64::NAN,
                f64::NAN..=10.0,
            );
            assert!((-90.0..=90.0).contains(&c.as_latitude()));
            assert!((-180.0..=10.0).contains(&c.as_longitude()));
        }
    }

    #[test]
    fn random_within_reversed_bounds() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(11);
        let c = Coordinate::random_within_using(&mut rng, 40.0..=30.0, 5.0..=5.0);
        assert_eq!(c.to_tuple(), (5.0, 40.0));
    }

    #[test]
    fn random_is_normalized() {
        for _ in 0..100 {
            let c = Coordinate::random();
            assert!((-90.0..=90.0).contains(&c.as_latitude()));
            assert!((-180.0..=180.0).contains(&c.as_longitude()));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn normalized_ranges(lat in -1.0e6f64..1.0e6, lng in -1.0e6f64..1.0e6) {
            let c = Coordinate::new(lat, lng).unwrap();
            assert!((-90.0..=90.0).contains(&c.as_latitude()));
            let l = c.as_longitude();
            assert!((-180.0..180.0).contains(&l) || l == 180.0, "longitude {} out of range", l);
        }

        #[test]
        fn literal_round_trip(c in Coordinate::arb()) {
            let back = Coordinate::try_from(c.to_literal()).unwrap();
            assert!(back.equals(&c));
        }
    }
}
