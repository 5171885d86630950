use serde_json::{Map, Value};

use crate::{
    Coordinate,
    error::Error,
    geometry::coordinate::parse_float,
};

/// `lat()` / `lng()` のアクセサを持つ外部の緯度経度型。
///
/// 地図 SDK などの独自の型を [`PointLike::Accessor`] として渡すために実装する。
pub trait LatLngAccessor {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl LatLngAccessor for Coordinate {
    fn lat(&self) -> f64 {
        self.as_latitude()
    }

    fn lng(&self) -> f64 {
        self.as_longitude()
    }
}

/// 点として解釈できる入力。
///
/// 構造を持つ入力は [`serde_json::Value`] で表し、キーの有無によって解釈を決める。
#[derive(Clone, Copy)]
pub enum PointLike<'a> {
    /// すでに [`Coordinate`] であるもの
    Coordinate(Coordinate),
    /// `lat()` / `lng()` を呼び出して値を得るもの
    Accessor(&'a dyn LatLngAccessor),
    /// `{lat, lng}`・`{lat, long}`・`[lng, lat]`・`{x, y}` のいずれかの構造
    Structure(&'a Value),
}

impl From<Coordinate> for PointLike<'_> {
    fn from(value: Coordinate) -> Self {
        PointLike::Coordinate(value)
    }
}

impl<'a> From<&'a Value> for PointLike<'a> {
    fn from(value: &'a Value) -> Self {
        PointLike::Structure(value)
    }
}

impl TryFrom<&Value> for Coordinate {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        convert(PointLike::Structure(value))
    }
}

/// 点として解釈できる入力を [`Coordinate`] に変換する。
///
/// 次の順に形状を試し、最初に当てはまったものを採用する。
/// 1. [`Coordinate`] そのもの
/// 2. `lat()` / `lng()` アクセサ
/// 3. `lat` と `lng` を持つ（値は浮動小数点数として解釈）
/// 4. `lat` と `long` を持つ
/// 5. 0番目と1番目が数値（1番目を緯度、0番目を経度とする）
/// 6. `x` と `y` を持つ（`y` を緯度、`x` を経度とする）
///
/// # エラー
/// どの形状にも当てはまらなければ [`Error::Conversion`] を、
/// 値が数値として解釈できなければ [`Error::InvalidCoordinate`] を返す。
///
/// ```
/// # use kasane_geodesy::{convert, PointLike};
/// # use serde_json::json;
/// let pair = json!([139.77, 35.68]);
/// let c = convert(PointLike::Structure(&pair)).unwrap();
/// assert_eq!(c.as_latitude(), 35.68);
/// assert_eq!(c.as_longitude(), 139.77);
///
/// let text = json!({"lat": "35.68", "long": "139.77"});
/// assert_eq!(convert(PointLike::Structure(&text)).unwrap(), c);
///
/// assert!(convert(PointLike::Structure(&json!({"north": 1}))).is_err());
/// ```
pub fn convert(like: PointLike<'_>) -> Result<Coordinate, Error> {
    match like {
        PointLike::Coordinate(coordinate) => {
            Coordinate::new(coordinate.as_latitude(), coordinate.as_longitude())
        }
        PointLike::Accessor(accessor) => Coordinate::new(accessor.lat(), accessor.lng()),
        PointLike::Structure(value) => convert_structure(value),
    }
}

/// [`convert`] した結果を `T` に変換する。
pub fn convert_into<T: From<Coordinate>>(like: PointLike<'_>) -> Result<T, Error> {
    convert(like).map(T::from)
}

/// 点の列をまとめて変換する。1つでも失敗すればそのエラーを返す。
pub fn convert_all<'a, I>(likes: I) -> Result<Vec<Coordinate>, Error>
where
    I: IntoIterator<Item = PointLike<'a>>,
{
    likes.into_iter().map(convert).collect()
}

/// 2つの点を変換したうえで [`Coordinate::equals`] で比較する。
pub fn equal_lat_lngs(one: PointLike<'_>, two: PointLike<'_>) -> Result<bool, Error> {
    Ok(convert(one)?.equals(&convert(two)?))
}

fn convert_structure(value: &Value) -> Result<Coordinate, Error> {
    if let Value::Object(map) = value {
        if let Some((lat, lng)) = pair(map, "lat", "lng") {
            return Coordinate::new(float_of(lat), float_of(lng));
        }
        if let Some((lat, long)) = pair(map, "lat", "long") {
            return Coordinate::new(float_of(lat), float_of(long));
        }
    }

    if let Some((lng, lat)) = indexed_pair(value) {
        return Coordinate::new(lat, lng);
    }

    if let Value::Object(map) = value {
        if let Some((x, y)) = pair(map, "x", "y") {
            return Coordinate::new(float_of(y), float_of(x));
        }
    }

    log::debug!("no point shape matches {}", value);
    Err(Error::Conversion {
        value: value.to_string(),
    })
}

fn pair<'v>(map: &'v Map<String, Value>, a: &str, b: &str) -> Option<(&'v Value, &'v Value)> {
    Some((map.get(a)?, map.get(b)?))
}

/// 0番目と1番目がともに数値であれば `(0番目, 1番目)` を返す。
///
/// 配列だけでなく `"0"`, `"1"` をキーに持つオブジェクトも対象とする。
fn indexed_pair(value: &Value) -> Option<(f64, f64)> {
    let (first, second) = match value {
        Value::Array(items) => (items.first()?, items.get(1)?),
        Value::Object(map) => pair(map, "0", "1")?,
        _ => return None,
    };
    Some((first.as_f64()?, second.as_f64()?))
}

/// 数値または数値を表す文字列を浮動小数点数として解釈する。解釈できなければ NaN。
fn float_of(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_float(text),
        _ => f64::NAN,
    }
}
