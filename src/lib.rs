/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 緯度経度の座標型と、その変換。
mod geometry;

/// 大円距離・方位角・面積などの測地計算。
mod geodesic;

pub use error::Error;
pub use geometry::{
    constants::EARTH_RADIUS,
    convert::{LatLngAccessor, PointLike, convert, convert_all, convert_into, equal_lat_lngs},
    coordinate::{Coordinate, LatLngLiteral, Normalization},
    helpers::{to_degrees, to_radians},
};

pub use geodesic::{
    area::{
        Orientation, area, area_with_radius, orientation, signed_area, signed_area_with_radius,
        signed_spherical_excess, spherical_excess,
    },
    distance::{distance, distance_with_radius, length, length_with_radius},
    heading::heading,
    interpolate::interpolate,
    offset::{offset, offset_with_radius},
};
