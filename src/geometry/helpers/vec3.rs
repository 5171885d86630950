use crate::{Coordinate, geometry::helpers::to_radians};

/// 単位球上の3次元ベクトル（向きの判定用）
#[derive(Debug, Clone, Copy)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 緯度経度 → 単位球上の直交座標
    pub fn from_coord(coord: &Coordinate) -> Self {
        let lat = to_radians(coord.as_latitude());
        let lng = to_radians(coord.as_longitude());
        Self::new(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// スカラー三重積 `self · (b × c)` を返す
    ///
    /// 3点を外側から見て反時計回りに並んでいれば正になる。
    pub fn triple(self, b: Vec3, c: Vec3) -> f64 {
        self.dot(b.cross(c))
    }
}
