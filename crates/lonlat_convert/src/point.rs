//! 经纬度坐标点
//!
//! 每次转换都产生一个新的 [`LonLat`] 值，不做任何舍入或截断。

use serde::{Deserialize, Serialize};

/// 地球平均半径 (米) - 用于 Haversine 公式
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.8;

/// 经纬度坐标（十进制度）
///
/// # 示例
///
/// ```
/// use lonlat_convert::LonLat;
///
/// let p = LonLat::new(116.3974, 39.9093);
/// let (lon, lat): (f64, f64) = p.into();
/// assert_eq!(lon, 116.3974);
/// assert_eq!(lat, 39.9093);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    /// 经度
    pub lon: f64,
    /// 纬度
    pub lat: f64,
}

impl LonLat {
    /// 创建坐标点
    #[inline]
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// 任一分量为 NaN
    ///
    /// 非法数字字符串会解析为 NaN 并一路传播，调用方可用此方法检查结果。
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.lon.is_nan() || self.lat.is_nan()
    }

    /// 与另一点在经纬度上的最大分量差（度）
    #[inline]
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (self.lon - other.lon).abs().max((self.lat - other.lat).abs())
    }

    /// Haversine 大圆距离（米）
    ///
    /// 将地球视为正球体，精度约 0.5%，用于估算加偏/纠偏误差的量级。
    #[must_use]
    pub fn haversine_distance(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

        EARTH_MEAN_RADIUS * 2.0 * a.sqrt().asin()
    }
}

impl std::fmt::Display for LonLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

// ============================================================================
// 转换实现
// ============================================================================

impl From<(f64, f64)> for LonLat {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<LonLat> for (f64, f64) {
    fn from(p: LonLat) -> Self {
        (p.lon, p.lat)
    }
}

impl From<[f64; 2]> for LonLat {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(p: LonLat) -> Self {
        [p.lon, p.lat]
    }
}
