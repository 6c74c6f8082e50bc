//! 加偏适用区域判定
//!
//! 用一个矩形包围盒粗略近似中国国土范围，只有落在框内的点才做 GCJ-02 加偏。
//! 边界附近判定不精确，调用方需接受这一点。

use serde::{Deserialize, Serialize};

/// 经纬度矩形范围（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    /// 最小经度
    pub min_lon: f64,
    /// 最大经度
    pub max_lon: f64,
    /// 最小纬度
    pub min_lat: f64,
    /// 最大纬度
    pub max_lat: f64,
}

impl RegionBounds {
    /// 点是否落在范围内（含边界）
    ///
    /// NaN 与任何数比较都为假，因此 NaN 坐标被视为“在范围内”，
    /// 随后由计算过程传播为 NaN 结果。
    #[inline]
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        !(lon < self.min_lon || lon > self.max_lon || lat < self.min_lat || lat > self.max_lat)
    }
}

/// GCJ-02 加偏适用范围
pub const COVERED_REGION: RegionBounds = RegionBounds {
    min_lon: 72.004,
    max_lon: 137.8347,
    min_lat: 0.8293,
    max_lat: 55.8271,
};

/// 判断坐标是否超出加偏适用范围
#[inline]
#[must_use]
pub fn is_outside_covered_region(lon: f64, lat: f64) -> bool {
    !COVERED_REGION.contains(lon, lat)
}
