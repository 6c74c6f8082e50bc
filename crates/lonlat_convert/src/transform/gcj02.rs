//! WGS-84 ⇄ GCJ-02
//!
//! GCJ-02 加偏只在 [`COVERED_REGION`](crate::region::COVERED_REGION) 内生效，
//! 框外两者重合。逆变换是单次迭代的近似解，误差在厘米到米级，不再继续迭代。

use crate::constants::{A, EE, ORIGIN_LAT, ORIGIN_LON, PI};
use crate::correction::{correct_latitude, correct_longitude};
use crate::point::LonLat;
use crate::region::is_outside_covered_region;

/// WGS-84 → GCJ-02
///
/// 加偏范围外原样返回输入。
///
/// # Arguments
/// - `lon`: 经度 (度)
/// - `lat`: 纬度 (度)
#[must_use]
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> LonLat {
    if is_outside_covered_region(lon, lat) {
        return LonLat::new(lon, lat);
    }

    let mut d_lat = correct_latitude(lon - ORIGIN_LON, lat - ORIGIN_LAT);
    let mut d_lon = correct_longitude(lon - ORIGIN_LON, lat - ORIGIN_LAT);
    let rad_lat = lat / 180.0 * PI;
    let mut magic = rad_lat.sin();
    magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();
    d_lat = d_lat * 180.0 / (A * (1.0 - EE) / (magic * sqrt_magic) * PI);
    d_lon = d_lon * 180.0 / (A / sqrt_magic * rad_lat.cos() * PI);

    LonLat::new(lon + d_lon, lat + d_lat)
}

/// GCJ-02 → WGS-84（近似）
///
/// 把已加偏的点再正向加偏一次估计偏移量：`2·输入 - 正向(输入)`。
#[must_use]
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> LonLat {
    let shifted = wgs84_to_gcj02(lon, lat);
    LonLat::new(lon * 2.0 - shifted.lon, lat * 2.0 - shifted.lat)
}
