//! 按坐标系命名的转换函数
//!
//! 12 个有序坐标系对各一个函数。经纬度可以是数字或字符串，字符串按
//! [`parse_float`](crate::input::parse_float) 规则解析，非法输入得到 NaN 结果。
//!
//! # 示例
//!
//! ```
//! use lonlat_convert::convert::{baidu_to_gps, gps_to_google};
//!
//! let gcj = gps_to_google(116.3974, 39.9093);
//! let same = gps_to_google("116.3974", "39.9093");
//! assert_eq!(gcj, same);
//!
//! assert!(baidu_to_gps("abc", 39.9).is_nan());
//! ```

use crate::input::CoordValue;
use crate::point::LonLat;
use crate::transform;

// ============================================================================
// GPS (WGS-84)
// ============================================================================

/// GPS → Google (WGS-84 → GCJ-02)
pub fn gps_to_google(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::wgs84_to_gcj02(lon.to_coord(), lat.to_coord())
}

/// GPS → 百度 (WGS-84 → BD-09)
pub fn gps_to_baidu(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::wgs84_to_bd09(lon.to_coord(), lat.to_coord())
}

/// GPS → 图吧
pub fn gps_to_tuba(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::wgs84_to_tuba(lon.to_coord(), lat.to_coord())
}

// ============================================================================
// Google (GCJ-02)
// ============================================================================

/// Google → GPS (GCJ-02 → WGS-84，近似逆)
pub fn google_to_gps(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::gcj02_to_wgs84(lon.to_coord(), lat.to_coord())
}

/// Google → 百度 (GCJ-02 → BD-09)
pub fn google_to_baidu(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::gcj02_to_bd09(lon.to_coord(), lat.to_coord())
}

/// Google → 图吧（经 GPS）
pub fn google_to_tuba(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::gcj02_to_tuba(lon.to_coord(), lat.to_coord())
}

// ============================================================================
// 百度 (BD-09)
// ============================================================================

/// 百度 → GPS（经 Google）
pub fn baidu_to_gps(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::bd09_to_wgs84(lon.to_coord(), lat.to_coord())
}

/// 百度 → Google (BD-09 → GCJ-02)
pub fn baidu_to_google(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::bd09_to_gcj02(lon.to_coord(), lat.to_coord())
}

/// 百度 → 图吧（经 Google、GPS）
pub fn baidu_to_tuba(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::bd09_to_tuba(lon.to_coord(), lat.to_coord())
}

// ============================================================================
// 图吧
// ============================================================================

/// 图吧 → GPS
pub fn tuba_to_gps(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::tuba_to_wgs84(lon.to_coord(), lat.to_coord())
}

/// 图吧 → Google（经 GPS）
pub fn tuba_to_google(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::tuba_to_gcj02(lon.to_coord(), lat.to_coord())
}

/// 图吧 → 百度（经 GPS、Google）
pub fn tuba_to_baidu(lon: impl CoordValue, lat: impl CoordValue) -> LonLat {
    transform::tuba_to_bd09(lon.to_coord(), lat.to_coord())
}
