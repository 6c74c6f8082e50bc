//! GCJ-02 ⇄ BD-09
//!
//! 把 (经度, 纬度) 当作极坐标做微小扰动，再加固定偏移。
//! 逆变换在偏移后的点上计算扰动项，与正向并不完全抵消，往返误差约 1e-6 度（亚米级）。

use crate::constants::{BD_LAT_OFFSET, BD_LON_OFFSET, X_PI};
use crate::point::LonLat;

/// GCJ-02 → BD-09
#[must_use]
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> LonLat {
    let x = lon;
    let y = lat;
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000_003 * (x * X_PI).cos();
    LonLat::new(z * theta.cos() + BD_LON_OFFSET, z * theta.sin() + BD_LAT_OFFSET)
}

/// BD-09 → GCJ-02
#[must_use]
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> LonLat {
    let x = lon - BD_LON_OFFSET;
    let y = lat - BD_LAT_OFFSET;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000_003 * (x * X_PI).cos();
    LonLat::new(z * theta.cos(), z * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_golden_value() {
        let p = gcj02_to_bd09(116.404, 39.915);
        assert!((p.lon - 116.410_369_493_710_29).abs() < 1e-9, "lon: {}", p.lon);
        assert!((p.lat - 39.921_336_993_510_22).abs() < 1e-9, "lat: {}", p.lat);
    }

    #[test]
    fn test_inverse_golden_value() {
        let p = bd09_to_gcj02(116.404, 39.915);
        assert!((p.lon - 116.397_627_291_193_15).abs() < 1e-9, "lon: {}", p.lon);
        assert!((p.lat - 39.908_656_739_576_31).abs() < 1e-9, "lat: {}", p.lat);
    }

    #[test]
    fn test_round_trip() {
        let points = [
            (116.404, 39.915),
            (121.4737, 31.2304),
            (-73.9857, 40.7484),
            (100.0, 60.0),
        ];
        for &(lon, lat) in &points {
            let bd = gcj02_to_bd09(lon, lat);
            let back = bd09_to_gcj02(bd.lon, bd.lat);
            let err = back.max_abs_diff(&LonLat::new(lon, lat));
            assert!(err < 2e-6, "({lon}, {lat}) round trip error: {err}");
        }
    }

    #[test]
    fn test_round_trip_is_not_exact() {
        // 上海往返误差约 7e-7 度
        let bd = gcj02_to_bd09(121.4737, 31.2304);
        let back = bd09_to_gcj02(bd.lon, bd.lat);
        let err = back.max_abs_diff(&LonLat::new(121.4737, 31.2304));
        assert!(err > 1e-7 && err < 1e-6, "round trip error: {err}");
    }

    #[test]
    fn test_applies_everywhere() {
        // 与 GCJ-02 不同，BD-09 偏移不受区域限制
        let p = gcj02_to_bd09(-73.9857, 40.7484);
        assert!(p.max_abs_diff(&LonLat::new(-73.9857, 40.7484)) > 1e-3);
    }
}
