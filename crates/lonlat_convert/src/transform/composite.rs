//! 复合转换
//!
//! 没有直接公式的坐标系对，通过 WGS-84 / GCJ-02 中转。中转路径固定：
//! 每一跳都有各自的近似误差，换一条路径会得到数值上不同的结果。

use super::bd09::{bd09_to_gcj02, gcj02_to_bd09};
use super::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
use super::tuba::{tuba_to_wgs84, wgs84_to_tuba};
use crate::point::LonLat;

/// WGS-84 → BD-09（经 GCJ-02）
#[must_use]
pub fn wgs84_to_bd09(lon: f64, lat: f64) -> LonLat {
    let gcj02 = wgs84_to_gcj02(lon, lat);
    gcj02_to_bd09(gcj02.lon, gcj02.lat)
}

/// BD-09 → WGS-84（经 GCJ-02）
#[must_use]
pub fn bd09_to_wgs84(lon: f64, lat: f64) -> LonLat {
    let gcj02 = bd09_to_gcj02(lon, lat);
    gcj02_to_wgs84(gcj02.lon, gcj02.lat)
}

/// 图吧 → GCJ-02（经 WGS-84）
#[must_use]
pub fn tuba_to_gcj02(lon: f64, lat: f64) -> LonLat {
    let wgs84 = tuba_to_wgs84(lon, lat);
    wgs84_to_gcj02(wgs84.lon, wgs84.lat)
}

/// GCJ-02 → 图吧（经 WGS-84）
#[must_use]
pub fn gcj02_to_tuba(lon: f64, lat: f64) -> LonLat {
    let wgs84 = gcj02_to_wgs84(lon, lat);
    wgs84_to_tuba(wgs84.lon, wgs84.lat)
}

/// BD-09 → 图吧（经 GCJ-02、WGS-84）
#[must_use]
pub fn bd09_to_tuba(lon: f64, lat: f64) -> LonLat {
    let wgs84 = bd09_to_wgs84(lon, lat);
    wgs84_to_tuba(wgs84.lon, wgs84.lat)
}

/// 图吧 → BD-09（经 WGS-84、GCJ-02）
#[must_use]
pub fn tuba_to_bd09(lon: f64, lat: f64) -> LonLat {
    let wgs84 = tuba_to_wgs84(lon, lat);
    wgs84_to_bd09(wgs84.lon, wgs84.lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_to_bd09_golden_value() {
        let p = wgs84_to_bd09(121.4737, 31.2304);
        assert!((p.lon - 121.484_781_468_503).abs() < 1e-9, "lon: {}", p.lon);
        assert!((p.lat - 31.234_310_593_689_997).abs() < 1e-9, "lat: {}", p.lat);
    }

    #[test]
    fn test_bd09_to_wgs84_golden_value() {
        let p = bd09_to_wgs84(121.4737, 31.2304);
        assert!((p.lon - 121.462_651_984_345_02).abs() < 1e-9, "lon: {}", p.lon);
        assert!((p.lat - 31.226_269_837_472_532).abs() < 1e-9, "lat: {}", p.lat);
    }

    #[test]
    fn test_tuba_to_gcj02_follows_wgs84_path() {
        let (lon, lat) = (116.3974, 39.9093);
        let wgs84 = tuba_to_wgs84(lon, lat);
        assert_eq!(tuba_to_gcj02(lon, lat), wgs84_to_gcj02(wgs84.lon, wgs84.lat));
    }

    #[test]
    fn test_bd09_to_tuba_follows_gcj02_path() {
        let (lon, lat) = (116.41, 39.92);
        let gcj02 = bd09_to_gcj02(lon, lat);
        let wgs84 = gcj02_to_wgs84(gcj02.lon, gcj02.lat);
        assert_eq!(bd09_to_tuba(lon, lat), wgs84_to_tuba(wgs84.lon, wgs84.lat));
    }

    #[test]
    fn test_tuba_to_bd09_follows_wgs84_path() {
        let (lon, lat) = (116.3974, 39.9093);
        let wgs84 = tuba_to_wgs84(lon, lat);
        let gcj02 = wgs84_to_gcj02(wgs84.lon, wgs84.lat);
        assert_eq!(tuba_to_bd09(lon, lat), gcj02_to_bd09(gcj02.lon, gcj02.lat));
    }

    #[test]
    fn test_gcj02_to_tuba_follows_wgs84_path() {
        let (lon, lat) = (116.40, 39.91);
        let wgs84 = gcj02_to_wgs84(lon, lat);
        assert_eq!(gcj02_to_tuba(lon, lat), wgs84_to_tuba(wgs84.lon, wgs84.lat));
    }

    #[test]
    fn test_bd09_round_trip_via_wgs84() {
        let wgs = LonLat::new(121.4737, 31.2304);
        let bd = wgs84_to_bd09(wgs.lon, wgs.lat);
        let back = bd09_to_wgs84(bd.lon, bd.lat);
        assert!(back.haversine_distance(&wgs) < 10.0);
    }
}
