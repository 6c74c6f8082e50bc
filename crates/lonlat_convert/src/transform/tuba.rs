//! WGS-84 ⇄ 图吧
//!
//! 坐标放大 100000 倍并对 36000000 取模，得到以浮点保存的定点表示，
//! 再施加一轮（正向）或两轮（逆向）离散扰动。往返误差只能经验性地界定。

use crate::constants::{TUBA_MODULUS, TUBA_SCALE};
use crate::point::LonLat;

/// 定点化：放大并取模，`%` 保留被除数的符号
#[inline]
fn to_fixed(deg: f64) -> f64 {
    deg * TUBA_SCALE % TUBA_MODULUS
}

/// 单位修正，抵消两次取模累积的漂移
#[inline]
fn unit_correction(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// 一轮离散扰动，返回 (经向增量, 纬向增量)，输入为定点表示
#[inline]
fn perturbation(x: f64, y: f64) -> (f64, f64) {
    let dx = (y / TUBA_SCALE).cos() * (x / 18_000.0) + (x / TUBA_SCALE).sin() * (y / 9_000.0);
    let dy = (y / TUBA_SCALE).sin() * (x / 18_000.0) + (x / TUBA_SCALE).cos() * (y / 9_000.0);
    (dx, dy)
}

/// WGS-84 → 图吧
#[must_use]
pub fn wgs84_to_tuba(lon: f64, lat: f64) -> LonLat {
    let lon = to_fixed(lon);
    let lat = to_fixed(lat);

    let (dx, dy) = perturbation(lon, lat);
    let x = dx + lon;
    let y = dy + lat;

    LonLat::new(x / TUBA_SCALE, y / TUBA_SCALE)
}

/// 图吧 → WGS-84
#[must_use]
pub fn tuba_to_wgs84(lon: f64, lat: f64) -> LonLat {
    let lon = to_fixed(lon);
    let lat = to_fixed(lat);

    let (dx1, dy1) = perturbation(lon, lat);
    let x1 = -dx1 + lon;
    let y1 = -dy1 + lat;

    let (dx2, dy2) = perturbation(x1, y1);
    let x2 = -dx2 + lon + unit_correction(lon);
    let y2 = -dy2 + lat + unit_correction(lat);

    LonLat::new(x2 / TUBA_SCALE, y2 / TUBA_SCALE)
}
