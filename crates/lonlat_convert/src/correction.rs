//! GCJ-02 经纬度偏移多项式
//!
//! 经验公式，非物理推导。输入是相对参考原点 (105°E, 35°N) 的偏移量，
//! 输出是未缩放的偏移修正量。
//!
//! 浮点求和顺序会影响末位结果，运算顺序与常量必须保持原样。

use crate::constants::PI;

/// 纬度偏移修正量
#[must_use]
pub fn correct_latitude(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// 经度偏移修正量
#[must_use]
pub fn correct_longitude(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_origin() {
        // 原点处所有正弦项为零
        assert!((correct_latitude(0.0, 0.0) - -100.0).abs() < 1e-12);
        assert!((correct_longitude(0.0, 0.0) - 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_integer_offsets_cancel_fast_terms() {
        // x 为整数时 sin(6xπ)、sin(2xπ)、sin(xπ) 均约为零
        let lon = correct_longitude(3.0, 0.0);
        let expected = 300.0 + 3.0 + 0.9 + 0.1 * 3.0_f64.sqrt()
            + (300.0 * (3.0 / 30.0 * PI).sin() + 150.0 * (3.0 / 12.0 * PI).sin()) * 2.0 / 3.0;
        assert!((lon - expected).abs() < 1e-9, "lon correction: {lon}");
    }

    #[test]
    fn test_abs_under_sqrt() {
        assert!(correct_latitude(-4.0, 1.0).is_finite());
        assert!(correct_longitude(-4.0, 1.0).is_finite());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(correct_latitude(f64::NAN, 0.0).is_nan());
        assert!(correct_longitude(0.0, f64::NAN).is_nan());
    }
}
