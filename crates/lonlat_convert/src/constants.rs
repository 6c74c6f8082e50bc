//! 加偏算法使用的固定常量
//!
//! GCJ-02 的偏移公式建立在克拉索夫斯基椭球体（北京54坐标系）之上。
//! 所有常量必须逐位保持一致，否则输出会在末位上与各地图服务的结果不同。

/// 克拉索夫斯基椭球体长半轴 (m)
pub const A: f64 = 6_378_245.0;

/// 克拉索夫斯基椭球体第一偏心率平方 e² = f(2-f), f = 1/298.3
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.006_693_421_622_965_943_23;

/// 圆周率
#[allow(clippy::excessive_precision, clippy::approx_constant)]
pub const PI: f64 = 3.141_592_653_589_793_238_462_6;

/// BD-09 极坐标扰动使用的缩放圆周率 π·3000/180
#[allow(clippy::excessive_precision, clippy::approx_constant)]
pub const X_PI: f64 = 3.141_592_653_589_793_24 * 3000.0 / 180.0;

/// 偏移多项式的参考原点经度 (度)
pub const ORIGIN_LON: f64 = 105.0;

/// 偏移多项式的参考原点纬度 (度)
pub const ORIGIN_LAT: f64 = 35.0;

/// BD-09 经度固定偏移
pub const BD_LON_OFFSET: f64 = 0.0065;

/// BD-09 纬度固定偏移
pub const BD_LAT_OFFSET: f64 = 0.006;

/// 图吧定点表示的缩放倍数
pub const TUBA_SCALE: f64 = 100_000.0;

/// 图吧定点表示的取模周期（360° × 缩放倍数）
pub const TUBA_MODULUS: f64 = 36_000_000.0;
