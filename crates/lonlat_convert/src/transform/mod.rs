//! 坐标系之间的逐对转换
//!
//! 按大地基准命名，输入输出均为 `f64`：
//!
//! - [`gcj02`]: WGS-84 ⇄ GCJ-02（区域门控的经验加偏）
//! - [`bd09`]: GCJ-02 ⇄ BD-09（极坐标扰动 + 固定偏移）
//! - [`tuba`]: WGS-84 ⇄ 图吧（定点取模扰动）
//! - [`composite`]: 其余组合，经上述直接公式中转

pub mod bd09;
pub mod composite;
pub mod gcj02;
pub mod tuba;

pub use bd09::{bd09_to_gcj02, gcj02_to_bd09};
pub use composite::{
    bd09_to_tuba, bd09_to_wgs84, gcj02_to_tuba, tuba_to_bd09, tuba_to_gcj02, wgs84_to_bd09,
};
pub use gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
pub use tuba::{tuba_to_wgs84, wgs84_to_tuba};

use crate::point::LonLat;

/// 逐对转换函数签名
pub type ConvertFn = fn(f64, f64) -> LonLat;

/// 恒等转换（同一坐标系）
#[inline]
#[must_use]
pub fn identity(lon: f64, lat: f64) -> LonLat {
    LonLat::new(lon, lat)
}
