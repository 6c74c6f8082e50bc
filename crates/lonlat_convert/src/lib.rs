// crates/lonlat_convert/src/lib.rs
//! 国内地图坐标系互转
//!
//! 支持四种坐标系之间的双向转换：
//!
//! | 标签 | 大地基准 | 说明 |
//! |------|----------|------|
//! | `gps` | WGS-84 | 国际通用，GPS/北斗设备输出 |
//! | `google` | GCJ-02 | 国测局加偏，谷歌中国、高德、腾讯采用 |
//! | `baidu` | BD-09 | 百度在 GCJ-02 基础上再加偏 |
//! | `tuba` | 图吧 | 厂商私有坐标 |
//!
//! # 模块
//!
//! - `constants`: 加偏算法常量
//! - `region`: 加偏适用区域判定
//! - `correction`: GCJ-02 偏移多项式
//! - `transform`: 按大地基准命名的逐对转换（`f64` 输入）
//! - `convert`: 按坐标系命名的转换（数字或字符串输入）
//! - `dispatch`: 通用转换入口与 4×4 转换表
//! - `config`: 分发配置
//!
//! # 示例
//!
//! ```
//! use lonlat_convert::prelude::*;
//!
//! // 类型化转换
//! let gcj = convert(LonLat::new(116.3974, 39.9093), CoordSystem::Gps, CoordSystem::Google);
//!
//! // 字符串标签转换，参数顺序：经度、纬度、目标、源
//! let same = convert_point(116.3974, 39.9093, "google", "gps").unwrap();
//! assert_eq!(gcj, same);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod constants;
pub mod convert;
pub mod correction;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod point;
pub mod region;
pub mod system;
pub mod transform;

/// 预导入模块
pub mod prelude {
    pub use crate::config::{DispatchConfig, UnknownTargetPolicy};
    pub use crate::dispatch::{convert, convert_point, Converter};
    pub use crate::error::{ConvertError, ConvertResult};
    pub use crate::input::CoordValue;
    pub use crate::point::LonLat;
    pub use crate::system::CoordSystem;
}

// 重导出常用类型
pub use config::{DispatchConfig, UnknownTargetPolicy};
pub use convert::{
    baidu_to_google, baidu_to_gps, baidu_to_tuba, google_to_baidu, google_to_gps, google_to_tuba,
    gps_to_baidu, gps_to_google, gps_to_tuba, tuba_to_baidu, tuba_to_google, tuba_to_gps,
};
pub use dispatch::{convert, convert_point, converter_for, Converter};
pub use error::{ConvertError, ConvertResult};
pub use input::CoordValue;
pub use point::LonLat;
pub use region::is_outside_covered_region;
pub use system::CoordSystem;
pub use transform::{
    bd09_to_gcj02, bd09_to_tuba, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_tuba, gcj02_to_wgs84,
    tuba_to_bd09, tuba_to_gcj02, tuba_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02, wgs84_to_tuba,
};
