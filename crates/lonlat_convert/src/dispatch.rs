// crates/lonlat_convert/src/dispatch.rs

//! 通用转换入口
//!
//! 以 (源坐标系, 目标坐标系) 为键查 4×4 转换表，对角线为恒等转换。
//! 字符串标签的回退规则见 [`DispatchConfig`]：
//!
//! | 情形 | 默认结果 |
//! |------|----------|
//! | 源、目标均可识别 | 查表转换 |
//! | 源无法识别 | `None` |
//! | 源可识别、目标无法识别 | 原样返回输入坐标 |
//!
//! # 示例
//!
//! ```
//! use lonlat_convert::{convert_point, LonLat};
//!
//! // 参数顺序：经度、纬度、目标坐标系、源坐标系
//! let bd = convert_point(116.3974, 39.9093, "baidu", "gps").unwrap();
//! assert!(bd.lon > 116.40);
//!
//! assert_eq!(convert_point(116.0, 40.0, "google", "bogus"), None);
//! assert_eq!(convert_point(116.0, 40.0, "bogus", "gps"), Some(LonLat::new(116.0, 40.0)));
//! ```

use crate::config::{DispatchConfig, UnknownTargetPolicy};
use crate::error::{ConvertError, ConvertResult};
use crate::input::CoordValue;
use crate::point::LonLat;
use crate::system::CoordSystem;
use crate::transform::{
    bd09_to_gcj02, bd09_to_tuba, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_tuba, gcj02_to_wgs84,
    identity, tuba_to_bd09, tuba_to_gcj02, tuba_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02,
    wgs84_to_tuba, ConvertFn,
};

// ============================================================================
// 转换表
// ============================================================================

/// 转换表，下标为 `[源][目标]`，顺序同 [`CoordSystem::ALL`]
const CONVERSION_TABLE: [[ConvertFn; 4]; 4] = [
    // 源 gps:    gps             google          baidu           tuba
    [identity, wgs84_to_gcj02, wgs84_to_bd09, wgs84_to_tuba],
    // 源 google
    [gcj02_to_wgs84, identity, gcj02_to_bd09, gcj02_to_tuba],
    // 源 baidu
    [bd09_to_wgs84, bd09_to_gcj02, identity, bd09_to_tuba],
    // 源 tuba
    [tuba_to_wgs84, tuba_to_gcj02, tuba_to_bd09, identity],
];

/// 查表获取转换函数
#[inline]
#[must_use]
pub fn converter_for(source: CoordSystem, target: CoordSystem) -> ConvertFn {
    CONVERSION_TABLE[source.index()][target.index()]
}

/// 类型化转换，对 4×4 组合全部有定义
#[must_use]
pub fn convert(point: LonLat, source: CoordSystem, target: CoordSystem) -> LonLat {
    converter_for(source, target)(point.lon, point.lat)
}

// ============================================================================
// 字符串标签分发
// ============================================================================

/// 按配置解析标签并分发的转换器
///
/// 无内部状态，可在任意线程间共享。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    config: DispatchConfig,
}

impl Converter {
    /// 历史约定的转换器
    pub const LEGACY: Self = Self {
        config: DispatchConfig {
            unknown_target: UnknownTargetPolicy::Passthrough,
            lenient_tags: false,
        },
    };

    /// 使用指定配置创建
    #[must_use]
    pub const fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// 当前配置
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// 解析标签
    #[must_use]
    pub fn resolve(&self, tag: &str) -> Option<CoordSystem> {
        if self.config.lenient_tags {
            tag.parse().ok()
        } else {
            CoordSystem::from_tag(tag)
        }
    }

    /// 转换坐标，参数顺序为 (经度, 纬度, 目标, 源)
    ///
    /// 源坐标系无法识别时返回 `None`；目标坐标系无法识别时按
    /// [`UnknownTargetPolicy`] 处理。
    pub fn convert_point(
        &self,
        lon: impl CoordValue,
        lat: impl CoordValue,
        target: &str,
        source: &str,
    ) -> Option<LonLat> {
        self.try_convert(lon, lat, target, source).ok()
    }

    /// 转换坐标，无法识别的标签以错误返回
    ///
    /// # Errors
    /// - 源坐标系无法识别：[`ConvertError::UnknownSystem`]
    /// - 目标坐标系无法识别且策略为 [`UnknownTargetPolicy::Reject`]：
    ///   [`ConvertError::UnknownSystem`]
    pub fn try_convert(
        &self,
        lon: impl CoordValue,
        lat: impl CoordValue,
        target: &str,
        source: &str,
    ) -> ConvertResult<LonLat> {
        let point = LonLat::new(lon.to_coord(), lat.to_coord());

        let Some(source_sys) = self.resolve(source) else {
            tracing::debug!("无法识别的源坐标系: {:?}", source);
            return Err(ConvertError::unknown_source(source));
        };

        let Some(target_sys) = self.resolve(target) else {
            return match self.config.unknown_target {
                UnknownTargetPolicy::Passthrough => {
                    tracing::debug!("无法识别的目标坐标系: {:?}，原样返回 {}", target, point);
                    Ok(point)
                }
                UnknownTargetPolicy::Reject => {
                    tracing::debug!("无法识别的目标坐标系: {:?}", target);
                    Err(ConvertError::unknown_target(target))
                }
            };
        };

        tracing::trace!("坐标转换: {} -> {} {}", source_sys, target_sys, point);
        Ok(convert(point, source_sys, target_sys))
    }
}

/// 按历史约定转换坐标，参数顺序为 (经度, 纬度, 目标, 源)
///
/// 等价于 [`Converter::LEGACY`] 的 [`Converter::convert_point`]。
pub fn convert_point(
    lon: impl CoordValue,
    lat: impl CoordValue,
    target: &str,
    source: &str,
) -> Option<LonLat> {
    Converter::LEGACY.convert_point(lon, lat, target, source)
}
