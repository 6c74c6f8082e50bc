// crates/lonlat_convert/src/error.rs
//! 坐标转换错误类型
//!
//! 数值问题从不报错：非法数字字符串解析为 NaN 并沿计算传播。
//! 这里只描述“调用方式”层面的错误。
//!
//! # 错误分类
//!
//! - **标签错误**：源/目标坐标系标签无法识别（仅严格模式）
//! - **配置错误**：分发配置取值无效或 JSON 解析失败

use thiserror::Error;

/// 转换模块结果类型
pub type ConvertResult<T> = Result<T, ConvertError>;

/// 坐标转换错误
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 无法识别的坐标系标签
    #[error("无法识别的{role}坐标系: '{tag}' (支持: gps, google, baidu, tuba)")]
    UnknownSystem {
        /// 原始标签
        tag: String,
        /// 标签角色（"源" 或 "目标"）
        role: &'static str,
    },

    /// 配置项取值无效
    #[error("无效的配置项 '{key}': {reason}")]
    InvalidConfig {
        /// 配置键
        key: &'static str,
        /// 失败原因
        reason: String,
    },

    /// 配置 JSON 解析失败
    #[error("配置解析失败: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl ConvertError {
    /// 创建坐标系标签错误（不区分角色）
    #[inline]
    pub fn unknown_system(tag: impl Into<String>) -> Self {
        Self::UnknownSystem {
            tag: tag.into(),
            role: "",
        }
    }

    /// 创建无法识别的源坐标系错误
    #[inline]
    pub fn unknown_source(tag: impl Into<String>) -> Self {
        Self::UnknownSystem {
            tag: tag.into(),
            role: "源",
        }
    }

    /// 创建无法识别的目标坐标系错误
    #[inline]
    pub fn unknown_target(tag: impl Into<String>) -> Self {
        Self::UnknownSystem {
            tag: tag.into(),
            role: "目标",
        }
    }

    /// 创建配置错误
    #[inline]
    pub fn invalid_config(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }

    /// 是否为标签错误
    #[must_use]
    pub fn is_unknown_system(&self) -> bool {
        matches!(self, Self::UnknownSystem { .. })
    }
}
