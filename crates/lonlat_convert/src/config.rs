//! 分发配置
//!
//! 默认值完全复现历史约定：源坐标系无法识别时返回 `None`，
//! 目标坐标系无法识别时原样返回输入坐标。两者不对称，这里保留默认行为，
//! 同时允许调用方显式改为拒绝。

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 目标坐标系无法识别时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTargetPolicy {
    /// 原样返回输入坐标（历史行为）
    #[default]
    Passthrough,
    /// 与未知源坐标系一致，视为不支持
    Reject,
}

impl UnknownTargetPolicy {
    /// 策略名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for UnknownTargetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnknownTargetPolicy {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passthrough" | "identity" => Ok(Self::Passthrough),
            "reject" | "none" => Ok(Self::Reject),
            _ => Err(ConvertError::invalid_config(
                "unknown_target",
                format!("未知策略 '{s}'，期望 'passthrough' 或 'reject'"),
            )),
        }
    }
}

/// 分发配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// 目标坐标系无法识别时的策略
    #[serde(default)]
    pub unknown_target: UnknownTargetPolicy,

    /// 是否接受宽松标签（大小写不敏感、`wgs84`/`gcj02`/`bd09` 等别名）
    #[serde(default)]
    pub lenient_tags: bool,
}

impl DispatchConfig {
    /// 历史约定（等同于 `Default`）
    #[must_use]
    pub fn legacy() -> Self {
        Self::default()
    }

    /// 严格模式：任一标签无法识别都视为不支持
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unknown_target: UnknownTargetPolicy::Reject,
            lenient_tags: false,
        }
    }

    /// 设置未知目标策略
    #[must_use]
    pub fn with_unknown_target(mut self, policy: UnknownTargetPolicy) -> Self {
        self.unknown_target = policy;
        self
    }

    /// 设置是否接受宽松标签
    #[must_use]
    pub fn with_lenient_tags(mut self, lenient: bool) -> Self {
        self.lenient_tags = lenient;
        self
    }

    /// 从 JSON 字符串加载，缺省字段取默认值
    ///
    /// # Errors
    /// JSON 格式错误或字段取值无效时返回 [`ConvertError::ConfigParse`]
    pub fn from_json(json: &str) -> ConvertResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// 序列化为 JSON 字符串
    ///
    /// # Errors
    /// 序列化失败时返回 [`ConvertError::ConfigParse`]
    pub fn to_json(&self) -> ConvertResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
