// crates/lonlat_convert/src/system.rs

//! 坐标系标签
//!
//! 分发器只认四个精确的小写标签；`FromStr` 额外接受大地基准别名，
//! 供配置文件和宽松模式使用。

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 支持的坐标系
///
/// # 示例
///
/// ```rust
/// use lonlat_convert::CoordSystem;
///
/// assert_eq!(CoordSystem::from_tag("baidu"), Some(CoordSystem::Baidu));
/// assert_eq!(CoordSystem::from_tag("BD09"), None);
/// assert_eq!("BD09".parse::<CoordSystem>().unwrap(), CoordSystem::Baidu);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordSystem {
    /// WGS-84 国际标准坐标（GPS/北斗设备输出）
    Gps,
    /// GCJ-02 国测局加偏坐标（谷歌中国、高德、腾讯）
    Google,
    /// BD-09 百度坐标，在 GCJ-02 基础上再加偏
    Baidu,
    /// 图吧坐标
    Tuba,
}

impl CoordSystem {
    /// 全部坐标系，顺序与分发表下标一致
    pub const ALL: [Self; 4] = [Self::Gps, Self::Google, Self::Baidu, Self::Tuba];

    /// 精确匹配分发标签（区分大小写）
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gps" => Some(Self::Gps),
            "google" => Some(Self::Google),
            "baidu" => Some(Self::Baidu),
            "tuba" => Some(Self::Tuba),
            _ => None,
        }
    }

    /// 分发标签
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Gps => "gps",
            Self::Google => "google",
            Self::Baidu => "baidu",
            Self::Tuba => "tuba",
        }
    }

    /// 大地基准名称
    pub fn datum_name(&self) -> &'static str {
        match self {
            Self::Gps => "WGS-84",
            Self::Google => "GCJ-02",
            Self::Baidu => "BD-09",
            Self::Tuba => "TUBA",
        }
    }

    /// 分发表下标
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Gps => 0,
            Self::Google => 1,
            Self::Baidu => 2,
            Self::Tuba => 3,
        }
    }
}

impl std::fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for CoordSystem {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gps" | "wgs84" | "wgs-84" => Ok(Self::Gps),
            "google" | "gcj02" | "gcj-02" => Ok(Self::Google),
            "baidu" | "bd09" | "bd-09" => Ok(Self::Baidu),
            "tuba" => Ok(Self::Tuba),
            _ => Err(ConvertError::unknown_system(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_exact() {
        for sys in CoordSystem::ALL {
            assert_eq!(CoordSystem::from_tag(sys.tag()), Some(sys));
        }
        assert_eq!(CoordSystem::from_tag("GPS"), None);
        assert_eq!(CoordSystem::from_tag(" gps"), None);
        assert_eq!(CoordSystem::from_tag("wgs84"), None);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("WGS84".parse::<CoordSystem>().unwrap(), CoordSystem::Gps);
        assert_eq!(" gcj-02 ".parse::<CoordSystem>().unwrap(), CoordSystem::Google);
        assert_eq!("Bd09".parse::<CoordSystem>().unwrap(), CoordSystem::Baidu);
        assert_eq!("TUBA".parse::<CoordSystem>().unwrap(), CoordSystem::Tuba);
        let err = "mars".parse::<CoordSystem>().unwrap_err();
        assert!(err.is_unknown_system());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, sys) in CoordSystem::ALL.iter().enumerate() {
            assert_eq!(sys.index(), i);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CoordSystem::Google).unwrap();
        assert_eq!(json, "\"google\"");
        let sys: CoordSystem = serde_json::from_str("\"tuba\"").unwrap();
        assert_eq!(sys, CoordSystem::Tuba);
    }

    #[test]
    fn test_display() {
        assert_eq!(CoordSystem::Baidu.to_string(), "baidu");
        assert_eq!(CoordSystem::Baidu.datum_name(), "BD-09");
    }
}
