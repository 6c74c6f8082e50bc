//! 坐标输入转换
//!
//! 按坐标系命名的转换函数既接受数字也接受字符串。字符串按 JavaScript
//! `parseFloat` 的规则解析：取最长的合法数字前缀，否则为 NaN。
//! 解析失败不报错，NaN 会沿计算传播到结果中。

/// 可作为经度/纬度输入的值
pub trait CoordValue {
    /// 转换为十进制度
    fn to_coord(&self) -> f64;
}

impl CoordValue for f64 {
    #[inline]
    fn to_coord(&self) -> f64 {
        *self
    }
}

impl CoordValue for f32 {
    #[inline]
    fn to_coord(&self) -> f64 {
        f64::from(*self)
    }
}

impl CoordValue for i32 {
    #[inline]
    fn to_coord(&self) -> f64 {
        f64::from(*self)
    }
}

impl CoordValue for u32 {
    #[inline]
    fn to_coord(&self) -> f64 {
        f64::from(*self)
    }
}

impl CoordValue for i64 {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn to_coord(&self) -> f64 {
        *self as f64
    }
}

impl CoordValue for str {
    #[inline]
    fn to_coord(&self) -> f64 {
        parse_float(self)
    }
}

impl CoordValue for String {
    #[inline]
    fn to_coord(&self) -> f64 {
        parse_float(self)
    }
}

impl<T: CoordValue + ?Sized> CoordValue for &T {
    #[inline]
    fn to_coord(&self) -> f64 {
        (**self).to_coord()
    }
}

/// JavaScript 的空白字符集（StrWhiteSpaceChar）
///
/// 与 Unicode `White_Space` 不同：包含 U+FEFF，不包含 U+0085。
#[inline]
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// 宽松的浮点解析
///
/// - 跳过前导空白（JavaScript 空白字符集）
/// - 接受 `[+-]?(digits[.digits?] | .digits)([eE][+-]?digits)?` 的最长前缀
/// - 接受 `[+-]?Infinity`
/// - 无合法前缀时返回 NaN
///
/// # 示例
///
/// ```
/// use lonlat_convert::input::parse_float;
///
/// assert_eq!(parse_float(" 116.4abc"), 116.4);
/// assert_eq!(parse_float("1e3"), 1000.0);
/// assert!(parse_float("abc").is_nan());
/// ```
#[must_use]
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // 指数部分必须至少带一位数字，否则忽略
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float("116.3974"), 116.3974);
        assert_eq!(parse_float("-73.9857"), -73.9857);
        assert_eq!(parse_float("+12"), 12.0);
        assert_eq!(parse_float("42"), 42.0);
    }

    #[test]
    fn test_partial_forms() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("-.25"), -0.25);
    }

    #[test]
    fn test_prefix_and_whitespace() {
        assert_eq!(parse_float("  39.9093 "), 39.9093);
        assert_eq!(parse_float("\t116.4abc"), 116.4);
        assert_eq!(parse_float("1.5.6"), 1.5);
        assert_eq!(parse_float("12,34"), 12.0);
    }

    #[test]
    fn test_js_whitespace_set() {
        assert_eq!(parse_float("\u{feff}5"), 5.0);
        assert_eq!(parse_float("\u{3000}7"), 7.0);
        assert_eq!(parse_float("\u{a0}\u{2028}-1.5"), -1.5);
        assert!(parse_float("\u{85}5").is_nan());
        assert!(parse_float("\u{200b}5").is_nan());
        assert!(is_js_whitespace('\u{b}'));
        assert!(!is_js_whitespace('\u{85}'));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        assert_eq!(parse_float("3e"), 3.0);
        assert_eq!(parse_float("3e+"), 3.0);
        assert_eq!(parse_float("3ex"), 3.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityxyz"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_invalid_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("+.e5").is_nan());
    }

    #[test]
    fn test_coord_value_impls() {
        assert_eq!(116.5_f64.to_coord(), 116.5);
        assert_eq!(1.5_f32.to_coord(), 1.5);
        assert_eq!(7_i32.to_coord(), 7.0);
        assert_eq!(7_u32.to_coord(), 7.0);
        assert_eq!((-7_i64).to_coord(), -7.0);
        assert_eq!("39.9".to_coord(), 39.9);
        assert_eq!(String::from("39.9").to_coord(), 39.9);
        let owned = String::from("1.25");
        assert_eq!((&owned).to_coord(), 1.25);
    }
}
