//! Kubernetes quantity 解析
//!
//! 只覆盖 CPU 与内存报告需要的后缀，不支持科学计数法。

/// 二进制后缀（内存常用）
const BINARY_SUFFIXES: [(&str, f64); 6] = [
    ("Ki", 1024.0),
    ("Mi", 1_048_576.0),
    ("Gi", 1_073_741_824.0),
    ("Ti", 1_099_511_627_776.0),
    ("Pi", 1_125_899_906_842_624.0),
    ("Ei", 1_152_921_504_606_846_976.0),
];

/// 十进制后缀
const DECIMAL_SUFFIXES: [(&str, f64); 9] = [
    ("n", 1e-9),
    ("u", 1e-6),
    ("m", 1e-3),
    ("k", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
    ("P", 1e15),
    ("E", 1e18),
];

/// 将 quantity 解析为以“1”为单位的浮点值
fn parse_quantity(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // 二进制后缀是两个字符，必须先于十进制后缀匹配
    for (suffix, factor) in BINARY_SUFFIXES.iter().chain(DECIMAL_SUFFIXES.iter()) {
        if let Some(number) = raw.strip_suffix(suffix) {
            return number.parse::<f64>().ok().map(|n| n * factor);
        }
    }

    raw.parse::<f64>().ok()
}

/// 解析 CPU quantity 为毫核
///
/// `250m` → 250, `1` → 1000, `1.5` → 1500, `123456789n` → 123
#[allow(clippy::cast_possible_truncation)]
pub fn parse_cpu_millis(raw: &str) -> Option<i64> {
    parse_quantity(raw).map(|cores| (cores * 1000.0).round() as i64)
}

/// 解析内存 quantity 为字节
///
/// `128Mi` → 134217728, `1k` → 1000, `512` → 512
#[allow(clippy::cast_possible_truncation)]
pub fn parse_memory_bytes(raw: &str) -> Option<i64> {
    parse_quantity(raw).map(|bytes| bytes.round() as i64)
}
