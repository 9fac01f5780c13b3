//! 资源使用量类型定义

use serde::{Deserialize, Serialize};

/// 单个 Pod 的实时使用量（来自 metrics.k8s.io）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSample {
    pub pod: String,
    pub cpu_millis: i64,
    pub memory_bytes: i64,
}

/// 资源分析结果中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReportRow {
    pub pod: String,
    pub phase: String,
    pub cpu_request_millis: i64,
    pub cpu_usage_millis: i64,
    pub cpu_recommended_millis: i64,
    /// 可能为负数（requests 低于推荐值）
    pub cpu_savings_millis: i64,
    pub memory_request_bytes: i64,
    pub memory_usage_bytes: i64,
    pub memory_recommended_bytes: i64,
    pub memory_savings_bytes: i64,
}

/// 资源分析报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    pub namespace: String,
    /// 按 CPU 可节省量降序排列
    pub rows: Vec<UsageReportRow>,
    /// 没有 metrics 数据而被跳过的 Pod
    pub skipped: Vec<String>,
    /// 仅统计正的可节省量
    pub total_cpu_savings_millis: i64,
    pub total_memory_savings_bytes: i64,
}
