//! 资源使用分析
//!
//! 推荐值 = 实际使用量 × 1.2，可节省量 = requests − 推荐值。

use std::collections::HashMap;

use crate::types::{PodSummary, UsageReport, UsageReportRow, UsageSample};

/// 推荐值相对实际使用量的余量
pub const RECOMMENDATION_HEADROOM: f64 = 1.2;

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn recommend(usage: i64) -> i64 {
    (usage as f64 * RECOMMENDATION_HEADROOM) as i64
}

/// 生成资源分析报告
///
/// 没有 metrics 的 Pod 记入 `skipped`，不会中断整个报告。
///
/// `rows` 包含所有有 metrics 的 Pod（包括 requests 偏低、可节省量为负的），
/// 便于同时发现过度申请和申请不足。合计按维度分别统计：
/// CPU 合计只累加正的 CPU 可节省量，内存同理，某一维为负不会抵消另一维。
pub fn analyze(namespace: &str, pods: &[PodSummary], samples: &[UsageSample]) -> UsageReport {
    let by_pod: HashMap<&str, &UsageSample> =
        samples.iter().map(|s| (s.pod.as_str(), s)).collect();

    let mut rows = Vec::with_capacity(pods.len());
    let mut skipped = Vec::new();

    for pod in pods {
        let Some(sample) = by_pod.get(pod.name.as_str()) else {
            log::warn!("No metrics for pod {}/{}, skipping", pod.namespace, pod.name);
            skipped.push(pod.name.clone());
            continue;
        };

        let cpu_recommended = recommend(sample.cpu_millis);
        let memory_recommended = recommend(sample.memory_bytes);

        rows.push(UsageReportRow {
            pod: pod.name.clone(),
            phase: pod.phase.clone(),
            cpu_request_millis: pod.cpu_request_millis,
            cpu_usage_millis: sample.cpu_millis,
            cpu_recommended_millis: cpu_recommended,
            cpu_savings_millis: pod.cpu_request_millis - cpu_recommended,
            memory_request_bytes: pod.memory_request_bytes,
            memory_usage_bytes: sample.memory_bytes,
            memory_recommended_bytes: memory_recommended,
            memory_savings_bytes: pod.memory_request_bytes - memory_recommended,
        });
    }

    rows.sort_by(|a, b| b.cpu_savings_millis.cmp(&a.cpu_savings_millis));

    let total_cpu_savings_millis = rows
        .iter()
        .map(|r| r.cpu_savings_millis)
        .filter(|s| *s > 0)
        .sum();
    let total_memory_savings_bytes = rows
        .iter()
        .map(|r| r.memory_savings_bytes)
        .filter(|s| *s > 0)
        .sum();

    UsageReport {
        namespace: namespace.to_string(),
        rows,
        skipped,
        total_cpu_savings_millis,
        total_memory_savings_bytes,
    }
}
