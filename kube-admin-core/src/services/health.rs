//! 集群健康摘要

use std::collections::BTreeMap;

use crate::types::{HealthReport, NodeSummary, PodDistribution, PodSummary};

/// 由节点列表与 Pod 列表生成健康摘要
///
/// Pod 分布按节点名排序；尚未调度的 Pod 计入空节点名。
pub fn build_health_report(
    namespace: &str,
    nodes: Vec<NodeSummary>,
    pods: &[PodSummary],
) -> HealthReport {
    let ready_nodes = nodes.iter().filter(|n| n.ready).count();

    let mut per_node: BTreeMap<&str, usize> = BTreeMap::new();
    for pod in pods.iter().filter(|p| p.namespace == namespace) {
        *per_node.entry(pod.node.as_deref().unwrap_or("")).or_default() += 1;
    }

    let distribution = per_node
        .into_iter()
        .map(|(node, pods)| PodDistribution {
            node: node.to_string(),
            pods,
        })
        .collect();

    HealthReport {
        namespace: namespace.to_string(),
        nodes,
        ready_nodes,
        distribution,
    }
}
