//! 节点与 Pod 详情类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 节点摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub name: String,
    /// Ready 条件是否为 True
    pub ready: bool,
    pub kubelet_version: String,
    pub operating_system: String,
    pub cpu_capacity: String,
    pub cpu_allocatable: String,
    pub memory_capacity: String,
    pub memory_allocatable: String,
    pub pods_capacity: String,
    pub pods_allocatable: String,
}

/// 单个节点上的 Pod 数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodDistribution {
    /// 尚未调度的 Pod 记在空字符串下
    pub node: String,
    pub pods: usize,
}

/// 集群健康摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub namespace: String,
    pub nodes: Vec<NodeSummary>,
    pub ready_nodes: usize,
    pub distribution: Vec<PodDistribution>,
}

/// 容器详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDetail {
    pub name: String,
    pub image: String,
    pub ready: bool,
}

/// Pod 详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodDetails {
    pub name: String,
    pub namespace: String,
    pub phase: String,
    pub pod_ip: Option<String>,
    pub node: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub containers: Vec<ContainerDetail>,
}
