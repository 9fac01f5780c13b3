//! 类型定义模块

mod cluster;
mod graph;
mod metrics;
mod resource;

pub use cluster::{ContainerDetail, HealthReport, NodeSummary, PodDetails, PodDistribution};
pub use graph::{DependencySnapshot, DeploymentRefs, ServiceSelector};
pub use metrics::{UsageReport, UsageReportRow, UsageSample};
pub use resource::{
    PodSummary, ResourceKind, ResourceList, ResourceRef, ResourceSpec, RoleBindingSummary,
    RoleSummary, ServiceAccountSummary,
};
