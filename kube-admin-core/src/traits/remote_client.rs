//! 远程集群客户端抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{
    DependencySnapshot, NodeSummary, PodDetails, ResourceKind, ResourceList, ResourceRef,
    ResourceSpec, UsageSample,
};

/// 远程集群客户端 Trait
///
/// 所有调用都可能阻塞、都可能失败。调用方只能在后台任务中 await 它们，
/// 绝不能在 UI 线程上直接调用。
///
/// 实现:
/// - `KubeClient` (kube-rs，`kube-client` feature)
/// - 测试中的内存 mock
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// 列出命名空间内某一类资源
    ///
    /// # Arguments
    /// * `kind` - 资源类型
    /// * `namespace` - 命名空间
    async fn list_resources(&self, kind: ResourceKind, namespace: &str) -> CoreResult<ResourceList>;

    /// 创建资源
    ///
    /// # Arguments
    /// * `spec` - 创建请求（已包含命名空间）
    async fn create_resource(&self, spec: &ResourceSpec) -> CoreResult<ResourceRef>;

    /// 删除资源
    async fn delete_resource(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> CoreResult<ResourceRef>;

    /// 获取 Pod 详情
    async fn describe_pod(&self, namespace: &str, name: &str) -> CoreResult<PodDetails>;

    /// 获取 Pod 日志（已读取为完整文本）
    async fn pod_logs(&self, namespace: &str, name: &str) -> CoreResult<String>;

    /// 列出集群节点
    async fn list_nodes(&self) -> CoreResult<Vec<NodeSummary>>;

    /// 获取命名空间内 Pod 的实时使用量
    async fn resource_metrics(&self, namespace: &str) -> CoreResult<Vec<UsageSample>>;

    /// 采集用于依赖关系图的资源快照
    async fn dependency_snapshot(&self, namespace: &str) -> CoreResult<DependencySnapshot>;
}
