//! 报告服务层
//!
//! 组合 `RemoteClient` 的多次调用，生成健康检查、资源分析与依赖关系图。

mod dependency_graph;
mod health;
mod usage_analyzer;

pub use dependency_graph::{build_dot, DotGraphRenderer};
pub use health::build_health_report;
pub use usage_analyzer::{analyze, RECOMMENDATION_HEADROOM};

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::RemoteClient;
use crate::types::{HealthReport, PodSummary, ResourceKind, ResourceList, UsageReport};

/// 报告服务
pub struct ReportService {
    client: Arc<dyn RemoteClient>,
}

impl ReportService {
    #[must_use]
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }

    /// 节点状态 + 命名空间内 Pod 分布
    pub async fn health(&self, namespace: &str) -> CoreResult<HealthReport> {
        let nodes = self.client.list_nodes().await?;
        let pods = self.pods(namespace).await?;
        Ok(build_health_report(namespace, nodes, &pods))
    }

    /// requests 与实际使用量对比
    pub async fn usage(&self, namespace: &str) -> CoreResult<UsageReport> {
        let pods = self.pods(namespace).await?;
        let samples = self.client.resource_metrics(namespace).await?;
        Ok(analyze(namespace, &pods, &samples))
    }

    async fn pods(&self, namespace: &str) -> CoreResult<Vec<PodSummary>> {
        match self
            .client
            .list_resources(ResourceKind::Pod, namespace)
            .await?
        {
            ResourceList::Pods(pods) => Ok(pods),
            other => Err(CoreError::Serialization(format!(
                "expected pod list, got {}",
                other.kind()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{node, pod, MockRemoteClient};
    use crate::types::UsageSample;

    #[tokio::test]
    async fn health_combines_nodes_and_pods() {
        let client = Arc::new(MockRemoteClient::new());
        client
            .set_nodes(vec![node("node-a", true), node("node-b", false)])
            .await;
        client.add_pod(pod("web-1", "default", Some("node-a"))).await;
        client.add_pod(pod("web-2", "default", Some("node-a"))).await;
        client.add_pod(pod("other", "kube-system", Some("node-b"))).await;

        let service = ReportService::new(client);
        let report = service.health("default").await.unwrap();

        assert_eq!(report.ready_nodes, 1);
        assert_eq!(report.nodes.len(), 2);
        assert_eq!(report.distribution.len(), 1);
        assert_eq!(report.distribution[0].node, "node-a");
        assert_eq!(report.distribution[0].pods, 2);
    }

    #[tokio::test]
    async fn usage_uses_metrics_from_client() {
        let client = Arc::new(MockRemoteClient::new());
        let mut web = pod("web-1", "default", Some("node-a"));
        web.cpu_request_millis = 500;
        web.memory_request_bytes = 256 * 1024 * 1024;
        client.add_pod(web).await;
        client
            .set_metrics(vec![UsageSample {
                pod: "web-1".into(),
                cpu_millis: 100,
                memory_bytes: 64 * 1024 * 1024,
            }])
            .await;

        let service = ReportService::new(client);
        let report = service.usage("default").await.unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].cpu_recommended_millis, 120);
        assert_eq!(report.rows[0].cpu_savings_millis, 380);
    }

    #[tokio::test]
    async fn metrics_failure_propagates() {
        let client = Arc::new(MockRemoteClient::new());
        client.set_metrics_error(Some("metrics API not available".into())).await;

        let service = ReportService::new(client);
        let err = service.usage("default").await.unwrap_err();

        assert!(matches!(err, CoreError::Metrics(_)));
    }
}
