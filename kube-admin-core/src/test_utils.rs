//! 测试辅助模块
//!
//! 提供内存版 `RemoteClient` 和便捷的测试工厂方法。

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::RemoteClient;
use crate::types::{
    ContainerDetail, DependencySnapshot, NodeSummary, PodDetails, PodSummary, ResourceKind,
    ResourceList, ResourceRef, ResourceSpec, RoleBindingSummary, RoleSummary,
    ServiceAccountSummary, UsageSample,
};

// ===== MockRemoteClient =====

#[derive(Default)]
struct ClusterState {
    pods: Vec<PodSummary>,
    service_accounts: Vec<ServiceAccountSummary>,
    roles: Vec<RoleSummary>,
    role_bindings: Vec<RoleBindingSummary>,
    nodes: Vec<NodeSummary>,
    metrics: Vec<UsageSample>,
    snapshot: DependencySnapshot,
}

pub struct MockRemoteClient {
    state: RwLock<ClusterState>,
    /// 如果 Some，metrics 调用返回此错误
    metrics_error: RwLock<Option<String>>,
}

impl MockRemoteClient {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ClusterState::default()),
            metrics_error: RwLock::new(None),
        }
    }

    pub async fn add_pod(&self, pod: PodSummary) {
        self.state.write().await.pods.push(pod);
    }

    pub async fn set_nodes(&self, nodes: Vec<NodeSummary>) {
        self.state.write().await.nodes = nodes;
    }

    pub async fn set_metrics(&self, metrics: Vec<UsageSample>) {
        self.state.write().await.metrics = metrics;
    }

    pub async fn set_metrics_error(&self, err: Option<String>) {
        *self.metrics_error.write().await = err;
    }

    pub async fn set_snapshot(&self, snapshot: DependencySnapshot) {
        self.state.write().await.snapshot = snapshot;
    }
}

fn not_found(kind: ResourceKind, namespace: &str, name: &str) -> CoreError {
    CoreError::NotFound(format!("{kind} \"{name}\" not found in namespace {namespace}"))
}

/// 按 (namespace, name) 删除，返回是否删除成功
fn remove_by<T>(items: &mut Vec<T>, key: impl Fn(&T) -> (&str, &str), ns: &str, name: &str) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != (ns, name));
    items.len() != before
}

#[async_trait]
impl RemoteClient for MockRemoteClient {
    async fn list_resources(&self, kind: ResourceKind, namespace: &str) -> CoreResult<ResourceList> {
        let state = self.state.read().await;
        Ok(match kind {
            ResourceKind::Pod => ResourceList::Pods(
                state.pods.iter().filter(|p| p.namespace == namespace).cloned().collect(),
            ),
            ResourceKind::ServiceAccount => ResourceList::ServiceAccounts(
                state
                    .service_accounts
                    .iter()
                    .filter(|s| s.namespace == namespace)
                    .cloned()
                    .collect(),
            ),
            ResourceKind::Role => ResourceList::Roles(
                state.roles.iter().filter(|r| r.namespace == namespace).cloned().collect(),
            ),
            ResourceKind::RoleBinding => ResourceList::RoleBindings(
                state
                    .role_bindings
                    .iter()
                    .filter(|r| r.namespace == namespace)
                    .cloned()
                    .collect(),
            ),
        })
    }

    async fn create_resource(&self, spec: &ResourceSpec) -> CoreResult<ResourceRef> {
        let existing = self.list_resources(spec.kind(), spec.namespace()).await?;
        let taken = match &existing {
            ResourceList::Pods(items) => items.iter().any(|i| i.name == spec.name()),
            ResourceList::ServiceAccounts(items) => items.iter().any(|i| i.name == spec.name()),
            ResourceList::Roles(items) => items.iter().any(|i| i.name == spec.name()),
            ResourceList::RoleBindings(items) => items.iter().any(|i| i.name == spec.name()),
        };
        if taken {
            return Err(CoreError::AlreadyExists(spec.to_ref().to_string()));
        }

        let mut state = self.state.write().await;
        match spec {
            ResourceSpec::Pod {
                name,
                namespace,
                image,
            } => {
                let mut p = pod(name, namespace, None);
                p.image = Some(image.clone());
                state.pods.push(p);
            }
            ResourceSpec::ServiceAccount { name, namespace } => {
                state.service_accounts.push(ServiceAccountSummary {
                    name: name.clone(),
                    namespace: namespace.clone(),
                    secrets: 0,
                    created_at: None,
                });
            }
            ResourceSpec::Role {
                name, namespace, ..
            } => state.roles.push(RoleSummary {
                name: name.clone(),
                namespace: namespace.clone(),
                rules: 1,
                created_at: None,
            }),
            ResourceSpec::RoleBinding {
                name,
                namespace,
                role,
                subject_namespace,
                subject_name,
            } => state.role_bindings.push(RoleBindingSummary {
                name: name.clone(),
                namespace: namespace.clone(),
                role: role.clone(),
                subjects: vec![format!("{subject_namespace}/{subject_name}")],
                created_at: None,
            }),
        }
        Ok(spec.to_ref())
    }

    async fn delete_resource(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> CoreResult<ResourceRef> {
        let mut state = self.state.write().await;
        let removed = match kind {
            ResourceKind::Pod => remove_by(
                &mut state.pods,
                |p| (p.namespace.as_str(), p.name.as_str()),
                namespace,
                name,
            ),
            ResourceKind::ServiceAccount => remove_by(
                &mut state.service_accounts,
                |s| (s.namespace.as_str(), s.name.as_str()),
                namespace,
                name,
            ),
            ResourceKind::Role => remove_by(
                &mut state.roles,
                |r| (r.namespace.as_str(), r.name.as_str()),
                namespace,
                name,
            ),
            ResourceKind::RoleBinding => remove_by(
                &mut state.role_bindings,
                |r| (r.namespace.as_str(), r.name.as_str()),
                namespace,
                name,
            ),
        };

        if removed {
            Ok(ResourceRef::new(kind, namespace, name))
        } else {
            Err(not_found(kind, namespace, name))
        }
    }

    async fn describe_pod(&self, namespace: &str, name: &str) -> CoreResult<PodDetails> {
        let state = self.state.read().await;
        let p = state
            .pods
            .iter()
            .find(|p| p.namespace == namespace && p.name == name)
            .ok_or_else(|| not_found(ResourceKind::Pod, namespace, name))?;

        Ok(PodDetails {
            name: p.name.clone(),
            namespace: p.namespace.clone(),
            phase: p.phase.clone(),
            pod_ip: None,
            node: p.node.clone(),
            start_time: None,
            containers: vec![ContainerDetail {
                name: p.name.clone(),
                image: p.image.clone().unwrap_or_default(),
                ready: true,
            }],
        })
    }

    async fn pod_logs(&self, namespace: &str, name: &str) -> CoreResult<String> {
        self.describe_pod(namespace, name).await?;
        Ok(format!("log line from {name}\n"))
    }

    async fn list_nodes(&self) -> CoreResult<Vec<NodeSummary>> {
        Ok(self.state.read().await.nodes.clone())
    }

    async fn resource_metrics(&self, _namespace: &str) -> CoreResult<Vec<UsageSample>> {
        if let Some(ref msg) = *self.metrics_error.read().await {
            return Err(CoreError::Metrics(msg.clone()));
        }
        Ok(self.state.read().await.metrics.clone())
    }

    async fn dependency_snapshot(&self, _namespace: &str) -> CoreResult<DependencySnapshot> {
        Ok(self.state.read().await.snapshot.clone())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 Pod 摘要
pub fn pod(name: &str, namespace: &str, node: Option<&str>) -> PodSummary {
    PodSummary {
        name: name.to_string(),
        namespace: namespace.to_string(),
        phase: "Running".to_string(),
        node: node.map(str::to_string),
        image: None,
        created_at: None,
        cpu_request_millis: 0,
        memory_request_bytes: 0,
    }
}

/// 创建测试用节点摘要
pub fn node(name: &str, ready: bool) -> NodeSummary {
    NodeSummary {
        name: name.to_string(),
        ready,
        kubelet_version: "v1.32.0".to_string(),
        operating_system: "linux".to_string(),
        cpu_capacity: "4".to_string(),
        cpu_allocatable: "3800m".to_string(),
        memory_capacity: "16Gi".to_string(),
        memory_allocatable: "15Gi".to_string(),
        pods_capacity: "110".to_string(),
        pods_allocatable: "110".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_delete_round_trips_state() {
        let client = MockRemoteClient::new();
        let spec = ResourceSpec::ServiceAccount {
            name: "deployer".into(),
            namespace: "default".into(),
        };

        client.create_resource(&spec).await.unwrap();
        assert!(matches!(
            client.create_resource(&spec).await,
            Err(CoreError::AlreadyExists(_))
        ));

        client
            .delete_resource(ResourceKind::ServiceAccount, "default", "deployer")
            .await
            .unwrap();
        assert!(matches!(
            client
                .delete_resource(ResourceKind::ServiceAccount, "default", "deployer")
                .await,
            Err(CoreError::NotFound(_))
        ));
    }
}
