//! 测试辅助模块
//!
//! 提供内存版 `RemoteClient` / `GraphRenderer`，以及驱动 Update 层的便捷函数。

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use kube_admin_core::types::{
    DependencySnapshot, NodeSummary, PodDetails, PodSummary, ResourceList, UsageSample,
};
use kube_admin_core::{
    CoreError, CoreResult, GraphRenderer, RemoteClient, ResourceKind, ResourceRef, ResourceSpec,
};

// ===== StubClient =====

#[derive(Default)]
struct StubState {
    pods: Vec<PodSummary>,
    created: Vec<ResourceSpec>,
    failure: Option<CoreError>,
    panics: bool,
}

/// 内存版集群客户端
///
/// 设置 `fail_with` 后所有调用都返回该错误
pub struct StubClient {
    state: RwLock<StubState>,
}

impl StubClient {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StubState::default()),
        }
    }

    pub async fn add_pod(&self, pod: PodSummary) {
        self.state.write().await.pods.push(pod);
    }

    pub async fn fail_with(&self, err: CoreError) {
        self.state.write().await.failure = Some(err);
    }

    /// 之后的调用直接 panic
    pub async fn panic_on_call(&self) {
        self.state.write().await.panics = true;
    }

    pub async fn created(&self) -> Vec<ResourceSpec> {
        self.state.read().await.created.clone()
    }

    async fn check(&self) -> CoreResult<()> {
        let state = self.state.read().await;
        if state.panics {
            panic!("stub client blew up");
        }
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RemoteClient for StubClient {
    async fn list_resources(&self, kind: ResourceKind, namespace: &str) -> CoreResult<ResourceList> {
        self.check().await?;
        let state = self.state.read().await;
        Ok(match kind {
            ResourceKind::Pod => ResourceList::Pods(
                state
                    .pods
                    .iter()
                    .filter(|p| p.namespace == namespace)
                    .cloned()
                    .collect(),
            ),
            ResourceKind::ServiceAccount => ResourceList::ServiceAccounts(Vec::new()),
            ResourceKind::Role => ResourceList::Roles(Vec::new()),
            ResourceKind::RoleBinding => ResourceList::RoleBindings(Vec::new()),
        })
    }

    async fn create_resource(&self, spec: &ResourceSpec) -> CoreResult<ResourceRef> {
        self.check().await?;
        self.state.write().await.created.push(spec.clone());
        Ok(spec.to_ref())
    }

    async fn delete_resource(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> CoreResult<ResourceRef> {
        self.check().await?;
        Ok(ResourceRef::new(kind, namespace, name))
    }

    async fn describe_pod(&self, namespace: &str, name: &str) -> CoreResult<PodDetails> {
        self.check().await?;
        Ok(PodDetails {
            name: name.to_string(),
            namespace: namespace.to_string(),
            phase: "Running".to_string(),
            pod_ip: None,
            node: None,
            start_time: None,
            containers: Vec::new(),
        })
    }

    async fn pod_logs(&self, _namespace: &str, name: &str) -> CoreResult<String> {
        self.check().await?;
        Ok(format!("{name} started\n"))
    }

    async fn list_nodes(&self) -> CoreResult<Vec<NodeSummary>> {
        self.check().await?;
        Ok(Vec::new())
    }

    async fn resource_metrics(&self, _namespace: &str) -> CoreResult<Vec<UsageSample>> {
        self.check().await?;
        Ok(Vec::new())
    }

    async fn dependency_snapshot(&self, namespace: &str) -> CoreResult<DependencySnapshot> {
        self.check().await?;
        Ok(DependencySnapshot {
            namespace: namespace.to_string(),
            ..DependencySnapshot::default()
        })
    }
}

// ===== StubRenderer =====

/// 总是返回固定路径的图渲染器
pub struct StubRenderer {
    path: PathBuf,
}

impl StubRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GraphRenderer for StubRenderer {
    async fn render_dependency_graph(&self, _namespace: &str) -> CoreResult<PathBuf> {
        Ok(self.path.clone())
    }
}

// ===== 工厂方法 =====

pub fn running_pod(name: &str, namespace: &str) -> PodSummary {
    PodSummary {
        name: name.to_string(),
        namespace: namespace.to_string(),
        phase: "Running".to_string(),
        node: Some("node-a".to_string()),
        image: Some("nginx".to_string()),
        created_at: None,
        cpu_request_millis: 0,
        memory_request_bytes: 0,
    }
}
