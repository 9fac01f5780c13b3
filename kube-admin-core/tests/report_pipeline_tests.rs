#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the report pipeline: `ReportService` and
//! `DotGraphRenderer` driven through a fake `RemoteClient`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use kube_admin_core::error::{CoreError, CoreResult};
use kube_admin_core::services::{DotGraphRenderer, ReportService};
use kube_admin_core::traits::{GraphRenderer, RemoteClient};
use kube_admin_core::types::{
    DependencySnapshot, DeploymentRefs, NodeSummary, PodDetails, PodSummary, ResourceKind,
    ResourceList, ResourceRef, ResourceSpec, ServiceSelector, UsageSample,
};
use tokio::sync::RwLock;

// ===== Fake cluster =====

struct FakeCluster {
    pods: RwLock<Vec<PodSummary>>,
    metrics: RwLock<Vec<UsageSample>>,
    offline: bool,
}

impl FakeCluster {
    fn new() -> Self {
        Self {
            pods: RwLock::new(Vec::new()),
            metrics: RwLock::new(Vec::new()),
            offline: false,
        }
    }

    fn offline() -> Self {
        Self {
            offline: true,
            ..Self::new()
        }
    }

    fn check(&self) -> CoreResult<()> {
        if self.offline {
            return Err(CoreError::Connection("connection refused".into()));
        }
        Ok(())
    }
}

fn pod(name: &str, cpu: i64, memory: i64) -> PodSummary {
    PodSummary {
        name: name.into(),
        namespace: "shop".into(),
        phase: "Running".into(),
        node: Some("worker-1".into()),
        image: Some("nginx".into()),
        created_at: None,
        cpu_request_millis: cpu,
        memory_request_bytes: memory,
    }
}

#[async_trait]
impl RemoteClient for FakeCluster {
    async fn list_resources(&self, kind: ResourceKind, _namespace: &str) -> CoreResult<ResourceList> {
        self.check()?;
        Ok(match kind {
            ResourceKind::Pod => ResourceList::Pods(self.pods.read().await.clone()),
            ResourceKind::ServiceAccount => ResourceList::ServiceAccounts(vec![]),
            ResourceKind::Role => ResourceList::Roles(vec![]),
            ResourceKind::RoleBinding => ResourceList::RoleBindings(vec![]),
        })
    }

    async fn create_resource(&self, spec: &ResourceSpec) -> CoreResult<ResourceRef> {
        self.check()?;
        Ok(spec.to_ref())
    }

    async fn delete_resource(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> CoreResult<ResourceRef> {
        self.check()?;
        Ok(ResourceRef::new(kind, namespace, name))
    }

    async fn describe_pod(&self, _namespace: &str, name: &str) -> CoreResult<PodDetails> {
        Err(CoreError::NotFound(name.into()))
    }

    async fn pod_logs(&self, _namespace: &str, name: &str) -> CoreResult<String> {
        Err(CoreError::NotFound(name.into()))
    }

    async fn list_nodes(&self) -> CoreResult<Vec<NodeSummary>> {
        self.check()?;
        Ok(vec![NodeSummary {
            name: "worker-1".into(),
            ready: true,
            kubelet_version: "v1.32.1".into(),
            operating_system: "linux".into(),
            cpu_capacity: "8".into(),
            cpu_allocatable: "7800m".into(),
            memory_capacity: "32Gi".into(),
            memory_allocatable: "31Gi".into(),
            pods_capacity: "110".into(),
            pods_allocatable: "110".into(),
        }])
    }

    async fn resource_metrics(&self, _namespace: &str) -> CoreResult<Vec<UsageSample>> {
        self.check()?;
        Ok(self.metrics.read().await.clone())
    }

    async fn dependency_snapshot(&self, namespace: &str) -> CoreResult<DependencySnapshot> {
        self.check()?;
        let labels: BTreeMap<String, String> = [("app".to_string(), "cart".to_string())].into();
        Ok(DependencySnapshot {
            namespace: namespace.into(),
            deployments: vec![DeploymentRefs {
                name: "cart".into(),
                template_labels: labels.clone(),
                env_config_maps: vec!["cart-env".into()],
                ..DeploymentRefs::default()
            }],
            services: vec![ServiceSelector {
                name: "cart".into(),
                selector: labels,
            }],
            config_maps: vec!["cart-env".into()],
            secrets: vec![],
        })
    }
}

// ===== Tests =====

#[tokio::test]
async fn usage_report_ranks_over_provisioned_pods_first() {
    let cluster = Arc::new(FakeCluster::new());
    *cluster.pods.write().await = vec![
        pod("cart", 1000, 512 * 1024 * 1024),
        pod("checkout", 4000, 1024 * 1024 * 1024),
        pod("batch", 500, 0),
    ];
    *cluster.metrics.write().await = vec![
        UsageSample {
            pod: "cart".into(),
            cpu_millis: 200,
            memory_bytes: 100 * 1024 * 1024,
        },
        UsageSample {
            pod: "checkout".into(),
            cpu_millis: 500,
            memory_bytes: 200 * 1024 * 1024,
        },
    ];

    let report = ReportService::new(cluster).usage("shop").await.unwrap();

    let order: Vec<&str> = report.rows.iter().map(|r| r.pod.as_str()).collect();
    assert_eq!(order, vec!["checkout", "cart"]);
    assert_eq!(report.skipped, vec!["batch".to_string()]);
    assert_eq!(report.total_cpu_savings_millis, 3400 + 760);
}

#[tokio::test]
async fn health_report_counts_pods_per_node() {
    let cluster = Arc::new(FakeCluster::new());
    *cluster.pods.write().await = vec![pod("a", 0, 0), pod("b", 0, 0)];

    let report = ReportService::new(cluster).health("shop").await.unwrap();

    assert_eq!(report.ready_nodes, 1);
    assert_eq!(report.distribution.len(), 1);
    assert_eq!(report.distribution[0].pods, 2);
}

#[tokio::test]
async fn graph_is_written_under_output_dir() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let cluster: Arc<dyn RemoteClient> = Arc::new(FakeCluster::new());
    let renderer = DotGraphRenderer::new(cluster, dir.path().join("graphs"));

    let path = renderer.render_dependency_graph("shop").await.unwrap();

    assert!(path.starts_with(dir.path().join("graphs")));
    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.contains("\"deployment/cart\" -> \"service/cart\""));
    assert!(dot.contains("\"configmap/cart-env\" -> \"deployment/cart\" [label=\"env\"]"));
}

#[tokio::test]
async fn connection_errors_surface_unchanged() {
    let cluster = Arc::new(FakeCluster::offline());

    let err = ReportService::new(cluster).health("shop").await.unwrap_err();

    assert_eq!(err, CoreError::Connection("connection refused".into()));
    assert!(!err.is_expected());
}
