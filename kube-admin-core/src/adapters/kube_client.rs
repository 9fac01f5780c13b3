//! kube-rs 实现的 `RemoteClient`

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{
    ConfigMap, Container, Node, Pod, PodSpec, Secret, Service, ServiceAccount,
};
use k8s_openapi::api::rbac::v1::{PolicyRule, Role, RoleBinding, RoleRef, Subject};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, DeleteParams, ListParams, LogParams, ObjectMeta, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::{Client, Config, Resource};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::traits::RemoteClient;
use crate::types::{
    ContainerDetail, DependencySnapshot, DeploymentRefs, NodeSummary, PodDetails, PodSummary,
    ResourceKind, ResourceList, ResourceRef, ResourceSpec, RoleBindingSummary, RoleSummary,
    ServiceAccountSummary, ServiceSelector, UsageSample,
};
use crate::utils::{parse_cpu_millis, parse_memory_bytes};

/// 日志只取最后 N 行
pub const LOG_TAIL_LINES: i64 = 500;

const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// kube-rs 客户端封装
#[derive(Clone)]
pub struct KubeClient {
    client: Client,
}

impl KubeClient {
    /// 建立连接并探测 API Server 版本
    ///
    /// `kubeconfig` 为 None 时按 kube-rs 的默认规则推断
    /// (`KUBECONFIG` / `~/.kube/config` / in-cluster)。
    pub async fn connect(kubeconfig: Option<&Path>) -> CoreResult<Self> {
        let config = match kubeconfig {
            Some(path) => {
                let raw = Kubeconfig::read_from(path).map_err(|e| {
                    CoreError::Connection(format!(
                        "failed to read kubeconfig {}: {e}",
                        path.display()
                    ))
                })?;
                Config::from_custom_kubeconfig(raw, &KubeConfigOptions::default())
                    .await
                    .map_err(|e| CoreError::Connection(e.to_string()))?
            }
            None => Config::infer()
                .await
                .map_err(|e| CoreError::Connection(e.to_string()))?,
        };

        let client = Client::try_from(config)?;
        let version = client.apiserver_version().await?;
        log::info!(
            "Connected to Kubernetes API server {} ({})",
            version.git_version,
            version.platform
        );

        Ok(Self { client })
    }

    fn namespaced<K>(&self, namespace: &str) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        <K as Resource>::DynamicType: Default,
    {
        Api::namespaced(self.client.clone(), namespace)
    }

    async fn list_namespaced<K>(&self, namespace: &str) -> CoreResult<Vec<K>>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        let list = self
            .namespaced::<K>(namespace)
            .list(&ListParams::default())
            .await?;
        Ok(list.items)
    }

    async fn delete_namespaced<K>(&self, namespace: &str, name: &str) -> CoreResult<()>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        self.namespaced::<K>(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }

    async fn create_namespaced<K>(&self, namespace: &str, object: &K) -> CoreResult<()>
    where
        K: Resource<Scope = NamespaceResourceScope>
            + Clone
            + DeserializeOwned
            + serde::Serialize
            + Debug,
        <K as Resource>::DynamicType: Default,
    {
        self.namespaced::<K>(namespace)
            .create(&PostParams::default(), object)
            .await?;
        Ok(())
    }
}

// ===== 对象 → 摘要 =====

fn meta(name: &str, namespace: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(namespace.to_string()),
        ..ObjectMeta::default()
    }
}

fn sum_requests(containers: &[Container], key: &str, parse: fn(&str) -> Option<i64>) -> i64 {
    containers
        .iter()
        .filter_map(|c| c.resources.as_ref()?.requests.as_ref()?.get(key))
        .filter_map(|q| parse(&q.0))
        .sum()
}

fn pod_summary(pod: Pod) -> PodSummary {
    let spec = pod.spec.unwrap_or_default();
    let status = pod.status.unwrap_or_default();

    PodSummary {
        name: pod.metadata.name.unwrap_or_default(),
        namespace: pod.metadata.namespace.unwrap_or_default(),
        phase: status.phase.unwrap_or_else(|| "Unknown".to_string()),
        node: spec.node_name.clone(),
        image: spec.containers.first().and_then(|c| c.image.clone()),
        created_at: pod.metadata.creation_timestamp.map(|t| t.0),
        cpu_request_millis: sum_requests(&spec.containers, "cpu", parse_cpu_millis),
        memory_request_bytes: sum_requests(&spec.containers, "memory", parse_memory_bytes),
    }
}

fn quantity(map: Option<&BTreeMap<String, Quantity>>, key: &str) -> String {
    map.and_then(|m| m.get(key))
        .map(|q| q.0.clone())
        .unwrap_or_default()
}

fn node_summary(node: Node) -> NodeSummary {
    let status = node.status.unwrap_or_default();
    let ready = status
        .conditions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find(|c| c.type_ == "Ready")
        .is_some_and(|c| c.status == "True");
    let info = status.node_info.unwrap_or_default();
    let capacity = status.capacity.as_ref();
    let allocatable = status.allocatable.as_ref();

    NodeSummary {
        name: node.metadata.name.unwrap_or_default(),
        ready,
        kubelet_version: info.kubelet_version,
        operating_system: info.operating_system,
        cpu_capacity: quantity(capacity, "cpu"),
        cpu_allocatable: quantity(allocatable, "cpu"),
        memory_capacity: quantity(capacity, "memory"),
        memory_allocatable: quantity(allocatable, "memory"),
        pods_capacity: quantity(capacity, "pods"),
        pods_allocatable: quantity(allocatable, "pods"),
    }
}

fn role_binding_summary(binding: RoleBinding) -> RoleBindingSummary {
    let subjects = binding
        .subjects
        .unwrap_or_default()
        .into_iter()
        .map(|s| match s.namespace {
            Some(ns) => format!("{}:{ns}/{}", s.kind, s.name),
            None => format!("{}:{}", s.kind, s.name),
        })
        .collect();

    RoleBindingSummary {
        name: binding.metadata.name.unwrap_or_default(),
        namespace: binding.metadata.namespace.unwrap_or_default(),
        role: format!("{}/{}", binding.role_ref.kind, binding.role_ref.name),
        subjects,
        created_at: binding.metadata.creation_timestamp.map(|t| t.0),
    }
}

/// 取出 JSON 数组中每个元素在 `path` 处的字符串
fn names_at(items: Option<&Value>, path: &[&str]) -> Vec<String> {
    items
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| {
            path.iter()
                .try_fold(item, |v, key| v.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .collect()
}

fn deployment_refs(deployment: &Deployment) -> CoreResult<DeploymentRefs> {
    let spec = serde_json::to_value(&deployment.spec)?;
    let template = &spec["template"];
    let pod_spec = &template["spec"];

    let template_labels: BTreeMap<String, String> = template["metadata"]["labels"]
        .as_object()
        .map(|labels| {
            labels
                .iter()
                .filter_map(|(k, v)| Some((k.clone(), v.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let volumes = pod_spec.get("volumes");
    let env_from: Vec<Value> = pod_spec["containers"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|c| c.get("envFrom")?.as_array().cloned())
        .flatten()
        .collect();
    let env_from = Value::Array(env_from);

    Ok(DeploymentRefs {
        name: deployment.metadata.name.clone().unwrap_or_default(),
        template_labels,
        mounted_config_maps: names_at(volumes, &["configMap", "name"]),
        mounted_secrets: names_at(volumes, &["secret", "secretName"]),
        env_config_maps: names_at(Some(&env_from), &["configMapRef", "name"]),
        env_secrets: names_at(Some(&env_from), &["secretRef", "name"]),
    })
}

fn usage_sample(object: DynamicObject) -> UsageSample {
    let containers = object.data.get("containers").and_then(Value::as_array);
    let usage = |key: &str, parse: fn(&str) -> Option<i64>| -> i64 {
        containers
            .into_iter()
            .flatten()
            .filter_map(|c| c.get("usage")?.get(key)?.as_str())
            .filter_map(parse)
            .sum()
    };

    UsageSample {
        pod: object.metadata.name.clone().unwrap_or_default(),
        cpu_millis: usage("cpu", parse_cpu_millis),
        memory_bytes: usage("memory", parse_memory_bytes),
    }
}

#[async_trait]
impl RemoteClient for KubeClient {
    async fn list_resources(&self, kind: ResourceKind, namespace: &str) -> CoreResult<ResourceList> {
        log::debug!("Listing {kind} in namespace {namespace}");

        Ok(match kind {
            ResourceKind::Pod => ResourceList::Pods(
                self.list_namespaced::<Pod>(namespace)
                    .await?
                    .into_iter()
                    .map(pod_summary)
                    .collect(),
            ),
            ResourceKind::ServiceAccount => ResourceList::ServiceAccounts(
                self.list_namespaced::<ServiceAccount>(namespace)
                    .await?
                    .into_iter()
                    .map(|sa| ServiceAccountSummary {
                        secrets: sa.secrets.as_ref().map_or(0, Vec::len),
                        name: sa.metadata.name.unwrap_or_default(),
                        namespace: sa.metadata.namespace.unwrap_or_default(),
                        created_at: sa.metadata.creation_timestamp.map(|t| t.0),
                    })
                    .collect(),
            ),
            ResourceKind::Role => ResourceList::Roles(
                self.list_namespaced::<Role>(namespace)
                    .await?
                    .into_iter()
                    .map(|role| RoleSummary {
                        rules: role.rules.as_ref().map_or(0, Vec::len),
                        name: role.metadata.name.unwrap_or_default(),
                        namespace: role.metadata.namespace.unwrap_or_default(),
                        created_at: role.metadata.creation_timestamp.map(|t| t.0),
                    })
                    .collect(),
            ),
            ResourceKind::RoleBinding => ResourceList::RoleBindings(
                self.list_namespaced::<RoleBinding>(namespace)
                    .await?
                    .into_iter()
                    .map(role_binding_summary)
                    .collect(),
            ),
        })
    }

    async fn create_resource(&self, spec: &ResourceSpec) -> CoreResult<ResourceRef> {
        log::info!("Creating {}", spec.to_ref());

        match spec {
            ResourceSpec::Pod {
                name,
                namespace,
                image,
            } => {
                let mut metadata = meta(name, namespace);
                metadata.labels = Some(BTreeMap::from([("app".to_string(), name.clone())]));
                let pod = Pod {
                    metadata,
                    spec: Some(PodSpec {
                        containers: vec![Container {
                            name: name.clone(),
                            image: Some(image.clone()),
                            ..Container::default()
                        }],
                        ..PodSpec::default()
                    }),
                    ..Pod::default()
                };
                self.create_namespaced(namespace, &pod).await?;
            }
            ResourceSpec::ServiceAccount { name, namespace } => {
                let sa = ServiceAccount {
                    metadata: meta(name, namespace),
                    ..ServiceAccount::default()
                };
                self.create_namespaced(namespace, &sa).await?;
            }
            ResourceSpec::Role {
                name,
                namespace,
                resources,
                verbs,
            } => {
                let role = Role {
                    metadata: meta(name, namespace),
                    rules: Some(vec![PolicyRule {
                        api_groups: Some(vec![String::new()]),
                        resources: Some(resources.clone()),
                        verbs: verbs.clone(),
                        ..PolicyRule::default()
                    }]),
                };
                self.create_namespaced(namespace, &role).await?;
            }
            ResourceSpec::RoleBinding {
                name,
                namespace,
                role,
                subject_namespace,
                subject_name,
            } => {
                let binding = RoleBinding {
                    metadata: meta(name, namespace),
                    role_ref: RoleRef {
                        api_group: RBAC_API_GROUP.to_string(),
                        kind: "Role".to_string(),
                        name: role.clone(),
                    },
                    subjects: Some(vec![Subject {
                        kind: "ServiceAccount".to_string(),
                        name: subject_name.clone(),
                        namespace: Some(subject_namespace.clone()),
                        ..Subject::default()
                    }]),
                };
                self.create_namespaced(namespace, &binding).await?;
            }
        }

        Ok(spec.to_ref())
    }

    async fn delete_resource(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> CoreResult<ResourceRef> {
        log::info!("Deleting {kind} {namespace}/{name}");

        match kind {
            ResourceKind::Pod => self.delete_namespaced::<Pod>(namespace, name).await?,
            ResourceKind::ServiceAccount => {
                self.delete_namespaced::<ServiceAccount>(namespace, name)
                    .await?;
            }
            ResourceKind::Role => self.delete_namespaced::<Role>(namespace, name).await?,
            ResourceKind::RoleBinding => {
                self.delete_namespaced::<RoleBinding>(namespace, name)
                    .await?;
            }
        }

        Ok(ResourceRef::new(kind, namespace, name))
    }

    async fn describe_pod(&self, namespace: &str, name: &str) -> CoreResult<PodDetails> {
        let pod = self.namespaced::<Pod>(namespace).get(name).await?;
        let spec = pod.spec.unwrap_or_default();
        let status = pod.status.unwrap_or_default();
        let statuses = status.container_statuses.unwrap_or_default();

        let containers = spec
            .containers
            .into_iter()
            .map(|c| ContainerDetail {
                ready: statuses.iter().any(|s| s.name == c.name && s.ready),
                image: c.image.unwrap_or_default(),
                name: c.name,
            })
            .collect();

        Ok(PodDetails {
            name: pod.metadata.name.unwrap_or_default(),
            namespace: pod.metadata.namespace.unwrap_or_default(),
            phase: status.phase.unwrap_or_else(|| "Unknown".to_string()),
            pod_ip: status.pod_ip,
            node: spec.node_name,
            start_time: status.start_time.map(|t| t.0),
            containers,
        })
    }

    async fn pod_logs(&self, namespace: &str, name: &str) -> CoreResult<String> {
        let params = LogParams {
            tail_lines: Some(LOG_TAIL_LINES),
            ..LogParams::default()
        };
        Ok(self.namespaced::<Pod>(namespace).logs(name, &params).await?)
    }

    async fn list_nodes(&self) -> CoreResult<Vec<NodeSummary>> {
        let nodes: Api<Node> = Api::all(self.client.clone());
        let list = nodes.list(&ListParams::default()).await?;
        Ok(list.items.into_iter().map(node_summary).collect())
    }

    async fn resource_metrics(&self, namespace: &str) -> CoreResult<Vec<UsageSample>> {
        let gvk = GroupVersionKind::gvk("metrics.k8s.io", "v1beta1", "PodMetrics");
        let resource = ApiResource::from_gvk_with_plural(&gvk, "pods");
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, &resource);

        let list = api.list(&ListParams::default()).await.map_err(|e| {
            CoreError::Metrics(format!("metrics.k8s.io is not available: {e}"))
        })?;
        Ok(list.items.into_iter().map(usage_sample).collect())
    }

    async fn dependency_snapshot(&self, namespace: &str) -> CoreResult<DependencySnapshot> {
        let deployments = self
            .list_namespaced::<Deployment>(namespace)
            .await?
            .iter()
            .map(deployment_refs)
            .collect::<CoreResult<Vec<_>>>()?;

        let services = self
            .list_namespaced::<Service>(namespace)
            .await?
            .into_iter()
            .map(|svc| ServiceSelector {
                name: svc.metadata.name.unwrap_or_default(),
                selector: svc.spec.and_then(|s| s.selector).unwrap_or_default(),
            })
            .collect();

        let config_maps = self
            .list_namespaced::<ConfigMap>(namespace)
            .await?
            .into_iter()
            .filter_map(|cm| cm.metadata.name)
            .collect();

        let secrets = self
            .list_namespaced::<Secret>(namespace)
            .await?
            .into_iter()
            .filter_map(|s| s.metadata.name)
            .collect();

        Ok(DependencySnapshot {
            namespace: namespace.to_string(),
            deployments,
            services,
            config_maps,
            secrets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pod_summary_sums_container_requests() {
        let pod: Pod = serde_json::from_value(json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": { "name": "web-1", "namespace": "default" },
            "spec": {
                "nodeName": "node-a",
                "containers": [
                    { "name": "app", "image": "nginx",
                      "resources": { "requests": { "cpu": "250m", "memory": "128Mi" } } },
                    { "name": "sidecar", "image": "envoy",
                      "resources": { "requests": { "cpu": "100m" } } }
                ]
            },
            "status": { "phase": "Running" }
        }))
        .unwrap();

        let summary = pod_summary(pod);

        assert_eq!(summary.name, "web-1");
        assert_eq!(summary.node.as_deref(), Some("node-a"));
        assert_eq!(summary.image.as_deref(), Some("nginx"));
        assert_eq!(summary.cpu_request_millis, 350);
        assert_eq!(summary.memory_request_bytes, 134_217_728);
    }

    #[test]
    fn node_summary_reads_ready_condition() {
        let node: Node = serde_json::from_value(json!({
            "apiVersion": "v1",
            "kind": "Node",
            "metadata": { "name": "node-a" },
            "status": {
                "conditions": [
                    { "type": "MemoryPressure", "status": "False" },
                    { "type": "Ready", "status": "True" }
                ],
                "capacity": { "cpu": "4", "memory": "16Gi", "pods": "110" },
                "allocatable": { "cpu": "3800m", "memory": "15Gi", "pods": "110" }
            }
        }))
        .unwrap();

        let summary = node_summary(node);

        assert!(summary.ready);
        assert_eq!(summary.cpu_allocatable, "3800m");
        assert_eq!(summary.pods_capacity, "110");
    }

    #[test]
    fn deployment_refs_collect_volumes_and_env_from() {
        let deployment: Deployment = serde_json::from_value(json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": { "name": "web" },
            "spec": {
                "selector": { "matchLabels": { "app": "web" } },
                "template": {
                    "metadata": { "labels": { "app": "web" } },
                    "spec": {
                        "volumes": [
                            { "name": "cfg", "configMap": { "name": "web-config" } },
                            { "name": "tls", "secret": { "secretName": "web-tls" } }
                        ],
                        "containers": [{
                            "name": "web",
                            "envFrom": [
                                { "configMapRef": { "name": "env-config" } },
                                { "secretRef": { "name": "env-secret" } }
                            ]
                        }]
                    }
                }
            }
        }))
        .unwrap();

        let refs = deployment_refs(&deployment).unwrap();

        assert_eq!(refs.template_labels.get("app").map(String::as_str), Some("web"));
        assert_eq!(refs.mounted_config_maps, vec!["web-config"]);
        assert_eq!(refs.mounted_secrets, vec!["web-tls"]);
        assert_eq!(refs.env_config_maps, vec!["env-config"]);
        assert_eq!(refs.env_secrets, vec!["env-secret"]);
    }

    #[test]
    fn usage_sample_sums_containers() {
        let object: DynamicObject = serde_json::from_value(json!({
            "apiVersion": "metrics.k8s.io/v1beta1",
            "kind": "PodMetrics",
            "metadata": { "name": "web-1", "namespace": "default" },
            "timestamp": "2024-01-01T00:00:00Z",
            "window": "30s",
            "containers": [
                { "name": "app", "usage": { "cpu": "120000000n", "memory": "64Mi" } },
                { "name": "sidecar", "usage": { "cpu": "5m", "memory": "1Mi" } }
            ]
        }))
        .unwrap();

        let sample = usage_sample(object);

        assert_eq!(sample.pod, "web-1");
        assert_eq!(sample.cpu_millis, 125);
        assert_eq!(sample.memory_bytes, 65 * 1024 * 1024);
    }
}
