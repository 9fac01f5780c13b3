//! 集群资源相关类型定义

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 可管理的资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Pod,
    ServiceAccount,
    Role,
    RoleBinding,
}

impl ResourceKind {
    /// 所有资源类型
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::Pod,
            ResourceKind::ServiceAccount,
            ResourceKind::Role,
            ResourceKind::RoleBinding,
        ]
    }

    /// Kubernetes API 中的 kind 名称
    pub fn api_kind(self) -> &'static str {
        match self {
            ResourceKind::Pod => "Pod",
            ResourceKind::ServiceAccount => "ServiceAccount",
            ResourceKind::Role => "Role",
            ResourceKind::RoleBinding => "RoleBinding",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_kind())
    }
}

/// 资源定位（类型 + 命名空间 + 名称）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub namespace: String,
    pub name: String,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.kind, self.namespace, self.name)
    }
}

/// 创建资源请求
///
/// 每种资源只携带自己需要的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResourceSpec {
    Pod {
        name: String,
        namespace: String,
        image: String,
    },
    ServiceAccount {
        name: String,
        namespace: String,
    },
    Role {
        name: String,
        namespace: String,
        /// 授权的资源，例如 `pods`、`services`
        resources: Vec<String>,
        /// 授权的动作，例如 `get`、`list`、`watch`
        verbs: Vec<String>,
    },
    RoleBinding {
        name: String,
        namespace: String,
        /// 绑定的 Role 名称
        role: String,
        /// 被授权的 ServiceAccount 所在命名空间
        subject_namespace: String,
        /// 被授权的 ServiceAccount 名称
        subject_name: String,
    },
}

impl ResourceSpec {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceSpec::Pod { .. } => ResourceKind::Pod,
            ResourceSpec::ServiceAccount { .. } => ResourceKind::ServiceAccount,
            ResourceSpec::Role { .. } => ResourceKind::Role,
            ResourceSpec::RoleBinding { .. } => ResourceKind::RoleBinding,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResourceSpec::Pod { name, .. }
            | ResourceSpec::ServiceAccount { name, .. }
            | ResourceSpec::Role { name, .. }
            | ResourceSpec::RoleBinding { name, .. } => name,
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            ResourceSpec::Pod { namespace, .. }
            | ResourceSpec::ServiceAccount { namespace, .. }
            | ResourceSpec::Role { namespace, .. }
            | ResourceSpec::RoleBinding { namespace, .. } => namespace,
        }
    }

    /// 创建成功后对应的资源定位
    pub fn to_ref(&self) -> ResourceRef {
        ResourceRef::new(self.kind(), self.namespace(), self.name())
    }
}

/// Pod 摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodSummary {
    pub name: String,
    pub namespace: String,
    /// Pending / Running / Succeeded / Failed / Unknown
    pub phase: String,
    pub node: Option<String>,
    /// 第一个容器的镜像
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// 所有容器 CPU requests 之和（毫核）
    pub cpu_request_millis: i64,
    /// 所有容器内存 requests 之和（字节）
    pub memory_request_bytes: i64,
}

/// ServiceAccount 摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAccountSummary {
    pub name: String,
    pub namespace: String,
    pub secrets: usize,
    pub created_at: Option<DateTime<Utc>>,
}

/// Role 摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub name: String,
    pub namespace: String,
    pub rules: usize,
    pub created_at: Option<DateTime<Utc>>,
}

/// RoleBinding 摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBindingSummary {
    pub name: String,
    pub namespace: String,
    pub role: String,
    /// `Kind/name` 形式的主体列表
    pub subjects: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// 某一类资源的列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum ResourceList {
    Pods(Vec<PodSummary>),
    ServiceAccounts(Vec<ServiceAccountSummary>),
    Roles(Vec<RoleSummary>),
    RoleBindings(Vec<RoleBindingSummary>),
}

impl ResourceList {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceList::Pods(_) => ResourceKind::Pod,
            ResourceList::ServiceAccounts(_) => ResourceKind::ServiceAccount,
            ResourceList::Roles(_) => ResourceKind::Role,
            ResourceList::RoleBindings(_) => ResourceKind::RoleBinding,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResourceList::Pods(items) => items.len(),
            ResourceList::ServiceAccounts(items) => items.len(),
            ResourceList::Roles(items) => items.len(),
            ResourceList::RoleBindings(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_exposes_its_target() {
        let spec = ResourceSpec::Pod {
            name: "web-1".into(),
            namespace: "default".into(),
            image: "nginx".into(),
        };

        assert_eq!(spec.kind(), ResourceKind::Pod);
        assert_eq!(
            spec.to_ref(),
            ResourceRef::new(ResourceKind::Pod, "default", "web-1")
        );
    }

    #[test]
    fn resource_ref_display() {
        let r = ResourceRef::new(ResourceKind::RoleBinding, "ops", "read-pods");
        assert_eq!(r.to_string(), "RoleBinding/ops/read-pods");
    }

    #[test]
    fn resource_list_reports_kind_and_len() {
        let list = ResourceList::Roles(vec![RoleSummary {
            name: "reader".into(),
            namespace: "default".into(),
            rules: 1,
            created_at: None,
        }]);

        assert_eq!(list.kind(), ResourceKind::Role);
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        assert!(ResourceList::Pods(vec![]).is_empty());
    }
}
