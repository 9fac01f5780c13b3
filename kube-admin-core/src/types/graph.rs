//! 依赖关系图的输入数据

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Deployment 及其引用的配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRefs {
    pub name: String,
    /// Pod 模板上的标签
    pub template_labels: BTreeMap<String, String>,
    /// 通过卷挂载的 ConfigMap
    pub mounted_config_maps: Vec<String>,
    /// 通过卷挂载的 Secret
    pub mounted_secrets: Vec<String>,
    /// 通过 envFrom 引用的 ConfigMap
    pub env_config_maps: Vec<String>,
    /// 通过 envFrom 引用的 Secret
    pub env_secrets: Vec<String>,
}

/// Service 及其选择器
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelector {
    pub name: String,
    pub selector: BTreeMap<String, String>,
}

impl ServiceSelector {
    /// 选择器非空且每个键值都出现在 labels 中
    pub fn selects(&self, labels: &BTreeMap<String, String>) -> bool {
        !self.selector.is_empty()
            && self
                .selector
                .iter()
                .all(|(key, value)| labels.get(key) == Some(value))
    }
}

/// 一个命名空间内的依赖关系快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySnapshot {
    pub namespace: String,
    pub deployments: Vec<DeploymentRefs>,
    pub services: Vec<ServiceSelector>,
    pub config_maps: Vec<String>,
    pub secrets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn selector_matches_subset_of_labels() {
        let svc = ServiceSelector {
            name: "web".into(),
            selector: labels(&[("app", "web")]),
        };

        assert!(svc.selects(&labels(&[("app", "web"), ("tier", "frontend")])));
        assert!(!svc.selects(&labels(&[("app", "api")])));
    }

    #[test]
    fn empty_selector_selects_nothing() {
        let svc = ServiceSelector {
            name: "headless".into(),
            selector: BTreeMap::new(),
        };

        assert!(!svc.selects(&labels(&[("app", "web")])));
    }
}
