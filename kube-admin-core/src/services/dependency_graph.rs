//! 依赖关系图（Graphviz DOT）
//!
//! 节点样式:
//! - Deployment: 浅蓝色方框
//! - Service: 浅绿色椭圆
//! - ConfigMap: 黄色 note
//! - Secret: 粉色 note
//!
//! 只为快照中真实存在的 ConfigMap / Secret 连线。

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;

use crate::error::CoreResult;
use crate::traits::{GraphRenderer, RemoteClient};
use crate::types::DependencySnapshot;

/// 输出文件名前缀
const FILE_PREFIX: &str = "k8s-dependencies";

/// 转义 DOT 字符串字面量
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

fn node_line(out: &mut String, id: &str, label: &str, shape: &str, color: &str) {
    let _ = writeln!(
        out,
        "  {} [label={}, shape={shape}, style=filled, fillcolor={color}];",
        quote(id),
        quote(label)
    );
}

fn edge_line(out: &mut String, from: &str, to: &str, label: &str) {
    let _ = writeln!(out, "  {} -> {} [label={}];", quote(from), quote(to), quote(label));
}

/// 由快照生成 DOT 文档
pub fn build_dot(snapshot: &DependencySnapshot) -> String {
    let config_maps: BTreeSet<&str> = snapshot.config_maps.iter().map(String::as_str).collect();
    let secrets: BTreeSet<&str> = snapshot.secrets.iter().map(String::as_str).collect();

    let mut out = String::new();
    let _ = writeln!(out, "digraph {} {{", quote(&snapshot.namespace));
    out.push_str("  rankdir=LR;\n");

    for deployment in &snapshot.deployments {
        let id = format!("deployment/{}", deployment.name);
        node_line(&mut out, &id, &deployment.name, "box", "lightblue");
    }
    for service in &snapshot.services {
        let id = format!("service/{}", service.name);
        node_line(&mut out, &id, &service.name, "ellipse", "lightgreen");
    }
    for name in &config_maps {
        node_line(&mut out, &format!("configmap/{name}"), name, "note", "yellow");
    }
    for name in &secrets {
        node_line(&mut out, &format!("secret/{name}"), name, "note", "pink");
    }

    for service in &snapshot.services {
        for deployment in &snapshot.deployments {
            if service.selects(&deployment.template_labels) {
                edge_line(
                    &mut out,
                    &format!("deployment/{}", deployment.name),
                    &format!("service/{}", service.name),
                    "selects",
                );
            }
        }
    }

    for deployment in &snapshot.deployments {
        let target = format!("deployment/{}", deployment.name);
        let refs = [
            (&deployment.mounted_config_maps, "configmap", "mounts"),
            (&deployment.mounted_secrets, "secret", "mounts"),
            (&deployment.env_config_maps, "configmap", "env"),
            (&deployment.env_secrets, "secret", "env"),
        ];

        for (names, prefix, label) in refs {
            let known = if prefix == "configmap" { &config_maps } else { &secrets };
            for name in names.iter().filter(|n| known.contains(n.as_str())) {
                edge_line(&mut out, &format!("{prefix}/{name}"), &target, label);
            }
        }
    }

    out.push_str("}\n");
    out
}

/// 将依赖关系图写为 DOT 文件的渲染器
pub struct DotGraphRenderer {
    client: Arc<dyn RemoteClient>,
    output_dir: PathBuf,
}

impl DotGraphRenderer {
    #[must_use]
    pub fn new(client: Arc<dyn RemoteClient>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl GraphRenderer for DotGraphRenderer {
    async fn render_dependency_graph(&self, namespace: &str) -> CoreResult<PathBuf> {
        let snapshot = self.client.dependency_snapshot(namespace).await?;
        let document = build_dot(&snapshot);

        let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
        let path = self
            .output_dir
            .join(format!("{FILE_PREFIX}-{timestamp}.dot"));

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, document).await?;

        log::info!(
            "Dependency graph for namespace {namespace} written to {}",
            path.display()
        );
        Ok(path)
    }
}
