//! 后台任务定义
//!
//! `Task` 在派发时就已经绑定了全部参数（命名空间、名称、创建请求），
//! 工作线程只拿到这些参数的副本，不接触 Model。

use std::fmt;
use std::path::PathBuf;

use kube_admin_core::types::{HealthReport, PodDetails, ResourceList, UsageReport};
use kube_admin_core::{CoreError, CoreResult, ResourceKind, ResourceRef, ResourceSpec};

use super::ClusterService;

/// 已绑定参数的远程操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List {
        kind: ResourceKind,
        namespace: String,
    },
    Create(ResourceSpec),
    Delete {
        kind: ResourceKind,
        namespace: String,
        name: String,
    },
    DescribePod {
        namespace: String,
        name: String,
    },
    PodLogs {
        namespace: String,
        name: String,
    },
    Health {
        namespace: String,
    },
    Usage {
        namespace: String,
    },
    DependencyGraph {
        namespace: String,
    },
}

impl Operation {
    /// 执行操作（只在后台任务中调用）
    pub async fn run(self, service: &ClusterService) -> CoreResult<TaskPayload> {
        let client = service.client();

        match self {
            Operation::List { kind, namespace } => {
                let list = client.list_resources(kind, &namespace).await?;
                Ok(TaskPayload::Listing { namespace, list })
            }
            Operation::Create(spec) => {
                let created = client.create_resource(&spec).await?;
                Ok(TaskPayload::Created(created))
            }
            Operation::Delete {
                kind,
                namespace,
                name,
            } => {
                let deleted = client.delete_resource(kind, &namespace, &name).await?;
                Ok(TaskPayload::Deleted(deleted))
            }
            Operation::DescribePod { namespace, name } => {
                let details = client.describe_pod(&namespace, &name).await?;
                Ok(TaskPayload::PodDetails(details))
            }
            Operation::PodLogs { namespace, name } => {
                let text = client.pod_logs(&namespace, &name).await?;
                Ok(TaskPayload::Logs { name, text })
            }
            Operation::Health { namespace } => {
                let report = service.reports().health(&namespace).await?;
                Ok(TaskPayload::Health(report))
            }
            Operation::Usage { namespace } => {
                let report = service.reports().usage(&namespace).await?;
                Ok(TaskPayload::Usage(report))
            }
            Operation::DependencyGraph { namespace } => {
                let path = service
                    .renderer()
                    .render_dependency_graph(&namespace)
                    .await?;
                Ok(TaskPayload::Graph(path))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List { kind, namespace } => write!(f, "list {kind} in {namespace}"),
            Operation::Create(spec) => write!(f, "create {}", spec.to_ref()),
            Operation::Delete {
                kind,
                namespace,
                name,
            } => write!(f, "delete {kind}/{namespace}/{name}"),
            Operation::DescribePod { namespace, name } => {
                write!(f, "describe Pod/{namespace}/{name}")
            }
            Operation::PodLogs { namespace, name } => write!(f, "logs Pod/{namespace}/{name}"),
            Operation::Health { namespace } => write!(f, "health report for {namespace}"),
            Operation::Usage { namespace } => write!(f, "usage report for {namespace}"),
            Operation::DependencyGraph { namespace } => {
                write!(f, "dependency graph for {namespace}")
            }
        }
    }
}

/// 任务完成后应触发的 UI 转换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTag {
    /// 只读查询：结果进入查看区
    Query,
    /// 由输入向导提交：完成后关闭向导
    Wizard,
}

/// 一次待派发的后台任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub tag: TaskTag,
    pub operation: Operation,
}

impl Task {
    pub fn query(operation: Operation) -> Self {
        Self {
            tag: TaskTag::Query,
            operation,
        }
    }

    pub fn wizard(operation: Operation) -> Self {
        Self {
            tag: TaskTag::Wizard,
            operation,
        }
    }
}

/// 任务成功时的结果
#[derive(Debug, Clone, PartialEq)]
pub enum TaskPayload {
    Listing {
        namespace: String,
        list: ResourceList,
    },
    Created(ResourceRef),
    Deleted(ResourceRef),
    PodDetails(PodDetails),
    Logs {
        name: String,
        text: String,
    },
    Health(HealthReport),
    Usage(UsageReport),
    Graph(PathBuf),
}

/// 任务完成消息（由工作线程投递回主循环）
#[derive(Debug, Clone, PartialEq)]
pub struct TaskOutcome {
    pub tag: TaskTag,
    pub result: Result<TaskPayload, CoreError>,
}
