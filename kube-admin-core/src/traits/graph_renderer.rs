//! 依赖关系图渲染抽象 Trait

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::CoreResult;

/// 依赖关系图渲染器
///
/// 实现:
/// - `DotGraphRenderer` (Graphviz DOT 文件)
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// 渲染命名空间的依赖关系图，返回输出文件路径
    async fn render_dependency_graph(&self, namespace: &str) -> CoreResult<PathBuf>;
}
