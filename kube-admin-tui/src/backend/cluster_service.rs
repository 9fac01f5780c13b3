//! 集群服务
//!
//! 启动时构造一次，之后以 `Arc` 共享给所有后台任务。

use std::sync::Arc;

use kube_admin_core::services::ReportService;
use kube_admin_core::{GraphRenderer, RemoteClient};

/// TUI 集群服务
///
/// 持有远程客户端与图渲染器，后台任务只通过它访问集群
pub struct ClusterService {
    client: Arc<dyn RemoteClient>,
    renderer: Arc<dyn GraphRenderer>,
    reports: ReportService,
}

impl ClusterService {
    pub fn new(client: Arc<dyn RemoteClient>, renderer: Arc<dyn GraphRenderer>) -> Self {
        let reports = ReportService::new(Arc::clone(&client));
        Self {
            client,
            renderer,
            reports,
        }
    }

    /// 远程客户端
    pub fn client(&self) -> &dyn RemoteClient {
        self.client.as_ref()
    }

    /// 依赖关系图渲染器
    pub fn renderer(&self) -> &dyn GraphRenderer {
        self.renderer.as_ref()
    }

    /// 健康检查 / 资源分析
    pub fn reports(&self) -> &ReportService {
        &self.reports
    }
}
