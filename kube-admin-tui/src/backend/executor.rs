//! 后台任务执行器
//!
//! 在 tokio 运行时上执行 `Task`，把结果包装成 `AppEvent::TaskFinished`
//! 投递回主循环的事件通道。执行器本身不做并发限制，
//! 同一时刻至多一个任务由 Update 层的 loading 标志保证。
//!
//! 远程调用在独立的 tokio 任务里执行并由外层任务等待，
//! 调用 panic 时外层任务仍会投递一个 `CoreError::Internal`，loading 不会卡住。

use std::sync::mpsc::Sender;
use std::sync::Arc;

use kube_admin_core::CoreError;
use tokio::runtime::Handle;

use super::{ClusterService, Task, TaskOutcome};
use crate::event::AppEvent;

/// 后台任务执行器
pub struct TaskExecutor {
    handle: Handle,
    service: Arc<ClusterService>,
    events: Sender<AppEvent>,
}

impl TaskExecutor {
    pub fn new(handle: Handle, service: Arc<ClusterService>, events: Sender<AppEvent>) -> Self {
        Self {
            handle,
            service,
            events,
        }
    }

    /// 派发任务，立即返回
    pub fn dispatch(&self, task: Task) {
        let Task { tag, operation } = task;
        let service = Arc::clone(&self.service);
        let events = self.events.clone();

        let label = operation.to_string();
        log::info!("Dispatching task: {label}");

        let worker = self
            .handle
            .spawn(async move { operation.run(&service).await });

        self.handle.spawn(async move {
            let result = match worker.await {
                Ok(result) => result,
                Err(e) => Err(CoreError::Internal(format!("task aborted: {e}"))),
            };

            match &result {
                Ok(_) => log::info!("Task finished: {label}"),
                Err(e) if e.is_expected() => log::warn!("Task failed: {label}: {e}"),
                Err(e) => log::error!("Task failed: {label}: {e}"),
            }

            // 主循环已退出时接收端不存在，结果直接丢弃
            if events
                .send(AppEvent::TaskFinished(TaskOutcome { tag, result }))
                .is_err()
            {
                log::debug!("Event loop gone, discarding result of {label}");
            }
        });
    }
}
