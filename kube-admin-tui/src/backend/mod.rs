//!
//! src/backend/mod.rs
//! Backend 层：集群服务、后台任务与配置
//!
//! Backend 层与 UI 完全解耦，通过 kube-admin-core 访问集群。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod cluster_service;    // 集群服务入口
//!         mod config;             // 配置文件
//!         mod executor;           // 后台任务执行器
//!         mod task;               // 任务与结果定义
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、集群服务（ClusterService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有 Arc<dyn RemoteClient> 与 Arc<dyn GraphRenderer>，
//!     启动时构造一次，以 Arc<ClusterService> 共享给所有任务。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、后台任务（Task / TaskExecutor）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层返回 Option<Task>，主循环交给 TaskExecutor::dispatch：
//!
//!         update(&mut app, msg)   ──▶ Some(Task { tag, operation })
//!                                         │
//!                                         ▼
//!         handle.spawn(async {          operation.run(&service).await
//!             ...                         │
//!             events.send(AppEvent::TaskFinished(TaskOutcome { tag, result }))
//!         })
//!                                         │
//!                                         ▼
//!         主循环 recv() ──▶ AppMessage::TaskFinished ──▶ update 写入 Model
//!
//!     工作线程从不修改 Model；结果只能经事件通道回到主循环。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置（AppConfig）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：<config_dir>/kube-admin/config.toml
//!     所有字段都可省略，缺失的字段取默认值；命令行参数优先于配置文件。
//!

mod cluster_service;
mod config;
mod executor;
mod task;

pub use cluster_service::ClusterService;
pub use config::{AppConfig, APP_DIR};
pub use executor::TaskExecutor;
pub use task::{Operation, Task, TaskOutcome, TaskPayload, TaskTag};
