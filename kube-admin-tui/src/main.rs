//! Kubernetes Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 事件流与按键路由 (`event/`)
//! - **Backend**: 集群服务、后台任务、配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                    // 命令行参数
//!     AppConfig::load()               // 配置文件
//!     AppContext::resolve()           // 合并为不可变的上下文
//!     init_logging()                  // 文件日志
//!     KubeClient::connect()           // 连接集群，失败则直接退出
//!     init_terminal()                 // 原始模式 + 备用屏幕
//!     spawn_input_thread()            // 输入线程
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!     runtime.shutdown_background()   // 放弃仍未完成的后台任务
//!
//! }

mod app;
mod backend;
mod cli;
mod context;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::{mpsc, Arc};

use anyhow::{Context, Result};
use clap::Parser;

use kube_admin_core::adapters::KubeClient;
use kube_admin_core::services::DotGraphRenderer;
use kube_admin_core::RemoteClient;

use backend::{AppConfig, ClusterService, TaskExecutor};
use cli::Cli;
use context::AppContext;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 命令行参数与配置文件合并为上下文
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let ctx = AppContext::resolve(config, cli);

    // 2. 日志（guard 存活到 main 结束）
    let _log_guard = init_logging(&ctx.log_level)?;
    log::info!(
        "Starting kube-admin v{} (namespace: {}, language: {})",
        env!("CARGO_PKG_VERSION"),
        ctx.namespace,
        ctx.language.code()
    );

    i18n::set_language(ctx.language);
    view::theme::set_theme(ctx.theme);

    // 3. 异步运行时与集群连接（连接失败在进入主循环之前退出）
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = runtime
        .block_on(KubeClient::connect(ctx.kubeconfig.as_deref()))
        .context("failed to connect to the Kubernetes cluster")?;
    let client: Arc<dyn RemoteClient> = Arc::new(client);
    let renderer = Arc::new(DotGraphRenderer::new(
        Arc::clone(&client),
        ctx.output_dir.clone(),
    ));
    let service = Arc::new(ClusterService::new(client, renderer));

    // 4. 事件通道：输入线程与后台任务共用
    let (events_tx, events_rx) = mpsc::channel();
    let executor = TaskExecutor::new(runtime.handle().clone(), service, events_tx.clone());
    let mut app = model::App::new(&ctx);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    event::spawn_input_thread(events_tx, ctx.tick_rate);

    let result = app::run(&mut terminal, &mut app, &events_rx, &executor);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 未完成的任务直接放弃，其结果不会再被消费
    runtime.shutdown_background();
    log::info!("kube-admin exited");

    result
}
