//! 日志初始化
//!
//! 终端被 UI 占用，日志只写入文件：`<cache_dir>/kube-admin/kube-admin.log`。
//! 过滤规则取自环境变量 `KUBE_ADMIN_LOG`，未设置时使用配置中的级别。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::APP_DIR;

/// 过滤规则环境变量
pub const LOG_ENV: &str = "KUBE_ADMIN_LOG";
/// 日志文件名
pub const LOG_FILE: &str = "kube-admin.log";

/// 日志目录
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR))
}

/// 构造过滤器：环境变量优先，其次是配置中的级别，都无效时为 `info`
fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
/// 找不到缓存目录时不记录日志，返回 `None`。
pub fn init_logging(default_level: &str) -> Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter(default_level))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(Some(guard))
}

