//! 配置文件
//!
//! 位置：`<config_dir>/kube-admin/config.toml`，所有字段都可省略。

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 应用目录名（配置与日志共用）
pub const APP_DIR: &str = "kube-admin";
/// 配置文件名
pub const CONFIG_FILE: &str = "config.toml";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub language: String,
    pub theme: Theme,
    pub namespace: String,
    pub kubeconfig: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub tick_rate_ms: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            theme: Theme::Dark,
            namespace: "default".to_string(),
            kubeconfig: None,
            output_dir: PathBuf::from("."),
            tick_rate_ms: 100,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// 加载配置
    ///
    /// 显式指定的文件必须存在；默认位置的文件不存在时使用默认配置。
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source }),
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }
}
