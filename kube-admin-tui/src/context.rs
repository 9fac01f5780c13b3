//! 应用上下文
//!
//! 启动时由配置文件与命令行参数合并生成一次，之后只读。
//! 各组件在构造时以引用方式接收，不读取任何全局状态。

use std::path::PathBuf;
use std::time::Duration;

use crate::backend::AppConfig;
use crate::cli::Cli;
use crate::i18n::Language;
use crate::view::theme::Theme;

/// 不可变的应用上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    /// 操作的命名空间
    pub namespace: String,
    /// kubeconfig 路径（None 表示自动推断）
    pub kubeconfig: Option<PathBuf>,
    /// 依赖关系图输出目录
    pub output_dir: PathBuf,
    pub language: Language,
    pub theme: Theme,
    /// 输入轮询间隔，同时驱动加载动画
    pub tick_rate: Duration,
    /// 默认日志级别（可被环境变量覆盖）
    pub log_level: String,
}

impl AppContext {
    /// 合并配置文件与命令行参数（命令行优先）
    pub fn resolve(config: AppConfig, cli: Cli) -> Self {
        let language_code = cli.lang.unwrap_or(config.language);

        Self {
            namespace: cli.namespace.unwrap_or(config.namespace),
            kubeconfig: cli.kubeconfig.or(config.kubeconfig),
            output_dir: cli.output_dir.unwrap_or(config.output_dir),
            language: Language::from_code(&language_code).unwrap_or_default(),
            theme: config.theme,
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(10)),
            log_level: config.log_level,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::resolve(AppConfig::default(), Cli::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_overrides_config_file() {
        let config = AppConfig {
            namespace: "from-file".into(),
            language: "en-US".into(),
            output_dir: PathBuf::from("/var/graphs"),
            ..AppConfig::default()
        };
        let cli = Cli {
            namespace: Some("from-cli".into()),
            lang: Some("zh-CN".into()),
            ..Cli::default()
        };

        let ctx = AppContext::resolve(config, cli);

        assert_eq!(ctx.namespace, "from-cli");
        assert_eq!(ctx.language, Language::ZhCn);
        assert_eq!(ctx.output_dir, PathBuf::from("/var/graphs"));
    }

    #[test]
    fn defaults_are_usable() {
        let ctx = AppContext::default();

        assert_eq!(ctx.namespace, "default");
        assert_eq!(ctx.tick_rate, Duration::from_millis(100));
        assert_eq!(ctx.language, Language::EnUs);
        assert!(ctx.kubeconfig.is_none());
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let cli = Cli {
            lang: Some("xx".into()),
            ..Cli::default()
        };
        assert_eq!(AppContext::resolve(AppConfig::default(), cli).language, Language::EnUs);
    }
}
