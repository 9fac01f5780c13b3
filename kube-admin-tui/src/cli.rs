//! 命令行参数
//!
//! 所有参数都是可选的，未指定时使用配置文件中的值。

use std::path::PathBuf;

use clap::Parser;

/// kube-admin 命令行参数
#[derive(Debug, Default, Parser)]
#[command(
    name = "kube-admin",
    version,
    about = "Interactive terminal console for Kubernetes administration"
)]
pub struct Cli {
    /// Namespace to operate in
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Path to the kubeconfig file (defaults to KUBECONFIG or ~/.kube/config)
    #[arg(long, value_name = "FILE")]
    pub kubeconfig: Option<PathBuf>,

    /// Directory for generated dependency graphs
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interface language (en-US, zh-CN)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,
}
