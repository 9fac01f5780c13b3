//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 语言在启动时根据配置/命令行设置一次。

use std::sync::atomic::{AtomicUsize, Ordering};

use kube_admin_core::ResourceKind;

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 资源类型的本地化名称
pub fn kind_name(kind: ResourceKind) -> &'static KindName {
    let kinds = &t().kinds;
    match kind {
        ResourceKind::Pod => &kinds.pod,
        ResourceKind::ServiceAccount => &kinds.service_account,
        ResourceKind::Role => &kinds.role,
        ResourceKind::RoleBinding => &kinds.role_binding,
    }
}

/// 填充 `{key}` 形式的占位符
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), value)
    })
}

/// 用资源类型名称填充 `{kind}` / `{kinds}`
pub fn fill_kind(template: &str, kind: ResourceKind) -> String {
    let name = kind_name(kind);
    fill(template, &[("kinds", name.plural), ("kind", name.singular)])
}
