//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **菜单内容归 `menu.*`**：各级菜单的标题与菜单项
//! 3. **向导内容归 `wizard.*`**：提示语、校验错误
//! 4. **报告表格归 `report.*`**：表头与小标题
//! 5. **键盘提示归 `hints.*`**：页脚的按键说明
//!
//! 带 `{name}` 形式占位符的文本通过 `i18n::fill` 填充。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 资源类型名称
    pub kinds: KindTexts,
    /// 菜单文本
    pub menu: MenuTexts,
    /// 输入向导文本
    pub wizard: WizardTexts,
    /// 报告文本
    pub report: ReportTexts,
    /// 任务完成后的结果文本
    pub status: StatusTexts,
    /// 页脚键盘提示
    pub hints: HintTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub namespace: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub dismiss_error: &'static str,
    pub cancelled: &'static str,
    pub result: &'static str,
}

// ============================================================================
// 资源类型
// ============================================================================

/// 单个资源类型的名称
pub struct KindName {
    pub singular: &'static str,
    pub plural: &'static str,
}

/// 资源类型名称
pub struct KindTexts {
    pub pod: KindName,
    pub service_account: KindName,
    pub role: KindName,
    pub role_binding: KindName,
}

// ============================================================================
// 菜单
// ============================================================================

/// 菜单项（标题 + 描述）
pub struct MenuEntry {
    pub title: &'static str,
    pub description: &'static str,
}

/// 菜单文本
pub struct MenuTexts {
    // 各级菜单标题
    pub main_title: &'static str,
    pub resource_group_title: &'static str,

    // 主菜单
    pub resource_group: MenuEntry,
    pub health: MenuEntry,
    pub usage: MenuEntry,
    pub graph: MenuEntry,
    pub quit: MenuEntry,

    /// 进入某一资源类型的子菜单，占位符 `{kinds}`
    pub open_category: MenuEntry,

    // 子菜单动作，占位符 `{kind}` / `{kinds}`
    pub list: MenuEntry,
    pub create: MenuEntry,
    pub delete: MenuEntry,
    pub describe: MenuEntry,
    pub logs: MenuEntry,
    pub back: MenuEntry,
}

// ============================================================================
// 输入向导
// ============================================================================

/// 输入向导文本
pub struct WizardTexts {
    // 标题，占位符 `{kind}`
    pub title_create: &'static str,
    pub title_delete: &'static str,
    pub title_describe: &'static str,
    pub title_logs: &'static str,

    // 各步骤提示
    pub prompt_name: &'static str,
    pub prompt_image: &'static str,
    pub prompt_namespace: &'static str,
    pub prompt_role: &'static str,
    pub prompt_service_account: &'static str,
    pub prompt_resources: &'static str,
    pub prompt_verbs: &'static str,
    pub prompt_confirm: &'static str,

    /// 默认值提示，占位符 `{value}`
    pub default_hint: &'static str,
    /// 已提交，等待结果
    pub submitted: &'static str,
    /// 已收集字段的小标题
    pub collected: &'static str,

    // 校验错误
    pub error_required: &'static str,
    pub error_image: &'static str,
    pub error_list: &'static str,
    pub error_service_account: &'static str,
}

// ============================================================================
// 报告
// ============================================================================

/// 报告表头与小标题
pub struct ReportTexts {
    // 通用表头
    pub name: &'static str,
    pub namespace: &'static str,
    pub phase: &'static str,
    pub node: &'static str,
    pub image: &'static str,
    pub created: &'static str,
    pub secrets: &'static str,
    pub rules: &'static str,
    pub role: &'static str,
    pub subjects: &'static str,
    /// 就绪列表头
    pub readiness: &'static str,
    pub ready: &'static str,
    pub not_ready: &'static str,
    pub none: &'static str,

    // Pod 详情
    pub pod_ip: &'static str,
    pub start_time: &'static str,
    pub containers: &'static str,

    // 健康检查，占位符 `{namespace}`
    pub node_status: &'static str,
    pub version: &'static str,
    pub os: &'static str,
    pub pod_distribution: &'static str,
    pub unscheduled: &'static str,
    pub pods: &'static str,
    pub utilization: &'static str,
    pub cpu: &'static str,
    pub memory: &'static str,
    pub capacity: &'static str,
    pub allocatable: &'static str,

    // 资源分析，占位符 `{namespace}`
    pub usage_title: &'static str,
    pub requested: &'static str,
    pub used: &'static str,
    pub recommended: &'static str,
    pub savings: &'static str,
    pub summary: &'static str,
    pub total_cpu_savings: &'static str,
    pub total_memory_savings: &'static str,
    pub skipped: &'static str,
    pub no_metrics_rows: &'static str,
}

// ============================================================================
// 任务结果
// ============================================================================

/// 任务结果文本
pub struct StatusTexts {
    /// 占位符 `{kind}` `{name}` `{namespace}`
    pub created: &'static str,
    /// 占位符 `{kind}` `{name}` `{namespace}`
    pub deleted: &'static str,
    /// 占位符 `{kinds}` `{namespace}`
    pub list_title: &'static str,
    /// 占位符 `{kinds}` `{namespace}`
    pub list_empty: &'static str,
    /// 占位符 `{name}`
    pub logs_title: &'static str,
    pub logs_empty: &'static str,
    /// 占位符 `{path}`
    pub graph_written: &'static str,
    pub graph_legend: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 页脚键盘提示（按键 + 动作）
pub struct HintTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub scroll: &'static str,
    pub close: &'static str,
    pub dismiss: &'static str,
    pub force_quit: &'static str,
}
