//! 导航状态定义

use kube_admin_core::ResourceKind;

use crate::i18n::{fill_kind, t, MenuEntry};

/// 菜单层级（任一时刻只有一个处于激活状态）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Main,
    Pods,
    ServiceAccounts,
    Roles,
    RoleBindings,
    /// 资源管理：列出所有资源类型
    ResourceGroup,
}

impl NavMode {
    /// 资源类型对应的子菜单
    pub fn for_kind(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Pod => NavMode::Pods,
            ResourceKind::ServiceAccount => NavMode::ServiceAccounts,
            ResourceKind::Role => NavMode::Roles,
            ResourceKind::RoleBinding => NavMode::RoleBindings,
        }
    }

    /// 子菜单对应的资源类型
    pub fn kind(self) -> Option<ResourceKind> {
        match self {
            NavMode::Pods => Some(ResourceKind::Pod),
            NavMode::ServiceAccounts => Some(ResourceKind::ServiceAccount),
            NavMode::Roles => Some(ResourceKind::Role),
            NavMode::RoleBindings => Some(ResourceKind::RoleBinding),
            NavMode::Main | NavMode::ResourceGroup => None,
        }
    }

    /// 菜单标题
    pub fn title(self) -> String {
        let menu = &t().menu;
        match self {
            NavMode::Main => menu.main_title.to_string(),
            NavMode::ResourceGroup => menu.resource_group_title.to_string(),
            other => other
                .kind()
                .map(|kind| fill_kind(menu.open_category.title, kind))
                .unwrap_or_default(),
        }
    }

    /// 构造该层级的菜单项
    pub fn items(self) -> Vec<MenuItem> {
        let menu = &t().menu;

        match self {
            NavMode::Main => {
                let mut items: Vec<MenuItem> = ResourceKind::all()
                    .iter()
                    .map(|kind| MenuItem::for_kind(ActionKind::Open(NavMode::for_kind(*kind)), &menu.open_category, *kind))
                    .collect();
                items.extend([
                    MenuItem::new(ActionKind::Open(NavMode::ResourceGroup), &menu.resource_group),
                    MenuItem::new(ActionKind::Report(ReportKind::Health), &menu.health),
                    MenuItem::new(ActionKind::Report(ReportKind::Usage), &menu.usage),
                    MenuItem::new(ActionKind::Report(ReportKind::DependencyGraph), &menu.graph),
                    MenuItem::new(ActionKind::Quit, &menu.quit),
                ]);
                items
            }
            NavMode::ResourceGroup => {
                let mut items: Vec<MenuItem> = ResourceKind::all()
                    .iter()
                    .map(|kind| MenuItem::for_kind(ActionKind::Open(NavMode::for_kind(*kind)), &menu.open_category, *kind))
                    .collect();
                items.push(MenuItem::new(ActionKind::Back, &menu.back));
                items
            }
            NavMode::Pods => {
                let kind = ResourceKind::Pod;
                vec![
                    MenuItem::for_kind(ActionKind::List(kind), &menu.list, kind),
                    MenuItem::for_kind(ActionKind::Create(kind), &menu.create, kind),
                    MenuItem::for_kind(ActionKind::Delete(kind), &menu.delete, kind),
                    MenuItem::for_kind(ActionKind::Describe, &menu.describe, kind),
                    MenuItem::for_kind(ActionKind::Logs, &menu.logs, kind),
                    MenuItem::new(ActionKind::Back, &menu.back),
                ]
            }
            NavMode::ServiceAccounts | NavMode::Roles | NavMode::RoleBindings => {
                let Some(kind) = self.kind() else {
                    return Vec::new();
                };
                vec![
                    MenuItem::for_kind(ActionKind::List(kind), &menu.list, kind),
                    MenuItem::for_kind(ActionKind::Create(kind), &menu.create, kind),
                    MenuItem::for_kind(ActionKind::Delete(kind), &menu.delete, kind),
                    MenuItem::new(ActionKind::Back, &menu.back),
                ]
            }
        }
    }
}

/// 只读报告类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Health,
    Usage,
    DependencyGraph,
}

/// 菜单项动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// 进入子菜单
    Open(NavMode),
    List(ResourceKind),
    Create(ResourceKind),
    Delete(ResourceKind),
    /// Pod 详情
    Describe,
    /// Pod 日志
    Logs,
    Report(ReportKind),
    Back,
    Quit,
}

/// 菜单项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub action: ActionKind,
    pub title: String,
    pub description: String,
}

impl MenuItem {
    fn new(action: ActionKind, entry: &MenuEntry) -> Self {
        Self {
            action,
            title: entry.title.to_string(),
            description: entry.description.to_string(),
        }
    }

    fn for_kind(action: ActionKind, entry: &MenuEntry, kind: ResourceKind) -> Self {
        Self {
            action,
            title: fill_kind(entry.title, kind),
            description: fill_kind(entry.description, kind),
        }
    }
}

/// 导航状态
#[derive(Debug, Clone)]
pub struct NavigationState {
    /// 当前层级
    pub mode: NavMode,
    /// 当前层级的菜单项
    pub items: Vec<MenuItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态（主菜单）
    pub fn new() -> Self {
        Self {
            mode: NavMode::Main,
            items: NavMode::Main.items(),
            selected: 0,
        }
    }

    /// 切换层级，重建菜单项并重置选中项
    pub fn enter(&mut self, mode: NavMode) {
        self.mode = mode;
        self.items = mode.items();
        self.selected = 0;
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 跳转到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳转到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的菜单项
    pub fn current_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的动作
    pub fn current_action(&self) -> Option<ActionKind> {
        self.current_item().map(|item| item.action)
    }

    /// 把选中项移到指定动作上，找不到时保持不变
    pub fn select_action(&mut self, action: ActionKind) -> bool {
        match self.items.iter().position(|item| item.action == action) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
