//! 输入向导状态机
//!
//! 每种动作有固定的步骤序列，创建类动作以 `Confirm` 结尾；
//! 删除、详情、日志只有一步（名称），提交后直接执行。
//!
//!     Name ──▶ Image ──▶ Namespace ──▶ Confirm ──y──▶ Submit
//!                                         │
//!                                         └──n──▶ Declined
//!
//! 校验失败时停留在当前步骤，`error` 保存提示语。

use std::collections::HashMap;

use kube_admin_core::utils::{
    validate_namespace_name, validate_path_segment_name, validate_resource_name,
};
use kube_admin_core::{CoreError, ResourceKind};

use crate::i18n::{fill, fill_kind, t};

/// 未填写命名空间时使用的默认值
pub const DEFAULT_NAMESPACE: &str = "default";
/// 创建 Role 时默认授权的资源
pub const DEFAULT_RESOURCES: &str = "pods";
/// 创建 Role 时默认授权的动作
pub const DEFAULT_VERBS: &str = "get,list,watch";

/// 向导动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Create(ResourceKind),
    Delete(ResourceKind),
    DescribePod,
    PodLogs,
}

impl WizardAction {
    /// 固定的步骤序列
    pub fn steps(self) -> &'static [WizardStep] {
        use WizardStep::{Confirm, Image, Name, Namespace, Resources, Role, ServiceAccount, Verbs};

        match self {
            WizardAction::Create(ResourceKind::Pod) => &[Name, Image, Namespace, Confirm],
            WizardAction::Create(ResourceKind::ServiceAccount) => &[Name, Namespace, Confirm],
            WizardAction::Create(ResourceKind::Role) => {
                &[Name, Namespace, Resources, Verbs, Confirm]
            }
            WizardAction::Create(ResourceKind::RoleBinding) => {
                &[Name, Role, ServiceAccount, Namespace, Confirm]
            }
            WizardAction::Delete(_) | WizardAction::DescribePod | WizardAction::PodLogs => &[Name],
        }
    }

    /// 操作的资源类型
    pub fn target_kind(self) -> ResourceKind {
        match self {
            WizardAction::Create(kind) | WizardAction::Delete(kind) => kind,
            WizardAction::DescribePod | WizardAction::PodLogs => ResourceKind::Pod,
        }
    }

    /// 向导标题
    pub fn title(self) -> String {
        let wizard = &t().wizard;
        match self {
            WizardAction::Create(kind) => fill_kind(wizard.title_create, kind),
            WizardAction::Delete(kind) => fill_kind(wizard.title_delete, kind),
            WizardAction::DescribePod => fill_kind(wizard.title_describe, ResourceKind::Pod),
            WizardAction::PodLogs => fill_kind(wizard.title_logs, ResourceKind::Pod),
        }
    }
}

/// 向导步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Name,
    Image,
    Namespace,
    /// RoleBinding 绑定的 Role
    Role,
    /// RoleBinding 的主体，`name` 或 `namespace:name`
    ServiceAccount,
    Resources,
    Verbs,
    Confirm,
}

impl WizardStep {
    /// 字段名（`collected` 中的键）
    pub fn field(self) -> &'static str {
        match self {
            WizardStep::Name => "name",
            WizardStep::Image => "image",
            WizardStep::Namespace => "namespace",
            WizardStep::Role => "role",
            WizardStep::ServiceAccount => "serviceAccount",
            WizardStep::Resources => "resources",
            WizardStep::Verbs => "verbs",
            WizardStep::Confirm => "confirm",
        }
    }

    /// 留空时采用的默认值
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            WizardStep::Namespace => Some(DEFAULT_NAMESPACE),
            WizardStep::Resources => Some(DEFAULT_RESOURCES),
            WizardStep::Verbs => Some(DEFAULT_VERBS),
            _ => None,
        }
    }

    /// 提示语
    pub fn prompt(self) -> &'static str {
        let wizard = &t().wizard;
        match self {
            WizardStep::Name => wizard.prompt_name,
            WizardStep::Image => wizard.prompt_image,
            WizardStep::Namespace => wizard.prompt_namespace,
            WizardStep::Role => wizard.prompt_role,
            WizardStep::ServiceAccount => wizard.prompt_service_account,
            WizardStep::Resources => wizard.prompt_resources,
            WizardStep::Verbs => wizard.prompt_verbs,
            WizardStep::Confirm => wizard.prompt_confirm,
        }
    }

    /// 校验输入，返回规范化后的值
    fn validate(self, action: WizardAction, raw: &str) -> Result<String, String> {
        let wizard = &t().wizard;
        let value = match (raw.is_empty(), self.default_value()) {
            (true, Some(default)) => return Ok(default.to_string()),
            (true, None) => return Err(wizard.error_required.to_string()),
            (false, _) => raw,
        };

        match self {
            WizardStep::Name => {
                match action.target_kind() {
                    ResourceKind::Role | ResourceKind::RoleBinding => {
                        check(validate_path_segment_name(value))?;
                    }
                    ResourceKind::Pod | ResourceKind::ServiceAccount => {
                        check(validate_resource_name(value))?;
                    }
                }
                Ok(value.to_string())
            }
            WizardStep::Role => {
                check(validate_path_segment_name(value))?;
                Ok(value.to_string())
            }
            WizardStep::Namespace => {
                check(validate_namespace_name(value))?;
                Ok(value.to_string())
            }
            WizardStep::Image => {
                if value.chars().any(char::is_whitespace) {
                    Err(wizard.error_image.to_string())
                } else {
                    Ok(value.to_string())
                }
            }
            WizardStep::ServiceAccount => {
                let valid = match value.split_once(':') {
                    Some((ns, name)) => {
                        validate_namespace_name(ns).is_ok() && validate_resource_name(name).is_ok()
                    }
                    None => validate_resource_name(value).is_ok(),
                };
                if valid {
                    Ok(value.to_string())
                } else {
                    Err(wizard.error_service_account.to_string())
                }
            }
            WizardStep::Resources | WizardStep::Verbs => {
                let entries = split_list(value);
                if entries.is_empty() {
                    Err(wizard.error_list.to_string())
                } else {
                    Ok(entries.join(","))
                }
            }
            WizardStep::Confirm => Ok(value.to_string()),
        }
    }
}

fn check(result: Result<(), CoreError>) -> Result<(), String> {
    result.map_err(|e| match e {
        CoreError::Validation(msg) => msg,
        other => other.to_string(),
    })
}

/// 拆分逗号分隔的列表，忽略空项
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 一次提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// 进入下一步
    Advanced,
    /// 校验失败，停留在当前步骤
    Rejected,
    /// 全部字段已收集并确认，可以派发任务
    Submit,
    /// 确认步骤收到否定或无法识别的回答
    Declined,
    /// 已提交，等待任务完成
    Pending,
}

/// 向导会话
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub action: WizardAction,
    step_index: usize,
    /// 已收集的字段
    collected: HashMap<&'static str, String>,
    /// 已进入过的步骤（按顺序）
    visited: Vec<WizardStep>,
    /// 当前输入缓冲
    pub input: String,
    /// 当前步骤的校验错误
    pub error: Option<String>,
    /// 已确认提交，等待任务完成
    pub submitted: bool,
}

impl WizardSession {
    pub fn new(action: WizardAction) -> Self {
        let first = action.steps()[0];
        Self {
            action,
            step_index: 0,
            collected: HashMap::new(),
            visited: vec![first],
            input: String::new(),
            error: None,
            submitted: false,
        }
    }

    /// 当前步骤
    pub fn current_step(&self) -> WizardStep {
        let steps = self.action.steps();
        steps[self.step_index.min(steps.len() - 1)]
    }

    /// 第几步（从 1 开始）与总步数
    pub fn progress(&self) -> (usize, usize) {
        (self.visited.len(), self.action.steps().len())
    }

    /// 读取已收集的字段
    pub fn field(&self, step: WizardStep) -> Option<&str> {
        self.collected.get(step.field()).map(String::as_str)
    }

    /// 已收集的字段，按步骤顺序
    pub fn collected(&self) -> Vec<(WizardStep, &str)> {
        self.action
            .steps()
            .iter()
            .filter_map(|step| self.field(*step).map(|value| (*step, value)))
            .collect()
    }

    pub fn push_char(&mut self, c: char) {
        if !self.submitted {
            self.input.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if !self.submitted {
            self.input.pop();
        }
    }

    /// 当前步骤的默认值提示
    pub fn default_hint(&self) -> Option<String> {
        self.current_step()
            .default_value()
            .map(|value| fill(t().wizard.default_hint, &[("value", value)]))
    }

    /// 提交当前输入
    pub fn submit(&mut self) -> StepOutcome {
        if self.submitted {
            return StepOutcome::Pending;
        }

        let step = self.current_step();
        let raw = self.input.trim().to_string();

        if step == WizardStep::Confirm {
            return if matches!(raw.to_lowercase().as_str(), "y" | "yes") {
                self.submitted = true;
                StepOutcome::Submit
            } else {
                StepOutcome::Declined
            };
        }

        match step.validate(self.action, &raw) {
            Ok(value) => {
                self.collected.insert(step.field(), value);
                self.input.clear();
                self.error = None;
                self.step_index += 1;

                if self.step_index >= self.action.steps().len() {
                    self.submitted = true;
                    StepOutcome::Submit
                } else {
                    self.visited.push(self.current_step());
                    StepOutcome::Advanced
                }
            }
            Err(message) => {
                self.error = Some(message);
                StepOutcome::Rejected
            }
        }
    }
}
