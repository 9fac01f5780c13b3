//! 应用主消息枚举

use super::{NavigationMessage, ViewerMessage, WizardMessage};
use crate::backend::TaskOutcome;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 动画 tick（加载中唯一被处理的周期性消息）
    Tick,

    /// 清除错误
    DismissError,

    /// 菜单导航
    Navigation(NavigationMessage),

    /// 输入向导
    Wizard(WizardMessage),

    /// 结果查看区
    Viewer(ViewerMessage),

    /// 后台任务完成
    TaskFinished(TaskOutcome),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
