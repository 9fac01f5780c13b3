//! 应用主状态结构

use super::{NavigationState, Viewport, WizardSession};
use crate::context::AppContext;

/// 加载动画帧
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 应用主状态
///
/// 只由主循环所在线程修改；后台任务的结果经消息通道回到主循环后再写入。
#[derive(Debug, Clone)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 操作的命名空间（来自上下文）
    pub namespace: String,

    /// 导航状态
    pub navigation: NavigationState,

    /// 结果查看区
    pub viewport: Viewport,

    /// 输入向导（仅在收集输入期间存在）
    pub wizard: Option<WizardSession>,

    /// 是否有后台任务在执行
    pub loading: bool,

    /// 加载动画当前帧
    pub spinner_frame: usize,

    /// 最近一次错误
    pub last_error: Option<String>,
}

impl App {
    /// 创建新的应用实例（主菜单，无向导、无结果、无错误）
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            should_quit: false,
            namespace: ctx.namespace.clone(),
            navigation: NavigationState::new(),
            viewport: Viewport::new(),
            wizard: None,
            loading: false,
            spinner_frame: 0,
            last_error: None,
        }
    }

    /// 标记任务开始（派发前同步调用）
    pub fn begin_task(&mut self) {
        self.loading = true;
        self.spinner_frame = 0;
    }

    /// 标记任务结束
    pub fn finish_task(&mut self) {
        self.loading = false;
    }

    /// 推进加载动画
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
