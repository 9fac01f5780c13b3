//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   ┌───────────┐   AppEvent    ┌─────────┐   AppMessage   ┌──────────┐        │
//！│   │ 输入线程   │ ────────────▶ │  Event  │ ─────────────▶ │  Update  │        │
//！│   │ (source)  │   Input/Tick  │   层    │                │    层    │        │
//！│   └───────────┘               └─────────┘                └────┬─────┘        │
//！│         ▲                          ▲                          │ Option<Task> │
//！│         │ mpsc::channel            │ TaskFinished             ▼              │
//！│         │                     ┌────┴──────┐             ┌──────────┐         │
//！│         └──────────────────── │ 工作任务   │ ◀────────── │ Executor │         │
//！│                               │ (tokio)   │   spawn      └──────────┘         │
//！│                               └───────────┘                                  │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/event/mod.rs
//! Event 层：事件流与按键路由
//!
//! 所有事件都进入同一个 std::sync::mpsc 通道，主循环用阻塞的 recv() 逐个取出。
//! 一个事件处理完之前不会处理下一个事件。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件 → 消息
//!         mod keymap;         // 快捷键映射
//!         mod source;         // 输入线程
//!
//!
//!     事件种类：
//!
//!         pub enum AppEvent {
//!             Input(Event),               // crossterm 键盘 / 窗口变化
//!             Tick,                       // 输入轮询超时
//!             TaskFinished(TaskOutcome),  // 后台任务完成
//!             InputFailed(String),        // 终端读取失败
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键路由（handle_event）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     按优先级：
//!         0. 只处理 Press 事件；Ctrl+C 任何时候都退出
//!         1. loading 为 true    → 丢弃（Tick 仍然推进动画）
//!         2. 有未确认的错误      → 任意键清除错误
//!         3. 有输入向导          → handle_wizard_keys
//!         4. 查看区有内容        → handle_viewer_keys
//!         5. 其他               → handle_navigation_keys
//!

mod handler;
mod keymap;
mod source;

pub use handler::handle_event;
pub use source::spawn_input_thread;

use crossterm::event::Event;

use crate::backend::TaskOutcome;

/// 主循环消费的事件
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// 终端输入（按键、窗口大小变化）
    Input(Event),
    /// 输入轮询超时
    Tick,
    /// 后台任务完成
    TaskFinished(TaskOutcome),
    /// 输入线程读取终端失败
    InputFailed(String),
}
