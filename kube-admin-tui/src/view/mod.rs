//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层是 Model 的纯函数：只读取 App，从不修改它。
//! 每个事件处理完后主循环都会重绘一次，窗口变化和 Tick 也只是触发重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod components;     // 菜单、向导、结果、错误、加载动画、状态栏
//!         pub mod report;     // 任务结果格式化（供 Update 层写入查看区）
//!         pub mod theme;      // 主题颜色
//!
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ 标题栏：应用名 │ namespace: default            │
//!     ├──────────────────────────────────────────────┤
//!     │                                              │
//!     │   主内容区（按优先级只显示一个）：              │
//!     │       错误 > 加载中 > 向导 > 结果 > 菜单       │
//!     │                                              │
//!     ├──────────────────────────────────────────────┤
//!     │ 快捷键提示                                    │
//!     └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
pub mod report;
pub mod theme;

pub use layout::render;
