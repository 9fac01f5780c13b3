//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 按键、动画 tick 与后台任务的完成通知，都先被翻译成 AppMessage，
//! 再交给 Update 层修改 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod navigation;     // 菜单导航子消息
//!         mod viewer;         // 结果查看区子消息
//!         mod wizard;         // 输入向导子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Tick,                               // 加载动画
//!             DismissError,                       // 确认错误
//!             Navigation(NavigationMessage),      // 菜单
//!             Wizard(WizardMessage),              // 输入向导
//!             Viewer(ViewerMessage),              // 结果查看区
//!             TaskFinished(TaskOutcome),          // 后台任务完成
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//! 后台任务的结果只能以 TaskFinished 的形式回到 Update 层，
//! 任务本身不持有 Model 的任何引用。
//!

mod app;
mod navigation;
mod viewer;
mod wizard;

pub use app::AppMessage;
pub use navigation::NavigationMessage;
pub use viewer::ViewerMessage;
pub use wizard::WizardMessage;
