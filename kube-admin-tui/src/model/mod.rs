//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层只保存数据，不执行任何 I/O。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主状态 App
//!         mod navigation;     // 菜单层级与菜单项
//!         mod viewport;       // 结果查看区
//!         mod wizard;         // 输入向导状态机
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit,        // 是否退出
//!         namespace,          // 操作的命名空间
//!         navigation,         // 当前菜单层级（Main / Pods / ... 只有一个激活）
//!         viewport,           // 最近一次任务结果
//!         wizard,             // Option<WizardSession>
//!         loading,            // 是否有任务在执行（至多一个）
//!         spinner_frame,      // 加载动画帧
//!         last_error,         // 最近一次错误
//!     }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、导航（NavigationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     NavMode 枚举决定菜单项，菜单项的动作是封闭的 ActionKind：
//!         Open(NavMode) / List / Create / Delete / Describe / Logs /
//!         Report / Back / Quit
//!
//!     切换层级时重建菜单项，选中项回到第一项。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、输入向导（WizardSession）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     动作（WizardAction）决定固定的步骤序列：
//!         创建 Pod：  Name → Image → Namespace → Confirm
//!         删除/详情/日志：Name
//!
//!     submit() 返回 StepOutcome，由 Update 层决定是否派发任务。
//!

mod app;
mod navigation;
mod viewport;
mod wizard;

pub use app::App;
pub use navigation::{ActionKind, NavMode, NavigationState, ReportKind};
pub use viewport::Viewport;
pub use wizard::{split_list, StepOutcome, WizardAction, WizardSession, WizardStep};
