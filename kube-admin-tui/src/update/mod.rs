//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 唯一修改 Model 的地方。每条消息在这里同步处理完毕，不做任何阻塞调用；
//! 需要访问集群时返回一个 Task，由主循环交给 TaskExecutor。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;     // 菜单导航
//!         mod task;           // 任务完成
//!         mod viewer;         // 结果查看区
//!         mod wizard;         // 输入向导
//!
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<Task> {
//!         match msg {
//!             AppMessage::Navigation(..) => navigation::update(..),   // loading 时忽略
//!             AppMessage::Wizard(..)     => wizard::update(..),       // loading 时忽略
//!             AppMessage::Viewer(..)     => viewer::update(..),       // loading 时忽略
//!             AppMessage::TaskFinished(..) => task::apply(..),
//!             ...
//!         }
//!     }
//!
//!     返回 Some(Task) 时，在返回之前同步地把 loading 置为 true，
//!     因此在该任务完成前不会有第二个任务被派发。
//!

mod navigation;
mod task;
mod viewer;
mod wizard;

use crate::backend::Task;
use crate::message::AppMessage;
use crate::model::App;

/// 处理消息，更新状态；需要后台执行时返回任务
pub fn update(app: &mut App, msg: AppMessage) -> Option<Task> {
    let task = match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Tick => {
            app.tick();
            None
        }

        AppMessage::DismissError => {
            app.clear_error();
            None
        }

        // 加载中只处理 Tick 与任务完成
        AppMessage::Navigation(_) | AppMessage::Wizard(_) | AppMessage::Viewer(_)
            if app.loading =>
        {
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Wizard(wizard_msg) => wizard::update(app, wizard_msg),

        AppMessage::Viewer(viewer_msg) => {
            viewer::update(app, viewer_msg);
            None
        }

        AppMessage::TaskFinished(outcome) => {
            task::apply(app, outcome);
            None
        }

        AppMessage::Noop => None,
    };

    if task.is_some() {
        app.begin_task();
    }

    task
}
