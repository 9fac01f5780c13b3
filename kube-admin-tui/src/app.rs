//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!     should_quit: false,
//!     namespace: ctx.namespace,               // 操作的命名空间
//!     navigation: NavigationState {
//!         mode: NavMode::Main,
//!         items: [Pods, Service Accounts, Roles, Role Bindings,
//!                 Resource Management, Health Check, Resource Usage,
//!                 Visualize Dependencies, Quit],
//!         selected: 0,
//!     },
//!     viewport: 空,
//!     wizard: None,
//!     loading: false,
//!     last_error: None,
//! }
//!
//!
//! 主循环阻塞在事件通道上，每处理完一个事件就重绘一次：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     let event = events.recv()                       // 阻塞等待下一个事件
//!                                                     //   按键 / 窗口变化 / Tick / 任务完成
//!     let msg = handle_event(event, &app)             // 事件 → 消息
//!     if let Some(task) = update(&mut app, msg) {     // 更新状态
//!         executor.dispatch(task)                     // 需要访问集群时派发后台任务
//!     }
//! }

use std::sync::mpsc::Receiver;

use anyhow::{bail, Context, Result};

use crate::backend::TaskExecutor;
use crate::event::{self, AppEvent};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    events: &Receiver<AppEvent>,
    executor: &TaskExecutor,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一个事件
        let event = events.recv().context("event channel closed")?;
        if let AppEvent::InputFailed(reason) = &event {
            bail!("failed to read terminal input: {reason}");
        }

        // 4. 处理事件，获取消息
        let msg = event::handle_event(event, app);

        // 5. 更新状态，必要时派发后台任务
        if let Some(task) = update::update(app, msg) {
            executor.dispatch(task);
        }
    }

    Ok(())
}
