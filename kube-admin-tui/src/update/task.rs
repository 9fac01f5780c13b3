//! 任务完成处理
//!
//! 后台任务的结果只在这里写入 Model。

use crate::backend::{TaskOutcome, TaskTag};
use crate::model::App;
use crate::view::report;

/// 应用任务结果
pub fn apply(app: &mut App, outcome: TaskOutcome) {
    app.finish_task();

    // 向导在任务完成后关闭（无论成功或失败）
    if outcome.tag == TaskTag::Wizard {
        app.wizard = None;
    }

    match outcome.result {
        Ok(payload) => {
            let (title, body) = report::format_payload(&payload);
            app.viewport.show(title, body);
            app.clear_error();
        }
        Err(err) => app.set_error(err.to_string()),
    }
}
