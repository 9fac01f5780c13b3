//! 导航消息处理

use crate::backend::{Operation, Task};
use crate::message::NavigationMessage;
use crate::model::{ActionKind, App, NavMode, ReportKind, WizardAction, WizardSession};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Task> {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Back => back(app),
        NavigationMessage::Confirm => {
            return app
                .navigation
                .current_action()
                .and_then(|action| apply_action(app, action));
        }
    }

    None
}

/// 切换菜单层级，清空查看区与错误
fn enter(app: &mut App, mode: NavMode) {
    app.navigation.enter(mode);
    app.viewport.clear();
    app.clear_error();
}

/// 回到主菜单，并选中刚离开的分类
fn back(app: &mut App) {
    let previous = app.navigation.mode;
    enter(app, NavMode::Main);
    app.navigation.select_action(ActionKind::Open(previous));
}

fn start_wizard(app: &mut App, action: WizardAction) {
    log::debug!("Starting wizard: {action:?}");
    app.wizard = Some(WizardSession::new(action));
}

/// 执行选中的菜单项
fn apply_action(app: &mut App, action: ActionKind) -> Option<Task> {
    let namespace = app.namespace.clone();

    match action {
        ActionKind::Open(mode) => enter(app, mode),
        ActionKind::Back => back(app),
        ActionKind::Quit => app.should_quit = true,

        ActionKind::List(kind) => {
            return Some(Task::query(Operation::List { kind, namespace }));
        }

        ActionKind::Create(kind) => start_wizard(app, WizardAction::Create(kind)),
        ActionKind::Delete(kind) => start_wizard(app, WizardAction::Delete(kind)),
        ActionKind::Describe => start_wizard(app, WizardAction::DescribePod),
        ActionKind::Logs => start_wizard(app, WizardAction::PodLogs),

        ActionKind::Report(report) => {
            let operation = match report {
                ReportKind::Health => Operation::Health { namespace },
                ReportKind::Usage => Operation::Usage { namespace },
                ReportKind::DependencyGraph => Operation::DependencyGraph { namespace },
            };
            return Some(Task::query(operation));
        }
    }

    None
}
