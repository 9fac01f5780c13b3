//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::model::App;

use super::components;

/// 渲染主布局
///
/// 只读取 Model；同一状态重复渲染得到相同的画面
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 快捷键提示
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 快捷键提示
        ])
        .split(size);

    components::statusbar::render_title(app, frame, main_layout[0]);
    render_body(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

/// 主内容区：错误 > 加载中 > 向导 > 结果 > 菜单
fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(error) = &app.last_error {
        components::error::render(error, frame, area);
    } else if app.loading {
        components::spinner::render(app, frame, area);
    } else if let Some(session) = &app.wizard {
        components::wizard::render(session, frame, area);
    } else if !app.viewport.is_empty() {
        components::viewer::render(&app.viewport, frame, area);
    } else {
        components::menu::render(app, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use kube_admin_core::ResourceKind;

    use super::*;
    use crate::context::AppContext;
    use crate::i18n::t;
    use crate::model::{NavMode, WizardAction, WizardSession};

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut app = App::new(&AppContext::default());
        app.navigation.enter(NavMode::Pods);
        app.navigation.select_next();

        let first = draw(&app);
        let second = draw(&app);

        assert_eq!(first, second);
    }

    #[test]
    fn error_takes_precedence_over_everything() {
        let mut app = App::new(&AppContext::default());
        app.wizard = Some(WizardSession::new(WizardAction::PodLogs));
        app.viewport.show("result", "viewport text");
        app.set_error("connection refused");

        let screen = text(&draw(&app));

        assert!(screen.contains("connection refused"));
        assert!(!screen.contains("viewport text"));
    }

    #[test]
    fn spinner_hides_wizard_while_its_task_runs() {
        let mut app = App::new(&AppContext::default());
        let mut session = WizardSession::new(WizardAction::PodLogs);
        session.input = "typed-web-1".into();
        app.wizard = Some(session);

        assert!(text(&draw(&app)).contains("typed-web-1"));

        app.begin_task();
        let screen = text(&draw(&app));

        assert!(screen.contains(t().common.loading));
        assert!(!screen.contains("typed-web-1"));
    }

    #[test]
    fn wizard_takes_precedence_over_viewport() {
        let mut app = App::new(&AppContext::default());
        app.viewport.show("Pods", "previous listing");
        let mut session = WizardSession::new(WizardAction::Delete(ResourceKind::Pod));
        session.input = "typed-web-1".into();
        app.wizard = Some(session);

        let screen = text(&draw(&app));

        assert!(screen.contains("typed-web-1"));
        assert!(!screen.contains("previous listing"));
    }

    #[test]
    fn viewport_replaces_menu() {
        let mut app = App::new(&AppContext::default());
        let main_title = app.navigation.items[0].title.clone();

        assert!(text(&draw(&app)).contains(&main_title));

        app.viewport.show("Logs", "hello from web-1");
        let screen = text(&draw(&app));
        assert!(screen.contains("hello from web-1"));
        assert!(!screen.contains(&main_title));
    }

    #[test]
    fn title_bar_shows_namespace() {
        let mut app = App::new(&AppContext::default());
        app.namespace = "payments".into();

        assert!(text(&draw(&app)).contains("payments"));
    }
}
