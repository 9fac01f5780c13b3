//! 事件处理器

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keymap::DefaultKeymap;
use super::AppEvent;
use crate::message::{AppMessage, NavigationMessage, ViewerMessage, WizardMessage};
use crate::model::{App, NavMode};

/// 处理事件，返回对应的消息
pub fn handle_event(event: AppEvent, app: &App) -> AppMessage {
    match event {
        AppEvent::Input(Event::Key(key)) => handle_key_event(key, app),
        // 窗口大小改变，下一轮自动重绘
        AppEvent::Input(_) => AppMessage::Noop,
        AppEvent::Tick => AppMessage::Tick,
        AppEvent::TaskFinished(outcome) => AppMessage::TaskFinished(outcome),
        // 由主循环直接处理
        AppEvent::InputFailed(_) => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.loading {
        return AppMessage::Noop;
    }

    if app.last_error.is_some() {
        return AppMessage::DismissError;
    }

    if app.wizard.is_some() {
        return handle_wizard_keys(key);
    }

    if !app.viewport.is_empty() {
        return handle_viewer_keys(key);
    }

    handle_navigation_keys(key, app.navigation.mode)
}

/// 处理菜单的按键
fn handle_navigation_keys(key: KeyEvent, mode: NavMode) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return if mode == NavMode::Main {
            AppMessage::Quit
        } else {
            AppMessage::Navigation(NavigationMessage::Back)
        };
    }

    if DefaultKeymap::BACK.matches(&key) {
        return if mode == NavMode::Main {
            AppMessage::Noop
        } else {
            AppMessage::Navigation(NavigationMessage::Back)
        };
    }

    if DefaultKeymap::NAV_FIRST.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectFirst);
    }
    if DefaultKeymap::NAV_LAST.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectLast);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        _ => AppMessage::Noop,
    }
}

/// 处理输入向导的按键
fn handle_wizard_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Wizard(WizardMessage::Cancel),
        KeyCode::Enter => AppMessage::Wizard(WizardMessage::Submit),
        KeyCode::Backspace => AppMessage::Wizard(WizardMessage::Backspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Wizard(WizardMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理结果查看区的按键
fn handle_viewer_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::PAGE_UP.matches(&key) {
        return AppMessage::Viewer(ViewerMessage::PageUp);
    }
    if DefaultKeymap::PAGE_DOWN.matches(&key) {
        return AppMessage::Viewer(ViewerMessage::PageDown);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Viewer(ViewerMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Viewer(ViewerMessage::ScrollDown),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Viewer(ViewerMessage::Top),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Viewer(ViewerMessage::Bottom),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            AppMessage::Viewer(ViewerMessage::Dismiss)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;
    use crate::context::AppContext;
    use crate::model::{WizardAction, WizardSession};

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn app() -> App {
        App::new(&AppContext::default())
    }

    #[test]
    fn ctrl_c_quits_even_while_loading() {
        let mut app = app();
        app.begin_task();
        let ctrl_c = AppEvent::Input(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn keys_are_discarded_while_loading_but_ticks_are_not() {
        let mut app = app();
        app.begin_task();

        assert!(matches!(handle_event(press(KeyCode::Down), &app), AppMessage::Noop));
        assert!(matches!(handle_event(AppEvent::Tick, &app), AppMessage::Tick));
    }

    #[test]
    fn any_key_dismisses_a_pending_error() {
        let mut app = app();
        app.set_error("boom");

        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::DismissError
        ));
    }

    #[test]
    fn wizard_takes_priority_over_viewer_and_menu() {
        let mut app = app();
        app.viewport.show("result", "text");
        app.wizard = Some(WizardSession::new(WizardAction::PodLogs));

        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Wizard(WizardMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Wizard(WizardMessage::Cancel)
        ));
    }

    #[test]
    fn viewer_handles_keys_when_content_is_shown() {
        let mut app = app();
        app.viewport.show("result", "text");

        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Viewer(ViewerMessage::ScrollDown)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Viewer(ViewerMessage::Dismiss)
        ));
    }

    #[test]
    fn q_quits_on_main_and_goes_back_in_submenus() {
        let mut app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));

        app.navigation.enter(NavMode::Pods);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Navigation(NavigationMessage::Back)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app();
        let release = AppEvent::Input(Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));

        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }
}
