//! 标题栏与底部快捷键提示

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavMode};
use crate::view::theme::{colors, Styles};

/// 渲染标题栏（应用名 + 操作的命名空间）
pub fn render_title(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let common = &t().common;
    let title = format!(
        " {}  │  {}: {}",
        common.app_name, common.namespace, app.namespace
    );
    let paragraph =
        Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

/// 渲染底部快捷键提示
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    if app.loading {
        return vec![("Ctrl+C", h.force_quit)];
    }

    if app.last_error.is_some() {
        return vec![("Any key", h.dismiss), ("Ctrl+C", h.force_quit)];
    }

    if app.wizard.is_some() {
        return vec![("Enter", h.submit), ("Esc", h.cancel), ("Ctrl+C", h.force_quit)];
    }

    if !app.viewport.is_empty() {
        return vec![("↑↓/PgUp/PgDn", h.scroll), ("Esc/q", h.close), ("Ctrl+C", h.force_quit)];
    }

    let mut hints = vec![("↑↓/jk", h.navigate), ("Enter", h.select)];
    if app.navigation.mode == NavMode::Main {
        hints.push(("q", h.quit));
    } else {
        hints.push(("Esc/q", h.back));
    }
    hints.push(("Ctrl+C", h.force_quit));
    hints
}
