//! 菜单列表组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染当前菜单层级
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let nav = &app.navigation;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = nav
        .items
        .iter()
        .map(|item| ListItem::new(Line::from(Span::raw(format!("  {}", item.title)))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", nav.mode.title()))
                .title_style(Styles::title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .style(Style::default().fg(c.fg))
        .highlight_style(Styles::selected())
        .highlight_symbol("▶");

    // ListState 只在渲染时临时构造，不回写 Model
    let mut state = ListState::default().with_selected(Some(nav.selected));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let description = nav
        .current_item()
        .map(|item| item.description.clone())
        .unwrap_or_default();
    let help = Paragraph::new(description)
        .style(Style::default().fg(c.muted).add_modifier(Modifier::ITALIC))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    frame.render_widget(help, chunks[1]);
}
