//! 错误提示组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::colors;

pub fn render(message: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            texts.common.dismiss_error,
            Style::default().fg(c.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", texts.common.error))
            .title_style(Style::default().fg(c.error).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.error)),
    );

    frame.render_widget(paragraph, area);
}
