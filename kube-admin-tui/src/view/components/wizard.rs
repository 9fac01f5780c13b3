//! 输入向导组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::WizardSession;
use crate::view::theme::{colors, Styles};

pub fn render(session: &WizardSession, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = &t().wizard;
    let (step, total) = session.progress();

    let mut lines = Vec::new();

    // 已收集的字段
    let collected = session.collected();
    if !collected.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{}:", texts.collected),
            Style::default().fg(c.muted),
        )));
        for (field, value) in collected {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", field.prompt()), Style::default().fg(c.muted)),
                Span::styled(value.to_string(), Style::default().fg(c.success)),
            ]));
        }
        lines.push(Line::from(""));
    }

    if session.submitted {
        lines.push(Line::from(Span::styled(
            texts.submitted,
            Style::default().fg(c.highlight),
        )));
    } else {
        let current = session.current_step();
        let mut prompt = vec![Span::styled(
            format!("{}: ", current.prompt()),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )];
        if let Some(hint) = session.default_hint() {
            prompt.push(Span::styled(format!("({hint}) "), Style::default().fg(c.muted)));
        }
        lines.push(Line::from(prompt));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(c.highlight)),
            Span::raw(session.input.clone()),
            Span::styled("█", Style::default().fg(c.highlight)),
        ]));

        if let Some(error) = &session.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(c.error),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} [{step}/{total}] ", session.action.title()))
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );

    frame.render_widget(paragraph, area);
}
