//! 结果查看区组件

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::Viewport;
use crate::view::theme::{colors, Styles};

pub fn render(viewport: &Viewport, frame: &mut Frame, area: Rect) {
    let title = if viewport.title.is_empty() {
        t().common.result
    } else {
        viewport.title.as_str()
    };

    let paragraph = Paragraph::new(viewport.content())
        .style(Style::default().fg(colors().fg))
        .scroll((viewport.scroll, 0))
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Styles::title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        );

    frame.render_widget(paragraph, area);
}
