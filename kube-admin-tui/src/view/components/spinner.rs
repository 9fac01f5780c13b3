//! 加载动画组件

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 垂直居中
    let top = area.height.saturating_sub(3) / 2;
    let mut lines = vec![String::new(); usize::from(top)];
    lines.push(format!("{} {}", app.spinner(), t().common.loading));

    let paragraph = Paragraph::new(lines.join("\n"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().highlight))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );

    frame.render_widget(paragraph, area);
}
