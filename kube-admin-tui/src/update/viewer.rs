//! 结果查看区消息处理

use crate::message::ViewerMessage;
use crate::model::App;

/// PageUp / PageDown 的滚动行数
const PAGE_SIZE: u16 = 10;

pub fn update(app: &mut App, msg: ViewerMessage) {
    let viewport = &mut app.viewport;
    match msg {
        ViewerMessage::ScrollUp => viewport.scroll_up(1),
        ViewerMessage::ScrollDown => viewport.scroll_down(1),
        ViewerMessage::PageUp => viewport.scroll_up(PAGE_SIZE),
        ViewerMessage::PageDown => viewport.scroll_down(PAGE_SIZE),
        ViewerMessage::Top => viewport.scroll_to_top(),
        ViewerMessage::Bottom => viewport.scroll_to_bottom(),
        ViewerMessage::Dismiss => viewport.clear(),
    }
}
