//! 结果查看区消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMessage {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// 关闭结果，回到菜单
    Dismiss,
}
