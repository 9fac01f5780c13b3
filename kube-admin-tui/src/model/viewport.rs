//! 结果查看区状态

/// 最近一次任务结果的文本与滚动位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    /// 标题（空表示使用默认标题）
    pub title: String,
    content: String,
    /// 首个可见行
    pub scroll: u16,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换内容并回到顶部
    pub fn show(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.content.lines().count().saturating_sub(1);
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}
