//! 输入向导消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMessage {
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 提交当前步骤
    Submit,
    /// 放弃整个向导
    Cancel,
}
