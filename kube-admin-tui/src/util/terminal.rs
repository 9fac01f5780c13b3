//! 终端初始化和清理
//!
//! 进入原始模式 + 备用屏幕之前先挂上 panic hook，
//! 保证主循环 panic 时终端也能恢复，再交给默认 hook 打印信息。

use std::io::{self, Stdout, Write};
use std::panic;
use std::thread;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    Ok(())
}

/// 只有 UI 线程的 panic 才恢复终端；后台任务的 panic 由执行器转成错误消息，
/// 这里只记日志，不破坏仍在运行的界面
fn install_panic_hook() {
    let ui_thread = thread::current().id();
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if thread::current().id() != ui_thread {
            log::error!("Background thread panicked: {info}");
            return;
        }

        // 尽力恢复，失败也要继续打印 panic 信息
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        log::error!("kube-admin panicked: {info}");
        default_hook(info);
    }));
}

/// 离开备用屏幕并恢复光标
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}
