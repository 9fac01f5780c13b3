//! 输入线程
//!
//! 阻塞地轮询 crossterm，把按键/窗口变化转发到事件通道；
//! 超时未收到输入时发送一次 `Tick`，驱动加载动画。

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use super::AppEvent;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 启动输入线程
///
/// 主循环退出（接收端被丢弃）后线程随之结束
pub fn spawn_input_thread(events: Sender<AppEvent>, tick_rate: Duration) -> JoinHandle<()> {
    thread::spawn(move || loop {
        let event = match poll_event(tick_rate) {
            Ok(Some(input)) => AppEvent::Input(input),
            Ok(None) => AppEvent::Tick,
            Err(e) => {
                let _ = events.send(AppEvent::InputFailed(e.to_string()));
                break;
            }
        };

        if events.send(event).is_err() {
            break;
        }
    })
}
