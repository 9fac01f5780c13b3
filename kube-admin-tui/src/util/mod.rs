//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：终端的初始化与恢复，以及日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端：
//!         enable_raw_mode()                       // 1. 启用原始模式
//!         execute!(stdout, EnterAlternateScreen)  // 2. 进入备用屏幕
//!         Terminal::new(CrosstermBackend)         // 3. 创建终端对象
//!
//!     恢复终端：
//!         disable_raw_mode()                      // 1. 禁用原始模式
//!         execute!(.., LeaveAlternateScreen)      // 2. 离开备用屏幕
//!         terminal.show_cursor()                  // 3. 显示光标
//!
//!         无论主循环是正常退出还是返回错误，都必须先恢复终端。
//!
//!
//!     日志：
//!         终端被 UI 占用，日志通过 tracing-appender 写入
//!         <cache_dir>/kube-admin/kube-admin.log。
//!         `log` 宏的记录经 tracing-subscriber 的 tracing-log 桥接进入同一个文件。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
