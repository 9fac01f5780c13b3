//! UI 组件

pub mod error;
pub mod menu;
pub mod spinner;
pub mod statusbar;
pub mod viewer;
pub mod wizard;
