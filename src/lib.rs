//! miller-columns - 分栏式导航布局库
//!
//! 模块结构：
//! - models: 数据模型（Layout, Column, Item）与列操作
//! - kernel: 状态容器（Action, Store）、设置与翻译端口

pub mod kernel;
pub mod models;
