//! 数据模型层

pub mod layout;
pub mod layout_columns;

pub use layout::{Column, Item, Layout, LayoutError};
pub use layout_columns::{DropRejection, MIN_COLUMNS};
