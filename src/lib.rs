//! # 商品目录
//!
//! 物品（Item）与分类（Category）两个实体的增删改查：
//! - 服务端渲染的 HTML 页面（`/catalog/...`）
//! - 只读的 JSON 接口（`/api/...`）
//! - 通过仓储 trait 注入的存储（内存或 PostgreSQL）

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
