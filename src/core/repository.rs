//! 存储层抽象
//!
//! 控制器只通过这两个 trait 访问存储，具体实现（内存 / PostgreSQL）
//! 在启动时注入到 [`crate::app::AppState`]。

use async_trait::async_trait;
use uuid::Uuid;

use crate::app::category::model::{Category, CategoryFields};
use crate::app::item::model::{Item, ItemFields, ItemSummary};

/// 存储错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 全部分类，按名称升序
    async fn list(&self) -> StoreResult<Vec<Category>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>>;

    /// 按给定顺序解析引用，不存在的 id 直接跳过
    async fn find_many(&self, ids: &[Uuid]) -> StoreResult<Vec<Category>>;

    async fn create(&self, fields: CategoryFields) -> StoreResult<Category>;

    /// 整体替换可写字段，id 不变；记录不存在时返回 `None`
    async fn update(&self, id: Uuid, fields: CategoryFields) -> StoreResult<Option<Category>>;

    async fn remove(&self, id: Uuid) -> StoreResult<Option<Category>>;

    async fn count(&self) -> StoreResult<u64>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 全部物品，按名称升序
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// 只含 id / name / price 的投影，按名称升序
    async fn list_summaries(&self) -> StoreResult<Vec<ItemSummary>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Item>>;

    /// 引用了指定分类的物品，按名称升序
    async fn find_by_category(&self, category_id: Uuid) -> StoreResult<Vec<Item>>;

    async fn create(&self, fields: ItemFields) -> StoreResult<Item>;

    async fn update(&self, id: Uuid, fields: ItemFields) -> StoreResult<Option<Item>>;

    async fn remove(&self, id: Uuid) -> StoreResult<Option<Item>>;

    async fn count(&self) -> StoreResult<u64>;
}
