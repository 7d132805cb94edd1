//! 数据库基础设施
//!
//! PostgreSQL 实现。物品的分类引用存成 `UUID[]`，反向查询用
//! `$1 = ANY(category)`，和文档数据库里的引用数组一致，不做外键约束。

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;
use uuid::Uuid;

use crate::app::category::model::{Category, CategoryFields};
use crate::app::item::model::{Item, ItemFields, ItemSummary};
use crate::config::DatabaseConfig;
use crate::core::repository::{CategoryRepository, ItemRepository, StoreResult};

const ITEM_COLUMNS: &str = "id, name, img_url, price, category";

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(url)
            .await?;

        Ok(Self { pool })
    }

    /// 创建数据库表
    pub async fn create_tables(&self) -> Result<(), sqlx::Error> {
        info!("Creating database tables...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name VARCHAR(100) NOT NULL,
                img_url VARCHAR(500) NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                category UUID[] NOT NULL DEFAULT '{}'
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS items_category_idx ON items USING GIN (category)")
            .execute(&self.pool)
            .await?;

        info!("Database tables created successfully");
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for PgStore {
    async fn list(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT id, name FROM categories ORDER BY name COLLATE "C""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    async fn find_many(&self, ids: &[Uuid]) -> StoreResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let found = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        // 按引用顺序返回
        Ok(ids
            .iter()
            .filter_map(|id| found.iter().find(|c| c.id == *id).cloned())
            .collect())
    }

    async fn create(&self, fields: CategoryFields) -> StoreResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&fields.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(category)
    }

    async fn update(&self, id: Uuid, fields: CategoryFields) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&fields.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn remove(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("DELETE FROM categories WHERE id = $1 RETURNING id, name")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0 as u64)
    }
}

#[async_trait]
impl ItemRepository for PgStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            r#"SELECT {ITEM_COLUMNS} FROM items ORDER BY name COLLATE "C""#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn list_summaries(&self) -> StoreResult<Vec<ItemSummary>> {
        let items = sqlx::query_as::<_, ItemSummary>(
            r#"SELECT id, name, price FROM items ORDER BY name COLLATE "C""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn find_by_category(&self, category_id: Uuid) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            r#"SELECT {ITEM_COLUMNS} FROM items WHERE $1 = ANY(category) ORDER BY name COLLATE "C""#
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn create(&self, fields: ItemFields) -> StoreResult<Item> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "INSERT INTO items (name, img_url, price, category) VALUES ($1, $2, $3, $4) RETURNING {ITEM_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(&fields.img_url)
        .bind(fields.price)
        .bind(&fields.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    async fn update(&self, id: Uuid, fields: ItemFields) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "UPDATE items SET name = $1, img_url = $2, price = $3, category = $4 WHERE id = $5 RETURNING {ITEM_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(&fields.img_url)
        .bind(fields.price)
        .bind(&fields.category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn remove(&self, id: Uuid) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "DELETE FROM items WHERE id = $1 RETURNING {ITEM_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0 as u64)
    }
}
