//! 进程内存储
//!
//! 未配置数据库地址时使用，测试也基于它。两个集合各自加锁，
//! 与文档数据库一样不提供跨集合的原子性。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::app::category::model::{Category, CategoryFields};
use crate::app::item::model::{Item, ItemFields, ItemSummary};
use crate::core::repository::{CategoryRepository, ItemRepository, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: RwLock<HashMap<Uuid, Category>>,
    items: RwLock<HashMap<Uuid, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 按名称升序，与数据库按字节序排序的结果一致
macro_rules! sorted_by_name {
    ($rows:expr) => {{
        let mut rows: Vec<_> = $rows;
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }};
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Category>> {
        let categories = self.categories.read().await;
        let rows: Vec<Category> = categories.values().cloned().collect();
        Ok(sorted_by_name!(rows))
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[Uuid]) -> StoreResult<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(ids.iter().filter_map(|id| categories.get(id).cloned()).collect())
    }

    async fn create(&self, fields: CategoryFields) -> StoreResult<Category> {
        let category = Category {
            id: Uuid::new_v4(),
            name: fields.name,
        };
        self.categories
            .write()
            .await
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: Uuid, fields: CategoryFields) -> StoreResult<Option<Category>> {
        let mut categories = self.categories.write().await;
        Ok(categories.get_mut(&id).map(|category| {
            category.name = fields.name;
            category.clone()
        }))
    }

    async fn remove(&self, id: Uuid) -> StoreResult<Option<Category>> {
        Ok(self.categories.write().await.remove(&id))
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.categories.read().await.len() as u64)
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().await;
        let rows: Vec<Item> = items.values().cloned().collect();
        Ok(sorted_by_name!(rows))
    }

    async fn list_summaries(&self) -> StoreResult<Vec<ItemSummary>> {
        let items = self.items.read().await;
        let rows: Vec<ItemSummary> = items.values().map(ItemSummary::from).collect();
        Ok(sorted_by_name!(rows))
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Item>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_by_category(&self, category_id: Uuid) -> StoreResult<Vec<Item>> {
        let items = self.items.read().await;
        let matching: Vec<Item> = items
            .values()
            .filter(|item| item.references(category_id))
            .cloned()
            .collect();
        Ok(sorted_by_name!(matching))
    }

    async fn create(&self, fields: ItemFields) -> StoreResult<Item> {
        let item = Item {
            id: Uuid::new_v4(),
            name: fields.name,
            img_url: fields.img_url,
            price: fields.price,
            category: fields.category,
        };
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: Uuid, fields: ItemFields) -> StoreResult<Option<Item>> {
        let mut items = self.items.write().await;
        Ok(items.get_mut(&id).map(|item| {
            item.name = fields.name;
            item.img_url = fields.img_url;
            item.price = fields.price;
            item.category = fields.category;
            item.clone()
        }))
    }

    async fn remove(&self, id: Uuid) -> StoreResult<Option<Item>> {
        Ok(self.items.write().await.remove(&id))
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.items.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hammer(category: Vec<Uuid>) -> ItemFields {
        ItemFields {
            name: "Hammer".into(),
            img_url: "http://x/h.png".into(),
            price: 9.99,
            category,
        }
    }

    #[tokio::test]
    async fn test_lists_are_sorted_by_name() {
        let store = MemoryStore::new();
        for name in ["Tools", "Garden", "Kitchen"] {
            CategoryRepository::create(&store, CategoryFields { name: name.into() })
                .await
                .unwrap();
        }
        let names: Vec<String> = CategoryRepository::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Garden", "Kitchen", "Tools"]);
    }

    #[tokio::test]
    async fn test_find_many_preserves_reference_order_and_skips_dangling() {
        let store = MemoryStore::new();
        let a = CategoryRepository::create(&store, CategoryFields { name: "A".into() })
            .await
            .unwrap();
        let b = CategoryRepository::create(&store, CategoryFields { name: "B".into() })
            .await
            .unwrap();

        let found = store.find_many(&[b.id, Uuid::new_v4(), a.id]).await.unwrap();
        assert_eq!(found, vec![b, a]);
    }

    #[tokio::test]
    async fn test_find_by_category_and_update_in_place() {
        let store = MemoryStore::new();
        let tools = CategoryRepository::create(&store, CategoryFields { name: "Tools".into() })
            .await
            .unwrap();
        let item = ItemRepository::create(&store, hammer(vec![tools.id]))
            .await
            .unwrap();

        assert_eq!(store.find_by_category(tools.id).await.unwrap(), vec![item.clone()]);

        let updated = ItemRepository::update(&store, item.id, hammer(Vec::new()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, item.id);
        assert!(store.find_by_category(tools.id).await.unwrap().is_empty());

        let missing = ItemRepository::update(&store, Uuid::new_v4(), hammer(Vec::new()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_remove_and_count() {
        let store = MemoryStore::new();
        let item = ItemRepository::create(&store, hammer(Vec::new())).await.unwrap();
        assert_eq!(ItemRepository::count(&store).await.unwrap(), 1);

        assert!(ItemRepository::remove(&store, item.id).await.unwrap().is_some());
        assert!(ItemRepository::remove(&store, item.id).await.unwrap().is_none());
        assert_eq!(ItemRepository::count(&store).await.unwrap(), 0);
    }
}
