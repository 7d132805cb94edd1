//! 分类业务服务

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::form::CategoryForm;
use super::model::{Category, CategoryDetail};
use crate::app::validation::{FieldError, FormOutcome};
use crate::core::error::CoreError;
use crate::core::repository::{CategoryRepository, ItemRepository};

pub const CREATE_TITLE: &str = "Create Category";
pub const UPDATE_TITLE: &str = "Update Category";

#[derive(Debug, Clone)]
pub struct CategoryFormPage {
    pub title: &'static str,
    pub form: CategoryForm,
    pub errors: Vec<FieldError>,
}

/// 删除请求的结果
#[derive(Debug)]
pub enum DeleteOutcome {
    Removed,
    /// 分类本来就不存在
    Missing,
    /// 仍有物品引用该分类，拒绝删除
    Blocked(CategoryDetail),
}

fn category_not_found() -> CoreError {
    CoreError::NotFound("Category not found".to_string())
}

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    items: Arc<dyn ItemRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self { categories, items }
    }

    pub async fn list(&self) -> Result<Vec<Category>, CoreError> {
        Ok(self.categories.list().await?)
    }

    /// 分类及引用它的物品；分类不存在时返回 `None`
    async fn lookup(&self, id: Uuid) -> Result<Option<CategoryDetail>, CoreError> {
        let (category, items) =
            tokio::try_join!(self.categories.find_by_id(id), self.items.find_by_category(id))?;
        Ok(category.map(|category| CategoryDetail { category, items }))
    }

    pub async fn detail(&self, id: Uuid) -> Result<CategoryDetail, CoreError> {
        self.lookup(id).await?.ok_or_else(category_not_found)
    }

    pub fn create_form(&self) -> CategoryFormPage {
        CategoryFormPage {
            title: CREATE_TITLE,
            form: CategoryForm::default(),
            errors: Vec::new(),
        }
    }

    pub async fn create(
        &self,
        form: CategoryForm,
    ) -> Result<FormOutcome<Category, CategoryFormPage>, CoreError> {
        match form.into_fields() {
            Ok(fields) => {
                let category = self.categories.create(fields).await?;
                info!(category_id = %category.id, name = %category.name, "category created");
                Ok(FormOutcome::Saved(category))
            }
            Err((form, errors)) => Ok(FormOutcome::Invalid(CategoryFormPage {
                title: CREATE_TITLE,
                form,
                errors,
            })),
        }
    }

    pub async fn edit_form(&self, id: Uuid) -> Result<CategoryFormPage, CoreError> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(category_not_found)?;
        Ok(CategoryFormPage {
            title: UPDATE_TITLE,
            form: CategoryForm::from_category(&category),
            errors: Vec::new(),
        })
    }

    /// 校验失败时只回显表单，不写存储
    pub async fn update(
        &self,
        id: Uuid,
        form: CategoryForm,
    ) -> Result<FormOutcome<Category, CategoryFormPage>, CoreError> {
        let fields = match form.into_fields() {
            Ok(fields) => fields,
            Err((form, errors)) => {
                return Ok(FormOutcome::Invalid(CategoryFormPage {
                    title: UPDATE_TITLE,
                    form,
                    errors,
                }))
            }
        };

        let category = self
            .categories
            .update(id, fields)
            .await?
            .ok_or_else(category_not_found)?;
        info!(category_id = %category.id, "category updated");
        Ok(FormOutcome::Saved(category))
    }

    pub async fn delete_form(&self, id: Uuid) -> Result<Option<CategoryDetail>, CoreError> {
        self.lookup(id).await
    }

    /// 仍被物品引用的分类不会被删除，引用关系也不会被改动
    pub async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, CoreError> {
        let Some(detail) = self.lookup(id).await? else {
            return Ok(DeleteOutcome::Missing);
        };

        if !detail.items.is_empty() {
            warn!(
                category_id = %id,
                referencing_items = detail.items.len(),
                "category delete refused"
            );
            return Ok(DeleteOutcome::Blocked(detail));
        }

        self.categories.remove(id).await?;
        info!(category_id = %id, "category removed");
        Ok(DeleteOutcome::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::item::model::ItemFields;
    use crate::infrastructure::memory::MemoryStore;

    fn service() -> (CategoryService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (CategoryService::new(store.clone(), store.clone()), store)
    }

    fn named(name: &str) -> CategoryForm {
        CategoryForm { name: name.into() }
    }

    async fn create(service: &CategoryService, name: &str) -> Category {
        match service.create(named(name)).await.unwrap() {
            FormOutcome::Saved(category) => category,
            FormOutcome::Invalid(page) => panic!("unexpected errors: {:?}", page.errors),
        }
    }

    async fn add_item(store: &MemoryStore, name: &str, category: Vec<Uuid>) {
        ItemRepository::create(
            store,
            ItemFields {
                name: name.into(),
                img_url: "http://x/i.png".into(),
                price: 1.0,
                category,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_create_and_detail() {
        let (service, store) = service();
        let tools = create(&service, "Tools").await;
        assert_eq!(tools.url(), format!("/catalog/category/{}", tools.id));
        add_item(&store, "Hammer", vec![tools.id]).await;
        add_item(&store, "Rake", Vec::new()).await;

        let detail = service.detail(tools.id).await.unwrap();
        assert_eq!(detail.category, tools);
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].name, "Hammer");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let (service, store) = service();
        match service.create(named("")).await.unwrap() {
            FormOutcome::Invalid(page) => {
                assert_eq!(page.title, CREATE_TITLE);
                assert_eq!(page.errors[0].message, "Category name required");
            }
            FormOutcome::Saved(_) => panic!("blank name should not be saved"),
        }
        assert_eq!(CategoryRepository::count(store.as_ref()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_blocked_by_referencing_items() {
        let (service, store) = service();
        let tools = create(&service, "Tools").await;
        add_item(&store, "Hammer", vec![tools.id]).await;

        match service.delete(tools.id).await.unwrap() {
            DeleteOutcome::Blocked(detail) => {
                assert_eq!(detail.items.len(), 1);
                assert_eq!(detail.items[0].name, "Hammer");
            }
            other => panic!("expected refusal, got {:?}", other),
        }
        assert!(service.detail(tools.id).await.is_ok());
        // 引用保持不变
        assert_eq!(store.find_by_category(tools.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unreferenced_category() {
        let (service, _store) = service();
        let tools = create(&service, "Tools").await;

        assert!(matches!(service.delete(tools.id).await.unwrap(), DeleteOutcome::Removed));
        assert!(matches!(
            service.detail(tools.id).await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(service.delete(tools.id).await.unwrap(), DeleteOutcome::Missing));
        assert!(service.delete_form(tools.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update() {
        let (service, _store) = service();
        let tools = create(&service, "Tools").await;

        match service.update(tools.id, named("")).await.unwrap() {
            FormOutcome::Invalid(page) => assert_eq!(page.title, UPDATE_TITLE),
            FormOutcome::Saved(_) => panic!("blank name should not be saved"),
        }
        assert_eq!(service.detail(tools.id).await.unwrap().category.name, "Tools");

        match service.update(tools.id, named("Hand tools")).await.unwrap() {
            FormOutcome::Saved(category) => {
                assert_eq!(category.id, tools.id);
                assert_eq!(category.name, "Hand tools");
            }
            FormOutcome::Invalid(page) => panic!("unexpected errors: {:?}", page.errors),
        }

        assert!(matches!(
            service.update(Uuid::new_v4(), named("Ghost")).await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            service.edit_form(Uuid::new_v4()).await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_sorted() {
        let (service, _store) = service();
        create(&service, "Tools").await;
        create(&service, "Garden").await;
        let names: Vec<String> = service.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Garden", "Tools"]);
    }
}
