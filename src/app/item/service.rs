//! 物品业务服务

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::form::{mark_selected, CategoryChoice, ItemForm};
use super::model::{Item, ItemDetail, ItemSummary};
use crate::app::category::model::Category;
use crate::app::validation::{FieldError, FormOutcome};
use crate::core::error::CoreError;
use crate::core::parallel::parallel;
use crate::core::repository::{CategoryRepository, ItemRepository};

pub const CREATE_TITLE: &str = "Create Item";
pub const UPDATE_TITLE: &str = "Update Item";

/// 首页统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub items: u64,
    pub categories: u64,
}

/// 物品表单页所需的全部数据
#[derive(Debug, Clone)]
pub struct ItemFormPage {
    pub title: &'static str,
    pub form: ItemForm,
    pub categories: Vec<CategoryChoice>,
    pub errors: Vec<FieldError>,
}

impl ItemFormPage {
    fn new(
        title: &'static str,
        form: ItemForm,
        categories: Vec<Category>,
        errors: Vec<FieldError>,
    ) -> Self {
        let categories = mark_selected(categories, &form.category);
        Self {
            title,
            form,
            categories,
            errors,
        }
    }
}

fn item_not_found() -> CoreError {
    CoreError::NotFound("Item not found".to_string())
}

#[derive(Clone)]
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ItemService {
    pub fn new(items: Arc<dyn ItemRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { items, categories }
    }

    /// 并发统计两个集合的文档数
    pub async fn summary(&self) -> Result<Counts, CoreError> {
        let mut counts = parallel(vec![
            ("item_count", self.items.count()),
            ("category_count", self.categories.count()),
        ])
        .await?;

        Ok(Counts {
            items: counts.remove("item_count").unwrap_or_default(),
            categories: counts.remove("category_count").unwrap_or_default(),
        })
    }

    pub async fn list(&self) -> Result<Vec<ItemSummary>, CoreError> {
        Ok(self.items.list_summaries().await?)
    }

    /// 分类引用解析为完整对象
    pub async fn detail(&self, id: Uuid) -> Result<ItemDetail, CoreError> {
        let item = self.items.find_by_id(id).await?.ok_or_else(item_not_found)?;
        let categories = self.categories.find_many(&item.category).await?;
        Ok(ItemDetail::new(item, categories))
    }

    /// 未解析分类引用的原始文档
    pub async fn find(&self, id: Uuid) -> Result<Item, CoreError> {
        self.items.find_by_id(id).await?.ok_or_else(item_not_found)
    }

    /// 全部物品并解析分类引用
    pub async fn list_detailed(&self) -> Result<Vec<ItemDetail>, CoreError> {
        let (items, categories) = tokio::try_join!(self.items.list(), self.categories.list())?;

        Ok(items
            .into_iter()
            .map(|item| {
                let resolved = item
                    .category
                    .iter()
                    .filter_map(|id| categories.iter().find(|c| c.id == *id).cloned())
                    .collect();
                ItemDetail::new(item, resolved)
            })
            .collect())
    }

    pub async fn create_form(&self) -> Result<ItemFormPage, CoreError> {
        let categories = self.categories.list().await?;
        Ok(ItemFormPage::new(
            CREATE_TITLE,
            ItemForm::default(),
            categories,
            Vec::new(),
        ))
    }

    pub async fn create(&self, form: ItemForm) -> Result<FormOutcome<Item, ItemFormPage>, CoreError> {
        let categories = self.categories.list().await?;
        match form.validate_against(&categories) {
            Ok(fields) => {
                let item = self.items.create(fields).await?;
                info!(item_id = %item.id, name = %item.name, "item created");
                Ok(FormOutcome::Saved(item))
            }
            Err(errors) => Ok(FormOutcome::Invalid(ItemFormPage::new(
                CREATE_TITLE,
                form,
                categories,
                errors,
            ))),
        }
    }

    pub async fn edit_form(&self, id: Uuid) -> Result<ItemFormPage, CoreError> {
        let (item, categories) =
            tokio::try_join!(self.items.find_by_id(id), self.categories.list())?;
        let item = item.ok_or_else(item_not_found)?;

        Ok(ItemFormPage::new(
            UPDATE_TITLE,
            ItemForm::from_item(&item),
            categories,
            Vec::new(),
        ))
    }

    /// 校验失败时只回显表单，不写存储
    pub async fn update(
        &self,
        id: Uuid,
        form: ItemForm,
    ) -> Result<FormOutcome<Item, ItemFormPage>, CoreError> {
        let categories = self.categories.list().await?;
        let fields = match form.validate_against(&categories) {
            Ok(fields) => fields,
            Err(errors) => {
                return Ok(FormOutcome::Invalid(ItemFormPage::new(
                    UPDATE_TITLE,
                    form,
                    categories,
                    errors,
                )))
            }
        };

        let item = self.items.update(id, fields).await?.ok_or_else(item_not_found)?;
        info!(item_id = %item.id, "item updated");
        Ok(FormOutcome::Saved(item))
    }

    /// 删除确认页；物品不存在时返回 `None`
    pub async fn delete_form(&self, id: Uuid) -> Result<Option<Item>, CoreError> {
        Ok(self.items.find_by_id(id).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        if self.items.remove(id).await?.is_some() {
            info!(item_id = %id, "item removed");
        }
        Ok(())
    }
}
