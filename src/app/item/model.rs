//! 物品数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::category::model::Category;

/// 存储中的物品，`category` 只保存分类 id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    pub price: f64,
    pub category: Vec<Uuid>,
}

impl Item {
    pub fn url(&self) -> String {
        item_url(self.id)
    }

    pub fn references(&self, category_id: Uuid) -> bool {
        self.category.contains(&category_id)
    }
}

/// 列表页使用的投影
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct ItemSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl ItemSummary {
    pub fn url(&self) -> String {
        item_url(self.id)
    }
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// 分类引用已解析为完整对象的物品
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetail {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    pub price: f64,
    pub category: Vec<Category>,
}

impl ItemDetail {
    pub fn new(item: Item, category: Vec<Category>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            img_url: item.img_url,
            price: item.price,
            category,
        }
    }

    pub fn url(&self) -> String {
        item_url(self.id)
    }
}

/// 可写字段，创建和整体替换共用
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub img_url: String,
    pub price: f64,
    pub category: Vec<Uuid>,
}

fn item_url(id: Uuid) -> String {
    format!("/catalog/item/{}", id)
}
