//! 分类数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::item::model::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn url(&self) -> String {
        format!("/catalog/category/{}", self.id)
    }
}

/// 可写字段，创建和整体替换共用
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFields {
    pub name: String,
}

/// 分类及引用它的物品
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub items: Vec<Item>,
}
