//! JSON 只读接口
//!
//! 写接口只是占位，固定返回 "NOT IMPLEMENTED YET"。

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::app::category::model::Category;
use crate::app::item::model::{Item, ItemDetail};
use crate::app::{parse_id, AppState};
use crate::core::error::ApiError;
use crate::core::response::NotImplemented;

/// 分类详情：单个分类也放进列表，和物品列表保持同样的形状
#[derive(Debug, Serialize)]
pub struct CategoryPayload {
    pub category: Vec<Category>,
    pub items: Vec<Item>,
}

pub async fn health() -> &'static str {
    "API is working properly."
}

pub async fn items(State(state): State<AppState>) -> Result<Json<Vec<ItemDetail>>, ApiError> {
    Ok(Json(state.items.list_detailed().await?))
}

pub async fn item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.items.find(parse_id(&id)?).await?))
}

pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

pub async fn category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryPayload>, ApiError> {
    let detail = state.categories.detail(parse_id(&id)?).await?;
    Ok(Json(CategoryPayload {
        category: vec![detail.category],
        items: detail.items,
    }))
}

pub async fn create_item() -> NotImplemented {
    NotImplemented("Create item")
}

pub async fn update_item() -> NotImplemented {
    NotImplemented("Update item")
}

pub async fn delete_item() -> NotImplemented {
    NotImplemented("Delete item")
}

pub async fn create_category() -> NotImplemented {
    NotImplemented("Create category")
}

pub async fn update_category() -> NotImplemented {
    NotImplemented("Update category")
}

pub async fn delete_category() -> NotImplemented {
    NotImplemented("Delete category")
}
