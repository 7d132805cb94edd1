//! 应用层：物品、分类两个模块以及 JSON 接口

pub mod api;
pub mod category;
pub mod item;
pub mod validation;

use std::sync::Arc;

use axum::{
    middleware,
    response::Redirect,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::core::error::CoreError;
use crate::core::middleware::request_logging_middleware;
use crate::core::repository::{CategoryRepository, ItemRepository};
use category::{handler as category_handler, service::CategoryService};
use item::{handler as item_handler, service::ItemService};

#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
    pub categories: CategoryService,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self {
            items: ItemService::new(items.clone(), categories.clone()),
            categories: CategoryService::new(categories, items),
        }
    }
}

/// 路径中的 id
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, CoreError> {
    raw.parse()
        .map_err(|_| CoreError::BadRequest(format!("Invalid id: {}", raw)))
}

/// 创建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog") }))
        .route("/catalog", get(item_handler::index))
        // 物品
        .route("/catalog/item", get(item_handler::item_list))
        .route(
            "/catalog/item/create",
            get(item_handler::item_create_get).post(item_handler::item_create_post),
        )
        .route("/catalog/item/:id", get(item_handler::item_detail))
        .route(
            "/catalog/item/:id/update",
            get(item_handler::item_update_get).post(item_handler::item_update_post),
        )
        .route(
            "/catalog/item/:id/delete",
            get(item_handler::item_delete_get).post(item_handler::item_delete_post),
        )
        // 分类
        .route("/catalog/category", get(category_handler::category_list))
        .route(
            "/catalog/category/create",
            get(category_handler::category_create_get)
                .post(category_handler::category_create_post),
        )
        .route("/catalog/category/:id", get(category_handler::category_detail))
        .route(
            "/catalog/category/:id/update",
            get(category_handler::category_update_get)
                .post(category_handler::category_update_post),
        )
        .route(
            "/catalog/category/:id/delete",
            get(category_handler::category_delete_get)
                .post(category_handler::category_delete_post),
        )
        .merge(api_routes())
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    use api::handler;

    Router::new()
        .route("/api", get(handler::health))
        .route("/api/", get(handler::health))
        .route("/api/items", get(handler::items).post(handler::create_item))
        .route(
            "/api/item/:id",
            get(handler::item)
                .put(handler::update_item)
                .delete(handler::delete_item),
        )
        .route(
            "/api/categories",
            get(handler::categories).post(handler::create_category),
        )
        .route(
            "/api/category/:id",
            get(handler::category)
                .put(handler::update_category)
                .delete(handler::delete_category),
        )
}
