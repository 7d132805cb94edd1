//! 物品处理器

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::warn;

use super::{form::ItemForm, model::Item, service::ItemFormPage, view};
use crate::app::{parse_id, validation::FormOutcome, AppState};
use crate::core::error::CoreError;

const ITEM_LIST_URL: &str = "/catalog/item";
const COUNTS_UNAVAILABLE: &str = "Failed to load counts";

fn respond(outcome: FormOutcome<Item, ItemFormPage>) -> Response {
    match outcome {
        FormOutcome::Saved(item) => Redirect::to(&item.url()).into_response(),
        FormOutcome::Invalid(page) => view::form(&page).into_response(),
    }
}

/// 首页：统计失败时把错误显示在页面上，而不是让整个请求失败。
/// 存储错误的细节只写日志。
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let counts = state.items.summary().await.map_err(|err| {
        warn!(error = %err, "failed to count documents");
        COUNTS_UNAVAILABLE.to_string()
    });
    view::index(&counts)
}

pub async fn item_list(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    let items = state.items.list().await?;
    Ok(view::list(&items))
}

pub async fn item_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, CoreError> {
    let item = state.items.detail(parse_id(&id)?).await?;
    Ok(view::detail(&item))
}

pub async fn item_create_get(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    let page = state.items.create_form().await?;
    Ok(view::form(&page))
}

pub async fn item_create_post(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, CoreError> {
    let outcome = state.items.create(ItemForm::from_pairs(pairs)).await?;
    Ok(respond(outcome))
}

pub async fn item_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, CoreError> {
    let page = state.items.edit_form(parse_id(&id)?).await?;
    Ok(view::form(&page))
}

pub async fn item_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, CoreError> {
    let id = parse_id(&id)?;
    let outcome = state.items.update(id, ItemForm::from_pairs(pairs)).await?;
    Ok(respond(outcome))
}

pub async fn item_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CoreError> {
    match state.items.delete_form(parse_id(&id)?).await? {
        Some(item) => Ok(view::delete(&item).into_response()),
        None => Ok(Redirect::to(ITEM_LIST_URL).into_response()),
    }
}

pub async fn item_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, CoreError> {
    state.items.delete(parse_id(&id)?).await?;
    Ok(Redirect::to(ITEM_LIST_URL))
}
