//! 分类处理器

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use super::{
    form::CategoryForm,
    model::Category,
    service::{CategoryFormPage, DeleteOutcome},
    view,
};
use crate::app::{parse_id, validation::FormOutcome, AppState};
use crate::core::error::CoreError;

const CATEGORY_LIST_URL: &str = "/catalog/category";

fn respond(outcome: FormOutcome<Category, CategoryFormPage>) -> Response {
    match outcome {
        FormOutcome::Saved(category) => Redirect::to(&category.url()).into_response(),
        FormOutcome::Invalid(page) => view::form(&page).into_response(),
    }
}

pub async fn category_list(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    let categories = state.categories.list().await?;
    Ok(view::list(&categories))
}

pub async fn category_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, CoreError> {
    let detail = state.categories.detail(parse_id(&id)?).await?;
    Ok(view::detail(&detail))
}

pub async fn category_create_get(State(state): State<AppState>) -> Html<String> {
    view::form(&state.categories.create_form())
}

pub async fn category_create_post(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, CoreError> {
    let outcome = state.categories.create(CategoryForm::from_pairs(pairs)).await?;
    Ok(respond(outcome))
}

pub async fn category_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, CoreError> {
    let page = state.categories.edit_form(parse_id(&id)?).await?;
    Ok(view::form(&page))
}

pub async fn category_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, CoreError> {
    let id = parse_id(&id)?;
    let outcome = state
        .categories
        .update(id, CategoryForm::from_pairs(pairs))
        .await?;
    Ok(respond(outcome))
}

/// 分类不存在时重定向到列表并结束处理
pub async fn category_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CoreError> {
    match state.categories.delete_form(parse_id(&id)?).await? {
        Some(detail) => Ok(view::delete(&detail).into_response()),
        None => Ok(Redirect::to(CATEGORY_LIST_URL).into_response()),
    }
}

pub async fn category_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CoreError> {
    match state.categories.delete(parse_id(&id)?).await? {
        DeleteOutcome::Blocked(detail) => Ok(view::delete(&detail).into_response()),
        DeleteOutcome::Removed | DeleteOutcome::Missing => {
            Ok(Redirect::to(CATEGORY_LIST_URL).into_response())
        }
    }
}
