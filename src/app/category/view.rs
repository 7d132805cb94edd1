//! 分类相关页面

use axum::response::Html;

use super::model::{Category, CategoryDetail};
use super::service::CategoryFormPage;
use crate::app::item::model::Item;
use crate::core::view::{error_list, escape, layout};

fn item_links(items: &[Item]) -> String {
    let rows: String = items
        .iter()
        .map(|item| format!(r#"<li><a href="{}">{}</a></li>"#, item.url(), escape(&item.name)))
        .collect();
    format!("<ul>{rows}</ul>")
}

pub fn list(categories: &[Category]) -> Html<String> {
    let body = if categories.is_empty() {
        "<p>There are no categories.</p>".to_string()
    } else {
        let rows: String = categories
            .iter()
            .map(|c| format!(r#"<li><a href="{}">{}</a></li>"#, c.url(), escape(&c.name)))
            .collect();
        format!("<ul>{rows}</ul>")
    };
    layout("Category List", &body)
}

pub fn detail(detail: &CategoryDetail) -> Html<String> {
    let url = detail.category.url();
    let items = if detail.items.is_empty() {
        "<p>This category has no items.</p>".to_string()
    } else {
        item_links(&detail.items)
    };
    let body = format!(
        r#"<h2>Items</h2>
{items}
<p><a href="{url}/update">Update category</a> | <a href="{url}/delete">Delete category</a></p>"#
    );
    layout(&format!("Category: {}", detail.category.name), &body)
}

pub fn form(page: &CategoryFormPage) -> Html<String> {
    let body = format!(
        r#"<form method="POST" action="">
<div><label for="name">Name:</label><input id="name" type="text" name="name" required value="{name}"></div>
<button type="submit">Submit</button>
</form>
{errors}"#,
        name = escape(&page.form.name),
        errors = error_list(page.errors.iter().map(|e| e.message.as_str())),
    );
    layout(page.title, &body)
}

/// 删除确认页；仍有物品引用时列出这些物品，不显示删除按钮
pub fn delete(detail: &CategoryDetail) -> Html<String> {
    let name = escape(&detail.category.name);
    let body = if detail.items.is_empty() {
        format!(
            r#"<p>Do you really want to delete <strong>{name}</strong>?</p>
<form method="POST" action="">
<input type="hidden" name="categoryid" value="{id}">
<button type="submit">Delete</button>
</form>"#,
            id = detail.category.id,
        )
    } else {
        format!(
            r#"<p><strong>Delete the following items before attempting to delete {name}.</strong></p>
{items}"#,
            items = item_links(&detail.items),
        )
    };
    layout("Delete Category", &body)
}
