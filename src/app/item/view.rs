//! 物品相关页面

use axum::response::Html;

use super::model::{Item, ItemDetail, ItemSummary};
use super::service::{Counts, ItemFormPage};
use crate::core::view::{error_list, escape, layout};

pub fn index(counts: &Result<Counts, String>) -> Html<String> {
    let body = match counts {
        Ok(counts) => format!(
            "<h2>Dynamic content</h2>\n<ul>\n<li><strong>Items:</strong> {}</li>\n<li><strong>Categories:</strong> {}</li>\n</ul>",
            counts.items, counts.categories
        ),
        Err(message) => format!(
            r#"<p class="error">Error: {}</p>"#,
            escape(message)
        ),
    };
    layout("Catalog Home Page", &body)
}

pub fn list(items: &[ItemSummary]) -> Html<String> {
    let body = if items.is_empty() {
        "<p>There are no items.</p>".to_string()
    } else {
        let rows: String = items
            .iter()
            .map(|item| {
                format!(
                    r#"<li><a href="{}">{}</a> ({})</li>"#,
                    item.url(),
                    escape(&item.name),
                    item.price
                )
            })
            .collect();
        format!("<ul>{rows}</ul>")
    };
    layout("Item List", &body)
}

pub fn detail(item: &ItemDetail) -> Html<String> {
    let categories: Vec<String> = item
        .category
        .iter()
        .map(|c| format!(r#"<a href="{}">{}</a>"#, c.url(), escape(&c.name)))
        .collect();
    let body = format!(
        r#"<img src="{img}" alt="{name}">
<p><strong>Price:</strong> {price}</p>
<p><strong>Category:</strong> {categories}</p>
<p><a href="{url}/update">Update item</a> | <a href="{url}/delete">Delete item</a></p>"#,
        img = escape(&item.img_url),
        name = escape(&item.name),
        price = item.price,
        categories = categories.join(", "),
        url = item.url(),
    );
    layout(&format!("Item: {}", item.name), &body)
}

pub fn form(page: &ItemFormPage) -> Html<String> {
    let checkboxes: String = page
        .categories
        .iter()
        .map(|choice| {
            let id = choice.category.id;
            format!(
                r#"<div><input type="checkbox" name="category" id="{id}" value="{id}"{checked}><label for="{id}">{name}</label></div>"#,
                checked = if choice.checked { " checked" } else { "" },
                name = escape(&choice.category.name),
            )
        })
        .collect();

    let body = format!(
        r#"<form method="POST" action="">
<div><label for="name">Name:</label><input id="name" type="text" name="name" required value="{name}"></div>
<div><label for="imgUrl">Image URL:</label><input id="imgUrl" type="text" name="imgUrl" required value="{img_url}"></div>
<div><label for="price">Price:</label><input id="price" type="text" name="price" required value="{price}"></div>
<div><label>Category:</label>{checkboxes}</div>
<button type="submit">Submit</button>
</form>
{errors}"#,
        name = escape(&page.form.name),
        img_url = escape(&page.form.img_url),
        price = escape(&page.form.price),
        errors = error_list(page.errors.iter().map(|e| e.message.as_str())),
    );
    layout(page.title, &body)
}

pub fn delete(item: &Item) -> Html<String> {
    let body = format!(
        r#"<p>Do you really want to delete <a href="{url}">{name}</a>?</p>
<form method="POST" action="">
<input type="hidden" name="itemid" value="{id}">
<button type="submit">Delete</button>
</form>"#,
        url = item.url(),
        name = escape(&item.name),
        id = item.id,
    );
    layout("Delete Item", &body)
}
