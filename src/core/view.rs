//! HTML 渲染的公共部分：转义、页面骨架、错误页

use axum::{http::StatusCode, response::Html};

/// 转义插入到 HTML 中的文本
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#96;"),
            '\\' => out.push_str("&#x5C;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 页面骨架：标题、侧边导航和正文
pub fn layout(title: &str, body: &str) -> Html<String> {
    let title = escape(title);
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<nav>
<ul>
<li><a href="/catalog">Home</a></li>
<li><a href="/catalog/item">All items</a></li>
<li><a href="/catalog/category">All categories</a></li>
<li><a href="/catalog/item/create">Create new item</a></li>
<li><a href="/catalog/category/create">Create new category</a></li>
</ul>
</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#
    ))
}

/// 字段错误列表
pub fn error_list<'a>(messages: impl IntoIterator<Item = &'a str>) -> String {
    let items: String = messages
        .into_iter()
        .map(|msg| format!("<li>{}</li>", escape(msg)))
        .collect();
    if items.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="errors">{items}</ul>"#)
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        "<h2>{}</h2>\n<p>{}</p>",
        status.as_u16(),
        escape(message)
    );
    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;&#x2F;script&gt;"
        );
        assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#x27;s");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_error_list_empty() {
        assert_eq!(error_list(Vec::<&str>::new()), "");
        assert!(error_list(["a < b"]).contains("<li>a &lt; b</li>"));
    }
}
