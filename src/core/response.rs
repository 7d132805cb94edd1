//! 核心响应处理模块

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// 只有一句说明的 JSON 响应
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

/// 尚未实现的写接口，固定返回说明文本
pub struct NotImplemented(pub &'static str);

impl IntoResponse for NotImplemented {
    fn into_response(self) -> Response {
        Json(ApiMessage {
            message: format!("NOT IMPLEMENTED YET: {}", self.0),
        })
        .into_response()
    }
}
