//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use super::repository::StoreError;
use super::view;

/// 核心错误类型
///
/// 表单校验失败不属于这里：它们作为 [`crate::app::validation::FieldError`]
/// 列表随表单页一起返回，状态码 200。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            CoreError::BadRequest(_) => "BAD_REQUEST",
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::Store(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// 面向用户的消息，存储错误的细节只写日志
    fn public_message(&self) -> String {
        match self {
            CoreError::Store(err) => {
                error!(error = %err, "store error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// 通用错误页
impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();
        (status, view::error_page(status, &message)).into_response()
    }
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

/// JSON 接口使用的错误包装
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(CoreError::Store(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let error_response = ErrorResponse {
            error: self.0.code().to_string(),
            message: self.0.public_message(),
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::NotFound("Item not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoreError::BadRequest("bad id".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::Store(StoreError::Backend("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_details_are_hidden() {
        let err = CoreError::Store(StoreError::Backend("password=hunter2".into()));
        assert_eq!(err.public_message(), "Internal server error");

        let err = CoreError::NotFound("Category not found".into());
        assert_eq!(err.public_message(), "Category not found");
    }
}
