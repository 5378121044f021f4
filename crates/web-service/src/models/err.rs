use crate::services::UserServiceError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 请求体无法解析为json，或者缺少字段、字段类型不对
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// 服务层错误
    #[error(transparent)]
    ServiceError(#[from] UserServiceError),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::InvalidBody(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", err.body_text())).into_response()
            }
            AppError::ServiceError(err) => match err {
                UserServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
                UserServiceError::Repository(err) => {
                    error!("❌ 仓库层错误: {err}");
                    (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::DatabaseError;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::from(UserServiceError::NotFound { id: 7 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_error_maps_to_500() {
        let err = UserServiceError::Repository(DatabaseError::connection("pool closed"));
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
