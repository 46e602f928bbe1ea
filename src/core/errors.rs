//! # Application Error Handling System
//!
//! 리소스 관리 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 리소스 API와 동일한 [`Message`] 응답 봉투로 직렬화되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | errorType | 사용 시나리오 |
//! |----------|-------------|-----------|---------------|
//! | `ValidationError` | 400 Bad Request | `validation` | 요청 본문/경로 검증 실패 |
//! | `ConflictError` | 409 Conflict | `conflict` | 중복 리소스 |
//! | `DatabaseError` | 500 Internal Server Error | `database` | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | `cache` | Redis 오류 |
//! | `InternalError` | 500 Internal Server Error | `internal` | 예상치 못한 오류 |
//!
//! 서비스 계층은 이 에러를 HTTP까지 올려보내지 않고 `bool`/`Option`으로 접어서
//! 반환합니다. 따라서 5xx 매핑은 주로 추출기(extractor)와 초기화 경로에서만 쓰입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(&self, id: i64) -> AppResult<Option<AuthResource>> {
//!     self.collection
//!         .find_one(doc! { "_id": id })
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::common::Message;

/// 애플리케이션 전역 에러 타입
///
/// 리소스 관리 서비스에서 발생할 수 있는 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// MongoDB 연결 실패, 쿼리 실패, 유니크 인덱스 위반 등이 여기에 해당합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// `validator` 검증 실패, 잘못된 JSON, 잘못된 경로/쿼리 파라미터가 모두
    /// 이 변형으로 변환됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 봉투의 `errorType` 필드에 들어갈 분류 문자열을 반환합니다.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database",
            AppError::RedisError(_) => "cache",
            AppError::ValidationError(_) => "validation",
            AppError::ConflictError(_) => "conflict",
            AppError::InternalError(_) => "internal",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 리소스 API의 응답 봉투와 같은 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "errorType": "validation",
    ///   "errorMsg": "Validation error: name: 리소스 이름은 필수입니다"
    /// }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에 남기고, 클라이언트에는 내부 원인을 숨긴 메시지만 보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류: {}", self);
            Message::error(self.error_type(), "internal server error, please try again later")
        } else {
            Message::error(self.error_type(), self.to_string())
        };

        actix_web::HttpResponse::build(status).json(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(error: redis::RedisError) -> Self {
        AppError::RedisError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("uri/method pair taken".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_infrastructure_errors_map_to_500() {
        for error in [
            AppError::DatabaseError("connection reset".to_string()),
            AppError::RedisError("timeout".to_string()),
            AppError::InternalError("boom".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[actix_web::test]
    async fn test_error_body_uses_message_envelope() {
        let error = AppError::ValidationError("pageSize must be a number".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["errorType"], "validation");
        assert!(json["errorMsg"].as_str().unwrap().contains("pageSize"));
        assert!(json.get("body").is_none());
    }

    #[actix_web::test]
    async fn test_server_error_body_hides_cause() {
        let error = AppError::DatabaseError("mongodb://admin:secret@db".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["errorType"], "database");
        assert!(!json["errorMsg"].as_str().unwrap().contains("secret"));
    }
}
