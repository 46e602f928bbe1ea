//! 권한 리소스 요청 DTO
//!
//! `POST`/`PUT /api/v1/resource` 요청 본문과 목록 조회 쿼리 파라미터를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::resources::{AuthResource, DEFAULT_RESOURCE_STATUS};
use crate::utils::string_utils::{
    deserialize_optional_string, is_supported_http_method, is_valid_string, normalize_http_method,
    normalize_uri,
};

/// 리소스 생성/수정 요청
///
/// 생성 시 `id`는 무시되며, 수정 시에는 필수입니다.
///
/// ```json
/// {
///   "id": 12,
///   "name": "도서 조회",
///   "code": "BOOK_GET",
///   "uri": "/api/v1/book",
///   "type": "uri",
///   "method": "GET",
///   "status": 1,
///   "description": "도서 목록 조회 API"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
    /// 리소스 식별자 (수정 시 필수)
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "리소스 이름은 1-100자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "리소스 코드는 1-100자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub code: String,

    #[validate(length(min = 1, max = 512, message = "리소스 URI는 1-512자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub uri: String,

    #[serde(rename = "type", default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "리소스 분류는 50자 이하여야 합니다"))]
    pub resource_type: Option<String>,

    #[validate(custom(function = "validate_http_method"))]
    pub method: String,

    #[serde(default = "default_status")]
    #[validate(range(min = 0, max = 9, message = "상태 값은 0-9 사이여야 합니다"))]
    pub status: i32,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 255, message = "설명은 255자 이하여야 합니다"))]
    pub description: Option<String>,
}

fn default_status() -> i32 {
    DEFAULT_RESOURCE_STATUS
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로 이루어질 수 없습니다".into()));
    }
    Ok(())
}

fn validate_http_method(method: &str) -> Result<(), ValidationError> {
    if !is_supported_http_method(method) {
        return Err(ValidationError::new("unsupported_method")
            .with_message("지원하지 않는 HTTP 메서드입니다".into()));
    }
    Ok(())
}

impl ResourceRequest {
    /// 수정 요청에 필요한 식별자를 꺼냅니다.
    pub fn require_id(&self) -> AppResult<i64> {
        self.id
            .ok_or_else(|| AppError::ValidationError("id: 수정할 리소스 ID는 필수입니다".to_string()))
    }
}

impl From<ResourceRequest> for AuthResource {
    fn from(request: ResourceRequest) -> Self {
        let ResourceRequest {
            id,
            name,
            code,
            uri,
            resource_type,
            method,
            status,
            description,
        } = request;

        Self {
            id,
            name: name.trim().to_string(),
            code: code.trim().to_string(),
            uri: normalize_uri(&uri),
            resource_type,
            method: normalize_http_method(&method),
            status,
            description,
            gmt_create: None,
            gmt_update: None,
        }
    }
}

/// 목록 조회 쿼리 파라미터
///
/// `GET /api/v1/resource?currentPage=0&pageSize=20`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub current_page: Option<i32>,
    pub page_size: Option<i32>,
}

impl PageQuery {
    /// 두 값이 모두 있을 때만 페이지 조회 파라미터를 반환합니다.
    pub fn paging(&self) -> Option<(i32, i32)> {
        match (self.current_page, self.page_size) {
            (Some(current_page), Some(page_size)) => Some((current_page, page_size)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ResourceRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_request_passes_validation() {
        let request = parse(r#"{"name":"도서 조회","code":"BOOK_GET","uri":"/api/v1/book","method":"get"}"#);

        assert!(request.validate().is_ok());
        assert_eq!(request.status, DEFAULT_RESOURCE_STATUS);
        assert_eq!(request.id, None);
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let request = parse(r#"{"name":"   ","code":"BOOK_GET","uri":"/api/v1/book","method":"GET"}"#);
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_unsupported_method_fails_validation() {
        let request = parse(r#"{"name":"도서","code":"BOOK","uri":"/api/v1/book","method":"FETCH"}"#);
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("method"));
    }

    #[test]
    fn test_status_out_of_range_fails_validation() {
        let request =
            parse(r#"{"name":"도서","code":"BOOK","uri":"/api/v1/book","method":"GET","status":10}"#);
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("status"));
    }

    #[test]
    fn test_conversion_normalizes_endpoint() {
        let request = parse(
            r#"{"id":4,"name":" 도서 ","code":"BOOK","uri":"api/v1/book/","type":"uri","method":" post ","description":"  "}"#,
        );
        let resource = AuthResource::from(request);

        assert_eq!(resource.id, Some(4));
        assert_eq!(resource.name, "도서");
        assert_eq!(resource.uri, "/api/v1/book");
        assert_eq!(resource.method, "POST");
        assert_eq!(resource.resource_type.as_deref(), Some("uri"));
        assert_eq!(resource.description, None);
        assert!(resource.gmt_create.is_none());
    }

    #[test]
    fn test_require_id() {
        let with_id = parse(r#"{"id":7,"name":"a","code":"b","uri":"/c","method":"GET"}"#);
        let without_id = parse(r#"{"name":"a","code":"b","uri":"/c","method":"GET"}"#);

        assert_eq!(with_id.require_id().unwrap(), 7);
        assert!(matches!(without_id.require_id(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_page_query_requires_both_values() {
        let both = PageQuery { current_page: Some(1), page_size: Some(20) };
        let only_page = PageQuery { current_page: Some(1), page_size: None };
        let only_size = PageQuery { current_page: None, page_size: Some(20) };

        assert_eq!(both.paging(), Some((1, 20)));
        assert_eq!(only_page.paging(), None);
        assert_eq!(only_size.paging(), None);
        assert_eq!(PageQuery::default().paging(), None);
    }
}
