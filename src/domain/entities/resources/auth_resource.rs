//! Auth Resource Entity Implementation
//!
//! 권한 관리 대상이 되는 API 리소스 엔티티입니다.
//! `auth_resources` 컬렉션에 저장되며, `(uri, method)` 쌍이 리소스를 식별하는
//! 자연 키 역할을 합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 리소스 기본 상태 (1 = 활성)
pub const DEFAULT_RESOURCE_STATUS: i32 = 1;

/// 권한 리소스 엔티티
///
/// 하나의 API 엔드포인트(URI + HTTP 메서드)를 표현합니다.
/// 식별자는 생성 시점에 리포지토리가 `counters` 시퀀스에서 할당합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResource {
    /// 숫자 식별자 (MongoDB `_id`)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 리소스 이름
    pub name: String,
    /// 리소스 코드
    pub code: String,
    /// 리소스 URI (항상 `/`로 시작)
    pub uri: String,
    /// 리소스 분류 (예: "uri")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// HTTP 메서드 (대문자)
    pub method: String,
    /// 상태 코드 (0-9)
    pub status: i32,
    /// 설명
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 생성 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_create: Option<DateTime<Utc>>,
    /// 수정 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_update: Option<DateTime<Utc>>,
}

impl AuthResource {
    /// 신규 리소스로 표시합니다. 생성/수정 시간을 모두 `now`로 설정합니다.
    pub fn mark_created(&mut self, now: DateTime<Utc>) {
        self.gmt_create = Some(now);
        self.gmt_update = Some(now);
    }

    /// 수정 시간을 갱신합니다.
    pub fn mark_updated(&mut self, now: DateTime<Utc>) {
        self.gmt_update = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_resource() -> AuthResource {
        AuthResource {
            id: None,
            name: "도서 조회".to_string(),
            code: "BOOK_GET".to_string(),
            uri: "/api/v1/book".to_string(),
            resource_type: Some("uri".to_string()),
            method: "GET".to_string(),
            status: DEFAULT_RESOURCE_STATUS,
            description: None,
            gmt_create: None,
            gmt_update: None,
        }
    }

    #[test]
    fn test_mark_created_sets_both_timestamps() {
        let now = Utc::now();
        let mut resource = book_resource();
        resource.mark_created(now);

        assert_eq!(resource.gmt_create, Some(now));
        assert_eq!(resource.gmt_update, Some(now));
    }

    #[test]
    fn test_mark_updated_keeps_create_time() {
        let created = Utc::now();
        let mut resource = book_resource();
        resource.mark_created(created);

        let later = created + chrono::Duration::seconds(30);
        resource.mark_updated(later);

        assert_eq!(resource.gmt_create, Some(created));
        assert_eq!(resource.gmt_update, Some(later));
    }

    #[test]
    fn test_document_uses_mongo_id_and_type_keys() {
        let mut resource = book_resource();
        resource.id = Some(3);

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["_id"], 3);
        assert_eq!(json["type"], "uri");
        assert!(json.get("description").is_none());
    }
}
