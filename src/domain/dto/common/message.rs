//! 응답 봉투 (Message)
//!
//! 모든 리소스 API 응답이 공유하는 JSON 래퍼입니다.
//! 성공 시에는 `body`만, 실패 시에는 `errorType`/`errorMsg` 쌍만 채워집니다.
//!
//! ```json
//! { "errorType": "resource", "errorMsg": "add resource fail, please try again later" }
//! { "body": [ { "id": 1, "uri": "/api/v1/book", "method": "GET" } ] }
//! ```

use serde::{Deserialize, Serialize};

/// 응답 봉투
///
/// 값이 없는 필드는 JSON에서 생략됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message<T = ()> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

impl Message<()> {
    /// 에러 분류와 메시지만 담은 봉투를 만듭니다.
    pub fn error(error_type: impl Into<String>, error_msg: impl Into<String>) -> Self {
        Self {
            error_type: Some(error_type.into()),
            error_msg: Some(error_msg.into()),
            body: None,
        }
    }
}

impl<T> Message<T> {
    /// 성공 응답 본문을 담은 봉투를 만듭니다.
    pub fn with_body(body: T) -> Self {
        Self {
            error_type: None,
            error_msg: None,
            body: Some(body),
        }
    }
}
