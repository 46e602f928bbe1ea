//! # 문자열 유틸리티
//!
//! 리소스 요청 데이터를 정규화하는 공통 함수들입니다.

use serde::Deserialize;

/// 리소스에 등록할 수 있는 HTTP 메서드 목록
pub const HTTP_METHODS: [&str; 8] = [
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "TRACE",
];

/// 공백만 있는 문자열을 `None`으로 접고, 나머지는 앞뒤 공백을 제거합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 공백이 아닌 문자가 하나라도 있는지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 리소스 URI를 정규화합니다.
///
/// 앞뒤 공백을 제거하고 항상 `/`로 시작하도록 맞춥니다.
/// 루트(`/`)가 아닌 경우 끝의 `/`는 제거합니다.
///
/// ```rust,ignore
/// assert_eq!(normalize_uri(" api/v1/book/ "), "/api/v1/book");
/// ```
pub fn normalize_uri(uri: &str) -> String {
    let trimmed = uri.trim().trim_end_matches('/');

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// HTTP 메서드를 대문자로 정규화합니다.
pub fn normalize_http_method(method: &str) -> String {
    method.trim().to_ascii_uppercase()
}

/// 정규화된 메서드가 허용 목록에 있는지 확인합니다.
pub fn is_supported_http_method(method: &str) -> bool {
    let normalized = normalize_http_method(method);
    HTTP_METHODS.contains(&normalized.as_str())
}

/// serde 역직렬화 시 `clean_optional_string`을 적용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
