//! 권한 리소스 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::resources::AuthResource;

/// 클라이언트에 노출되는 리소스 표현
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub method: String,
    pub status: i32,
    pub description: Option<String>,
    pub gmt_create: Option<DateTime<Utc>>,
    pub gmt_update: Option<DateTime<Utc>>,
}

impl From<AuthResource> for ResourceResponse {
    fn from(resource: AuthResource) -> Self {
        let AuthResource {
            id,
            name,
            code,
            uri,
            resource_type,
            method,
            status,
            description,
            gmt_create,
            gmt_update,
        } = resource;

        Self {
            id: id.unwrap_or_default(),
            name,
            code,
            uri,
            resource_type,
            method,
            status,
            description,
            gmt_create,
            gmt_update,
        }
    }
}
