//! 권한 리소스 데이터 액세스 계층
//!
//! 서비스 계층은 [`ResourceStore`] 계약에만 의존하며, 운영 환경에서는
//! MongoDB + Redis 기반 [`ResourceRepository`](resource_repository::ResourceRepository)가
//! 이를 구현합니다.
//!
//! ```rust,ignore
//! use crate::repositories::resources::{ResourceRepository, ResourceStore};
//!
//! let repo = ResourceRepository::instance()?;
//! let resources = repo.find_all().await?;
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::common::{Page, PageRequest};
use crate::domain::entities::resources::AuthResource;

pub mod resource_repository;

pub use resource_repository::ResourceRepository;

/// 권한 리소스 저장소 계약
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// 해당 식별자의 리소스가 저장되어 있는지 확인합니다.
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// 같은 `(uri, method)` 쌍의 리소스가 저장되어 있는지 확인합니다.
    async fn exists_by_uri_and_method(&self, uri: &str, method: &str) -> AppResult<bool>;

    /// 새 리소스를 저장하고, 식별자가 할당된 리소스를 반환합니다. 입력의 `id`는 무시됩니다.
    async fn insert(&self, resource: AuthResource) -> AppResult<AuthResource>;

    /// 식별자로 리소스를 수정합니다. 일치하는 리소스가 없으면 `Ok(false)`입니다.
    async fn update(&self, resource: &AuthResource) -> AppResult<bool>;

    /// 식별자로 리소스를 삭제합니다. 삭제된 리소스가 없으면 `Ok(false)`입니다.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// 모든 리소스를 `_id` 오름차순으로 조회합니다.
    async fn find_all(&self) -> AppResult<Vec<AuthResource>>;

    /// 한 페이지의 리소스를 `_id` 오름차순으로 조회합니다.
    async fn find_page(&self, request: PageRequest) -> AppResult<Page<AuthResource>>;
}
