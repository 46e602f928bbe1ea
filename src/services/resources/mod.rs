//! 권한 리소스 서비스 모듈
//!
//! 핸들러가 의존하는 [`ResourceService`] 계약과, MongoDB 리포지토리 위에 구현된
//! [`AuthResourceService`](resource_service::AuthResourceService)를 제공합니다.
//!
//! 핸들러는 `web::Data<dyn ResourceService>`로만 서비스를 사용하므로,
//! 테스트에서는 메모리 기반 구현으로 교체할 수 있습니다.
//!
//! ```rust,ignore
//! let service: Arc<dyn ResourceService> = AuthResourceService::instance()?;
//! App::new().app_data(web::Data::from(service));
//! ```

use async_trait::async_trait;

use crate::domain::dto::common::Page;
use crate::domain::entities::resources::AuthResource;

pub mod resource_service;

pub use resource_service::AuthResourceService;

/// 권한 리소스 관리 계약
///
/// 모든 메서드는 실패를 `false`/`None`으로만 알립니다.
/// 실패 원인은 구현체가 로그로 남깁니다.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// 같은 리소스가 이미 저장되어 있는지 확인합니다.
    async fn is_resource_exist(&self, resource: &AuthResource) -> bool;

    /// 리소스를 추가합니다.
    async fn add_resource(&self, resource: &AuthResource) -> bool;

    /// 식별자로 지정된 리소스를 수정합니다.
    async fn update_resource(&self, resource: &AuthResource) -> bool;

    /// 리소스를 삭제합니다.
    async fn delete_resource(&self, resource_id: i64) -> bool;

    /// 전체 리소스 목록. 실패 시 `None`.
    async fn get_all_resource(&self) -> Option<Vec<AuthResource>>;

    /// 리소스 페이지 (0부터 시작). 잘못된 페이지 값이나 실패 시 `None`.
    async fn get_page_resource(&self, current_page: i32, page_size: i32) -> Option<Page<AuthResource>>;
}
