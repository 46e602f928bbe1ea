//! 권한 리소스 서비스 구현
//!
//! [`ResourceStore`] 위에서 [`ResourceService`] 계약을 구현합니다.
//! 리포지토리가 반환하는 `AppError`는 모두 로그로 남긴 뒤 `false`/`None`으로 바뀌며,
//! 핸들러는 이를 "잠시 후 다시 시도" 응답으로 변환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::OnceCell;

use crate::core::errors::AppResult;
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::dto::common::{Page, PageRequest};
use crate::domain::entities::resources::AuthResource;
use crate::repositories::resources::{ResourceRepository, ResourceStore};
use crate::services::resources::ResourceService;

/// MongoDB 기반 권한 리소스 서비스
///
/// 프로세스 전체에서 하나의 인스턴스만 사용합니다.
///
/// ```rust,ignore
/// let service = AuthResourceService::instance()?;
///
/// if !service.is_resource_exist(&resource).await {
///     service.add_resource(&resource).await;
/// }
/// ```
pub struct AuthResourceService {
    repository: Arc<dyn ResourceStore>,
}

/// 싱글톤 인스턴스 저장소
static AUTH_RESOURCE_SERVICE_INSTANCE: OnceCell<Arc<AuthResourceService>> = OnceCell::new();

impl AuthResourceService {
    /// 싱글톤 인스턴스를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 리포지토리 의존성이 등록되지 않은 경우
    pub fn instance() -> AppResult<Arc<Self>> {
        AUTH_RESOURCE_SERVICE_INSTANCE
            .get_or_try_init(|| -> AppResult<Arc<Self>> {
                let repository: Arc<dyn ResourceStore> = ResourceRepository::instance()?;
                Ok(Arc::new(Self::with_store(repository)))
            })
            .cloned()
    }

    /// 지정한 저장소 위에서 동작하는 서비스를 만듭니다.
    pub fn with_store(repository: Arc<dyn ResourceStore>) -> Self {
        Self { repository }
    }
}

/// 작업 결과에서 에러를 로그로 남기고 값만 남깁니다.
fn log_failure<T>(operation: &str, result: AppResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{} 실패: {}", operation, e);
            None
        }
    }
}

#[async_trait]
impl ResourceService for AuthResourceService {
    /// 식별자가 있으면 식별자로, 없으면 `(uri, method)` 쌍으로 존재 여부를 확인합니다.
    async fn is_resource_exist(&self, resource: &AuthResource) -> bool {
        let result = match resource.id {
            Some(id) => self.repository.exists_by_id(id).await,
            None => {
                self.repository
                    .exists_by_uri_and_method(&resource.uri, &resource.method)
                    .await
            }
        };

        log_failure("리소스 존재 확인", result).unwrap_or(false)
    }

    async fn add_resource(&self, resource: &AuthResource) -> bool {
        let mut resource = resource.clone();
        resource.mark_created(Utc::now());

        match log_failure("리소스 추가", self.repository.insert(resource).await) {
            Some(created) => {
                log::info!("리소스 추가: #{:?} {} {}", created.id, created.method, created.uri);
                true
            }
            None => false,
        }
    }

    async fn update_resource(&self, resource: &AuthResource) -> bool {
        let mut resource = resource.clone();
        resource.mark_updated(Utc::now());

        let updated = log_failure("리소스 수정", self.repository.update(&resource).await).unwrap_or(false);

        if !updated {
            log::warn!("수정된 리소스 없음: #{:?}", resource.id);
        }
        updated
    }

    async fn delete_resource(&self, resource_id: i64) -> bool {
        let deleted = log_failure("리소스 삭제", self.repository.delete(resource_id).await).unwrap_or(false);

        if !deleted {
            log::warn!("삭제된 리소스 없음: #{}", resource_id);
        }
        deleted
    }

    async fn get_all_resource(&self) -> Option<Vec<AuthResource>> {
        log_failure("리소스 목록 조회", self.repository.find_all().await)
    }

    async fn get_page_resource(&self, current_page: i32, page_size: i32) -> Option<Page<AuthResource>> {
        let request = log_failure("페이지 요청 생성", PageRequest::of(current_page, page_size))?;

        log_failure("리소스 페이지 조회", self.repository.find_page(request).await)
    }
}

#[async_trait]
impl Service for AuthResourceService {
    fn name(&self) -> &str {
        "auth_resource_service"
    }

    async fn init(&self) -> AppResult<()> {
        log::info!("권한 리소스 서비스 준비 완료");
        Ok(())
    }
}

/// 서비스 레지스트리 생성자 함수
fn auth_resource_service_constructor() -> AppResult<Arc<dyn Service>> {
    Ok(AuthResourceService::instance()? as Arc<dyn Service>)
}

inventory::submit! {
    ServiceRegistration {
        name: "auth_resource_service",
        constructor: auth_resource_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::core::errors::AppError;

    /// 메모리 기반 저장소
    #[derive(Default)]
    struct InMemoryStore {
        rows: Mutex<Vec<AuthResource>>,
        fail: bool,
    }

    impl InMemoryStore {
        fn with_rows(rows: Vec<AuthResource>) -> Self {
            Self { rows: Mutex::new(rows), fail: false }
        }

        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn check(&self) -> AppResult<()> {
            if self.fail {
                return Err(AppError::DatabaseError("connection reset".to_string()));
            }
            Ok(())
        }

        fn rows(&self) -> Vec<AuthResource> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResourceStore for InMemoryStore {
        async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
            self.check()?;
            Ok(self.rows().iter().any(|row| row.id == Some(id)))
        }

        async fn exists_by_uri_and_method(&self, uri: &str, method: &str) -> AppResult<bool> {
            self.check()?;
            Ok(self.rows().iter().any(|row| row.uri == uri && row.method == method))
        }

        async fn insert(&self, mut resource: AuthResource) -> AppResult<AuthResource> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            resource.id = Some(rows.len() as i64 + 1);
            rows.push(resource.clone());
            Ok(resource)
        }

        async fn update(&self, resource: &AuthResource) -> AppResult<bool> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|row| row.id == resource.id) {
                Some(row) => {
                    let gmt_create = row.gmt_create;
                    *row = resource.clone();
                    row.gmt_create = gmt_create;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: i64) -> AppResult<bool> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|row| row.id != Some(id));
            Ok(rows.len() < before)
        }

        async fn find_all(&self) -> AppResult<Vec<AuthResource>> {
            self.check()?;
            Ok(self.rows())
        }

        async fn find_page(&self, request: PageRequest) -> AppResult<Page<AuthResource>> {
            self.check()?;
            let rows = self.rows();
            let content = rows
                .iter()
                .skip(request.offset() as usize)
                .take(request.page_size() as usize)
                .cloned()
                .collect();
            Ok(Page::new(content, request, rows.len() as u64))
        }
    }

    fn resource(id: Option<i64>, uri: &str, method: &str) -> AuthResource {
        AuthResource {
            id,
            name: "도서".to_string(),
            code: "BOOK".to_string(),
            uri: uri.to_string(),
            resource_type: Some("uri".to_string()),
            method: method.to_string(),
            status: 1,
            description: None,
            gmt_create: None,
            gmt_update: None,
        }
    }

    fn service_over(store: Arc<InMemoryStore>) -> AuthResourceService {
        AuthResourceService::with_store(store)
    }

    #[actix_web::test]
    async fn test_add_stamps_timestamps_and_assigns_id() {
        let store = Arc::new(InMemoryStore::default());
        let service = service_over(store.clone());

        assert!(service.add_resource(&resource(None, "/api/v1/book", "GET")).await);

        let stored = store.rows();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, Some(1));
        assert!(stored[0].gmt_create.is_some());
        assert_eq!(stored[0].gmt_create, stored[0].gmt_update);
    }

    #[actix_web::test]
    async fn test_existence_without_id_matches_endpoint() {
        let store = Arc::new(InMemoryStore::with_rows(vec![resource(Some(3), "/api/v1/book", "GET")]));
        let service = service_over(store);

        assert!(service.is_resource_exist(&resource(None, "/api/v1/book", "GET")).await);
        assert!(!service.is_resource_exist(&resource(None, "/api/v1/book", "POST")).await);
    }

    #[actix_web::test]
    async fn test_existence_with_id_matches_identifier_only() {
        let store = Arc::new(InMemoryStore::with_rows(vec![resource(Some(3), "/api/v1/book", "GET")]));
        let service = service_over(store);

        // 같은 리소스를 새 엔드포인트로 옮기는 수정
        assert!(service.is_resource_exist(&resource(Some(3), "/api/v2/book", "PUT")).await);
        // 다른 리소스의 엔드포인트를 쓰는 없는 식별자
        assert!(!service.is_resource_exist(&resource(Some(999), "/api/v1/book", "GET")).await);
    }

    #[actix_web::test]
    async fn test_update_moves_endpoint_and_keeps_creation_time() {
        let mut existing = resource(Some(3), "/api/v1/book", "GET");
        existing.mark_created(Utc::now());
        let created_at = existing.gmt_create;
        let store = Arc::new(InMemoryStore::with_rows(vec![existing]));
        let service = service_over(store.clone());

        assert!(service.update_resource(&resource(Some(3), "/api/v2/book", "PUT")).await);

        let stored = store.rows();
        assert_eq!(stored[0].uri, "/api/v2/book");
        assert_eq!(stored[0].method, "PUT");
        assert_eq!(stored[0].gmt_create, created_at);
        assert!(stored[0].gmt_update.is_some());
    }

    #[actix_web::test]
    async fn test_update_missing_id_is_false() {
        let store = Arc::new(InMemoryStore::with_rows(vec![resource(Some(3), "/api/v1/book", "GET")]));
        let service = service_over(store);

        assert!(!service.update_resource(&resource(Some(999), "/api/v1/book", "GET")).await);
    }

    #[actix_web::test]
    async fn test_delete_missing_is_false() {
        let store = Arc::new(InMemoryStore::with_rows(vec![resource(Some(3), "/api/v1/book", "GET")]));
        let service = service_over(store.clone());

        assert!(!service.delete_resource(42).await);
        assert!(service.delete_resource(3).await);
        assert!(store.rows().is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_paging_is_none() {
        let store = Arc::new(InMemoryStore::with_rows(vec![resource(Some(1), "/a", "GET")]));
        let service = service_over(store);

        assert!(service.get_page_resource(-1, 10).await.is_none());
        assert!(service.get_page_resource(0, 0).await.is_none());

        let page = service.get_page_resource(0, 10).await.unwrap();
        assert_eq!(page.total_elements, 1);
    }

    #[actix_web::test]
    async fn test_storage_errors_collapse_to_false_and_none() {
        let service = service_over(Arc::new(InMemoryStore::failing()));
        let book = resource(None, "/api/v1/book", "GET");

        assert!(!service.is_resource_exist(&book).await);
        assert!(!service.add_resource(&book).await);
        assert!(!service.delete_resource(1).await);
        assert!(service.get_all_resource().await.is_none());
        assert!(service.get_page_resource(0, 10).await.is_none());
    }

    #[test]
    fn test_log_failure_keeps_value() {
        assert_eq!(log_failure("조회", Ok::<_, AppError>(3)), Some(3));
    }
}
