//! # 권한 리소스 리포지토리 구현
//!
//! 권한 리소스 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, 전체 목록 조회 결과를 Redis에 캐싱합니다.
//!
//! ## 저장 구조
//!
//! - `auth_resources`: 리소스 문서. `_id`는 숫자 시퀀스입니다.
//! - `counters`: 컬렉션별 시퀀스 문서 (`{ _id: "auth_resources", seq: <i64> }`)

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{Bson, Document, doc},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;

use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::errors::{AppError, AppResult},
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::dto::common::{Page, PageRequest},
    domain::entities::resources::AuthResource,
    repositories::resources::ResourceStore,
};

/// 리소스 컬렉션 이름
pub const RESOURCE_COLLECTION: &str = "auth_resources";

/// 시퀀스 컬렉션 이름
const COUNTER_COLLECTION: &str = "counters";

/// 전체 목록 캐시 키
const CACHE_KEY_ALL: &str = "auth_resource:all";

/// 쓰기 작업 후 무효화할 캐시 키 패턴
const CACHE_PATTERN: &str = "auth_resource:*";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 권한 리소스 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **키**: `auth_resource:all` (전체 목록, `_id` 오름차순)
/// - **TTL**: `RESOURCE_CACHE_TTL_SECS` (기본 600초)
/// - **무효화**: 생성/수정/삭제 시 `auth_resource:*` 전체 삭제
///
/// 캐시 오류는 로그만 남기고 무시합니다. 페이지 조회는 캐싱하지 않습니다.
///
/// 목록을 읽는 도중 쓰기가 끝나면 읽은 목록이 낡았을 수 있습니다. 같은 프로세스의
/// 쓰기는 [`CacheGeneration`]으로 감지하여 캐시에 쓴 목록을 다시 지웁니다.
/// 다른 프로세스의 쓰기와 겹친 경우에는 최대 TTL 동안 낡은 목록이 남을 수 있습니다.
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ConflictError**: `(uri, method)` 유니크 인덱스 위반
///
/// ```rust,ignore
/// let repo = ResourceRepository::instance()?;
///
/// if !repo.exists_by_uri_and_method("/api/v1/book", "GET").await? {
///     let created = repo.insert(resource).await?;
/// }
/// let page = repo.find_page(PageRequest::of(0, 20)?).await?;
/// ```
pub struct ResourceRepository {
    /// `auth_resources` 컬렉션
    collection: Collection<AuthResource>,
    /// `counters` 컬렉션
    counters: Collection<Document>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
    /// 이 프로세스에서 수행한 쓰기 세대
    generation: CacheGeneration,
}

/// 쓰기마다 1씩 증가하는 세대 카운터
#[derive(Debug, Default)]
struct CacheGeneration(AtomicU64);

impl CacheGeneration {
    fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    fn advance(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }

    fn changed_since(&self, snapshot: u64) -> bool {
        self.current() != snapshot
    }
}

fn id_filter(id: i64) -> Document {
    doc! { "_id": id }
}

fn endpoint_filter(uri: &str, method: &str) -> Document {
    doc! { "uri": uri, "method": method }
}

/// 싱글톤 인스턴스 저장소
static RESOURCE_REPOSITORY_INSTANCE: OnceCell<Arc<ResourceRepository>> = OnceCell::new();

impl ResourceRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    ///
    /// 최초 호출 시 `ServiceLocator`에 등록된 `Database`와 `RedisClient`로 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `Database` 또는 `RedisClient`가 아직 등록되지 않은 경우
    pub fn instance() -> AppResult<Arc<Self>> {
        RESOURCE_REPOSITORY_INSTANCE
            .get_or_try_init(|| -> AppResult<Arc<Self>> {
                let db = ServiceLocator::get::<Database>()?;
                let redis = ServiceLocator::get::<RedisClient>()?;
                Ok(Arc::new(Self::new(&db, redis)))
            })
            .cloned()
    }

    fn new(db: &Database, redis: Arc<RedisClient>) -> Self {
        Self {
            collection: db.collection::<AuthResource>(RESOURCE_COLLECTION),
            counters: db.collection::<Document>(COUNTER_COLLECTION),
            redis,
            generation: CacheGeneration::default(),
        }
    }

    /// 필터와 일치하는 문서가 하나라도 있는지 확인합니다. 문서는 역직렬화하지 않습니다.
    async fn exists(&self, filter: Document) -> AppResult<bool> {
        let count = self.collection
            .count_documents(filter)
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// 다음 리소스 식별자를 발급합니다.
    ///
    /// `counters` 문서의 `seq`를 원자적으로 1 증가시키며, 문서가 없으면 생성합니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters
            .find_one_and_update(
                doc! { "_id": RESOURCE_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("리소스 시퀀스 문서를 찾을 수 없습니다".to_string()))?;

        match counter.get("seq") {
            Some(Bson::Int64(seq)) => Ok(*seq),
            Some(Bson::Int32(seq)) => Ok(i64::from(*seq)),
            other => Err(AppError::DatabaseError(format!("잘못된 리소스 시퀀스 값: {:?}", other))),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// - `uri_method_unique`: `(uri, method)` 유니크
    /// - `code_asc`: 코드 조회용
    pub async fn create_indexes(&self) -> AppResult<()> {
        let uri_method_index = IndexModel::builder()
            .keys(doc! { "uri": 1, "method": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("uri_method_unique".to_string())
                .build())
            .build();

        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(IndexOptions::builder()
                .name("code_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([uri_method_index, code_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn invalidate_cache(&self) {
        self.generation.advance();
        if let Err(e) = self.redis.invalidate_pattern(CACHE_PATTERN).await {
            log::warn!("리소스 캐시 무효화 실패: {}", e);
        }
    }

    fn map_write_error(error: mongodb::error::Error, resource: &AuthResource) -> AppError {
        if Self::is_duplicate_key(&error) {
            AppError::ConflictError(format!(
                "이미 등록된 리소스입니다: {} {}",
                resource.method, resource.uri
            ))
        } else {
            AppError::DatabaseError(error.to_string())
        }
    }

    fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
        matches!(
            error.kind.as_ref(),
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE
        )
    }
}

#[async_trait]
impl ResourceStore for ResourceRepository {
    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        self.exists(id_filter(id)).await
    }

    async fn exists_by_uri_and_method(&self, uri: &str, method: &str) -> AppResult<bool> {
        self.exists(endpoint_filter(uri, method)).await
    }

    /// 새 리소스를 저장하고, 식별자가 할당된 리소스를 반환합니다.
    ///
    /// 입력의 `id`는 무시됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 `(uri, method)` 쌍이 동시에 저장된 경우
    /// * `AppError::DatabaseError` - 그 밖의 MongoDB 오류
    async fn insert(&self, mut resource: AuthResource) -> AppResult<AuthResource> {
        resource.id = Some(self.next_id().await?);

        self.collection
            .insert_one(&resource)
            .await
            .map_err(|e| Self::map_write_error(e, &resource))?;

        self.invalidate_cache().await;

        Ok(resource)
    }

    /// 식별자로 리소스를 수정합니다.
    ///
    /// `gmt_create`를 제외한 모든 필드를 덮어씁니다.
    /// 일치하는 문서가 없으면 `Ok(false)`를 반환합니다.
    async fn update(&self, resource: &AuthResource) -> AppResult<bool> {
        let id = resource
            .id
            .ok_or_else(|| AppError::ValidationError("수정할 리소스 ID가 없습니다".to_string()))?;

        let gmt_update = mongodb::bson::to_bson(&resource.gmt_update)
            .map_err(|e| AppError::InternalError(format!("수정 시간 변환 실패: {}", e)))?;

        let changes = doc! {
            "name": resource.name.as_str(),
            "code": resource.code.as_str(),
            "uri": resource.uri.as_str(),
            "type": resource.resource_type.clone(),
            "method": resource.method.as_str(),
            "status": resource.status,
            "description": resource.description.clone(),
            "gmt_update": gmt_update,
        };

        let result = self.collection
            .update_one(id_filter(id), doc! { "$set": changes })
            .await
            .map_err(|e| Self::map_write_error(e, resource))?;

        if result.matched_count == 0 {
            return Ok(false);
        }

        self.invalidate_cache().await;
        Ok(true)
    }

    /// 식별자로 리소스를 삭제합니다. 삭제된 문서가 없으면 `Ok(false)`입니다.
    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self.collection
            .delete_one(id_filter(id))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            self.invalidate_cache().await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 모든 리소스를 `_id` 오름차순으로 조회합니다. (캐시 우선)
    async fn find_all(&self) -> AppResult<Vec<AuthResource>> {
        if let Ok(Some(cached)) = self.redis.get::<Vec<AuthResource>>(CACHE_KEY_ALL).await {
            return Ok(cached);
        }

        let snapshot = self.generation.current();

        let resources: Vec<AuthResource> = self.collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.redis
            .set_with_expiry(CACHE_KEY_ALL, &resources, CacheConfig::resource_ttl_secs())
            .await;

        // 조회 중 쓰기가 끝났다면 방금 캐시한 목록은 낡았을 수 있다
        if self.generation.changed_since(snapshot) {
            let _ = self.redis.invalidate_pattern(CACHE_PATTERN).await;
        }

        Ok(resources)
    }

    /// 한 페이지의 리소스를 `_id` 오름차순으로 조회합니다.
    async fn find_page(&self, request: PageRequest) -> AppResult<Page<AuthResource>> {
        let total = self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let content: Vec<AuthResource> = self.collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(request.offset())
            .limit(i64::from(request.page_size()))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(content, request, total))
    }
}

#[async_trait]
impl Repository for ResourceRepository {
    fn name(&self) -> &str {
        "resource_repository"
    }

    fn collection_name(&self) -> &str {
        RESOURCE_COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        self.create_indexes().await
    }
}

/// 리포지토리 레지스트리 생성자 함수
fn resource_repository_constructor() -> AppResult<Arc<dyn Repository>> {
    Ok(ResourceRepository::instance()? as Arc<dyn Repository>)
}

inventory::submit! {
    RepositoryRegistration {
        name: "resource_repository",
        constructor: resource_repository_constructor,
    }
}
