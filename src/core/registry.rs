//! # Service Registry
//!
//! 공유 인프라(MongoDB, Redis)와 싱글톤 컴포넌트(리포지토리, 서비스)를 관리하는
//! 경량 의존성 주입 컨테이너입니다.
//!
//! ## 구성
//!
//! - **ServiceLocator**: `TypeId` 기반 인스턴스 저장소. `main`에서 `Database`,
//!   `RedisClient`를 `set()`으로 등록하고, 리포지토리가 `get()`으로 꺼내 씁니다.
//! - **RepositoryRegistration / ServiceRegistration**: `inventory`로 컴파일 타임에
//!   수집되는 생성자 목록. `initialize_all()`이 시작 시점에 모두 생성하고 `init()`을
//!   호출합니다.
//!
//! ## 등록 예제
//!
//! ```rust,ignore
//! fn resource_repository_constructor() -> AppResult<Arc<dyn Repository>> {
//!     Ok(ResourceRepository::instance()? as Arc<dyn Repository>)
//! }
//!
//! inventory::submit! {
//!     RepositoryRegistration {
//!         name: "resource_repository",
//!         constructor: resource_repository_constructor,
//!     }
//! }
//! ```
//!
//! ## 초기화 순서
//!
//! ```text
//! ServiceLocator::set(Database)      ─┐
//! ServiceLocator::set(RedisClient)   ─┤ main.rs
//! ServiceLocator::initialize_all()   ─┘
//!     ├─ Step 1: Repository 생성 + init() (인덱스 생성)
//!     └─ Step 2: Service 생성 + init()
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::core::errors::{AppError, AppResult};
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스 이름 (로그 출력용)
    fn name(&self) -> &str;

    /// 시작 시점에 한 번 호출됩니다.
    async fn init(&self) -> AppResult<()>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리 이름 (로그 출력용)
    fn name(&self) -> &str;

    /// 대상 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 시작 시점에 한 번 호출됩니다. 인덱스 생성 등을 수행합니다.
    async fn init(&self) -> AppResult<()>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// 등록 이름 (예: "auth_resource_service")
    pub name: &'static str,
    /// 싱글톤 인스턴스를 생성하거나 가져오는 함수
    pub constructor: fn() -> AppResult<Arc<dyn Service>>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// 등록 이름 (예: "resource_repository")
    pub name: &'static str,
    /// 싱글톤 인스턴스를 생성하거나 가져오는 함수
    pub constructor: fn() -> AppResult<Arc<dyn Repository>>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 타입 기반 인스턴스 저장소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 `set()`으로 등록되지 않은 경우
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        let type_name = std::any::type_name::<T>();

        Self::try_get::<T>().ok_or_else(|| {
            AppError::InternalError(format!(
                "{} is not registered. Register it with ServiceLocator::set() before use",
                Self::extract_clean_type_name(type_name)
            ))
        })
    }

    /// 등록된 인스턴스를 가져오되, 없으면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().ok()?;

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", Self::extract_clean_type_name(type_name));

        match LOCATOR.instances.write() {
            Ok(mut instances) => {
                instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
            }
            Err(e) => log::error!("ServiceLocator lock poisoned, {} not registered: {}", type_name, e),
        }
    }

    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }

    /// 등록된 모든 리포지토리와 서비스를 생성하고 초기화합니다.
    ///
    /// 리포지토리를 먼저 생성하여 서비스가 생성될 때 이미 준비되어 있도록 합니다.
    /// 하나라도 실패하면 즉시 에러를 반환합니다.
    pub async fn initialize_all() -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let repository = (registration.constructor)()?;
                repository.init().await?;
                print_sub_task(
                    registration.name,
                    &format!("✓ Ready ({})", repository.collection_name()),
                );
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let service = (registration.constructor)()?;
                service.init().await?;
                print_sub_task(service.name(), "✓ Ready");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SetThenGet(u32);
    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        let instance = Arc::new(SetThenGet(42));
        ServiceLocator::set(instance.clone());

        let fetched = ServiceLocator::get::<SetThenGet>().unwrap();
        assert_eq!(fetched.0, 42);
        assert!(Arc::ptr_eq(&instance, &fetched));
    }

    #[test]
    fn test_get_unregistered_type_is_error() {
        match ServiceLocator::get::<NeverRegistered>() {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("NeverRegistered")),
            _ => panic!("Expected InternalError"),
        }
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("auth_resource_service::db::Database"),
            "Database"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Database"), "Database");
    }
}
