//! # Core Framework Module
//!
//! 리소스 관리 백엔드의 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 공유 인프라(`Database`, `RedisClient`) 저장소
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 컴포넌트 등록
//! - **초기화**: 시작 시점에 리포지토리 → 서비스 순서로 생성 및 `init()`
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현, `Message` 봉투로 직렬화
//! - **자동 변환**: `thiserror` 기반 에러 정의, `validator` 에러 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | `ServiceLocator::get::<T>()` / `web::Data` |
//! | `@Service` / `@Repository` | `inventory::submit!` 등록 |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 트러블슈팅
//!
//! ### 미등록 타입 에러
//! ```text
//! Internal server error: Database is not registered. Register it with ServiceLocator::set() before use
//! ```
//! **해결**: `main`에서 `initialize_all()` 이전에 `ServiceLocator::set()` 호출

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
